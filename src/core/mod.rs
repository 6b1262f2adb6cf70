pub mod catalog;
pub mod counter;
pub mod directory;

pub use crate::domain::model::{SaleItem, StudentName, StudentRecord};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;

use crate::utils::error::BadgerError;
use serde::de::DeserializeOwned;

/// 載入失敗只記 log，不往上傳；抓取失敗與其他錯誤用不同措辭
pub(crate) fn log_load_failure(what: &str, err: &BadgerError) {
    if err.is_fetch_failure() {
        tracing::error!("There has been a problem with the {} fetch: {}", what, err);
    } else {
        tracing::error!("Could not request {}: {}", what, err);
    }
}

/// 抓取一個端點並解析成指定型別
pub async fn fetch<T, R>(transport: &R, endpoint: &str) -> Result<T>
where
    T: DeserializeOwned,
    R: Transport + ?Sized,
{
    let value = transport.get_json(endpoint).await?;
    serde_json::from_value(value).map_err(|source| BadgerError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
