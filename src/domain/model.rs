use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentName {
    pub first: String,
    pub last: String,
}

/// 學生目錄 API 回傳的一筆資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: StudentName,
    pub major: String,
    pub num_credits: i64,
    pub from_wisconsin: bool,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl StudentRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}

/// 商店商品；`name` 同時是渲染時的唯一鍵
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub featured: bool,
}
