#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BadgerError, Result};
use crate::utils::validation::{self, Validate};

pub const DEFAULT_API_BASE: &str = "https://cs571.org/api/s24";
pub const DEFAULT_STUDENTS_ENDPOINT: &str = "hw2/students";
pub const DEFAULT_SALE_ITEMS_ENDPOINT: &str = "hw3/all-sale-items";
pub const DEFAULT_FEATURED_ITEM_ENDPOINT: &str = "hw3/featured-sale-item";

/// 合併 TOML 檔與命令列之後、實際拿來連線的設定
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub api_base: String,
    pub badger_id: String,
    pub students_endpoint: String,
    pub sale_items_endpoint: String,
    pub featured_item_endpoint: String,
    pub timeout_seconds: Option<u64>,
}

impl ApiSettings {
    pub fn new(api_base: impl Into<String>, badger_id: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            badger_id: badger_id.into(),
            students_endpoint: DEFAULT_STUDENTS_ENDPOINT.to_string(),
            sale_items_endpoint: DEFAULT_SALE_ITEMS_ENDPOINT.to_string(),
            featured_item_endpoint: DEFAULT_FEATURED_ITEM_ENDPOINT.to_string(),
            timeout_seconds: None,
        }
    }

    /// 從任何 ConfigProvider 複製一份
    pub fn from_provider<C: ConfigProvider + ?Sized>(provider: &C) -> Self {
        Self {
            api_base: provider.api_base().to_string(),
            badger_id: provider.badger_id().to_string(),
            students_endpoint: provider.students_endpoint().to_string(),
            sale_items_endpoint: provider.sale_items_endpoint().to_string(),
            featured_item_endpoint: provider.featured_item_endpoint().to_string(),
            timeout_seconds: provider.timeout_seconds(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, "")
    }
}

impl ConfigProvider for ApiSettings {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn badger_id(&self) -> &str {
        &self.badger_id
    }

    fn students_endpoint(&self) -> &str {
        &self.students_endpoint
    }

    fn sale_items_endpoint(&self) -> &str {
        &self.sale_items_endpoint
    }

    fn featured_item_endpoint(&self) -> &str {
        &self.featured_item_endpoint
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for ApiSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api_base)?;

        // 環境變數沒展開時會留下 ${...}，視同沒設定
        if self.badger_id.trim().is_empty() || self.badger_id.starts_with("${") {
            return Err(BadgerError::MissingConfigError {
                field: "api.badger_id".to_string(),
            });
        }

        validation::validate_endpoint_path("endpoints.students", &self.students_endpoint)?;
        validation::validate_endpoint_path("endpoints.sale_items", &self.sale_items_endpoint)?;
        validation::validate_endpoint_path(
            "endpoints.featured_item",
            &self.featured_item_endpoint,
        )?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
