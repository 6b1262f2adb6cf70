use crate::config::{
    ApiSettings, DEFAULT_API_BASE, DEFAULT_FEATURED_ITEM_ENDPOINT, DEFAULT_SALE_ITEMS_ENDPOINT,
    DEFAULT_STUDENTS_ENDPOINT,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BadgerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_base")]
    pub base_url: String,
    #[serde(default)]
    pub badger_id: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_students")]
    pub students: String,
    #[serde(default = "default_sale_items")]
    pub sale_items: String,
    #[serde(default = "default_featured_item")]
    pub featured_item: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            students: default_students(),
            sale_items: default_sale_items(),
            featured_item: default_featured_item(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_students() -> String {
    DEFAULT_STUDENTS_ENDPOINT.to_string()
}

fn default_sale_items() -> String {
    DEFAULT_SALE_ITEMS_ENDPOINT.to_string()
}

fn default_featured_item() -> String {
    DEFAULT_FEATURED_ITEM_ENDPOINT.to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BadgerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CS571_ID})；找不到的變數原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BadgerError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn to_settings(&self) -> ApiSettings {
        ApiSettings::from_provider(self)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base(&self) -> &str {
        &self.api.base_url
    }

    fn badger_id(&self) -> &str {
        &self.api.badger_id
    }

    fn students_endpoint(&self) -> &str {
        &self.endpoints.students
    }

    fn sale_items_endpoint(&self) -> &str {
        &self.endpoints.sale_items
    }

    fn featured_item_endpoint(&self) -> &str {
        &self.endpoints.featured_item
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.api.timeout_seconds
    }
}
