use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(url(message = "base_url must be a valid URL"))]
    pub base_url: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "API token cannot be empty"))]
    pub api_token: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "User agent cannot be empty"))]
    pub user_agent: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, message = "Timeout must be greater than 0"))]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    #[validate(range(min = 1, message = "Page limit must be greater than 0"))]
    pub max_pages: Option<u32>,

    /// Domain filter used by the command line tool.
    #[serde(default)]
    pub query: Option<String>,

    #[serde(default)]
    pub schedule_export: bool,
}
