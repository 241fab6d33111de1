use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};

pub const DEFAULT_CRM_BASE_URL: &str = "https://public-api.gohighlevel.com/v1";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// All settings are environment-provided; there are no flags and no
/// config files.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub odoo_url: String,
    pub odoo_db: String,
    pub odoo_username: String,
    pub odoo_password: String,
    pub crm_base_url: String,
    pub crm_api_key: String,
    /// Upper bound on leads fetched per run. `None` keeps the backend's
    /// unbounded behaviour; the bound exists so the single-call fetch is
    /// an explicit choice rather than an accident.
    pub fetch_limit: Option<u32>,
    pub http_timeout_secs: u64,
}

impl SyncConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            odoo_url: require_env("ODOO_URL")?,
            odoo_db: require_env("ODOO_DB")?,
            odoo_username: require_env("ODOO_USERNAME")?,
            odoo_password: require_env("ODOO_PASSWORD")?,
            crm_base_url: std::env::var("GOHIGHLEVEL_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CRM_BASE_URL.to_string()),
            crm_api_key: require_env("GOHIGHLEVEL_API_KEY")?,
            fetch_limit: std::env::var("SYNC_FETCH_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok()),
            http_timeout_secs: std::env::var("SYNC_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| SyncError::MissingConfig {
        field: name.to_string(),
    })
}

impl Validate for SyncConfig {
    fn validate(&self) -> Result<()> {
        validate_url("ODOO_URL", &self.odoo_url)?;
        validate_url("GOHIGHLEVEL_BASE_URL", &self.crm_base_url)?;
        validate_non_empty_string("ODOO_DB", &self.odoo_db)?;
        validate_non_empty_string("ODOO_USERNAME", &self.odoo_username)?;
        validate_non_empty_string("ODOO_PASSWORD", &self.odoo_password)?;
        validate_non_empty_string("GOHIGHLEVEL_API_KEY", &self.crm_api_key)?;
        validate_positive_number("SYNC_HTTP_TIMEOUT_SECS", self.http_timeout_secs, 1)?;
        Ok(())
    }
}
