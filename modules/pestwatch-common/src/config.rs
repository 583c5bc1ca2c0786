use std::env;
use std::path::PathBuf;

use crate::error::PestwatchError;

/// Default community report form. Deployments point `REPORT_FORM_URL`
/// at their own form.
pub const DEFAULT_REPORT_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLScnCZOk-cdnCTW25WBhnWDR3MOcQ0HsaGv_Id5gbQA7OV-qyw/viewform?usp=sharing&ouid=106912382513073938869";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub web_host: String,
    pub web_port: u16,
    pub site_url: String,

    // Data
    pub dataset_path: Option<PathBuf>,

    // Embeds
    pub disqus_shortname: Option<String>,
    pub report_form_url: String,
}

impl Config {
    /// Load the web server config, reading a `.env` file first if present.
    pub fn web_from_env() -> Result<Self, PestwatchError> {
        dotenvy::dotenv().ok();

        let config = Self::from_vars(|key| env::var(key).ok())?;
        config.log_summary();
        Ok(config)
    }

    /// Build a config from an arbitrary variable source. Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, PestwatchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let web_port = match var("WEB_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| PestwatchError::Config(format!("WEB_PORT must be a number, got {raw:?}")))?,
            None => 3000,
        };

        Ok(Self {
            web_host: var("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port,
            site_url: var("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| format!("http://localhost:{web_port}")),
            dataset_path: var("DATASET_PATH").map(PathBuf::from),
            disqus_shortname: var("DISQUS_SHORTNAME"),
            report_form_url: var("REPORT_FORM_URL")
                .unwrap_or_else(|| DEFAULT_REPORT_FORM_URL.to_string()),
        })
    }

    fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  WEB: {}:{}", self.web_host, self.web_port);
        tracing::info!("  SITE_URL: {}", self.site_url);
        match &self.dataset_path {
            Some(path) => tracing::info!("  DATASET_PATH: {}", path.display()),
            None => tracing::info!("  DATASET_PATH: <embedded>"),
        }
        match &self.disqus_shortname {
            Some(name) => tracing::info!("  DISQUS_SHORTNAME: {name}"),
            None => tracing::info!("  DISQUS_SHORTNAME: <not set, comments disabled>"),
        }
    }
}
