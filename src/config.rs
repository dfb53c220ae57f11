use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub summarizer: SummarizerConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
    /// Directory served as the static fallback (client assets)
    pub static_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct SummarizerConfig {
    /// Endpoint of the external summarization worker. Empty means
    /// unconfigured; every teardown will then store the failure marker.
    pub endpoint: String,
    /// Request timeout for the worker call, in seconds
    pub timeout_secs: u64,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("HUDDLE").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
