use std::time::Duration;

/// Upstream endpoint the player lookups are forwarded to.
pub const DEFAULT_UPSTREAM_URL: &str = "https://info-flax-beta.vercel.app/info";

/// Upper bound for a single upstream call.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }
}

impl Config {
    /// Loads the configuration from the environment (and `.env`, if present).
    ///
    /// Every variable is optional; unset variables keep the defaults from
    /// [`Config::default`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let config = Self {
            host: std::env::var("HOST")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.host),
            port: match std::env::var("PORT") {
                Ok(port) => port
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
                Err(_) => defaults.port,
            },
            upstream_url: match std::env::var("UPSTREAM_INFO_URL") {
                Ok(url) => {
                    if url.trim().is_empty() {
                        anyhow::bail!("UPSTREAM_INFO_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("UPSTREAM_INFO_URL must start with http:// or https://");
                    }
                    url::Url::parse(&url)
                        .map_err(|e| anyhow::anyhow!("UPSTREAM_INFO_URL is not a valid URL: {}", e))?;
                    url
                }
                Err(_) => defaults.upstream_url,
            },
            upstream_timeout: match std::env::var("UPSTREAM_TIMEOUT_SECS") {
                Ok(secs) => {
                    let secs: u64 = secs.trim().parse().map_err(|_| {
                        anyhow::anyhow!("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")
                    })?;
                    if secs == 0 {
                        anyhow::bail!("UPSTREAM_TIMEOUT_SECS must be greater than zero");
                    }
                    Duration::from_secs(secs)
                }
                Err(_) => defaults.upstream_timeout,
            },
        };

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Upstream URL: {}", config.upstream_url);
        tracing::debug!("Upstream timeout: {:?}", config.upstream_timeout);
        tracing::debug!("Server address: {}:{}", config.host, config.port);

        Ok(config)
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
