use crate::fact::{FactConfig, DEFAULT_FACT_TIMEOUT_MS};
use numclass_core::fact::DEFAULT_FACT_API_URL;
use std::time::Duration;

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Run the HTTP classification server")]
pub struct App {
    #[clap(flatten)]
    pub options: ServeOptions,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "NUMCLASS_PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "NUMCLASS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Base URL of the math-facts provider
    #[arg(long, env = "NUMCLASS_FACT_API_URL", default_value = DEFAULT_FACT_API_URL)]
    pub fact_api_url: String,

    /// Timeout for a single fun-fact lookup, in milliseconds
    #[arg(long, env = "NUMCLASS_FACT_TIMEOUT_MS", default_value_t = DEFAULT_FACT_TIMEOUT_MS)]
    pub fact_timeout_ms: u64,
}

/// Everything the server needs at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub fact: FactConfig,
}

impl From<ServeOptions> for ServerConfig {
    fn from(options: ServeOptions) -> Self {
        Self {
            addr: format!("{}:{}", options.host, options.port),
            fact: FactConfig {
                base_url: options.fact_api_url,
                timeout: Duration::from_millis(options.fact_timeout_ms),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let app = App::try_parse_from(["serve"]).unwrap();
        let config = ServerConfig::from(app.options);

        assert_eq!(config.addr, "127.0.0.1:5000");
        assert_eq!(config.fact.base_url, "http://numbersapi.com");
        assert_eq!(config.fact.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_flags_override_defaults() {
        let app = App::try_parse_from([
            "serve",
            "--host",
            "0.0.0.0",
            "-p",
            "8080",
            "--fact-api-url",
            "http://localhost:9000",
            "--fact-timeout-ms",
            "250",
        ])
        .unwrap();
        let config = ServerConfig::from(app.options);

        assert_eq!(config.addr, "0.0.0.0:8080");
        assert_eq!(config.fact.base_url, "http://localhost:9000");
        assert_eq!(config.fact.timeout, Duration::from_millis(250));
    }
}
