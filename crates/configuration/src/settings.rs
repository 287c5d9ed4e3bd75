use crate::error::ConfigError;
use core_types::EquityOrder;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional; omitted sections and keys fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pipeline: PipelineConfig,
    pub display: DisplayConfig,
    pub ingest: IngestConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Parameters of the trade metrics pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Whether the equity curve follows upload order or trade date.
    pub equity_order: EquityOrder,
    /// Number of fixed-width bins in the holding-time histogram.
    pub histogram_bins: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefixed to the formatted Total PnL (e.g. "₹1,234.50").
    pub currency_symbol: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Field separator of uploaded files. Must be a single ASCII character.
    pub delimiter: char,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Largest accepted upload body.
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            equity_order: EquityOrder::Input,
            histogram_bins: 30,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
        }
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8501,
            max_upload_bytes: 1024 * 1024 * 50,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl IngestConfig {
    /// The delimiter as the byte the CSV reader expects. Valid after `Settings::validate`.
    pub fn delimiter_byte(&self) -> u8 {
        u8::try_from(self.delimiter).unwrap_or(b',')
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Settings {
    /// Rejects values the rest of the application cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.histogram_bins == 0 {
            return Err(ConfigError::ValidationError(
                "pipeline.histogram_bins must be at least 1".to_string(),
            ));
        }

        let delimiter = self.ingest.delimiter;
        if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
            return Err(ConfigError::ValidationError(format!(
                "ingest.delimiter must be a single ASCII character other than a quote or newline, got {delimiter:?}"
            )));
        }

        if self.server.max_upload_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "server.max_upload_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
