use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HandsError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("landmark source unavailable on {addr}: {source}")]
    SourceUnavailable {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("input injection failed: {0}")]
    Injection(String),
}

pub type Result<T> = std::result::Result<T, HandsError>;
