//! Error types for configuration, rendering and serving.
//!
//! The page itself cannot fail; everything here comes from the layers
//! around it. Uses miette for diagnostic output and thiserror for derives.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum SiteError {
    #[error("Failed to read config file {path:?}")]
    #[diagnostic(
        code(landing::config::read),
        help("Check the path passed to --config or drop the flag to use defaults.")
    )]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}")]
    #[diagnostic(code(landing::config::parse))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(landing::config::invalid))]
    InvalidConfig { message: String },

    #[error("I/O error: {0}")]
    #[diagnostic(code(landing::io))]
    Io(#[from] std::io::Error),
}

pub type SiteResult<T> = Result<T, SiteError>;
