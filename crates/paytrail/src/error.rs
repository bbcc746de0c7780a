//! Error types for Paytrail operations.
//!
//! Layout itself never fails; errors come from reading inputs, resolving
//! configuration and exporting the rendered chart.

use std::io;

use thiserror::Error;

/// The main error type for Paytrail operations.
#[derive(Debug, Error)]
pub enum PaytrailError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for PaytrailError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
