//! Error adapter for converting PaytrailError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's report formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use paytrail::PaytrailError;

/// Adapter presenting a [`PaytrailError`] as a miette diagnostic.
///
/// Paytrail errors carry no source spans, so only a code and an optional
/// help line are reported.
pub struct ErrorAdapter<'a>(pub &'a PaytrailError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PaytrailError::Io(_) => "paytrail::io",
            PaytrailError::Config(_) => "paytrail::config",
            PaytrailError::Dataset(_) => "paytrail::dataset",
            PaytrailError::Export(_) => "paytrail::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            PaytrailError::Dataset(message) if message.contains("missing field") => {
                "each [[points]] table needs at least an `id`, e.g. id = \"1\""
            }
            PaytrailError::Dataset(_) => {
                "a schedule is a TOML file of [[points]] tables; check its syntax and field types"
            }
            PaytrailError::Config(_) => "check the [chart] and [style] sections of the config file",
            PaytrailError::Io(_) | PaytrailError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
