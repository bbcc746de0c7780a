pub mod svg;

use std::{fs, path::Path};

use log::{error, info};

use crate::scene::Scene;

/// Turns a laid-out [`Scene`] into a serialized document.
pub trait Exporter {
    fn export_scene(&self, scene: &Scene<'_>) -> Result<String, Error>;

    /// Exports the scene and writes it to `path`.
    fn export_to_file(&self, scene: &Scene<'_>, path: &Path) -> Result<(), Error> {
        let document = self.export_scene(scene)?;

        info!(path:? = path; "Writing chart file");
        fs::write(path, document).map_err(|err| {
            error!(path:? = path, err:err; "Failed to write chart file");
            Error::Io(err)
        })
    }
}

#[derive(Debug)]
pub enum Error {
    Render(String),
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
