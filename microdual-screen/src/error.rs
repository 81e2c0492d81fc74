use std::fmt;

/// Errors reported by the screening kernel and its configuration.
#[derive(Debug)]
pub enum ScreeningError {
    /// A species the reaction table needs is not part of the network.
    MissingSpecies {
        /// Network name of the absent species, e.g. `"carbon-12"`.
        name: &'static str,
    },
    /// The configuration document is malformed or out of range.
    Config(String),
    /// The configuration file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for ScreeningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreeningError::MissingSpecies { name } => {
                write!(f, "species '{}' not found in the network", name)
            }
            ScreeningError::Config(msg) => write!(f, "invalid screening configuration: {}", msg),
            ScreeningError::Io(e) => write!(f, "cannot read screening configuration: {}", e),
        }
    }
}

impl std::error::Error for ScreeningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScreeningError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScreeningError {
    fn from(e: std::io::Error) -> Self {
        ScreeningError::Io(e)
    }
}

impl From<serde_json::Error> for ScreeningError {
    fn from(e: serde_json::Error) -> Self {
        ScreeningError::Config(e.to_string())
    }
}
