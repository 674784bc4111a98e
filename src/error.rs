//! Unified error type for the generator core: a minimal enum, no third-party
//! error stack. Hosts wrap it however they like.
use std::{error::Error as StdError, fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum MojaError {
    Render(String),                                // our own tokens failed to parse back
    Emission { path: PathBuf, source: io::Error }, // sink could not persist a unit
    Manifest { path: PathBuf, detail: String },    // declaration manifest unreadable/invalid
    Other(&'static str),                           // simple static message
}

impl fmt::Display for MojaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MojaError::Render(detail) => write!(f, "rendering generated unit: {detail}"),
            MojaError::Emission { path, source } => {
                write!(f, "writing generated unit to {}: {source}", path.display())
            }
            MojaError::Manifest { path, detail } => {
                write!(f, "declaration manifest {}: {detail}", path.display())
            }
            MojaError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for MojaError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            MojaError::Emission { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T = ()> = std::result::Result<T, MojaError>;
