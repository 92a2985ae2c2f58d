//! Error types for the simulation core

use std::fmt;

/// Which canvas a scoring pass expected to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Reference,
    Copy,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceKind::Reference => f.write_str("reference"),
            SurfaceKind::Copy => f.write_str("copy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("cannot place {requested} primitives: only {available} distinct grid cells")]
    GenerationExhausted { requested: u32, available: u32 },
    #[error("{0} surface missing at scoring time")]
    MissingSurface(SurfaceKind),
}
