use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Pt2D;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a triangulation. No partial output is ever returned alongside one of
/// these.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("need at least 3 points to triangulate, got {0}")]
    TooFewPoints(usize),
    #[error("{0} points won't fit in a 32-bit index buffer")]
    TooManyPoints(usize),
    #[error("point {idx} isn't finite: {pt}")]
    NonFinite { idx: usize, pt: Pt2D },
    #[error("points {first} and {second} are both at {pt}")]
    DuplicatePoint { first: usize, second: usize, pt: Pt2D },
    #[error("polygon has no area")]
    ZeroArea,
    #[error("edges at point {idx} double back on each other")]
    Spike { idx: usize },
    #[error("edge starting at point {edge1} touches the edge starting at point {edge2}")]
    SelfIntersecting { edge1: usize, edge2: usize },
    #[error("no ear left to clip with {remaining} points remaining")]
    NoEarFound { remaining: usize },
}

/// Broad categories of `Error`, for callers that only care about whose fault it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The caller passed something that isn't a polygon at all.
    InvalidInput,
    /// The points form a polygon, but not a simple one with positive area.
    DegenerateGeometry,
    /// Ear clipping got stuck. Input validation should make this impossible.
    InternalInvariant,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TooFewPoints(_) | Error::TooManyPoints(_) | Error::NonFinite { .. } => {
                ErrorKind::InvalidInput
            }
            Error::DuplicatePoint { .. }
            | Error::ZeroArea
            | Error::Spike { .. }
            | Error::SelfIntersecting { .. } => ErrorKind::DegenerateGeometry,
            Error::NoEarFound { .. } => ErrorKind::InternalInvariant,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "InvalidInput"),
            ErrorKind::DegenerateGeometry => write!(f, "DegenerateGeometry"),
            ErrorKind::InternalInvariant => write!(f, "InternalInvariant"),
        }
    }
}
