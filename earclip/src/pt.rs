use std::fmt;

use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

/// A vertex position. The units don't matter to triangulation, but the coordinates must be
/// finite.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pt2D {
    x: f64,
    y: f64,
}

impl Pt2D {
    pub fn new(x: f64, y: f64) -> Pt2D {
        Pt2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Treats both points as vectors from the origin and returns the z-component of their cross
    /// product.
    pub fn cross(&self, other: Pt2D) -> f64 {
        self.x() * other.y() - self.y() * other.x()
    }

    pub fn dot(&self, other: Pt2D) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    pub fn dist_to(&self, other: Pt2D) -> f64 {
        ((self.x() - other.x()).powi(2) + (self.y() - other.y()).powi(2)).sqrt()
    }

    pub fn approx_eq(&self, other: Pt2D, threshold: f64) -> bool {
        self.dist_to(other) <= threshold
    }

    /// Fails for NaN coordinates.
    pub fn to_hashable(&self) -> Option<HashablePt2D> {
        HashablePt2D::new(self.x(), self.y())
    }
}

impl std::ops::Sub for Pt2D {
    type Output = Pt2D;

    fn sub(self, other: Pt2D) -> Pt2D {
        Pt2D::new(self.x() - other.x(), self.y() - other.y())
    }
}

impl fmt::Display for Pt2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pt2D({0}, {1})", self.x(), self.y())
    }
}

impl From<[f64; 2]> for Pt2D {
    fn from(pair: [f64; 2]) -> Self {
        Pt2D::new(pair[0], pair[1])
    }
}

impl From<(f64, f64)> for Pt2D {
    fn from((x, y): (f64, f64)) -> Self {
        Pt2D::new(x, y)
    }
}

// Only exact matches collide. Near-duplicates are caught separately.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct HashablePt2D {
    x_nan: NotNan<f64>,
    y_nan: NotNan<f64>,
}

impl HashablePt2D {
    pub fn new(x: f64, y: f64) -> Option<HashablePt2D> {
        Some(HashablePt2D {
            // -0.0 and 0.0 are the same vertex
            x_nan: NotNan::new(x + 0.0).ok()?,
            y_nan: NotNan::new(y + 0.0).ok()?,
        })
    }

    pub fn x(&self) -> f64 {
        self.x_nan.into_inner()
    }

    pub fn y(&self) -> f64 {
        self.y_nan.into_inner()
    }

    pub fn to_pt2d(&self) -> Pt2D {
        Pt2D::new(self.x(), self.y())
    }
}
