use serde::{Deserialize, Serialize};

use crate::Pt2D;

#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub pt1: Pt2D,
    pub pt2: Pt2D,
    pub pt3: Pt2D,
}

impl Triangle {
    pub fn new(pt1: Pt2D, pt2: Pt2D, pt3: Pt2D) -> Triangle {
        Triangle { pt1, pt2, pt3 }
    }

    /// Positive when the corners run counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        (self.pt2 - self.pt1).cross(self.pt3 - self.pt1) / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_degenerate(&self) -> bool {
        self.signed_area() == 0.0
    }

    /// Barycentric containment test relative to `pt2`. Points on an edge count as inside, so a
    /// caller checking polygon vertices must skip the triangle's own corners. A degenerate
    /// triangle contains nothing.
    pub fn contains(&self, pt: Pt2D) -> bool {
        let v0 = self.pt1 - self.pt2;
        let v1 = self.pt3 - self.pt2;
        let v2 = pt - self.pt2;

        let dot00 = v0.dot(v0);
        let dot01 = v0.dot(v1);
        let dot02 = v0.dot(v2);
        let dot11 = v1.dot(v1);
        let dot12 = v1.dot(v2);

        let denom = dot00 * dot11 - dot01 * dot01;
        if denom == 0.0 {
            return false;
        }
        let u = (dot11 * dot02 - dot01 * dot12) / denom;
        let v = (dot00 * dot12 - dot01 * dot02) / denom;

        u >= 0.0 && v >= 0.0 && u + v <= 1.0
    }
}

/// One output triangle, as 1-based indices into the input points: the first point is 1. The
/// order is the boundary order at the moment the ear was clipped, so the winding matches the input
/// polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriangleIndices(pub [usize; 3]);

impl TriangleIndices {
    /// Takes zero-based positions in the input, the way slices are indexed.
    pub fn new(prev: usize, ear: usize, next: usize) -> TriangleIndices {
        TriangleIndices([prev + 1, ear + 1, next + 1])
    }

    /// The same triangle as zero-based positions in the input, for indexing slices or filling a
    /// renderer's index buffer. Panics if an index is 0.
    pub fn zero_based(&self) -> [usize; 3] {
        self.0.map(|idx| idx - 1)
    }

    pub fn to_triangle(&self, points: &[Pt2D]) -> Triangle {
        let [a, b, c] = self.zero_based();
        Triangle::new(points[a], points[b], points[c])
    }
}
