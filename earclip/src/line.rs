use std::fmt;

use crate::Pt2D;

/// Segment, technically
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line(Pt2D, Pt2D);

impl Line {
    pub fn new(pt1: Pt2D, pt2: Pt2D) -> Line {
        Line(pt1, pt2)
    }

    pub fn pt1(&self) -> Pt2D {
        self.0
    }

    pub fn pt2(&self) -> Pt2D {
        self.1
    }

    pub fn length(&self) -> f64 {
        self.pt1().dist_to(self.pt2())
    }

    /// True if the two segments share any point, including touching at an endpoint or
    /// overlapping while collinear.
    pub fn intersects(&self, other: &Line) -> bool {
        // From http://bryceboe.com/2006/10/23/line-segment-intersection-algorithm/, plus the
        // collinear cases that approach skips
        let o1 = orientation(self.pt1(), self.pt2(), other.pt1());
        let o2 = orientation(self.pt1(), self.pt2(), other.pt2());
        let o3 = orientation(other.pt1(), other.pt2(), self.pt1());
        let o4 = orientation(other.pt1(), other.pt2(), self.pt2());

        if o1 != o2 && o3 != o4 && o1 != 0 && o2 != 0 && o3 != 0 && o4 != 0 {
            return true;
        }

        (o1 == 0 && on_segment(self.pt1(), other.pt1(), self.pt2()))
            || (o2 == 0 && on_segment(self.pt1(), other.pt2(), self.pt2()))
            || (o3 == 0 && on_segment(other.pt1(), self.pt1(), other.pt2()))
            || (o4 == 0 && on_segment(other.pt1(), self.pt2(), other.pt2()))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Line({} -> {})", self.pt1(), self.pt2())
    }
}

/// 1 for a counter-clockwise turn a -> b -> c, -1 for clockwise, 0 for collinear.
fn orientation(a: Pt2D, b: Pt2D, c: Pt2D) -> i8 {
    let cross = (b - a).cross(c - a);
    if cross > 0.0 {
        1
    } else if cross < 0.0 {
        -1
    } else {
        0
    }
}

// Assumes the three points are collinear
fn on_segment(a: Pt2D, pt: Pt2D, b: Pt2D) -> bool {
    pt.x() >= a.x().min(b.x())
        && pt.x() <= a.x().max(b.x())
        && pt.y() >= a.y().min(b.y())
        && pt.y() <= a.y().max(b.y())
}
