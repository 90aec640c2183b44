//! Checks that a sequence of points describes a simple polygon with positive area, before any
//! ear clipping starts. Ear clipping on anything else can divide by zero or never find an ear.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Bounds, Error, Line, Options, Pt2D, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Shoelace formula. Positive for counter-clockwise points.
pub fn signed_area(pts: &[Pt2D]) -> f64 {
    let mut sum = 0.0;
    for (idx, pt1) in pts.iter().enumerate() {
        let pt2 = pts[(idx + 1) % pts.len()];
        sum += pt1.cross(pt2);
    }
    sum / 2.0
}

/// Zero-area input reports as counter-clockwise; `validate` rejects it anyway.
pub fn orientation(pts: &[Pt2D]) -> Winding {
    if signed_area(pts) < 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}

/// Returns the winding of the polygon if it can be triangulated.
pub fn validate(pts: &[Pt2D], opts: &Options) -> Result<Winding> {
    if pts.len() < 3 {
        return Err(Error::TooFewPoints(pts.len()));
    }
    if u32::try_from(pts.len()).is_err() {
        return Err(Error::TooManyPoints(pts.len()));
    }

    let mut seen: HashMap<_, usize> = HashMap::new();
    for (idx, pt) in pts.iter().enumerate() {
        let hashable = match pt.to_hashable() {
            Some(h) if pt.is_finite() => h,
            _ => {
                return Err(Error::NonFinite { idx, pt: *pt });
            }
        };
        if let Some(first) = seen.insert(hashable, idx) {
            return Err(Error::DuplicatePoint {
                first,
                second: idx,
                pt: *pt,
            });
        }
    }

    let extent = Bounds::from(pts).extent();
    let threshold = opts.epsilon * extent;
    for idx in 0..pts.len() {
        let next = (idx + 1) % pts.len();
        if pts[idx].approx_eq(pts[next], threshold) {
            return Err(Error::DuplicatePoint {
                first: idx.min(next),
                second: idx.max(next),
                pt: pts[idx],
            });
        }
    }

    let area = signed_area(pts);
    if area.abs() <= opts.epsilon * extent * extent {
        return Err(Error::ZeroArea);
    }

    for idx in 0..pts.len() {
        let prev = pts[(idx + pts.len() - 1) % pts.len()] - pts[idx];
        let next = pts[(idx + 1) % pts.len()] - pts[idx];
        if prev.cross(next) == 0.0 && prev.dot(next) > 0.0 {
            return Err(Error::Spike { idx });
        }
    }

    if opts.check_simple {
        check_simple(pts)?;
    }

    Ok(orientation(pts))
}

// Every pair of edges that don't share a point must not touch. Quadratic, but polygons handed to
// a renderer this way are small.
fn check_simple(pts: &[Pt2D]) -> Result<()> {
    let n = pts.len();
    let edges: Vec<Line> = (0..n)
        .map(|idx| Line::new(pts[idx], pts[(idx + 1) % n]))
        .collect();
    for edge1 in 0..n {
        for edge2 in (edge1 + 2)..n {
            if edge1 == 0 && edge2 == n - 1 {
                continue;
            }
            if edges[edge1].intersects(&edges[edge2]) {
                return Err(Error::SelfIntersecting { edge1, edge2 });
            }
        }
    }
    Ok(())
}
