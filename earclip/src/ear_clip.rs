use serde::{Deserialize, Serialize};

use crate::lists::ClassificationLists;
use crate::validate::validate;
use crate::{Error, Pt2D, Result, TriangleIndices};

/// Tunes how much checking happens before ear clipping starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Reject polygons whose edges cross or touch. This is quadratic in the number of points;
    /// callers that already know their input is simple can skip it.
    pub check_simple: bool,
    /// Points closer than this, relative to the larger side of the bounding box, are treated as
    /// duplicates. A polygon with less area than `epsilon` times the bounding box's larger side
    /// squared has no area.
    pub epsilon: f64,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            check_simple: true,
            epsilon: 1e-10,
        }
    }
}

/// Splits a simple polygon into triangles, using the default `Options`. See `triangulate_with`.
///
/// The defaults check that no edges cross, which is quadratic in the number of points and
/// dominates the run time for large polygons (seconds for 20,000 points). Use `triangulate_with`
/// and turn off `Options::check_simple` when the input is already known to be simple.
pub fn triangulate(pts: &[Pt2D]) -> Result<Vec<TriangleIndices>> {
    triangulate_with(pts, &Options::default())
}

/// Splits a simple polygon into `pts.len() - 2` triangles that exactly cover it. Each triangle
/// refers to the input by 1-based index. The points may run in either direction, and each
/// triangle runs in the same direction. Holes and self-intersecting polygons aren't supported.
///
/// The result only depends on the input; running this twice gives the same triangles in the
/// same order.
pub fn triangulate_with(pts: &[Pt2D], opts: &Options) -> Result<Vec<TriangleIndices>> {
    let winding = validate(pts, opts)?;
    let lists = ClassificationLists::new(pts, winding)?;
    log::debug!(
        "Triangulating {} points ({:?}): {} reflex, {} ears to start",
        pts.len(),
        winding,
        lists.reflex_vertices().count(),
        lists.ears().count()
    );
    clip_ears(lists)
}

// Repeatedly clips the ear at the head of the list until one triangle is left. Running out of
// ears first means the lists are inconsistent, and nothing is returned.
fn clip_ears(mut lists: ClassificationLists) -> Result<Vec<TriangleIndices>> {
    let num_pts = lists.len();
    let mut triangles = Vec::with_capacity(num_pts - 2);
    while lists.len() > 3 {
        let ear = match lists.ear_head() {
            Some(ear) => ear,
            None => {
                log::warn!("Ran out of ears with {} points left", lists.len());
                return Err(Error::NoEarFound {
                    remaining: lists.len(),
                });
            }
        };

        let prev = lists.prev(ear);
        let next = lists.next(ear);
        if lists.triangle(ear).is_degenerate() {
            log::trace!("Clipping {} leaves a zero-area triangle", ear);
        }
        triangles.push(TriangleIndices::new(prev, ear, next));

        lists.remove_ear(ear);
        lists.remove_from_boundary(ear);
        lists.reclassify(prev);
        lists.reclassify(next);
        log::trace!(
            "Clipped {} between {} and {}, {} points left",
            ear,
            prev,
            next,
            lists.len()
        );
    }

    let last = lists.boundary_head();
    triangles.push(TriangleIndices::new(
        lists.prev(last),
        last,
        lists.next(last),
    ));

    log::debug!(
        "Produced {} triangles from {} points",
        triangles.len(),
        num_pts
    );
    Ok(triangles)
}
