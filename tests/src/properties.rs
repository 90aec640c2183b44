//! Properties that every triangulation of a simple polygon must have, no matter which ears were
//! clipped first.

use anyhow::{bail, Result};

use earclip::{signed_area, triangulate, Pt2D, TriangleIndices};

// Relative to the polygon's area
const AREA_TOLERANCE: f64 = 1e-9;

pub fn check_all(pts: &[Pt2D], triangles: &[TriangleIndices]) -> Result<()> {
    triangle_count(pts, triangles)?;
    index_validity(pts, triangles)?;
    winding(pts, triangles)?;
    coverage(pts, triangles)?;
    determinism(pts, triangles)?;
    Ok(())
}

fn triangle_count(pts: &[Pt2D], triangles: &[TriangleIndices]) -> Result<()> {
    if triangles.len() != pts.len() - 2 {
        bail!(
            "{} points should make {} triangles, got {}",
            pts.len(),
            pts.len() - 2,
            triangles.len()
        );
    }
    Ok(())
}

fn index_validity(pts: &[Pt2D], triangles: &[TriangleIndices]) -> Result<()> {
    let mut used = vec![false; pts.len()];
    for tri in triangles {
        // Points are numbered from 1
        for idx in tri.0 {
            if idx == 0 || idx > pts.len() {
                bail!("{:?} refers to a point that doesn't exist", tri);
            }
            used[idx - 1] = true;
        }
    }
    if let Some(idx) = used.iter().position(|x| !x) {
        bail!("point {} isn't part of any triangle", idx + 1);
    }
    Ok(())
}

fn winding(pts: &[Pt2D], triangles: &[TriangleIndices]) -> Result<()> {
    let sign = signed_area(pts).signum();
    for tri in triangles {
        // Zero-area slivers from collinear points are fine
        let area = tri.to_triangle(pts).signed_area();
        if area * sign < -AREA_TOLERANCE {
            bail!("{:?} runs the opposite way from the polygon", tri);
        }
    }
    Ok(())
}

// With every triangle wound the same way, matching areas also means nothing overlaps.
fn coverage(pts: &[Pt2D], triangles: &[TriangleIndices]) -> Result<()> {
    let expected = signed_area(pts);
    let actual: f64 = triangles
        .iter()
        .map(|tri| tri.to_triangle(pts).signed_area())
        .sum();
    if (expected - actual).abs() > AREA_TOLERANCE * expected.abs().max(1.0) {
        bail!("triangles cover {}, but the polygon is {}", actual, expected);
    }
    Ok(())
}

fn determinism(pts: &[Pt2D], triangles: &[TriangleIndices]) -> Result<()> {
    let again = triangulate(pts)?;
    if again != triangles {
        bail!("second run gave {:?}", again);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Pt2D> {
        vec![
            Pt2D::new(0.0, 0.0),
            Pt2D::new(1.0, 0.0),
            Pt2D::new(1.0, 1.0),
            Pt2D::new(0.0, 1.0),
        ]
    }

    #[test]
    fn catches_bad_triangulations() {
        let pts = square();
        let good = vec![TriangleIndices([4, 1, 2]), TriangleIndices([4, 2, 3])];
        assert!(check_all(&pts, &good).is_ok());

        assert!(triangle_count(&pts, &good[..1]).is_err());
        assert!(index_validity(&pts, &[TriangleIndices([1, 2, 5]), good[1]]).is_err());
        assert!(index_validity(&pts, &[TriangleIndices([0, 1, 2]), good[1]]).is_err());
        // Point 1 unused
        assert!(index_validity(&pts, &[good[1], good[1]]).is_err());
        assert!(winding(&pts, &[TriangleIndices([2, 1, 4]), good[1]]).is_err());
        // Half the square is missing
        assert!(coverage(&pts, &good[..1]).is_err());
        // Valid, but not what triangulate produces
        let other = vec![TriangleIndices([1, 2, 3]), TriangleIndices([1, 3, 4])];
        assert!(coverage(&pts, &other).is_ok());
        assert!(determinism(&pts, &other).is_err());
    }
}
