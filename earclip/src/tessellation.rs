use crate::{triangulate_with, Bounds, Options, Pt2D, Result, Triangle, TriangleIndices};

// Deliberately not serializable
/// A triangulated polygon, ready for rendering. Normals, texture coordinates, and materials are
/// up to the renderer.
#[derive(Clone, Debug)]
pub struct Tessellation {
    /// Exactly the points of the original polygon, in the original order
    points: Vec<Pt2D>,
    /// Groups of three zero-based indices make up the triangles
    indices: Vec<u32>,
}

impl Tessellation {
    pub fn from_polygon(points: Vec<Pt2D>) -> Result<Self> {
        Self::with_options(points, &Options::default())
    }

    pub fn with_options(points: Vec<Pt2D>, opts: &Options) -> Result<Self> {
        let triangles = triangulate_with(&points, opts)?;
        Ok(Self::from_triangles(points, &triangles))
    }

    // Validation already capped the number of points, so every index fits. Renderers want
    // zero-based indices.
    fn from_triangles(points: Vec<Pt2D>, triangles: &[TriangleIndices]) -> Self {
        let indices = triangles
            .iter()
            .flat_map(|tri| tri.zero_based())
            .map(|idx| idx as u32)
            .collect();
        Self { points, indices }
    }

    /// Returns (points, indices) for rendering
    pub fn consume(self) -> (Vec<Pt2D>, Vec<u32>) {
        (self.points, self.indices)
    }

    pub fn points(&self) -> &[Pt2D] {
        &self.points
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangles(&self) -> Vec<Triangle> {
        let mut triangles: Vec<Triangle> = Vec::new();
        for slice in self.indices.chunks_exact(3) {
            triangles.push(Triangle::new(
                self.points[slice[0] as usize],
                self.points[slice[1] as usize],
                self.points[slice[2] as usize],
            ));
        }
        triangles
    }

    /// The total area of the triangles, which is also the area of the polygon.
    pub fn area(&self) -> f64 {
        self.triangles().iter().map(|tri| tri.area()).sum()
    }

    pub fn get_bounds(&self) -> Bounds {
        Bounds::from(&self.points)
    }
}
