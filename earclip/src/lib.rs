//! Ear clipping triangulation for simple polygons, producing triangles for a renderer. Triangles
//! number the input points from 1; `Tessellation` converts to a zero-based index buffer.
//!
//! ```
//! use earclip::{triangulate, Pt2D, TriangleIndices};
//!
//! let square = vec![
//!     Pt2D::new(0.0, 0.0),
//!     Pt2D::new(1.0, 0.0),
//!     Pt2D::new(1.0, 1.0),
//!     Pt2D::new(0.0, 1.0),
//! ];
//! let triangles = triangulate(&square).unwrap();
//! assert_eq!(
//!     triangles,
//!     vec![TriangleIndices([4, 1, 2]), TriangleIndices([4, 2, 3])]
//! );
//! ```

pub use crate::bounds::Bounds;
pub use crate::ear_clip::{triangulate, triangulate_with, Options};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::line::Line;
pub use crate::lists::ClassificationLists;
pub use crate::pt::{HashablePt2D, Pt2D};
pub use crate::tessellation::Tessellation;
pub use crate::triangle::{Triangle, TriangleIndices};
pub use crate::validate::{orientation, signed_area, validate, Winding};

mod bounds;
mod ear_clip;
mod error;
mod line;
mod lists;
mod pt;
mod tessellation;
mod triangle;
mod validate;
