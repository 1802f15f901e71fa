//! The seek track's geometry: a circular arc inscribed in a bounding
//! rectangle, with arc-length measurement for thumb placement and a `lyon`
//! outline for host-side stroking and hit-region rasterization.

mod arc;
mod measure;
mod outline;

pub use arc::ArcPath;

pub use lyon::path as lyon_path;
