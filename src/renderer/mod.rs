//! Presentation
//!
//! CPU-side only: builds triangle lists and text requests from a simulation
//! snapshot. The host owns the window, the GPU pipeline and the fonts.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Frame, TextItem, TextSize, build_frame};
pub use vertex::Vertex;
