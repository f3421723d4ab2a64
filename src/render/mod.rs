//! Rasterization and parallel rendering
//!
//! Everything between the gasket engine and the saved image: linear RGB
//! colors, exact-area antialiased fills, the renderer and its sub-windows,
//! the rendering visitor with the color mixing model, the tiled parallel
//! dispatcher, and the unsharp post-filter.

/// Linear RGB color type and palette helpers
pub mod color;
/// Gaussian blur and unsharp mask post-filters
pub mod filters;
/// Tiled parallel rendering over a fixed worker pool
pub mod grid;
/// Exact-area antialiased disk and half-plane fills
pub mod raster;
/// Image buffer, plane↔pixel mapping and circle dispatch
pub mod renderer;
/// Rendering visitor: pruning, visibility caching and color mixing
pub mod visitor;

pub use color::Rgb;
pub use grid::GridRenderer;
pub use renderer::Renderer;
pub use visitor::RenderingVisitor;
