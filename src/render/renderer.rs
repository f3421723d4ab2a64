//! Image buffer and circle rendering
//!
//! A renderer owns a dense RGB buffer plus the affine mapping between
//! render-plane and pixel coordinates. Generalized circles dispatch to the
//! exact rasterizer: proper disks, disk complements and half-planes each take
//! their own fill path. Sub-window renderers share the same resolution but
//! own an independent buffer; a finished window merges back by rectangular
//! copy.

use super::color::Rgb;
use super::raster;
use crate::geometry::{GenCircle, Rect};
use ndarray::{s, Array2};
use num_complex::Complex64;

/// Renders generalized circles into an owned RGB buffer
#[derive(Debug, Clone)]
pub struct Renderer {
    image: Array2<Rgb>,
    /// Render-plane coordinates of pixel (0, 0)
    x0: f64,
    y0: f64,
    /// Pixels per plane unit
    res: f64,
}

impl Renderer {
    /// Create a renderer for a `width × height` image centered on `center`
    pub fn new(width: usize, height: usize, center: Complex64, res: f64, background: Rgb) -> Self {
        Self::with_origin(
            center.re - 0.5 * width as f64 / res,
            center.im - 0.5 * height as f64 / res,
            width,
            height,
            res,
            background,
        )
    }

    /// Create a renderer whose pixel (0, 0) sits at plane point `(x0, y0)`
    pub fn with_origin(
        x0: f64,
        y0: f64,
        width: usize,
        height: usize,
        res: f64,
        background: Rgb,
    ) -> Self {
        Self {
            image: Array2::from_elem((height, width), background),
            x0,
            y0,
            res,
        }
    }

    /// Buffer width in pixels
    pub fn cols(&self) -> usize {
        self.image.ncols()
    }

    /// Buffer height in pixels
    pub fn rows(&self) -> usize {
        self.image.nrows()
    }

    /// Pixels per plane unit
    pub const fn resolution(&self) -> f64 {
        self.res
    }

    /// The finished buffer
    pub const fn image(&self) -> &Array2<Rgb> {
        &self.image
    }

    /// Consume the renderer, returning its buffer
    pub fn into_image(self) -> Array2<Rgb> {
        self.image
    }

    /// Plane point of the pixel center `(col, row)`
    pub const fn unmap(&self, col: f64, row: f64) -> Complex64 {
        Complex64::new(self.x0 + col / self.res, self.y0 + row / self.res)
    }

    /// Pixel coordinates of a plane point
    pub const fn map(&self, z: Complex64) -> (f64, f64) {
        ((z.re - self.x0) * self.res, (z.im - self.y0) * self.res)
    }

    /// The viewport box covering every pixel square of this buffer
    ///
    /// Padded by half a pixel on each side so that classification against it
    /// is conservative for anything that could touch the edge pixels; this
    /// keeps tiled and monolithic renders byte-identical.
    pub fn viewport(&self) -> Rect {
        let half = 0.5 / self.res;
        let lo = self.unmap(0.0, 0.0);
        let hi = self.unmap(self.cols() as f64 - 1.0, self.rows() as f64 - 1.0);
        Rect::new(lo.re - half, hi.re + half, lo.im - half, hi.im + half)
    }

    /// Paint the inside of a generalized circle
    ///
    /// `old_color` must equal the current content of every boundary pixel;
    /// the non-overlap invariant of gasket traversal guarantees this.
    pub fn render_circle(&mut self, circle: &GenCircle, new_color: Rgb, old_color: Rgb) {
        if circle.is_half_plane() {
            // Convert the form to pixel coordinates: with z = unmap(col, row),
            // form(z) = 2·(v01.re·x + v01.im·y) + v11
            let a = 2.0 * circle.v01.re / self.res;
            let b = 2.0 * circle.v01.im / self.res;
            let c = circle.v11 + 2.0 * (circle.v01.re * self.x0 + circle.v01.im * self.y0);
            raster::fill_half_plane(&mut self.image, a, b, c, new_color, old_color);
        } else {
            let (xc, yc) = self.map(circle.center());
            let r = circle.radius() * self.res;
            if r < 0.0 {
                raster::fill_disk_complement(&mut self.image, xc, yc, -r, new_color, old_color);
            } else {
                raster::fill_disk(&mut self.image, xc, yc, r, new_color, old_color);
            }
        }
    }

    /// An independent renderer for the cell at pixel offset `(col0, row0)`
    ///
    /// Dimensions are clipped to this buffer. The window starts from the
    /// given background; the gasket seeds repaint every pixel regardless.
    pub fn window(
        &self,
        col0: usize,
        row0: usize,
        cols: usize,
        rows: usize,
        background: Rgb,
    ) -> Self {
        let cols = cols.min(self.cols().saturating_sub(col0));
        let rows = rows.min(self.rows().saturating_sub(row0));
        let origin = self.unmap(col0 as f64, row0 as f64);
        Self::with_origin(origin.re, origin.im, cols, rows, self.res, background)
    }

    /// Copy a finished window buffer back at pixel offset `(col0, row0)`
    pub fn merge_window(&mut self, col0: usize, row0: usize, window: &Self) {
        let rows = window.rows();
        let cols = window.cols();
        self.image
            .slice_mut(s![row0..row0 + rows, col0..col0 + cols])
            .assign(&window.image);
    }
}
