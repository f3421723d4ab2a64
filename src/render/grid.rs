//! Tiled parallel rendering
//!
//! The target image is split into fixed-size rectangular cells. A fixed pool
//! of worker threads pulls unclaimed cells from a shared atomic cursor; each
//! worker runs the entire generation pipeline against its own private cell
//! renderer (viewport pruning makes out-of-cell recursion terminate
//! immediately), then merges the finished buffer into the shared image under
//! a short-held lock. Cell claim order is unspecified, but every cell is
//! rendered exactly once and the output is byte-identical to a monolithic
//! render.

use super::color::{self, Rgb};
use super::renderer::Renderer;
use super::visitor::RenderingVisitor;
use crate::geometry::PComplex;
use indicatif::ProgressBar;
use ndarray::Array2;
use num_complex::Complex64;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

/// Parameters of one tiled render
#[derive(Debug, Clone)]
pub struct GridRenderer {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
    /// Plane point at the image center
    pub center: Complex64,
    /// Pixels per plane unit
    pub resolution: f64,
    /// Minimum node size expanded by the traversal
    pub threshold: f64,
    /// The four curvature-class colors
    pub palette: [Rgb; 4],
    /// Number of worker threads
    pub workers: usize,
    /// Cell edge length in pixels
    pub cell_size: usize,
}

impl GridRenderer {
    /// Pixel offsets of every cell, row-major
    fn cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        let mut row0 = 0;
        while row0 < self.height {
            let mut col0 = 0;
            while col0 < self.width {
                cells.push((col0, row0));
                col0 += self.cell_size;
            }
            row0 += self.cell_size;
        }
        cells
    }

    /// Render the gasket with tangency points `z0, z1, z2`
    ///
    /// Returns the finished image and the total number of circles rendered
    /// across all cells. `progress`, when given, advances by one per cell.
    pub fn render(
        &self,
        z0: PComplex,
        z1: PComplex,
        z2: PComplex,
        progress: Option<&ProgressBar>,
    ) -> (Array2<Rgb>, usize) {
        let cells = self.cells();
        let cursor = AtomicUsize::new(0);
        let circle_count = AtomicUsize::new(0);
        let output = Mutex::new(Renderer::new(
            self.width,
            self.height,
            self.center,
            self.resolution,
            color::BLACK,
        ));
        // Window geometry is derived without touching the shared renderer
        let x0 = self.center.re - 0.5 * self.width as f64 / self.resolution;
        let y0 = self.center.im - 0.5 * self.height as f64 / self.resolution;

        thread::scope(|scope| {
            for _ in 0..self.workers.max(1) {
                scope.spawn(|| {
                    loop {
                        let index = cursor.fetch_add(1, Ordering::Relaxed);
                        let Some(&(col0, row0)) = cells.get(index) else {
                            break;
                        };
                        let cols = self.cell_size.min(self.width - col0);
                        let rows = self.cell_size.min(self.height - row0);
                        let window = Renderer::with_origin(
                            x0 + col0 as f64 / self.resolution,
                            y0 + row0 as f64 / self.resolution,
                            cols,
                            rows,
                            self.resolution,
                            color::BLACK,
                        );
                        let mut visitor =
                            RenderingVisitor::new(window, self.threshold, &self.palette);
                        visitor.run(z0, z1, z2);
                        let (finished, count) = visitor.into_parts();
                        circle_count.fetch_add(count, Ordering::Relaxed);
                        let mut shared =
                            output.lock().unwrap_or_else(PoisonError::into_inner);
                        shared.merge_window(col0, row0, &finished);
                        drop(shared);
                        if let Some(bar) = progress {
                            bar.inc(1);
                        }
                    }
                });
            }
        });

        let renderer = output
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        (renderer.into_image(), circle_count.load(Ordering::Relaxed))
    }
}
