//! Post-process filters
//!
//! A separable Gaussian blur and the unsharp mask built on it. Convolution
//! runs in "valid" mode, so filtering consumes `padding()` pixels per edge;
//! the pipeline renders a padded image when sharpening is enabled and the
//! saved output keeps its requested dimensions.

use super::color::Rgb;
use ndarray::Array2;

/// Normalized Gaussian convolution kernel
#[derive(Debug, Clone)]
struct GaussianKernel {
    coeffs: Vec<f64>,
}

impl GaussianKernel {
    /// Sample `exp(−x²/2)` at integer offsets within `±cutoff`
    fn new(radius: f64, cutoff: usize) -> Self {
        let n = 2 * cutoff + 1;
        let mut coeffs: Vec<f64> = (0..n)
            .map(|k| {
                let x = (k as f64 - cutoff as f64) / radius;
                (-x * x * 0.5).exp()
            })
            .collect();
        let total: f64 = coeffs.iter().sum();
        for c in &mut coeffs {
            *c /= total;
        }
        Self { coeffs }
    }

    const fn order(&self) -> usize {
        self.coeffs.len()
    }

    const fn shift(&self) -> usize {
        (self.coeffs.len() - 1) / 2
    }

    /// Valid-mode convolution along rows; output loses `order − 1` columns
    fn apply_x(&self, data: &Array2<f64>) -> Array2<f64> {
        let n = self.order();
        let (rows, cols) = data.dim();
        let out_cols = cols + 1 - n;
        let mut out = Array2::zeros((rows, out_cols));
        for (data_row, mut out_row) in data.rows().into_iter().zip(out.rows_mut()) {
            for (window, slot) in data_row.windows(n).into_iter().zip(out_row.iter_mut()) {
                *slot = window
                    .iter()
                    .zip(self.coeffs.iter())
                    .map(|(v, c)| v * c)
                    .sum();
            }
        }
        out
    }

    /// Valid-mode convolution along columns; output loses `order − 1` rows
    fn apply_y(&self, data: &Array2<f64>) -> Array2<f64> {
        self.apply_x(&data.t().to_owned()).t().to_owned()
    }

    fn apply_2d(&self, data: &Array2<f64>) -> Array2<f64> {
        self.apply_y(&self.apply_x(data))
    }
}

/// Unsharp mask: sharpen by subtracting a Gaussian-blurred copy
#[derive(Debug, Clone)]
pub struct UnsharpMask {
    kernel: GaussianKernel,
    amount: f64,
}

impl UnsharpMask {
    /// Build a mask with the given blur radius (in pixels) and strength
    pub fn new(radius: f64, amount: f64) -> Self {
        let cutoff = (radius * 4.0) as usize;
        Self {
            kernel: GaussianKernel::new(radius, cutoff.max(1)),
            amount,
        }
    }

    /// Pixels consumed from each image edge
    pub const fn padding(&self) -> usize {
        self.kernel.shift()
    }

    /// Sharpen one channel; output shrinks by `2·padding()` per axis
    fn apply_channel(&self, data: &Array2<f64>) -> Array2<f64> {
        let blurred = self.kernel.apply_2d(data);
        let shift = self.padding();
        let mut out = blurred;
        for ((row, col), q) in out.indexed_iter_mut() {
            let p = data.get((row + shift, col + shift)).copied().unwrap_or(*q);
            *q = p + (p - *q) * self.amount;
        }
        out
    }

    /// Sharpen an RGB image channel-wise
    pub fn apply(&self, image: &Array2<Rgb>) -> Array2<Rgb> {
        let channels = [
            image.map(|p| p.r),
            image.map(|p| p.g),
            image.map(|p| p.b),
        ];
        let sharpened = channels.map(|c| self.apply_channel(&c));
        let (rows, cols) = sharpened.first().map_or((0, 0), |c| c.dim());
        let mut out = Array2::from_elem((rows, cols), Rgb::default());
        for ((row, col), px) in out.indexed_iter_mut() {
            let channel = |i: usize| {
                sharpened
                    .get(i)
                    .and_then(|c| c.get((row, col)))
                    .copied()
                    .unwrap_or(0.0)
                    .clamp(0.0, 1.0)
            };
            *px = Rgb::new(channel(0), channel(1), channel(2));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let k = GaussianKernel::new(2.0, 8);
        let total: f64 = k.coeffs.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        for (a, b) in k.coeffs.iter().zip(k.coeffs.iter().rev()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn blur_preserves_constant_images() {
        let k = GaussianKernel::new(1.5, 6);
        let data = Array2::from_elem((20, 20), 0.75);
        let blurred = k.apply_2d(&data);
        assert_eq!(blurred.dim(), (20 - 12, 20 - 12));
        assert!(blurred.iter().all(|v| (v - 0.75).abs() < 1e-12));
    }

    #[test]
    fn unsharp_output_shrinks_by_twice_the_padding() {
        let mask = UnsharpMask::new(1.0, 0.5);
        let pad = mask.padding();
        let image = Array2::from_elem((32, 48), Rgb::new(0.2, 0.4, 0.6));
        let out = mask.apply(&image);
        assert_eq!(out.dim(), (32 - 2 * pad, 48 - 2 * pad));
    }

    #[test]
    fn unsharp_amplifies_an_edge() {
        let mask = UnsharpMask::new(1.0, 1.0);
        let pad = mask.padding();
        let mut image = Array2::from_elem((24, 24), Rgb::new(0.0, 0.0, 0.0));
        for ((_, col), px) in image.indexed_iter_mut() {
            if col >= 12 {
                *px = Rgb::new(1.0, 1.0, 1.0);
            }
        }
        let out = mask.apply(&image);
        // Just inside the bright side of the edge the output overshoots the
        // input before clamping, so it stays at the clamp ceiling
        let bright = out.get((12, 12 + 1 - pad)).copied().unwrap_or_default();
        assert!(bright.r >= 0.99);
        // Far from the edge nothing changes
        let flat = out.get((12, 2)).copied().unwrap_or_default();
        assert!(flat.r.abs() < 1e-9);
    }
}
