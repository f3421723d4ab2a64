//! Render constants and runtime configuration defaults

use num_complex::Complex64;

/// Default output width in pixels
pub const DEFAULT_WIDTH: usize = 3840;
/// Default output height in pixels
pub const DEFAULT_HEIGHT: usize = 2160;

/// Default resolution in pixels per plane unit
pub const DEFAULT_RESOLUTION: f64 = 250.0;

/// Default cell edge length for tiled rendering
pub const DEFAULT_CELL_SIZE: usize = 256;

/// Default blur radius of the unsharp mask, in pixels
pub const DEFAULT_SHARPEN_RADIUS: f64 = 2.0;
/// Default strength of the unsharp mask
pub const DEFAULT_SHARPEN_AMOUNT: f64 = 0.6;

/// The four curvature-class palette entries as `0xRRGGBB`
pub const DEFAULT_PALETTE: [u32; 4] = [0xc0503c, 0x3c78c0, 0x46a050, 0xc8a03c];

/// Tangency points of the default scene
///
/// The three initial circles meet at `s·ω^k` with `s = −(2+√3)` and
/// `ω = (3+4i)/5`, a unit-modulus rotation with exact double coordinates,
/// which keeps repeated runs bit-reproducible.
pub fn default_seed_points() -> [Complex64; 3] {
    let scale = -(2.0 + 3.0f64.sqrt());
    let omega = Complex64::new(0.6, 0.8);
    [
        Complex64::new(scale, 0.0),
        omega * scale,
        omega * omega * scale,
    ]
}
