//! Exact-area antialiased rasterization
//!
//! Each pixel is a unit square centered at integer coordinates. Interior
//! runs are bulk-assigned; boundary pixels get the analytically exact area
//! of the square∩shape intersection, applied as the additive delta
//! `(new − old)·area`, which equals `lerp(old, new, area)` whenever the
//! pixel still holds `old`. The gasket's non-overlap invariant guarantees
//! `old` accounts for everything painted under the shape's own area, so
//! nothing is ever read back from the buffer.

use super::color::Rgb;
use ndarray::{s, Array2};

/// Half the diagonal of a unit pixel square
const PIXEL_REACH: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Area of `[0, x] × [0, y]` intersected with the disk `|z| ≤ r`, `x, y ≥ 0`
fn quadrant_area(x: f64, y: f64, r: f64) -> f64 {
    // Antiderivative of the circle height: ∫√(r²−u²) du
    let cap = |t: f64| {
        let t = t.clamp(0.0, r);
        0.5 * (t * (r * r - t * t).max(0.0).sqrt() + r * r * (t / r).clamp(-1.0, 1.0).asin())
    };
    let x = x.min(r);
    if y >= r {
        return cap(x);
    }
    let u = (r * r - y * y).sqrt();
    if x <= u {
        x * y
    } else {
        u * y + cap(x) - cap(u)
    }
}

/// Area of `[x0, x1] × [y0, y1]` intersected with the disk `|z| ≤ r`
///
/// Coordinates are relative to the disk center. Decomposes the rectangle
/// into signed quadrant pieces.
fn disk_rect_area(x0: f64, x1: f64, y0: f64, y1: f64, r: f64) -> f64 {
    let signed = |x: f64, y: f64| x.signum() * y.signum() * quadrant_area(x.abs(), y.abs(), r);
    signed(x1, y1) - signed(x0, y1) - signed(x1, y0) + signed(x0, y0)
}

/// Fraction of the unit square at `(x, y)` covered by the disk
fn disk_pixel_fraction(x: f64, y: f64, xc: f64, yc: f64, r: f64) -> f64 {
    let dx = x - xc;
    let dy = y - yc;
    disk_rect_area(dx - 0.5, dx + 0.5, dy - 0.5, dy + 0.5, r).clamp(0.0, 1.0)
}

/// Fraction of a unit square on the `t ≤ 0` side of a line
///
/// `t` is the signed line value at the square center; `alpha` and `beta` are
/// the absolute normalized coefficients of the two axes. Trapezoid/corner
/// geometry, exact.
const fn line_pixel_fraction(t: f64, alpha: f64, beta: f64) -> f64 {
    let (hi, lo) = if alpha >= beta {
        (alpha, beta)
    } else {
        (beta, alpha)
    };
    let outer = (hi + lo) / 2.0;
    let inner = (hi - lo) / 2.0;
    if t <= -outer {
        1.0
    } else if t >= outer {
        0.0
    } else if t < -inner {
        1.0 - (t + outer) * (t + outer) / (2.0 * hi * lo)
    } else if t <= inner {
        0.5 - t / hi
    } else {
        (outer - t) * (outer - t) / (2.0 * hi * lo)
    }
}

/// Clamp an inclusive pixel range to `[0, len)`
fn clamp_range(lo: f64, hi: f64, len: usize) -> Option<(usize, usize)> {
    let lo = lo.ceil().max(0.0);
    let hi = hi.floor().min(len as f64 - 1.0);
    if lo > hi {
        return None;
    }
    Some((lo as usize, hi as usize))
}

/// Assign `color` to `row[c0..=c1]`
fn fill_row(image: &mut Array2<Rgb>, row: usize, c0: usize, c1: usize, color: Rgb) {
    image.slice_mut(s![row, c0..=c1]).fill(color);
}

/// Blend one boundary pixel by its covered-area fraction
///
/// Additive form of `lerp(old, new, area)`: tangent shapes may share a
/// boundary pixel, and adding each shape's delta over its own covered area
/// composes exactly because those areas never overlap. A replacing write
/// would discard the neighbor's contribution.
fn blend_pixel(image: &mut Array2<Rgb>, row: usize, col: usize, old: Rgb, new: Rgb, area: f64) {
    if let Some(px) = image.get_mut((row, col)) {
        *px += (new - old) * area;
    }
}

/// Paint a disk of radius `r` centered at pixel coordinates `(xc, yc)`
///
/// `old_color` must be the current content of every boundary pixel; interior
/// pixels are overwritten unconditionally.
pub fn fill_disk(image: &mut Array2<Rgb>, xc: f64, yc: f64, r: f64, new_color: Rgb, old_color: Rgb) {
    let (rows, cols) = image.dim();
    let Some((row0, row1)) = clamp_range(yc - (r + PIXEL_REACH), yc + (r + PIXEL_REACH), rows)
    else {
        return;
    };
    for row in row0..=row1 {
        let dy = row as f64 - yc;
        let reach_sq = (r + PIXEL_REACH) * (r + PIXEL_REACH) - dy * dy;
        if reach_sq <= 0.0 {
            continue;
        }
        let reach = reach_sq.sqrt();
        let core = if r > PIXEL_REACH {
            ((r - PIXEL_REACH) * (r - PIXEL_REACH) - dy * dy).max(0.0).sqrt()
        } else {
            0.0
        };
        let band = clamp_range(xc - reach, xc + reach, cols);
        let Some((b0, b1)) = band else { continue };
        let interior = clamp_range(xc - core, xc + core, cols);
        match interior {
            Some((c0, c1)) if core > 0.0 => {
                for col in b0..c0 {
                    let a = disk_pixel_fraction(col as f64, row as f64, xc, yc, r);
                    blend_pixel(image, row, col, old_color, new_color, a);
                }
                fill_row(image, row, c0, c1, new_color);
                for col in (c1 + 1)..=b1 {
                    let a = disk_pixel_fraction(col as f64, row as f64, xc, yc, r);
                    blend_pixel(image, row, col, old_color, new_color, a);
                }
            }
            _ => {
                for col in b0..=b1 {
                    let a = disk_pixel_fraction(col as f64, row as f64, xc, yc, r);
                    blend_pixel(image, row, col, old_color, new_color, a);
                }
            }
        }
    }
}

/// Paint the complement of a disk: everything outside radius `r` at `(xc, yc)`
pub fn fill_disk_complement(
    image: &mut Array2<Rgb>,
    xc: f64,
    yc: f64,
    r: f64,
    new_color: Rgb,
    old_color: Rgb,
) {
    let (rows, cols) = image.dim();
    if cols == 0 || rows == 0 {
        return;
    }
    let last_col = cols - 1;
    for row in 0..rows {
        let dy = row as f64 - yc;
        let reach_sq = (r + PIXEL_REACH) * (r + PIXEL_REACH) - dy * dy;
        if reach_sq <= 0.0 {
            // Row entirely clear of the hole
            fill_row(image, row, 0, last_col, new_color);
            continue;
        }
        let reach = reach_sq.sqrt();
        let core = if r > PIXEL_REACH {
            ((r - PIXEL_REACH) * (r - PIXEL_REACH) - dy * dy).max(0.0).sqrt()
        } else {
            0.0
        };
        let band = clamp_range(xc - reach, xc + reach, cols);
        let Some((b0, b1)) = band else {
            fill_row(image, row, 0, last_col, new_color);
            continue;
        };
        if b0 > 0 {
            fill_row(image, row, 0, b0 - 1, new_color);
        }
        let interior = if core > 0.0 {
            clamp_range(xc - core, xc + core, cols)
        } else {
            None
        };
        match interior {
            Some((c0, c1)) => {
                for col in b0..c0 {
                    let a = disk_pixel_fraction(col as f64, row as f64, xc, yc, r);
                    blend_pixel(image, row, col, old_color, new_color, 1.0 - a);
                }
                for col in (c1 + 1)..=b1 {
                    let a = disk_pixel_fraction(col as f64, row as f64, xc, yc, r);
                    blend_pixel(image, row, col, old_color, new_color, 1.0 - a);
                }
            }
            None => {
                for col in b0..=b1 {
                    let a = disk_pixel_fraction(col as f64, row as f64, xc, yc, r);
                    blend_pixel(image, row, col, old_color, new_color, 1.0 - a);
                }
            }
        }
        if b1 < last_col {
            fill_row(image, row, b1 + 1, last_col, new_color);
        }
    }
}

/// Paint the half-plane `a·x + b·y + c ≤ 0` in pixel coordinates
pub fn fill_half_plane(
    image: &mut Array2<Rgb>,
    a: f64,
    b: f64,
    c: f64,
    new_color: Rgb,
    old_color: Rgb,
) {
    let (rows, cols) = image.dim();
    if cols == 0 || rows == 0 {
        return;
    }
    let norm = a.hypot(b);
    if norm <= 0.0 {
        return;
    }
    let (a, b, c) = (a / norm, b / norm, c / norm);
    // abs() is nonnegative, so <= 0.0 below is an exact zero test
    let alpha = a.abs();
    let beta = b.abs();
    // Maximum offset of the line value over a unit square
    let margin = (alpha + beta) / 2.0;
    let last_col = cols - 1;
    for row in 0..rows {
        let base = b * row as f64 + c;
        if alpha <= 0.0 {
            // Horizontal line: the whole row shares one fraction
            if base <= -margin {
                fill_row(image, row, 0, last_col, new_color);
            } else if base < margin {
                let f = line_pixel_fraction(base, alpha, beta);
                for col in 0..cols {
                    blend_pixel(image, row, col, old_color, new_color, f);
                }
            }
            continue;
        }
        // Solve a·x + base = ±margin for the boundary band
        let (x_lo, x_hi) = {
            let lo = (-margin - base) / a;
            let hi = (margin - base) / a;
            if lo <= hi { (lo, hi) } else { (hi, lo) }
        };
        // Which side of the band is fully inside
        let inside_left = a > 0.0;
        let band = clamp_range(x_lo, x_hi, cols);
        match band {
            Some((b0, b1)) => {
                if inside_left {
                    if b0 > 0 {
                        fill_row(image, row, 0, b0 - 1, new_color);
                    }
                } else if b1 < last_col {
                    fill_row(image, row, b1 + 1, last_col, new_color);
                }
                for col in b0..=b1 {
                    let t = a * col as f64 + base;
                    let f = line_pixel_fraction(t, alpha, beta);
                    blend_pixel(image, row, col, old_color, new_color, f);
                }
            }
            None => {
                // No boundary pixel on this row: all-in or all-out
                let t_first = base;
                let t_last = a * last_col as f64 + base;
                if t_first < 0.0 && t_last < 0.0 {
                    fill_row(image, row, 0, last_col, new_color);
                }
            }
        }
    }
}
