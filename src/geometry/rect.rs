//! Axis-aligned boxes and viewport classification
//!
//! The tiled renderer gives every worker a box in render-plane coordinates;
//! classifying a node's circle against that box is what prunes recursion
//! outside the visible cell.

use super::circle::GenCircle;
use num_complex::Complex64;

/// How a box relates to the inside of a generalized circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intersection {
    /// The box lies entirely within the shape
    Inside,
    /// The box is entirely disjoint from the shape
    Outside,
    /// The box straddles the shape boundary (or nothing was ruled out)
    Intersects,
}

/// An axis-aligned box in render-plane coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub xmin: f64,
    /// Right edge
    pub xmax: f64,
    /// Bottom edge
    pub ymin: f64,
    /// Top edge
    pub ymax: f64,
}

impl Rect {
    /// Build a box from explicit edges
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Build a box centered on a point
    pub const fn centered(center: Complex64, width: f64, height: f64) -> Self {
        Self::new(
            center.re - width / 2.0,
            center.re + width / 2.0,
            center.im - height / 2.0,
            center.im + height / 2.0,
        )
    }

    /// The four corner points
    const fn corners(&self) -> [Complex64; 4] {
        [
            Complex64::new(self.xmin, self.ymin),
            Complex64::new(self.xmax, self.ymin),
            Complex64::new(self.xmin, self.ymax),
            Complex64::new(self.xmax, self.ymax),
        ]
    }

    /// Squared distance from the box to a point (zero if the point is inside)
    fn distance_sq(&self, z: Complex64) -> f64 {
        let dx = (self.xmin - z.re).max(z.re - self.xmax).max(0.0);
        let dy = (self.ymin - z.im).max(z.im - self.ymax).max(0.0);
        dx * dx + dy * dy
    }

    /// Classify this box against the inside of a generalized circle
    ///
    /// Half-planes and disk complements (`v00 ≤ 0`) are tested by corner
    /// signs and never report `Inside` for a finite box. Proper disks use
    /// the disk's bounding square for the `Inside` shortcut and the
    /// nearest-point distance for the `Outside` test.
    pub fn classify(&self, circle: &GenCircle) -> Intersection {
        if circle.v00 <= 0.0 {
            let all_outside = self.corners().iter().all(|&z| circle.form_at(z) >= 0.0);
            if all_outside {
                Intersection::Outside
            } else {
                Intersection::Intersects
            }
        } else {
            let center = circle.center();
            let r = circle.radius();
            let square = Self::centered(center, 2.0 * r, 2.0 * r);
            if self.xmin >= square.xmin
                && self.xmax <= square.xmax
                && self.ymin >= square.ymin
                && self.ymax <= square.ymax
            {
                Intersection::Inside
            } else if self.distance_sq(center) < r * r {
                Intersection::Intersects
            } else {
                Intersection::Outside
            }
        }
    }
}
