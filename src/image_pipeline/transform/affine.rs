//! 2x3 affine matrix
//!
//! ```text
//! [sx kx tx]     [x]     [x']
//! [ky sy ty]  ×  [y]  =  [y']
//!                [1]
//! ```
//!
//! Operations are post-concatenated: `m.post_scale(..)` scales the output of
//! `m`, so a chain of calls reads in the order the steps are applied.

/// Immutable 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform2D {
    m: [f32; 6],
}

impl Default for AffineTransform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform2D {
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    };

    /// Coefficients as `[sx, kx, tx, ky, sy, ty]`.
    pub fn as_row_major(&self) -> [f32; 6] {
        self.m
    }

    pub fn scale_x(&self) -> f32 {
        self.m[0]
    }

    pub fn skew_x(&self) -> f32 {
        self.m[1]
    }

    pub fn translate_x(&self) -> f32 {
        self.m[2]
    }

    pub fn skew_y(&self) -> f32 {
        self.m[3]
    }

    pub fn scale_y(&self) -> f32 {
        self.m[4]
    }

    pub fn translate_y(&self) -> f32 {
        self.m[5]
    }

    pub fn is_identity(&self) -> bool {
        self.m == Self::IDENTITY.m
    }

    /// Returns `other ∘ self`.
    pub fn then(&self, other: &Self) -> Self {
        let [a, b, c, d, e, f] = self.m;
        let [p, q, r, s, t, u] = other.m;
        Self {
            m: [
                p * a + q * d,
                p * b + q * e,
                p * c + q * f + r,
                s * a + t * d,
                s * b + t * e,
                s * c + t * f + u,
            ],
        }
    }

    pub fn post_translate(&self, dx: f32, dy: f32) -> Self {
        self.then(&Self {
            m: [1.0, 0.0, dx, 0.0, 1.0, dy],
        })
    }

    pub fn post_scale(&self, sx: f32, sy: f32) -> Self {
        self.then(&Self {
            m: [sx, 0.0, 0.0, 0.0, sy, 0.0],
        })
    }

    /// Rotates about the origin. Positive angles turn +x towards +y, which is
    /// clockwise on screen where y points down.
    pub fn post_rotate(&self, degrees: i32) -> Self {
        let (sin, cos) = match degrees.rem_euclid(360) {
            0 => (0.0, 1.0),
            90 => (1.0, 0.0),
            180 => (0.0, -1.0),
            270 => (-1.0, 0.0),
            other => (other as f32).to_radians().sin_cos(),
        };
        self.then(&Self {
            m: [cos, -sin, 0.0, sin, cos, 0.0],
        })
    }

    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        let [a, b, c, d, e, f] = self.m;
        (a * x + b * y + c, d * x + e * y + f)
    }

    /// Inverse transform, or `None` when the matrix is singular.
    pub fn invert(&self) -> Option<Self> {
        let [a, b, c, d, e, f] = self.m;
        let det = a * e - b * d;
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self {
            m: [
                e * inv,
                -b * inv,
                (b * f - e * c) * inv,
                -d * inv,
                a * inv,
                (d * c - a * f) * inv,
            ],
        })
    }
}
