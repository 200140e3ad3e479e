use super::vec2::Vec2;
use std::ops::Mul;

/// Row-major 2×2 matrix. Only what body-space conversions need is provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub rows: [[f64; 2]; 2],
}

impl Mat2 {
    pub const IDENTITY: Mat2 = Mat2 {
        rows: [[1.0, 0.0], [0.0, 1.0]],
    };

    pub const fn from_rows(rows: [[f64; 2]; 2]) -> Self {
        Self { rows }
    }

    /// Counter-clockwise rotation by `angle` radians:
    ///
    /// ```text
    /// | cos -sin |
    /// | sin  cos |
    /// ```
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([[cos, -sin], [sin, cos]])
    }

    pub fn transpose(self) -> Self {
        let [[a, b], [c, d]] = self.rows;
        Self::from_rows([[a, c], [b, d]])
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, v: Vec2) -> Vec2 {
        let [[a, b], [c, d]] = self.rows;
        Vec2::new(a * v.x + b * v.y, c * v.x + d * v.y)
    }
}
