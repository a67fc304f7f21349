use super::Vec2;

/// 2x2 matrix stored as two column vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat22 {
    pub col1: Vec2,
    pub col2: Vec2,
}

impl Mat22 {
    pub const fn new(col1: Vec2, col2: Vec2) -> Self {
        Self { col1, col2 }
    }

    pub const fn identity() -> Self {
        Self::new(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0))
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(Vec2::new(c, s), Vec2::new(-s, c))
    }

    pub fn transpose(&self) -> Self {
        Self::new(
            Vec2::new(self.col1.x, self.col2.x),
            Vec2::new(self.col1.y, self.col2.y),
        )
    }

    pub fn determinant(&self) -> f32 {
        self.col1.x * self.col2.y - self.col2.x * self.col1.y
    }

    /// Inverse of a non-singular matrix. The caller guarantees `det != 0`.
    pub fn invert(&self) -> Self {
        let a = self.col1.x;
        let b = self.col2.x;
        let c = self.col1.y;
        let d = self.col2.y;
        let det = a * d - b * c;
        debug_assert!(det != 0.0, "invert called on a singular matrix");
        let det = 1.0 / det;
        Self::new(Vec2::new(det * d, -det * c), Vec2::new(-det * b, det * a))
    }

    /// Element-wise absolute value
    pub fn abs(&self) -> Self {
        Self::new(self.col1.abs(), self.col2.abs())
    }
}

impl Default for Mat22 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul<Vec2> for Mat22 {
    type Output = Vec2;
    fn mul(self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.col1.x * v.x + self.col2.x * v.y,
            self.col1.y * v.x + self.col2.y * v.y,
        )
    }
}

impl std::ops::Mul for Mat22 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self * rhs.col1, self * rhs.col2)
    }
}

impl std::ops::Add for Mat22 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.col1 + rhs.col1, self.col2 + rhs.col2)
    }
}
