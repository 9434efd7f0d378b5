use super::Vec2;

/// 2D affine transform (column-major 2x3: `[a, b, c, d, e, f]`)
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    pub data: [f32; 6],
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2 {
    pub const IDENTITY: Affine2 = Affine2 {
        data: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn translation(x: f32, y: f32) -> Self {
        Self {
            data: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    pub fn scale(s: f32) -> Self {
        Self {
            data: [s, 0.0, 0.0, s, 0.0, 0.0],
        }
    }

    /// Rotation by `angle` radians (positive turns +x toward +y)
    pub fn rotation(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            data: [c, s, -s, c, 0.0, 0.0],
        }
    }

    pub fn rotation_deg(degrees: f32) -> Self {
        Self::rotation(degrees.to_radians())
    }

    /// Matrix multiplication; `other` is applied first
    pub fn mul(&self, other: &Affine2) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.data;
        let [a2, b2, c2, d2, e2, f2] = other.data;
        Self {
            data: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * e2 + c1 * f2 + e1,
                b1 * e2 + d1 * f2 + f1,
            ],
        }
    }

    /// Rotate inside the current local frame (push-matrix style)
    pub fn local_rotate_deg(&self, degrees: f32) -> Self {
        self.mul(&Self::rotation_deg(degrees))
    }

    /// Translate inside the current local frame
    pub fn local_translate(&self, x: f32, y: f32) -> Self {
        self.mul(&Self::translation(x, y))
    }

    /// Uniformly scale the current local frame
    pub fn local_scale(&self, s: f32) -> Self {
        self.mul(&Self::scale(s))
    }

    /// Transform a point (applies translation)
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let [a, b, c, d, e, f] = self.data;
        Vec2::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    pub fn determinant(&self) -> f32 {
        let [a, b, c, d, _, _] = self.data;
        a * d - b * c
    }

    /// Uniform scale factor carried by the linear part
    pub fn uniform_scale(&self) -> f32 {
        self.determinant().abs().sqrt()
    }
}
