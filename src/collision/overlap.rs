use crate::math::Vector3;

/// Per-axis penetration depth between two axis-aligned cubes of a shared
/// half extent.
///
/// A positive component means the cubes intersect along that axis; the pair
/// collides only when all three components are positive at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Overlap {
    /// Computes the overlap of two cubes centered at `p1` and `p2`.
    ///
    /// Each axis is independent: `2 * half_width - |p1 - p2|` on that axis.
    pub fn between(p1: Vector3, p2: Vector3, half_width: f32) -> Self {
        let full_width = half_width * 2.0;
        let distance = (p1 - p2).abs();
        Self {
            x: full_width - distance.x,
            y: full_width - distance.y,
            z: full_width - distance.z,
        }
    }

    /// Returns true when the cubes penetrate on all three axes
    #[inline]
    pub fn is_penetrating(&self) -> bool {
        self.x > 0.0 && self.y > 0.0 && self.z > 0.0
    }
}
