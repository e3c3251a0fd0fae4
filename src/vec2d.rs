/// An integer 2D point/vector in logical canvas coordinates.
///
/// Operations return new values; a `Vec2d` is never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vec2d {
    pub x: i32,
    pub y: i32,
}

impl Vec2d {
    pub fn new(x: i32, y: i32) -> Self {
        Vec2d { x, y }
    }

    /// Returns a new vector with both components multiplied by `k`.
    #[allow(dead_code)] // Reserved for widgets that lay out in unscaled units
    pub fn scale(self, k: i32) -> Self {
        Vec2d {
            x: self.x * k,
            y: self.y * k,
        }
    }
}
