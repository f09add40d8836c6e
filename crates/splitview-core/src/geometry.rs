use crate::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect { x, y, width, height }
    }
}

impl Rect<f32> {
    pub const ZERO: Rect<f32> = Rect::new(0.0, 0.0, 0.0, 0.0);

    /// Rect at the origin covering `size`.
    pub fn from_size(size: Size<f32>) -> Self {
        Rect::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size<f32> {
        Size::new(self.width, self.height)
    }

    /// Whether `point` lies inside the rect, edges included.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}
