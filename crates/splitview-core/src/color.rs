/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// ```
/// use splitview_core::Color;
///
/// let accent = Color::rgb(0.2, 0.4, 0.8);
/// assert_eq!(accent.a, 1.0);
/// ```
///
/// The struct is `#[repr(C)]` and implements `bytemuck::Pod` so renderers can
/// upload it as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);

    /// Create a color from RGB components with full opacity.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::GRAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pod_cast() {
        let colors = [Color::GRAY, Color::rgba(0.0, 0.0, 0.0, 0.0)];
        let floats: &[f32] = bytemuck::cast_slice(&colors);
        assert_eq!(floats, &[0.5, 0.5, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }
}
