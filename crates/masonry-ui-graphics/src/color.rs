//! Color representation

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    pub const GRAY: Color = Color(0.5, 0.5, 0.5, 1.0);
    pub const RED: Color = Color(1.0, 0.0, 0.0, 1.0);
}
