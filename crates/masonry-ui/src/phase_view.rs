//! Pure mapping from a content phase to what gets drawn

use masonry_foundation::ContentPhase;
use masonry_ui_graphics::{Color, CornerRadii, Rect, Size};

/// Corner radius of loaded images.
pub const IMAGE_CORNER_RADIUS: f32 = 10.0;

/// Tint of the placeholder shown while content is pending.
pub const PLACEHOLDER_TINT: Color = Color::GRAY.with_alpha(0.2);

/// Fill of the indicator shown when content failed to load.
pub const FAILURE_FILL: Color = Color::RED;

/// Loaded content that knows its intrinsic size.
pub trait ContentSize {
    fn content_size(&self) -> Size;
}

impl ContentSize for Size {
    fn content_size(&self) -> Size {
        *self
    }
}

impl<C: ContentSize + ?Sized> ContentSize for std::sync::Arc<C> {
    fn content_size(&self) -> Size {
        (**self).content_size()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    XMarkOctagon,
}

/// What an item cell draws for its current phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Drawable {
    /// Translucent box with a progress indicator, sized to the frame.
    Placeholder {
        frame: Rect,
        tint: Color,
        progress: bool,
    },
    /// Content scaled to fill `clip` and centered on it. `draw` may extend
    /// past `clip` on one axis; everything outside `clip` is cut off.
    Image {
        clip: Rect,
        draw: Rect,
        corner_radii: CornerRadii,
    },
    FailureIndicator {
        frame: Rect,
        fill: Color,
        glyph: Glyph,
    },
}

impl Drawable {
    /// Area the drawable occupies in its cell.
    pub fn frame(&self) -> Rect {
        match self {
            Drawable::Placeholder { frame, .. } | Drawable::FailureIndicator { frame, .. } => {
                *frame
            }
            Drawable::Image { clip, .. } => *clip,
        }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        match *self {
            Drawable::Placeholder {
                frame,
                tint,
                progress,
            } => Drawable::Placeholder {
                frame: frame.translate(dx, dy),
                tint,
                progress,
            },
            Drawable::Image {
                clip,
                draw,
                corner_radii,
            } => Drawable::Image {
                clip: clip.translate(dx, dy),
                draw: draw.translate(dx, dy),
                corner_radii,
            },
            Drawable::FailureIndicator { frame, fill, glyph } => Drawable::FailureIndicator {
                frame: frame.translate(dx, dy),
                fill,
                glyph,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Drawable::Placeholder { .. } => "placeholder",
            Drawable::Image { .. } => "image",
            Drawable::FailureIndicator { .. } => "failure",
        }
    }
}

/// Chooses the drawable for `phase` inside `frame`.
pub fn render_phase<C: ContentSize>(phase: &ContentPhase<C>, frame: Rect) -> Drawable {
    match phase {
        ContentPhase::Pending => Drawable::Placeholder {
            frame,
            tint: PLACEHOLDER_TINT,
            progress: true,
        },
        ContentPhase::Loaded(content) => {
            let fill = content.content_size().scale_to_fill(frame.size());
            Drawable::Image {
                clip: frame,
                draw: frame.centered(fill),
                corner_radii: CornerRadii::uniform(IMAGE_CORNER_RADIUS),
            }
        }
        ContentPhase::Failed(_) => Drawable::FailureIndicator {
            frame,
            fill: FAILURE_FILL,
            glyph: Glyph::XMarkOctagon,
        },
    }
}

#[cfg(test)]
#[path = "tests/phase_view_tests.rs"]
mod tests;
