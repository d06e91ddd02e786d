use crate::args::DemoArgs;
use crate::gallery::{GalleryImage, COLUMN_CHOICES};
use masonry_ui::{
    sanitize_height, AsyncImage, ContentRegistry, Drawable, LayoutError, MasonryGrid,
    MasonrySpec, Rect, RenderedGrid, Size,
};

/// Runs one grid pass over `images`, rendering each cell from its content
/// phase, then forgets content of images that are no longer displayed.
pub fn render_scene(
    images: &[GalleryImage],
    args: &DemoArgs,
    registry: &mut ContentRegistry<u32, Size>,
) -> Result<RenderedGrid<Drawable>, LayoutError> {
    let spec = MasonrySpec::new()
        .columns(args.columns)
        .spacing(args.spacing)
        .strategy(args.strategy);
    let mut grid = MasonryGrid::new(images, spec, |image: &GalleryImage, width: f32| {
        let frame = Rect::from_size(Size::new(width, sanitize_height(image.height)));
        AsyncImage(&mut *registry, &image.id, &image.url, frame)
    });
    let keys = grid.displayed_keys();
    let rendered = grid.render(args.width)?;
    drop(grid);

    let dropped = registry.retain_keys(&keys);
    if dropped > 0 {
        log::debug!("forgot content of {dropped} images");
    }
    Ok(rendered)
}

/// The column picker, with the current choice bracketed.
pub fn picker_line(columns: usize) -> String {
    let choices: Vec<String> = COLUMN_CHOICES
        .map(|choice| {
            if choice == columns {
                format!("[{choice}]")
            } else {
                choice.to_string()
            }
        })
        .collect();
    format!("Columns: {}", choices.join(" "))
}

/// One line per cell, column by column, with positioned frames.
pub fn describe(images: &[GalleryImage], rendered: &RenderedGrid<Drawable>) -> Vec<String> {
    let layout = rendered.layout();
    let mut lines = vec![format!(
        "{} columns of {:.1} pt, content height {:.1} pt",
        layout.columns().len(),
        layout.column_width(),
        layout.content_height()
    )];
    for item in rendered.items() {
        let drawable = item.output.translate(item.frame.x, item.frame.y);
        let frame = drawable.frame();
        let id = images.get(item.index).map_or(0, |image| image.id);
        lines.push(format!(
            "  col {} #{id:<3} {:<11} at ({:>6.1}, {:>6.1}) size {:.1}x{:.1}",
            item.column,
            drawable.label(),
            frame.x,
            frame.y,
            frame.width,
            frame.height
        ));
    }
    lines
}

#[cfg(test)]
#[path = "tests/scene_tests.rs"]
mod tests;
