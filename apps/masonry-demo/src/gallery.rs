use masonry_ui::MasonryItem;
use std::ops::RangeInclusive;

/// Column counts offered by the picker.
pub const COLUMN_CHOICES: RangeInclusive<usize> = 1..=4;

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub id: u32,
    pub url: String,
    pub height: f32,
}

impl GalleryImage {
    pub fn new(id: u32, width: u32, height: u32, display_height: f32) -> Self {
        Self {
            id,
            url: format!("https://picsum.photos/id/{id}/{width}/{height}"),
            height: display_height,
        }
    }
}

impl MasonryItem for GalleryImage {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn declared_height(&self) -> f32 {
        self.height
    }
}

pub fn sample_gallery() -> Vec<GalleryImage> {
    vec![
        GalleryImage::new(10, 300, 300, 200.0),
        GalleryImage::new(20, 300, 200, 150.0),
        GalleryImage::new(30, 300, 250, 300.0),
        GalleryImage::new(40, 300, 150, 180.0),
        GalleryImage::new(50, 300, 350, 220.0),
        GalleryImage::new(60, 300, 300, 260.0),
    ]
}
