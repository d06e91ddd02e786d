//! Headless masonry gallery: a fixed set of sample images, a column picker
//! driven by command-line arguments and a simulated content source.

pub mod args;
pub mod gallery;
pub mod loader;
pub mod scene;

pub use args::DemoArgs;
pub use gallery::{sample_gallery, GalleryImage, COLUMN_CHOICES};
pub use loader::SimulatedLoader;
pub use scene::{describe, picker_line, render_scene};
