// src/models.rs
mod convert_stats;
mod front_matter;
mod image_ref;
mod note;

pub use convert_stats::ConvertStats;
pub use front_matter::FrontMatter;
pub use image_ref::ImageRef;
pub use note::Note;
