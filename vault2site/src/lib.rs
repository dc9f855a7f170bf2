// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run};
pub use crate::core::convert::{convert_vault, load_note, process_note};
pub use crate::core::frontmatter::render_front_matter;
pub use crate::core::images::{find_image, rewrite_images};
pub use crate::core::links::rewrite_links;
pub use crate::core::slug::slugify;
pub use crate::core::title::extract_title;
pub use crate::models::{ConvertStats, FrontMatter, ImageRef, Note};
