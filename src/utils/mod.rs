pub mod environment;
pub mod files;
pub mod text;

pub use environment::max_export_bytes;
pub use files::{load_export, validate_file_size};
pub use text::truncate_with_ellipsis;
