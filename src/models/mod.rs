pub mod config;
pub mod format;

pub use config::{AppConfig, GifOptions, PngOptions};
pub use format::{Encoded, SourceFormat};
