//! quick-image - upload post-processing
//!
//! Turns JPEG/PNG uploads into fixed-size PNG thumbnails, speech-bubble
//! cutouts and single-frame transparent GIFs. The library never touches the
//! network; apart from loading the bubble mask once at startup it never
//! touches the filesystem either.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use error::{AssetError, ImageError};
pub use models::{AppConfig, Encoded, SourceFormat};
pub use rendering::{Mask, Raster};
pub use services::ImagePipeline;
