//! Test application wrapper around the image pipeline.

use quick_image::models::{GifOptions, PngOptions};
use quick_image::rendering::mask;
use quick_image::{Encoded, ImageError, ImagePipeline, Raster};

/// Pipeline on the embedded mask, as the binary builds it by default.
pub struct TestApp {
    pub pipeline: ImagePipeline,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            pipeline: ImagePipeline::shared().expect("embedded mask should load"),
        }
    }

    pub fn with_gif_options(gif: GifOptions) -> Self {
        let mask = mask::shared().expect("embedded mask should load");
        Self {
            pipeline: ImagePipeline::new(mask, gif, PngOptions::default()),
        }
    }

    pub fn thumbnail(&self, mime: &str, bytes: &[u8]) -> Result<Encoded, ImageError> {
        self.pipeline.thumbnail_of(mime, bytes)
    }

    pub fn bubble(&self, mime: &str, bytes: &[u8]) -> Result<Raster, ImageError> {
        self.pipeline.bubble_of(mime, bytes)
    }

    pub fn gif(&self, raster: &Raster) -> Result<Encoded, ImageError> {
        self.pipeline.gif_of(raster)
    }

    /// Bubble an upload and encode it as GIF.
    pub fn bubble_gif(&self, mime: &str, bytes: &[u8]) -> Result<(Raster, Encoded), ImageError> {
        let raster = self.bubble(mime, bytes)?;
        let gif = self.gif(&raster)?;
        Ok((raster, gif))
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
