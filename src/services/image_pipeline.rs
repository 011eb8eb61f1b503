use crate::assets::AssetLoader;
use crate::error::ImageError;
use crate::models::{AppConfig, Encoded, GifOptions, PngOptions, SourceFormat};
use crate::rendering::{self, mask, Mask, Raster};

/// The three entry points callers use: thumbnails, bubble cutouts and GIFs.
///
/// Every call takes the upload's bytes and declared MIME type (or a raster
/// produced by [`bubble_of`](Self::bubble_of)) and never touches the
/// filesystem. Pipelines are cheap to clone and safe to share.
#[derive(Debug, Clone)]
pub struct ImagePipeline {
    mask: &'static Mask,
    gif: GifOptions,
    png: PngOptions,
}

impl ImagePipeline {
    pub fn new(mask: &'static Mask, gif: GifOptions, png: PngOptions) -> Self {
        Self { mask, gif, png }
    }

    /// Pipeline on the process-wide mask with default options.
    pub fn shared() -> Result<Self, ImageError> {
        Ok(Self::new(
            mask::shared()?,
            GifOptions::default(),
            PngOptions::default(),
        ))
    }

    /// Load the configured mask, install it process-wide and build a
    /// pipeline with the configured options.
    ///
    /// A mask file named by the loader is always read, even when a mask is
    /// already installed. Fails if that file is missing or corrupt, or if it
    /// differs from the installed mask; callers treat that as fatal.
    pub fn from_config(config: &AppConfig, loader: &AssetLoader) -> Result<Self, ImageError> {
        let mask = match loader.mask_file() {
            Some(path) => match mask::install(Mask::load(loader)?) {
                Ok(mask) => mask,
                Err(loaded) => {
                    let installed = mask::shared()?;
                    if *installed != loaded {
                        return Err(ImageError::MaskConflict {
                            path: path.to_path_buf(),
                        });
                    }
                    installed
                }
            },
            None => mask::shared()?,
        };
        Ok(Self::new(mask, config.gif.clone(), config.png.clone()))
    }

    pub fn mask(&self) -> &'static Mask {
        self.mask
    }

    pub fn gif_options(&self) -> &GifOptions {
        &self.gif
    }

    /// 480x270 PNG thumbnail of a JPEG or PNG upload.
    pub fn thumbnail_of(&self, mime: &str, bytes: &[u8]) -> Result<Encoded, ImageError> {
        let format = SourceFormat::from_mime(mime)?;
        let raster = rendering::normalize::decode(bytes, format)?;
        let mut png = rendering::thumbnail(&raster)?;
        if self.png.optimize {
            png = rendering::optimize_png(png);
        }
        tracing::info!(
            %format,
            width = raster.width(),
            height = raster.height(),
            bytes = png.len(),
            "Created thumbnail"
        );
        Ok(Encoded::png(png))
    }

    /// Decode an upload and cut the bubble mask out of its top.
    pub fn bubble_of(&self, mime: &str, bytes: &[u8]) -> Result<Raster, ImageError> {
        let format = SourceFormat::from_mime(mime)?;
        let raster = rendering::normalize::decode(bytes, format)?;
        let out = rendering::composite(&raster, self.mask)?;
        tracing::info!(
            %format,
            width = out.width(),
            height = out.height(),
            "Created bubble"
        );
        Ok(out)
    }

    /// Single-frame GIF of a raster, transparent where the raster is.
    pub fn gif_of(&self, raster: &Raster) -> Result<Encoded, ImageError> {
        let gif = rendering::encode_gif(raster, &self.gif)?;
        tracing::info!(
            width = raster.width(),
            height = raster.height(),
            bytes = gif.len(),
            "Created GIF"
        );
        Ok(Encoded::gif(gif))
    }

    /// PNG encoding of a raster (used for bubble output).
    pub fn png_of(&self, raster: &Raster) -> Result<Encoded, ImageError> {
        let mut png = rendering::encode_png(raster)?;
        if self.png.optimize {
            png = rendering::optimize_png(png);
        }
        Ok(Encoded::png(png))
    }
}
