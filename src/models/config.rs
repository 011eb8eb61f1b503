use crate::assets::AssetLoader;
use alpha_dither::{DitherAlgorithm, GifDitherer};
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Speech-bubble mask PNG overriding the embedded one
    #[serde(default)]
    pub mask_file: Option<PathBuf>,

    #[serde(default)]
    pub gif: GifOptions,

    #[serde(default)]
    pub png: PngOptions,
}

/// Palette reduction settings for GIF output
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GifOptions {
    /// Error diffusion kernel
    #[serde(default, deserialize_with = "deserialize_algorithm")]
    pub dither: DitherAlgorithm,

    /// Palette size including the transparent slot (2..=256)
    #[serde(default = "default_max_colors")]
    pub max_colors: u16,

    /// Overshoot allowed for accumulated error, in 8-bit units
    #[serde(default = "default_error_clamp")]
    pub error_clamp: f32,
}

fn default_max_colors() -> u16 {
    256
}

fn default_error_clamp() -> f32 {
    64.0
}

fn deserialize_algorithm<'de, D>(deserializer: D) -> Result<DitherAlgorithm, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl Default for GifOptions {
    fn default() -> Self {
        Self {
            dither: DitherAlgorithm::default(),
            max_colors: default_max_colors(),
            error_clamp: default_error_clamp(),
        }
    }
}

impl GifOptions {
    /// Builder configured from these options. Out-of-range palette sizes
    /// are clamped by the builder.
    pub fn ditherer(&self) -> GifDitherer {
        GifDitherer::new()
            .algorithm(self.dither)
            .max_colors(self.max_colors as usize)
            .error_clamp(self.error_clamp)
    }
}

/// PNG output settings
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct PngOptions {
    /// Re-compress with oxipng
    #[serde(default)]
    pub optimize: bool,
}

impl AppConfig {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        dither = %config.gif.dither,
                        max_colors = config.gif.max_colors,
                        mask_file = ?config.mask_file,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
