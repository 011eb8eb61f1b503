//! Asset loading with embedded fallbacks
//!
//! Two assets ship inside the binary: the speech-bubble mask and the default
//! config. Either can be replaced from the filesystem:
//!
//! - If no path is configured: use the embedded asset only (no filesystem access)
//! - If a path is configured: read it from the filesystem. A configured mask
//!   that cannot be read is an error; a configured config file that does not
//!   exist falls back to the embedded default.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AssetError;

/// File name of the embedded speech-bubble mask
pub const MASK_ASSET: &str = "bubble_mask.png";

/// File name of the embedded default config
pub const CONFIG_ASSET: &str = "config.yaml";

/// Embedded image assets
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.png"]
struct EmbeddedAssets;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Mask,
    Config,
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External mask PNG (from MASK_FILE env var or config)
    mask_file: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var or --config)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if they were explicitly configured.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(mask_file: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            mask_file,
            config_file,
        }
    }

    /// Replace the mask path unless one is already set.
    ///
    /// Used to apply the config's `mask_file` below the MASK_FILE env var.
    pub fn with_default_mask_file(mut self, mask_file: Option<PathBuf>) -> Self {
        if self.mask_file.is_none() {
            self.mask_file = mask_file;
        }
        self
    }

    pub fn mask_file(&self) -> Option<&Path> {
        self.mask_file.as_deref()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Read the mask PNG
    pub fn read_mask(&self) -> Result<Cow<'static, [u8]>, AssetError> {
        if let Some(ref path) = self.mask_file {
            tracing::trace!(path = %path.display(), "Loading mask from filesystem");
            return fs::read(path)
                .map(Cow::Owned)
                .map_err(|source| AssetError::Io {
                    path: path.clone(),
                    source,
                });
        }

        Self::embedded_mask()
    }

    /// The mask compiled into the binary
    pub fn embedded_mask() -> Result<Cow<'static, [u8]>, AssetError> {
        EmbeddedAssets::get(MASK_ASSET)
            .map(|f| {
                tracing::trace!("Loading mask from embedded assets");
                f.data
            })
            .ok_or_else(|| AssetError::NotFound(MASK_ASSET.to_string()))
    }

    /// Human-readable origin of the mask, for status output
    pub fn mask_source(&self) -> String {
        match self.mask_file {
            Some(ref path) => path.display().to_string(),
            None => format!("embedded ({MASK_ASSET})"),
        }
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        EmbeddedConfig::get(CONFIG_ASSET)
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Human-readable origin of the config, for status output
    pub fn config_source(&self) -> String {
        match self.config_file {
            Some(ref path) if path.exists() => path.display().to_string(),
            Some(_) => "embedded (file not found)".to_string(),
            None => "embedded".to_string(),
        }
    }

    /// Extract embedded assets into `dir` (init command)
    pub fn init(dir: &Path, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        fs::create_dir_all(dir)?;

        for category in categories {
            let (name, data) = match category {
                AssetCategory::Mask => (MASK_ASSET, EmbeddedAssets::get(MASK_ASSET)),
                AssetCategory::Config => (CONFIG_ASSET, EmbeddedConfig::get(CONFIG_ASSET)),
            };
            let path = dir.join(name);
            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(data) = data {
                fs::write(&path, &*data.data)?;
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Mask => EmbeddedAssets::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => vec![CONFIG_ASSET.to_string()],
        }
    }
}
