use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quick_image::assets::{AssetCategory, AssetLoader};
use quick_image::models::{AppConfig, SourceFormat};
use quick_image::ImagePipeline;

#[derive(Parser)]
#[command(name = "quick-image")]
#[command(about = "Thumbnails, speech-bubble cutouts and transparent GIFs from JPEG/PNG images")]
struct Cli {
    /// Config file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a 480x270 PNG thumbnail
    Thumb {
        /// Input JPEG or PNG
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Declared MIME type (default: guessed from the input extension)
        #[arg(long)]
        mime: Option<String>,
    },
    /// Cut the speech-bubble mask out of the top of an image
    Bubble {
        /// Input JPEG or PNG
        input: PathBuf,

        /// Output file; written as GIF when it ends in .gif, PNG otherwise
        #[arg(short, long)]
        output: PathBuf,

        /// Declared MIME type (default: guessed from the input extension)
        #[arg(long)]
        mime: Option<String>,
    },
    /// Cut the bubble and write a transparent GIF
    Gif {
        /// Input JPEG or PNG
        input: PathBuf,

        /// Output GIF file path
        #[arg(short, long)]
        output: PathBuf,

        /// Declared MIME type (default: guessed from the input extension)
        #[arg(long)]
        mime: Option<String>,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Target directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Extract only the bubble mask
        #[arg(long)]
        mask: bool,

        /// Extract only config.yaml
        #[arg(long = "config-file")]
        config_file: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_file = cli
        .config
        .clone()
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let mask_file = std::env::var("MASK_FILE").ok().map(PathBuf::from);

    match cli.command {
        Some(Commands::Thumb {
            input,
            output,
            mime,
        }) => {
            let pipeline = build_pipeline(mask_file, config_file)?;
            let (mime, bytes) = read_input(&input, mime)?;
            let encoded = pipeline.thumbnail_of(&mime, &bytes)?;
            write_output(&output, &encoded.bytes, encoded.content_type)
        }
        Some(Commands::Bubble {
            input,
            output,
            mime,
        }) => {
            let pipeline = build_pipeline(mask_file, config_file)?;
            let (mime, bytes) = read_input(&input, mime)?;
            let raster = pipeline.bubble_of(&mime, &bytes)?;
            let encoded = if has_extension(&output, "gif") {
                pipeline.gif_of(&raster)?
            } else {
                pipeline.png_of(&raster)?
            };
            write_output(&output, &encoded.bytes, encoded.content_type)
        }
        Some(Commands::Gif {
            input,
            output,
            mime,
        }) => {
            let pipeline = build_pipeline(mask_file, config_file)?;
            let (mime, bytes) = read_input(&input, mime)?;
            let raster = pipeline.bubble_of(&mime, &bytes)?;
            let encoded = pipeline.gif_of(&raster)?;
            write_output(&output, &encoded.bytes, encoded.content_type)
        }
        Some(Commands::Init {
            dir,
            mask,
            config_file,
            force,
            list,
        }) => run_init_command(&dir, mask, config_file, force, list),
        None => {
            run_status_command(mask_file, config_file);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "quick_image=debug"
    } else {
        "quick_image=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Load config and the bubble mask. A mask that cannot be loaded is fatal.
fn build_pipeline(
    mask_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> anyhow::Result<ImagePipeline> {
    let loader = AssetLoader::new(mask_file, config_file);
    let config = AppConfig::load_from_assets(&loader);
    let loader = loader.with_default_mask_file(config.mask_file.clone());

    ImagePipeline::from_config(&config, &loader)
        .map_err(|e| anyhow::anyhow!("Failed to load bubble mask from {}: {e}", loader.mask_source()))
}

fn read_input(input: &Path, mime: Option<String>) -> anyhow::Result<(String, Vec<u8>)> {
    let mime = match mime {
        Some(mime) => mime,
        None => SourceFormat::from_path(input)?.mime().to_string(),
    };
    let bytes = std::fs::read(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;
    Ok((mime, bytes))
}

fn write_output(output: &Path, bytes: &[u8], content_type: &str) -> anyhow::Result<()> {
    std::fs::write(output, bytes)?;
    println!(
        "Wrote {} ({content_type}, {} bytes)",
        output.display(),
        bytes.len()
    );
    Ok(())
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Extract embedded assets to filesystem
fn run_init_command(
    dir: &Path,
    mask: bool,
    config: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Mask:");
        for f in AssetLoader::list_embedded(AssetCategory::Mask) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // No selection means everything
    let mut categories = Vec::new();
    if mask || !config {
        categories.push(AssetCategory::Mask);
    }
    if config || !mask {
        categories.push(AssetCategory::Config);
    }

    let report = AssetLoader::init(dir, &categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(mask_file: Option<PathBuf>, config_file: Option<PathBuf>) {
    use quick_image::Mask;

    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("quick-image v{VERSION}");
    println!("Thumbnails, speech-bubble cutouts and transparent GIFs\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        std::env::var("CONFIG_FILE").as_deref().unwrap_or("(not set)")
    );
    println!(
        "  MASK_FILE   = {}",
        std::env::var("MASK_FILE").as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::new(mask_file, config_file);
    let config = AppConfig::load_from_assets(&loader);
    let loader = loader.with_default_mask_file(config.mask_file.clone());

    println!("\nAsset Sources:");
    println!("  Config: {}", loader.config_source());
    match Mask::load(&loader) {
        Ok(mask) => println!(
            "  Mask:   {} ({}x{})",
            loader.mask_source(),
            mask.width(),
            mask.height()
        ),
        Err(e) => println!("  Mask:   {} (unusable: {e})", loader.mask_source()),
    }

    println!("\nGIF Output:");
    println!("  dither      = {}", config.gif.dither);
    println!("  max_colors  = {}", config.gif.max_colors);
    println!("  error_clamp = {}", config.gif.error_clamp);

    println!("\nCommands:");
    println!("  quick-image thumb    Render a 480x270 PNG thumbnail");
    println!("  quick-image bubble   Cut the speech bubble out of an image");
    println!("  quick-image gif      Cut the bubble and write a transparent GIF");
    println!("  quick-image init     Extract embedded assets");
    println!("\nRun 'quick-image --help' for more details.");
}
