use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monodither::models::AppConfig;
use monodither::services::DitherPipeline;
use mono_dither::DegeneratePolicy;

#[derive(Parser)]
#[command(name = "monodither")]
#[command(about = "Dither a grayscale image to black and white with error diffusion")]
#[command(version)]
struct Cli {
    /// Input image (PNG, JPEG, BMP or GIF); color images are reduced to luma
    image: PathBuf,

    /// Dithering method: "simple2D", "floyd-steinberg" or "jarvis-judice-ninke"
    #[arg(short, long)]
    method: Option<String>,

    /// Output JSON path [default: dithered.json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the result as a PNG
    #[arg(long)]
    save_image: bool,

    /// PNG output path [default: dithered2.png]
    #[arg(long)]
    image_output: Option<PathBuf>,

    /// Fail on constant images instead of rendering them black
    #[arg(long)]
    reject_degenerate: bool,

    /// YAML config file (falls back to $CONFIG_FILE)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Apply command line overrides on top of the file configuration.
    fn merge_into(self, mut config: AppConfig) -> (PathBuf, AppConfig) {
        if let Some(method) = self.method {
            config.method = method;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(image_output) = self.image_output {
            config.image_output = image_output;
        }
        config.save_image |= self.save_image;
        if self.reject_degenerate {
            config.degenerate = DegeneratePolicy::Reject;
        }
        (self.image, config)
    }
}

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "monodither=warn,mono_dither=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = AppConfig::locate(cli.config.take());
    let config = AppConfig::load(config_path.as_deref())?;
    let (image_path, config) = cli.merge_into(config);

    let pipeline = DitherPipeline::from_config(&config)?;
    let result = pipeline.run(&image_path)?;

    println!(
        "Dithered {} ({}x{}, {}) -> {}",
        image_path.display(),
        result.image.rows(),
        result.image.cols(),
        result.image.method(),
        result.json_path.display()
    );
    if let Some(png) = &result.png_path {
        println!("Saved image {}", png.display());
    }

    Ok(())
}
