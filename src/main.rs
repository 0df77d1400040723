//! Command-line interface for dominant_blue
//!
//! Prints `FOUND_COLOR:#rrggbb` or `NO_BLUE_FOUND` on stdout. Load failures go
//! to stderr with exit status 1.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use dominant_blue::{analyze_image_with_config, DominantBlue, SamplingConfig};

#[derive(Parser)]
#[command(name = "dominant_blue")]
#[command(version, about = "Extract the dominant blue color from an image", long_about = None)]
struct Cli {
    /// Image file
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    /// Sampling configuration file (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Sample every pixel instead of resizing first
    #[arg(long, conflicts_with_all = ["width", "height"])]
    no_resize: bool,

    /// Resize width before sampling
    #[arg(long, value_name = "N")]
    width: Option<u32>,

    /// Resize height before sampling
    #[arg(long, value_name = "N")]
    height: Option<u32>,

    /// Scan pixels on multiple threads
    #[arg(long)]
    parallel: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn sampling_config(&self) -> dominant_blue::Result<SamplingConfig> {
        let mut config = match &self.config {
            Some(path) => SamplingConfig::from_json_file(path)?,
            None => SamplingConfig::default(),
        };

        if self.no_resize {
            config.resize = None;
        } else if self.width.is_some() || self.height.is_some() {
            let mut resize = config.resize.unwrap_or_default();
            if let Some(width) = self.width {
                resize.width = width;
            }
            if let Some(height) = self.height {
                resize.height = height;
            }
            config.resize = Some(resize);
        }

        if self.parallel {
            config.parallel = true;
        }

        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = cli
        .sampling_config()
        .and_then(|config| analyze_image_with_config(&cli.image, &config));

    let found = match result {
        Ok(found) => found,
        Err(error) => {
            eprintln!("Error: {}", error);
            log::debug!("{}", error.user_message());
            process::exit(1);
        }
    };

    if let Some(blue) = &found {
        log::debug!(
            "{} of {} pixels classified blue ({:.1}%)",
            blue.matched_pixels,
            blue.scanned_pixels,
            blue.coverage() * 100.0
        );
    }

    match render_result(found.as_ref(), cli.json) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }
}

/// Text printed on stdout for a successful run
///
/// `FOUND_COLOR:#rrggbb` or `NO_BLUE_FOUND`; with `json`, the pretty-printed
/// result or `null`.
fn render_result(found: Option<&DominantBlue>, json: bool) -> serde_json::Result<String> {
    if json {
        return serde_json::to_string_pretty(&found);
    }

    Ok(match found {
        Some(blue) => format!("FOUND_COLOR:{}", blue.hex()),
        None => "NO_BLUE_FOUND".to_string(),
    })
}
