use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use far_nearer::generate::{DEFAULT_OUT_DIR, DEFAULT_PREFIX, STEPS};
use far_nearer::{GenerateError, Generator, Palette, Template};
use tracing_subscriber::EnvFilter;

// percent
const SHIFT_LIMIT: i64 = 100;

/// Generate far nearer wallpapers, one SVG per degree of hue rotation
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Which template to use
    #[arg(value_enum, short, long, default_value = "default")]
    command: Command,

    /// Template path, overrides the one picked by --command
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Folder the images are written to, created if missing
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// File name prefix, followed by the hue offset
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Degrees between two images
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=STEPS as i64))]
    step: u16,

    /// Added to the saturation of every color
    #[arg(long, default_value_t = 0, allow_hyphen_values = true, value_parser = clap::value_parser!(i32).range(-SHIFT_LIMIT..=SHIFT_LIMIT))]
    saturation: i32,

    /// Added to the lightness of every color
    #[arg(long, default_value_t = 0, allow_hyphen_values = true, value_parser = clap::value_parser!(i32).range(-SHIFT_LIMIT..=SHIFT_LIMIT))]
    lightness: i32,

    /// Also render every image to PNG
    #[arg(long)]
    png: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Command {
    /// Default image generation
    Default,
    /// Generate images without the rectangle
    NoRectangle,
}

impl Command {
    fn template(self) -> &'static str {
        match self {
            Command::Default => "far nearer_template.svg",
            Command::NoRectangle => "far nearer (no rectangle)_template.svg",
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("far_nearer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: Args) -> Result<(), GenerateError> {
    let template_path = args
        .template
        .unwrap_or_else(|| PathBuf::from(args.command.template()));
    let template = Template::load(template_path)?;

    let generator = Generator {
        palette: Palette::far_nearer().shifted(args.saturation, args.lightness),
        out_dir: args.out_dir,
        prefix: args.prefix,
        step: args.step as usize,
        progress: !args.quiet,
        png: args.png,
    };
    generator.run(&template)?;
    Ok(())
}
