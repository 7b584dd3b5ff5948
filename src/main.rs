//! Icon Gallery CLI
//!
//! Usage:
//!   icon-gallery --in <DIR> [OPTIONS]
//!
//! Options:
//!   --in <DIR>               Input icon theme directory
//!   --out <FILE>             Output HTML file (stdout if not provided)
//!   -s, --stylesheet <FILE>  Stylesheet file for page colors (TOML format)
//!   -d, --debug              Print each resolved icon to stderr
//!   -h, --help               Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use icon_gallery::{generate_with_config, GalleryConfig, GalleryError, Stylesheet};

#[derive(Parser)]
#[command(name = "icon-gallery")]
#[command(about = "Generate an HTML view of an SVG icon theme")]
struct Cli {
    /// Input icon theme directory
    #[arg(long = "in", value_name = "DIR")]
    input: PathBuf,

    /// Output HTML file (writes to stdout if not provided)
    #[arg(long = "out", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Stylesheet file for page colors (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Debug mode: print each resolved icon to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let config = GalleryConfig::new()
        .with_stylesheet(stylesheet)
        .with_debug(cli.debug);

    let html = match generate_with_config(&cli.input, config) {
        Ok(html) => html,
        Err(e @ GalleryError::NotADirectory(_)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &html) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", html),
    }
}
