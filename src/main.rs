use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;

use bmpcross::{binarize, bmp, raster, render};

#[derive(Parser)]
#[command(
    version,
    about = "Convert a BMP to two-tone, overlay a diagonal cross, and preview it as ASCII art"
)]
struct Cli {
    #[arg(help = "Input BMP file. Prompted for when omitted.")]
    input: Option<PathBuf>,

    #[arg(help = "Output BMP file. Prompted for when omitted.")]
    output: Option<PathBuf>,

    #[arg(long, help = "Skip the diagonal cross overlay.")]
    no_cross: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = match cli.input {
        Some(path) => path,
        None => prompt("Enter input BMP file name:")?,
    };
    let mut img = bmp::open(&input)
        .with_context(|| format!("failed to open {}", input.display()))?;

    if !binarize::is_binary(&img) {
        eprintln!("image has more than two colors, converting to black and white...");
        binarize::binarize(&mut img)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::render(&img, &mut out).context("writing ASCII output")?;

    if !cli.no_cross {
        eprintln!("drawing the cross...");
        raster::draw_cross(&mut img);
        render::render(&img, &mut out).context("writing ASCII output")?;
    }

    let output = match cli.output {
        Some(path) => path,
        None => prompt("Enter output BMP file name:")?,
    };
    bmp::save(&img, &output)
        .with_context(|| format!("failed to save {}", output.display()))?;
    eprintln!("saved {}", output.display());

    Ok(())
}

fn prompt(message: &str) -> Result<PathBuf> {
    eprint!("{message} ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading file name from stdin")?;
    let name = line.trim();
    ensure!(!name.is_empty(), "no file name given");
    Ok(PathBuf::from(name))
}
