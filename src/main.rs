use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use whiteout::{
    filter::{Filter, Whiteout, DEFAULT_THRESHOLD},
    image_io,
};

/// Turns the near-white background of an image transparent and saves it as PNG
#[derive(Parser)]
struct Args {
    /// The image to read, in any format the decoder understands
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Where to write the resulting PNG
    #[arg(value_name = "DEST")]
    dest: PathBuf,

    /// Red, green and blue must all be above this value for a pixel to be cleared
    #[arg(short = 't', long, value_name = "N", default_value_t = DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Spreads the per-pixel work over all cores
    #[arg(long)]
    parallel: bool,
}

fn process(source: &Path, dest: &Path, whiteout: &mut Whiteout) -> Result<()> {
    let mut img = image_io::load_rgba(source)?;
    let (width, height) = img.dimensions();
    info!("Loaded {width}x{height} image from {}", source.display());

    whiteout.transform_buffer(&mut img);
    debug!(
        "Cleared {} of {} pixels above threshold {}",
        whiteout.converted(),
        width as u64 * height as u64,
        whiteout.threshold()
    );

    image_io::save_png(&img, dest)?;
    info!("Wrote {}", dest.display());

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut whiteout = Whiteout::new(args.threshold).with_parallel(args.parallel);

    process(&args.source, &args.dest, &mut whiteout)?;
    println!("Saved to {}", args.dest.display());

    Ok(())
}
