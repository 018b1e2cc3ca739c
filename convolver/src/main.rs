use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use fast_image_convolve::{ConvolveOptions, Convolver, Image, KernelType};
use image::{ImageFormat, ImageReader};
use log::debug;

mod structs;

#[derive(Parser)]
#[clap(author = "Kirill K.")]
#[clap(version, about, long_about = None)]
struct Cli {
    /// Path to source image file
    #[clap(value_parser)]
    source_path: PathBuf,

    /// Name of kernel: edge, sharpen, blur, gauss, emboss or identity.
    /// Any other name selects identity.
    #[clap(value_parser)]
    kernel: String,

    /// Path to result image file. The result is always saved as PNG.
    #[clap(short, long, value_parser, default_value = "output.png")]
    output: PathBuf,

    /// Count of workers (row ranges), or "auto" to use one worker per CPU
    #[clap(short, long, value_parser, default_value = "4")]
    workers: structs::Workers,

    /// The way how workers are executed
    #[clap(short, long, value_enum, default_value_t = structs::Threading::Scoped)]
    threading: structs::Threading,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    convolve(&cli)
}

fn convolve(cli: &Cli) -> Result<()> {
    let kernel_type = KernelType::from_name(&cli.kernel);
    debug!("Use {:?} kernel for name {:?}", kernel_type, cli.kernel);

    let src_image = open_source_image(&cli.source_path)?;
    let mut dst_image = Image::try_new(
        src_image.width(),
        src_image.height(),
        src_image.pixel_type(),
    )
    .with_context(|| "Failed to allocate the destination image")?;

    let options = ConvolveOptions::new()
        .workers(cli.workers.0)
        .threading(cli.threading.into());
    debug!(
        "Convolve the source image {}x{} with {:?}",
        src_image.width(),
        src_image.height(),
        options
    );

    let start = Instant::now();
    Convolver::new()
        .convolve(&src_image, &mut dst_image, kernel_type.kernel(), &options)
        .with_context(|| "Failed to convolve image")?;
    let elapsed = start.elapsed();
    println!("Processing time: {:.4} seconds", elapsed.as_secs_f64());

    drop(src_image);
    save_result(&cli.output, &dst_image)
}

fn open_source_image(source_path: &Path) -> Result<Image<'static>> {
    debug!("Opening the source image {:?}", source_path);
    let image = ImageReader::open(source_path)
        .and_then(|reader| reader.with_guessed_format())
        .with_context(|| format!("Error loading file {:?}", source_path))?
        .decode()
        .with_context(|| format!("Error loading file {:?}", source_path))?;
    Image::try_from(image)
        .with_context(|| format!("Unsupported pixels of image {:?}", source_path))
}

fn save_result(result_path: &Path, image: &Image) -> Result<()> {
    debug!("Save the result image into the file {:?}", result_path);
    image::save_buffer_with_format(
        result_path,
        image.buffer(),
        image.width(),
        image.height(),
        image.color_type(),
        ImageFormat::Png,
    )
    .with_context(|| format!("Failed to save the result image into {:?}", result_path))?;
    Ok(())
}
