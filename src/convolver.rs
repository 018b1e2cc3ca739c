use log::debug;

use crate::convolution::convolve_rows;
use crate::partition::{split_rows, WorkerCount};
use crate::threading::{process_bands, Threading};
use crate::{
    ConvolutionError, ConvolveToNewError, Image, IntoImageView, IntoImageViewMut, Kernel,
};

/// Options for configuring a convolution process.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct ConvolveOptions {
    /// Count of row ranges the image is split on.
    ///
    /// Default - `WorkerCount::Fixed(4)`
    pub workers: WorkerCount,
    /// Default - `Threading::Scoped`
    pub threading: Threading,
}

impl ConvolveOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set policy that defines count of workers.
    pub fn workers(mut self, workers: WorkerCount) -> Self {
        self.workers = workers;
        self
    }

    /// Set fixed count of workers. Zero is treated as one worker.
    pub fn fixed_workers(mut self, count: usize) -> Self {
        self.workers = WorkerCount::fixed(count);
        self
    }

    /// Set the way how workers are executed.
    pub fn threading(mut self, threading: Threading) -> Self {
        self.threading = threading;
        self
    }
}

/// Methods of this structure used to apply 3x3 kernels to images.
#[derive(Default, Debug, Clone)]
pub struct Convolver {}

impl Convolver {
    pub fn new() -> Self {
        Default::default()
    }

    /// Convolve source image with the kernel and save
    /// the result to the destination image's pixel buffer.
    ///
    /// The destination image must have the same dimensions and type
    /// of pixels as the source image. Initial content of
    /// the destination buffer doesn't matter, it is fully overwritten.
    ///
    /// The method returns after all workers have finished.
    pub fn convolve(
        &self,
        src_image: &impl IntoImageView,
        dst_image: &mut impl IntoImageViewMut,
        kernel: &Kernel,
        options: &ConvolveOptions,
    ) -> Result<(), ConvolutionError> {
        let src_view = src_image
            .image_view()
            .ok_or(ConvolutionError::UnsupportedPixelType)?;
        if dst_image.pixel_type() != Some(src_view.pixel_type()) {
            return Err(ConvolutionError::DifferentPixelTypes);
        }
        if dst_image.width() != src_view.width() || dst_image.height() != src_view.height() {
            return Err(ConvolutionError::DifferentDimensions);
        }
        let mut dst_view = dst_image
            .image_view_mut()
            .ok_or(ConvolutionError::DifferentPixelTypes)?;

        let ranges = split_rows(src_view.height(), options.workers.count());
        debug!(
            "Convolve image {}x{} ({:?}) split into {} row ranges",
            src_view.width(),
            src_view.height(),
            src_view.pixel_type(),
            ranges.len(),
        );
        let bands = dst_view.split_by_rows(&ranges);
        process_bands(options.threading, bands, |band| {
            convolve_rows(&src_view, band, kernel)
        });
        Ok(())
    }

    /// Convolve source image with the kernel into a newly allocated image.
    pub fn convolve_to_new(
        &self,
        src_image: &impl IntoImageView,
        kernel: &Kernel,
        options: &ConvolveOptions,
    ) -> Result<Image<'static>, ConvolveToNewError> {
        let pixel_type = src_image
            .pixel_type()
            .ok_or(ConvolutionError::UnsupportedPixelType)?;
        let mut dst_image = Image::try_new(src_image.width(), src_image.height(), pixel_type)?;
        self.convolve(src_image, &mut dst_image, kernel, options)?;
        Ok(dst_image)
    }
}
