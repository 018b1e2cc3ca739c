use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBufferError {
    #[error("Width and height of image must be greater than zero")]
    ZeroDimension,
    #[error("Size of buffer don't match to image dimensions")]
    InvalidBufferSize,
    #[error("Failed to allocate buffer for image pixels")]
    AllocationFailed,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvolutionError {
    #[error(
        "The dimensions of the source image are not equal to the dimensions of the destination image"
    )]
    DifferentDimensions,
    #[error("Type of pixels of the source image is not equal to pixel type of the destination image")]
    DifferentPixelTypes,
    #[error("Source image has unsupported type of pixels")]
    UnsupportedPixelType,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvolveToNewError {
    #[error(transparent)]
    Buffer(#[from] ImageBufferError),
    #[error(transparent)]
    Convolution(#[from] ConvolutionError),
}

#[cfg(feature = "image")]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageCrateError {
    #[error("Unsupported color type of image: {0:?}")]
    UnsupportedColorType(image::ColorType),
    #[error(transparent)]
    Buffer(#[from] ImageBufferError),
}
