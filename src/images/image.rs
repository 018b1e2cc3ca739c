use crate::image_view::{check_buffer, required_buffer_size};
use crate::images::BufferContainer;
use crate::{
    ImageBufferError, ImageView, ImageViewMut, IntoImageView, IntoImageViewMut, PixelType,
};

/// Simple reference to image data that provides [IntoImageView].
#[derive(Debug, Copy, Clone)]
pub struct ImageRef<'a> {
    width: u32,
    height: u32,
    buffer: &'a [u8],
    pixel_type: PixelType,
}

impl<'a> ImageRef<'a> {
    /// Create an image from slice with pixels-data.
    pub fn new(
        width: u32,
        height: u32,
        buffer: &'a [u8],
        pixel_type: PixelType,
    ) -> Result<Self, ImageBufferError> {
        check_buffer(width, height, buffer.len(), pixel_type)?;
        Ok(Self {
            width,
            height,
            buffer,
            pixel_type,
        })
    }

    #[inline]
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Buffer with image pixels data.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        self.buffer
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer.into()
    }
}

impl<'a> IntoImageView for ImageRef<'a> {
    fn pixel_type(&self) -> Option<PixelType> {
        Some(self.pixel_type)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn image_view(&self) -> Option<ImageView<'_>> {
        ImageView::from_buffer(self.width, self.height, self.buffer, self.pixel_type).ok()
    }
}

/// Simple dynamic container of image data that provides [IntoImageView] and [IntoImageViewMut].
#[derive(Debug)]
pub struct Image<'a> {
    width: u32,
    height: u32,
    buffer: BufferContainer<'a, u8>,
    pixel_type: PixelType,
}

impl Image<'static> {
    /// Create an image with given dimensions and pixel type.
    /// All components of pixels are set to zero.
    ///
    /// # Panics
    ///
    /// If `width` or `height` is zero or the buffer can't be allocated.
    /// Use [Image::try_new] to get an error instead.
    pub fn new(width: u32, height: u32, pixel_type: PixelType) -> Self {
        match Self::try_new(width, height, pixel_type) {
            Ok(image) => image,
            Err(err) => panic!("Failed to create image {width}x{height}: {err}"),
        }
    }

    /// Create an image with given dimensions and pixel type.
    ///
    /// Unlike [Image::new] it doesn't abort the process if
    /// the buffer can't be allocated.
    pub fn try_new(
        width: u32,
        height: u32,
        pixel_type: PixelType,
    ) -> Result<Self, ImageBufferError> {
        if width == 0 || height == 0 {
            return Err(ImageBufferError::ZeroDimension);
        }
        let size = required_buffer_size(width, height, pixel_type)
            .ok_or(ImageBufferError::InvalidBufferSize)?;
        let mut buffer: Vec<u8> = Vec::new();
        buffer
            .try_reserve_exact(size)
            .map_err(|_| ImageBufferError::AllocationFailed)?;
        buffer.resize(size, 0);
        Ok(Self {
            width,
            height,
            buffer: BufferContainer::Owned(buffer),
            pixel_type,
        })
    }

    /// Create an image from vector with pixels data.
    pub fn from_vec_u8(
        width: u32,
        height: u32,
        buffer: Vec<u8>,
        pixel_type: PixelType,
    ) -> Result<Self, ImageBufferError> {
        check_buffer(width, height, buffer.len(), pixel_type)?;
        Ok(Self {
            width,
            height,
            buffer: BufferContainer::Owned(buffer),
            pixel_type,
        })
    }
}

impl<'a> Image<'a> {
    /// Create an image from slice with pixels data.
    pub fn from_slice_u8(
        width: u32,
        height: u32,
        buffer: &'a mut [u8],
        pixel_type: PixelType,
    ) -> Result<Self, ImageBufferError> {
        check_buffer(width, height, buffer.len(), pixel_type)?;
        Ok(Self {
            width,
            height,
            buffer: BufferContainer::Borrowed(buffer),
            pixel_type,
        })
    }

    #[inline]
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Buffer with image pixels data.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        self.buffer.borrow()
    }

    /// Mutable buffer with image pixels data.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.buffer.borrow_mut()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer.into_vec()
    }

    /// Creates a copy of the image.
    pub fn copy(&self) -> Image<'static> {
        Image {
            width: self.width,
            height: self.height,
            buffer: BufferContainer::Owned(self.buffer.as_vec()),
            pixel_type: self.pixel_type,
        }
    }
}

impl<'a> IntoImageView for Image<'a> {
    fn pixel_type(&self) -> Option<PixelType> {
        Some(self.pixel_type)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn image_view(&self) -> Option<ImageView<'_>> {
        ImageView::from_buffer(self.width, self.height, self.buffer(), self.pixel_type).ok()
    }
}

impl<'a> IntoImageViewMut for Image<'a> {
    fn image_view_mut(&mut self) -> Option<ImageViewMut<'_>> {
        let (width, height, pixel_type) = (self.width, self.height, self.pixel_type);
        ImageViewMut::from_buffer(width, height, self.buffer_mut(), pixel_type).ok()
    }
}
