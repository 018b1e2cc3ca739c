use std::mem;

use crate::partition::RowRange;
use crate::{ImageBufferError, PixelType};

/// Returns size of buffer required to store pixels of image
/// with given dimensions or `None` if the size overflows `usize`.
#[inline]
pub(crate) fn required_buffer_size(
    width: u32,
    height: u32,
    pixel_type: PixelType,
) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(pixel_type.size())
}

pub(crate) fn check_buffer(
    width: u32,
    height: u32,
    buffer_len: usize,
    pixel_type: PixelType,
) -> Result<(), ImageBufferError> {
    if width == 0 || height == 0 {
        return Err(ImageBufferError::ZeroDimension);
    }
    if required_buffer_size(width, height, pixel_type) != Some(buffer_len) {
        return Err(ImageBufferError::InvalidBufferSize);
    }
    Ok(())
}

/// A trait for getting access to image data.
pub trait IntoImageView {
    /// Returns pixel's type of the image.
    ///
    /// Returns `None` if the image has pixels of a type that
    /// is not supported by the crate.
    fn pixel_type(&self) -> Option<PixelType>;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Returns the immutable view of the image data.
    fn image_view(&self) -> Option<ImageView<'_>>;
}

/// A trait for getting mutable access to image data.
pub trait IntoImageViewMut: IntoImageView {
    /// Returns the mutable view of the image data.
    fn image_view_mut(&mut self) -> Option<ImageViewMut<'_>>;
}

/// An immutable view of image data.
///
/// The size of the buffer always equals `width * height * count_of_components`.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    width: u32,
    height: u32,
    buffer: &'a [u8],
    pixel_type: PixelType,
}

impl<'a> ImageView<'a> {
    pub fn from_buffer(
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

    #[inline]
    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    /// Size of one row in bytes.
    #[inline]
    pub fn row_size(&self) -> usize {
        self.width as usize * self.pixel_type.size()
    }

    /// Returns row with given index.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &'a [u8] {
        let row_size = self.row_size();
        let start = y as usize * row_size;
        &self.buffer[start..start + row_size]
    }
}

/// A mutable view of image data.
#[derive(Debug)]
pub struct ImageViewMut<'a> {
    width: u32,
    height: u32,
    buffer: &'a mut [u8],
    pixel_type: PixelType,
}

impl<'a> ImageViewMut<'a> {
    pub fn from_buffer(
        width: u32,
        height: u32,
        buffer: &'a mut [u8],
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

    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &*self.buffer
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut *self.buffer
    }

    /// Size of one row in bytes.
    #[inline]
    pub fn row_size(&self) -> usize {
        self.width as usize * self.pixel_type.size()
    }

    /// Splits the view into bands of rows, one band for each of given ranges.
    ///
    /// Ranges must be contiguous, start from the first row and
    /// cover all rows of the image.
    pub(crate) fn split_by_rows(&mut self, ranges: &[RowRange]) -> Vec<RowsBandMut<'_>> {
        let row_size = self.row_size();
        let mut rest: &mut [u8] = &mut *self.buffer;
        let mut bands = Vec::with_capacity(ranges.len());
        for &range in ranges {
            debug_assert!(range.end <= self.height);
            let (band, tail) = mem::take(&mut rest).split_at_mut(range.len() as usize * row_size);
            rest = tail;
            bands.push(RowsBandMut {
                range,
                row_size,
                buffer: band,
            });
        }
        debug_assert!(rest.is_empty());
        bands
    }
}

/// Mutable part of image buffer that contains rows from given range.
#[derive(Debug)]
pub(crate) struct RowsBandMut<'a> {
    pub range: RowRange,
    pub row_size: usize,
    pub buffer: &'a mut [u8],
}

impl<'a> RowsBandMut<'a> {
    /// Iterates over rows of the band together with their indexes
    /// in the whole image.
    #[inline]
    pub fn iter_rows_mut(&mut self) -> impl Iterator<Item = (u32, &mut [u8])> {
        let row_size = self.row_size;
        (self.range.start..self.range.end).zip(self.buffer.chunks_exact_mut(row_size))
    }
}

impl<'a> IntoImageView for ImageView<'a> {
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
        Some(*self)
    }
}
