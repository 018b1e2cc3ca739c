use core::ops::DerefMut;

use image::{ColorType, DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

use crate::images::Image;
use crate::{
    ImageBufferError, ImageCrateError, ImageView, ImageViewMut, IntoImageView, IntoImageViewMut,
    PixelType,
};

fn try_pixel_type(image: &DynamicImage) -> Option<PixelType> {
    match image {
        DynamicImage::ImageLuma8(_) => Some(PixelType::U8),
        DynamicImage::ImageLumaA8(_) => Some(PixelType::U8x2),
        DynamicImage::ImageRgb8(_) => Some(PixelType::U8x3),
        DynamicImage::ImageRgba8(_) => Some(PixelType::U8x4),
        _ => None,
    }
}

impl IntoImageView for DynamicImage {
    fn pixel_type(&self) -> Option<PixelType> {
        try_pixel_type(self)
    }

    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn image_view(&self) -> Option<ImageView<'_>> {
        let pixel_type = try_pixel_type(self)?;
        ImageView::from_buffer(self.width(), self.height(), self.as_bytes(), pixel_type).ok()
    }
}

impl IntoImageViewMut for DynamicImage {
    fn image_view_mut(&mut self) -> Option<ImageViewMut<'_>> {
        let pixel_type = try_pixel_type(self)?;
        let (width, height) = (self.width(), self.height());
        ImageViewMut::from_buffer(width, height, image_as_bytes_mut(self), pixel_type).ok()
    }
}

fn image_as_bytes_mut(image: &mut DynamicImage) -> &mut [u8] {
    match image {
        DynamicImage::ImageLuma8(img) => (*img).deref_mut(),
        DynamicImage::ImageLumaA8(img) => (*img).deref_mut(),
        DynamicImage::ImageRgb8(img) => (*img).deref_mut(),
        DynamicImage::ImageRgba8(img) => (*img).deref_mut(),
        _ => &mut [],
    }
}

// Implementations for 8-bit versions of ImageBuffer

macro_rules! impl_for_img_buffer {
    ($img_type:tt, $pixel_type:expr) => {
        impl IntoImageView for $img_type {
            fn pixel_type(&self) -> Option<PixelType> {
                Some($pixel_type)
            }

            fn width(&self) -> u32 {
                self.width()
            }

            fn height(&self) -> u32 {
                self.height()
            }

            fn image_view(&self) -> Option<ImageView<'_>> {
                ImageView::from_buffer(self.width(), self.height(), self.as_raw(), $pixel_type)
                    .ok()
            }
        }

        impl IntoImageViewMut for $img_type {
            fn image_view_mut(&mut self) -> Option<ImageViewMut<'_>> {
                let (width, height) = (self.width(), self.height());
                ImageViewMut::from_buffer(width, height, (*self).deref_mut(), $pixel_type).ok()
            }
        }
    };
}

impl_for_img_buffer!(GrayImage, PixelType::U8);
impl_for_img_buffer!(GrayAlphaImage, PixelType::U8x2);
impl_for_img_buffer!(RgbImage, PixelType::U8x3);
impl_for_img_buffer!(RgbaImage, PixelType::U8x4);

impl Image<'static> {
    /// Create an image from [DynamicImage].
    ///
    /// The count of channels of the source image is kept.
    /// Components with more than 8 bits are reduced to 8 bits.
    pub fn from_dynamic_image(image: &DynamicImage) -> Result<Self, ImageCrateError> {
        let (width, height) = (image.width(), image.height());
        let (buffer, pixel_type) = match image.color().channel_count() {
            1 => (image.to_luma8().into_raw(), PixelType::U8),
            2 => (image.to_luma_alpha8().into_raw(), PixelType::U8x2),
            3 => (image.to_rgb8().into_raw(), PixelType::U8x3),
            4 => (image.to_rgba8().into_raw(), PixelType::U8x4),
            _ => return Err(ImageCrateError::UnsupportedColorType(image.color())),
        };
        Ok(Self::from_vec_u8(width, height, buffer, pixel_type)?)
    }
}

impl TryFrom<DynamicImage> for Image<'static> {
    type Error = ImageCrateError;

    fn try_from(image: DynamicImage) -> Result<Self, Self::Error> {
        let (width, height) = (image.width(), image.height());
        let (buffer, pixel_type) = match image {
            DynamicImage::ImageLuma8(img) => (img.into_raw(), PixelType::U8),
            DynamicImage::ImageLumaA8(img) => (img.into_raw(), PixelType::U8x2),
            DynamicImage::ImageRgb8(img) => (img.into_raw(), PixelType::U8x3),
            DynamicImage::ImageRgba8(img) => (img.into_raw(), PixelType::U8x4),
            image => return Self::from_dynamic_image(&image),
        };
        Ok(Self::from_vec_u8(width, height, buffer, pixel_type)?)
    }
}

impl<'a> Image<'a> {
    /// Color type of the image in terms of the `image` crate.
    pub fn color_type(&self) -> ColorType {
        color_type(self.pixel_type())
    }

    /// Converts the image into [DynamicImage].
    ///
    /// Returns an error if the `image` crate rejects the buffer.
    pub fn into_dynamic_image(self) -> Result<DynamicImage, ImageBufferError> {
        let (width, height, pixel_type) = (self.width(), self.height(), self.pixel_type());
        let buffer = self.into_vec();
        let image = match pixel_type {
            PixelType::U8 => GrayImage::from_raw(width, height, buffer).map(DynamicImage::from),
            PixelType::U8x2 => {
                GrayAlphaImage::from_raw(width, height, buffer).map(DynamicImage::from)
            }
            PixelType::U8x3 => RgbImage::from_raw(width, height, buffer).map(DynamicImage::from),
            PixelType::U8x4 => RgbaImage::from_raw(width, height, buffer).map(DynamicImage::from),
        };
        image.ok_or(ImageBufferError::InvalidBufferSize)
    }
}

fn color_type(pixel_type: PixelType) -> ColorType {
    match pixel_type {
        PixelType::U8 => ColorType::L8,
        PixelType::U8x2 => ColorType::La8,
        PixelType::U8x3 => ColorType::Rgb8,
        PixelType::U8x4 => ColorType::Rgba8,
    }
}
