//! Contains types of pixels supported by the crate.
//!
//! Every component of a pixel is stored as one byte, components of
//! a pixel are interleaved: `RGBRGBRGB...`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PixelType {
    /// One component (luma)
    U8,
    /// Two components (luma + alpha)
    U8x2,
    /// Three components (RGB)
    U8x3,
    /// Four components (RGBA)
    U8x4,
}

impl PixelType {
    /// Count of components (channels) in one pixel.
    #[inline]
    pub const fn count_of_components(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U8x2 => 2,
            Self::U8x3 => 3,
            Self::U8x4 => 4,
        }
    }

    /// Size of one pixel in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        // All components are one byte wide.
        self.count_of_components()
    }

    /// Returns pixel type with given count of components
    /// or `None` if the count is not supported.
    pub const fn from_count_of_components(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::U8),
            2 => Some(Self::U8x2),
            3 => Some(Self::U8x3),
            4 => Some(Self::U8x4),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_count_round_trip() {
        for pixel_type in [
            PixelType::U8,
            PixelType::U8x2,
            PixelType::U8x3,
            PixelType::U8x4,
        ] {
            let count = pixel_type.count_of_components();
            assert_eq!(PixelType::from_count_of_components(count), Some(pixel_type));
        }
        assert_eq!(PixelType::from_count_of_components(0), None);
        assert_eq!(PixelType::from_count_of_components(5), None);
    }
}
