use image::{ColorType, DynamicImage, GrayImage, Luma, Rgb, RgbImage};

use fast_image_convolve::kernels::{BLUR, IDENTITY};
use fast_image_convolve::testing::{noise_image, reference_convolve};
use fast_image_convolve::{
    ConvolveOptions, Convolver, Image, IntoImageView, KernelType, PixelType,
};

#[test]
fn pixel_types_of_dynamic_image() {
    let cases = [
        (DynamicImage::new_luma8(3, 2), Some(PixelType::U8)),
        (DynamicImage::new_luma_a8(3, 2), Some(PixelType::U8x2)),
        (DynamicImage::new_rgb8(3, 2), Some(PixelType::U8x3)),
        (DynamicImage::new_rgba8(3, 2), Some(PixelType::U8x4)),
        (DynamicImage::new_rgb16(3, 2), None),
        (DynamicImage::new_rgba32f(3, 2), None),
    ];
    for (image, pixel_type) in cases {
        assert_eq!(IntoImageView::pixel_type(&image), pixel_type);
        assert_eq!(image.image_view().is_some(), pixel_type.is_some());
    }
}

#[test]
fn convolve_image_buffers_in_place() {
    let src_image = RgbImage::from_fn(17, 9, |x, y| Rgb([x as u8 * 15, y as u8 * 28, 200]));
    let mut dst_image = RgbImage::new(17, 9);
    Convolver::new()
        .convolve(&src_image, &mut dst_image, &BLUR, &ConvolveOptions::new())
        .unwrap();

    let src_copy = Image::from_vec_u8(17, 9, src_image.as_raw().clone(), PixelType::U8x3).unwrap();
    assert_eq!(dst_image.as_raw(), &reference_convolve(&src_copy, &BLUR));
}

#[test]
fn convolve_dynamic_image() {
    let src_image = DynamicImage::ImageLuma8(GrayImage::from_pixel(5, 5, Luma([77])));
    let mut dst_image = DynamicImage::new_luma8(5, 5);
    Convolver::new()
        .convolve(
            &src_image,
            &mut dst_image,
            KernelType::Blur.kernel(),
            &ConvolveOptions::new(),
        )
        .unwrap();
    assert!(dst_image.as_bytes().iter().all(|&v| v == 77));
}

#[test]
fn image_from_dynamic_image() {
    let src_image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 3, Rgb([1, 2, 3])));
    let image = Image::try_from(src_image).unwrap();
    assert_eq!(image.pixel_type(), PixelType::U8x3);
    assert_eq!(image.color_type(), ColorType::Rgb8);
    assert_eq!(&image.buffer()[..6], [1, 2, 3, 1, 2, 3]);

    // 16-bit components are reduced to 8 bits
    let mut src_image = DynamicImage::new_luma16(4, 3);
    if let DynamicImage::ImageLuma16(img) = &mut src_image {
        img.pixels_mut().for_each(|p| *p = Luma([u16::MAX]));
    }
    let image = Image::try_from(src_image).unwrap();
    assert_eq!(image.pixel_type(), PixelType::U8);
    assert!(image.buffer().iter().all(|&v| v == 255));

    let src_image = DynamicImage::new_rgba32f(2, 2);
    let image = Image::from_dynamic_image(&src_image).unwrap();
    assert_eq!(image.pixel_type(), PixelType::U8x4);
}

#[test]
fn image_into_dynamic_image() {
    for (pixel_type, color_type) in [
        (PixelType::U8, ColorType::L8),
        (PixelType::U8x2, ColorType::La8),
        (PixelType::U8x3, ColorType::Rgb8),
        (PixelType::U8x4, ColorType::Rgba8),
    ] {
        let image = noise_image(6, 5, pixel_type, 9);
        let expected = image.buffer().to_vec();
        let dyn_image = image.into_dynamic_image().unwrap();
        assert_eq!(dyn_image.color(), color_type);
        assert_eq!(dyn_image.width(), 6);
        assert_eq!(dyn_image.height(), 5);
        assert_eq!(dyn_image.as_bytes(), expected);
    }
}

#[test]
fn convolve_to_new_from_dynamic_image() {
    let src_image = DynamicImage::ImageRgb8(RgbImage::from_fn(8, 8, |x, y| {
        Rgb([(x * 30) as u8, (y * 30) as u8, ((x + y) * 15) as u8])
    }));
    let dst_image = Convolver::new()
        .convolve_to_new(&src_image, &IDENTITY, &ConvolveOptions::new())
        .unwrap();
    assert_eq!(dst_image.buffer(), src_image.as_bytes());
}
