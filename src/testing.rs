//! Helpers used by tests and benchmarks.
use crate::{Image, Kernel, PixelType};

/// Creates image filled with pseudo-random noise.
///
/// The same arguments always give the same image.
pub fn noise_image(width: u32, height: u32, pixel_type: PixelType, seed: u64) -> Image<'static> {
    let size = width as usize * height as usize * pixel_type.size();
    // xorshift64*
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let buffer = (0..size)
        .map(|_| {
            state ^= state >> 12;
            state ^= state << 25;
            state ^= state >> 27;
            (state.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 56) as u8
        })
        .collect();
    Image::from_vec_u8(width, height, buffer, pixel_type).unwrap()
}

/// Creates image with horizontal gradient in every component.
pub fn gradient_image(width: u32, height: u32, pixel_type: PixelType) -> Image<'static> {
    let components = pixel_type.count_of_components();
    let mut buffer = Vec::with_capacity(width as usize * height as usize * components);
    for y in 0..height {
        for x in 0..width {
            for c in 0..components {
                let v = x as usize * 255 / width as usize + y as usize * 3 + c * 40;
                buffer.push((v % 256) as u8);
            }
        }
    }
    Image::from_vec_u8(width, height, buffer, pixel_type).unwrap()
}

/// Straightforward single-threaded convolution used as a reference
/// for results of [Convolver](crate::Convolver).
pub fn reference_convolve(image: &Image, kernel: &Kernel) -> Vec<u8> {
    let width = image.width() as i64;
    let height = image.height() as i64;
    let components = image.pixel_type().count_of_components();
    let src = image.buffer();
    let mut dst = Vec::with_capacity(src.len());
    for y in 0..height {
        for x in 0..width {
            for c in 0..components {
                let mut sum = 0f64;
                for (dy, row_weights) in (-1..=1).zip(kernel.weights()) {
                    for (dx, &weight) in (-1..=1).zip(row_weights) {
                        let sx = (x + dx).clamp(0, width - 1);
                        let sy = (y + dy).clamp(0, height - 1);
                        let index = (sy * width + sx) as usize * components + c;
                        sum += weight * src[index] as f64;
                    }
                }
                dst.push(sum.clamp(0., 255.) as u8);
            }
        }
    }
    dst
}

/// Returns sum of values of every component of pixels.
pub fn image_checksum<const N: usize>(buffer: &[u8]) -> [u64; N] {
    let mut res = [0u64; N];
    for pixel in buffer.chunks_exact(N) {
        res.iter_mut().zip(pixel).for_each(|(d, &s)| *d += s as u64);
    }
    res
}
