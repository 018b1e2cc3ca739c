//! Per-pixel part of convolution.
//!
//! Every component of a destination pixel is a weighted sum of 3x3
//! neighbourhood of the same component of the source image.
//! Coordinates of neighbours outside the image are clamped to the nearest
//! edge (edge replication).
use crate::image_view::RowsBandMut;
use crate::{ImageView, Kernel};

/// Convolves rows of the source image that correspond to the given band
/// of the destination image.
pub(crate) fn convolve_rows(src_view: &ImageView, dst_band: &mut RowsBandMut, kernel: &Kernel) {
    let width = src_view.width() as usize;
    let last_row = src_view.height() - 1;
    let components = src_view.pixel_type().count_of_components();
    let weights = kernel.weights();

    for (y, dst_row) in dst_band.iter_rows_mut() {
        let src_rows = [
            src_view.row(y.saturating_sub(1)),
            src_view.row(y),
            src_view.row((y + 1).min(last_row)),
        ];
        for (x, dst_pixel) in dst_row.chunks_exact_mut(components).enumerate() {
            let offsets = [
                x.saturating_sub(1) * components,
                x * components,
                (x + 1).min(width - 1) * components,
            ];
            for (c, dst_component) in dst_pixel.iter_mut().enumerate() {
                *dst_component = weighted_sum(&src_rows, &offsets, c, weights);
            }
        }
    }
}

/// Computes value of one component of a pixel.
///
/// Taps are accumulated in row-major order of the kernel.
#[inline(always)]
fn weighted_sum(
    src_rows: &[&[u8]; 3],
    offsets: &[usize; 3],
    component: usize,
    weights: &[[f64; 3]; 3],
) -> u8 {
    let mut sum = 0f64;
    for (row, row_weights) in src_rows.iter().zip(weights) {
        for (&offset, &weight) in offsets.iter().zip(row_weights) {
            sum += weight * row[offset + component] as f64;
        }
    }
    clip_u8(sum)
}

/// Clamps value into `[0, 255]` and truncates it toward zero.
#[inline(always)]
fn clip_u8(v: f64) -> u8 {
    v.clamp(0., 255.) as u8
}
