#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

pub use convolver::{ConvolveOptions, Convolver};
pub use errors::*;
pub use image_view::{ImageView, ImageViewMut, IntoImageView, IntoImageViewMut};
pub use images::{Image, ImageRef};
pub use kernels::{Kernel, KernelType};
pub use partition::{split_rows, RowRange, WorkerCount};
pub use pixels::PixelType;
pub use threading::Threading;

mod convolution;
mod convolver;
mod errors;
mod image_view;
pub mod images;
pub mod kernels;
mod partition;
pub mod pixels;
#[cfg(feature = "for_testing")]
pub mod testing;
mod threading;
