use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Immutable 3x3 matrix of weights used to convolve an image.
///
/// Weights are indexed as `weights[row][col]`, where the row `0` is applied
/// to the row above the processed pixel and the column `0` is applied
/// to the pixel on the left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [[f64; 3]; 3],
}

impl Kernel {
    pub const fn new(weights: [[f64; 3]; 3]) -> Self {
        Self { weights }
    }

    #[inline]
    pub const fn weights(&self) -> &[[f64; 3]; 3] {
        &self.weights
    }

    /// Sum of all weights of the kernel.
    pub fn sum(&self) -> f64 {
        self.weights.iter().flatten().sum()
    }
}

pub const EDGE: Kernel = Kernel::new([
    [0., -1., 0.], //
    [-1., 4., -1.],
    [0., -1., 0.],
]);

pub const SHARPEN: Kernel = Kernel::new([
    [0., -1., 0.], //
    [-1., 5., -1.],
    [0., -1., 0.],
]);

/// Box blur.
pub const BLUR: Kernel = Kernel::new([
    [1. / 9., 1. / 9., 1. / 9.],
    [1. / 9., 1. / 9., 1. / 9.],
    [1. / 9., 1. / 9., 1. / 9.],
]);

pub const GAUSSIAN_BLUR: Kernel = Kernel::new([
    [1. / 16., 1. / 8., 1. / 16.],
    [1. / 8., 1. / 4., 1. / 8.],
    [1. / 16., 1. / 8., 1. / 16.],
]);

pub const EMBOSS: Kernel = Kernel::new([
    [-2., -1., 0.], //
    [-1., 1., 1.],
    [0., 1., 2.],
]);

/// Copies source image without changes.
pub const IDENTITY: Kernel = Kernel::new([
    [0., 0., 0.], //
    [0., 1., 0.],
    [0., 0., 0.],
]);

/// Named convolution kernels supported by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KernelType {
    /// Edge detection (4-connectivity laplacian).
    Edge,
    Sharpen,
    /// Uniform box blur, each weight is `1/9`.
    Blur,
    /// Gaussian blur with weights `1/16`, `1/8` and `1/4` in the center.
    GaussianBlur,
    Emboss,
    /// Pass-through copy of the source image.
    #[default]
    Identity,
}

impl KernelType {
    pub const ALL: [KernelType; 6] = [
        Self::Edge,
        Self::Sharpen,
        Self::Blur,
        Self::GaussianBlur,
        Self::Emboss,
        Self::Identity,
    ];

    /// Returns matrix of weights for the kernel.
    pub const fn kernel(self) -> &'static Kernel {
        match self {
            Self::Edge => &EDGE,
            Self::Sharpen => &SHARPEN,
            Self::Blur => &BLUR,
            Self::GaussianBlur => &GAUSSIAN_BLUR,
            Self::Emboss => &EMBOSS,
            Self::Identity => &IDENTITY,
        }
    }

    /// Returns kernel type with given name.
    ///
    /// Names are case-sensitive: `edge`, `sharpen`, `blur`, `gauss`,
    /// `emboss` and `identity`. Any other name resolves to
    /// [KernelType::Identity].
    pub fn from_name(name: &str) -> Self {
        match name {
            "edge" => Self::Edge,
            "sharpen" => Self::Sharpen,
            "blur" => Self::Blur,
            "gauss" => Self::GaussianBlur,
            "emboss" => Self::Emboss,
            _ => Self::Identity,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Edge => "edge",
            Self::Sharpen => "sharpen",
            Self::Blur => "blur",
            Self::GaussianBlur => "gauss",
            Self::Emboss => "emboss",
            Self::Identity => "identity",
        }
    }
}

impl FromStr for KernelType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<KernelType> for Kernel {
    fn from(kernel_type: KernelType) -> Self {
        *kernel_type.kernel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_to_kernels() {
        for kernel_type in KernelType::ALL {
            assert_eq!(KernelType::from_name(kernel_type.name()), kernel_type);
        }
    }

    #[test]
    fn unknown_names_resolve_to_identity() {
        for name in ["", "Blur", "EDGE", "gaussian", "median", " blur"] {
            assert_eq!(KernelType::from_name(name), KernelType::Identity, "{name:?}");
        }
        let kernel_type: KernelType = "unsharp".parse().unwrap();
        assert_eq!(kernel_type, KernelType::Identity);
    }

    #[test]
    fn weights_are_exact_fractions() {
        assert!(BLUR.weights().iter().flatten().all(|&w| w == 1.0 / 9.0));
        assert_eq!(GAUSSIAN_BLUR.weights()[0], [0.0625, 0.125, 0.0625]);
        assert_eq!(GAUSSIAN_BLUR.weights()[1], [0.125, 0.25, 0.125]);
        assert_eq!(GAUSSIAN_BLUR.sum(), 1.0);
    }

    #[test]
    fn kernel_sums() {
        assert_eq!(EDGE.sum(), 0.0);
        assert_eq!(SHARPEN.sum(), 1.0);
        assert_eq!(EMBOSS.sum(), 1.0);
        assert_eq!(IDENTITY.sum(), 1.0);
    }
}
