use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fast_image_convolve::testing::noise_image;
use fast_image_convolve::{ConvolveOptions, Convolver, Image, KernelType, PixelType, Threading};

pub fn bench_kernels(c: &mut Criterion) {
    let src_image = noise_image(1920, 1080, PixelType::U8x3, 42);
    let mut dst_image = Image::new(1920, 1080, PixelType::U8x3);
    let convolver = Convolver::new();
    let options = ConvolveOptions::new()
        .fixed_workers(1)
        .threading(Threading::None);

    let mut group = c.benchmark_group("Convolve RGB 1920x1080 in one thread");
    group.sample_size(20);
    for kernel_type in KernelType::ALL {
        group.bench_with_input(
            BenchmarkId::new("kernel", kernel_type.name()),
            &kernel_type,
            |b, kernel_type| {
                b.iter(|| {
                    convolver
                        .convolve(&src_image, &mut dst_image, kernel_type.kernel(), &options)
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

pub fn bench_pixel_types(c: &mut Criterion) {
    let convolver = Convolver::new();
    let options = ConvolveOptions::new()
        .fixed_workers(1)
        .threading(Threading::None);

    let mut group = c.benchmark_group("Blur 1024x1024 in one thread");
    group.sample_size(20);
    for pixel_type in [
        PixelType::U8,
        PixelType::U8x2,
        PixelType::U8x3,
        PixelType::U8x4,
    ] {
        let src_image = noise_image(1024, 1024, pixel_type, 7);
        let mut dst_image = Image::new(1024, 1024, pixel_type);
        group.bench_function(format!("{pixel_type:?}"), |b| {
            b.iter(|| {
                convolver
                    .convolve(
                        &src_image,
                        &mut dst_image,
                        KernelType::Blur.kernel(),
                        &options,
                    )
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kernels, bench_pixel_types,);
criterion_main!(benches);
