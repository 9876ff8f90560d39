use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rotozoom_imgproc::shape::rotated_output_size;
use rotozoom_imgproc::warp::{rotate, scale, warp_affine, AffineMap};
use rotozoom_raster::{Raster, RasterSize};

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rotate");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let src_size = RasterSize {
            width: *width,
            height: *height,
        };
        let src = Raster::<f64>::from_size_val(src_size, 1.0).unwrap();

        let dst_size = rotated_output_size(src_size, 45.0);
        let dst = Raster::<f64>::from_size_val(dst_size, 0.0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("bilinear", &parameter_string),
            &(&src, &dst),
            |b, i| {
                let (src, mut dst) = (i.0.clone(), i.1.clone());
                b.iter(|| rotate(black_box(&src), black_box(&mut dst), black_box(45.0)))
            },
        );
    }
    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scale");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let src_size = RasterSize {
            width: *width,
            height: *height,
        };
        let src = Raster::<u8>::from_size_val(src_size, 1u8).unwrap();

        let dst_size = RasterSize {
            width: width * 2,
            height: height * 2,
        };
        let dst = Raster::<f64>::from_size_val(dst_size, 0.0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("bilinear", &parameter_string),
            &(&src, &dst),
            |b, i| {
                let (src, mut dst) = (i.0.clone(), i.1.clone());
                b.iter(|| scale(black_box(&src), black_box(&mut dst)))
            },
        );
    }
    group.finish();
}

fn bench_warp_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("WarpAffine");

    let size = RasterSize {
        width: 512,
        height: 448,
    };
    group.throughput(criterion::Throughput::Elements(size.num_pixels() as u64));

    let src = Raster::<f64>::from_size_val(size, 1.0).unwrap();
    let dst = Raster::<f64>::from_size_val(size, 0.0).unwrap();
    let map = AffineMap::new(
        30.0,
        (1.25, 0.75),
        (223.5, 255.5),
        (223.5, 255.5),
    );

    group.bench_with_input(
        BenchmarkId::new("bilinear", "512x448"),
        &(&src, &dst, map),
        |b, i| {
            let (src, mut dst, map) = (i.0.clone(), i.1.clone(), i.2);
            b.iter(|| warp_affine(black_box(&src), black_box(&mut dst), black_box(&map)))
        },
    );
    group.finish();
}

criterion_group!(benches, bench_rotate, bench_scale, bench_warp_affine);
criterion_main!(benches);
