use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use escape_explorer::{Complex, Fractal, ImageSize, Renderer, Viewport, default_gradient};

const SIZES: &[(u32, u32)] = &[(200, 175), (400, 350)];

fn render_default_view(c: &mut Criterion) {
    let viewport = Viewport::new(Complex::new(-0.75, 0.0), 1.3);
    let pools = [
        ("global", Renderer::new(default_gradient()).expect("default gradient has stops")),
        (
            "single-thread",
            Renderer::with_threads(default_gradient(), 1).expect("one-thread pool builds"),
        ),
    ];

    let mut group = c.benchmark_group("render_mandelbrot");
    group.sample_size(20);

    for (pool_name, renderer) in pools {
        for &(width, height) in SIZES {
            let size = ImageSize::new(width, height).expect("non-empty size");

            group.bench_with_input(
                BenchmarkId::new(pool_name, format!("{width}x{height}")),
                &size,
                |b, &size| {
                    b.iter(|| renderer.render(black_box(&Fractal::Mandelbrot), size, &viewport));
                },
            );
        }
    }

    group.finish();
}

fn render_julia(c: &mut Criterion) {
    let renderer = Renderer::new(default_gradient()).expect("default gradient has stops");
    let size = ImageSize::new(200, 175).expect("non-empty size");
    let viewport = Viewport::new(Complex::ZERO, 1.0);
    let fractal = Fractal::julia(Complex::new(-0.8, 0.156));

    c.bench_function("render_julia_200x175", |b| {
        b.iter(|| renderer.render(black_box(&fractal), size, &viewport));
    });
}

criterion_group!(benches, render_default_view, render_julia);
criterion_main!(benches);
