use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use bgforge::color::Rgb;
use bgforge::{gradient, themes, Mode, Style};

// Benchmarks render at the production canvas size (390x844).
fn bench_motif_render(c: &mut Criterion) {
    let motif = themes::find("demon_slayer_flame").expect("registered motif");
    c.bench_function("flame_epic_390x844", |b| {
        b.iter(|| {
            let mut rng = SmallRng::seed_from_u64(42);
            (motif.render)(390, 844, Mode::Dark, Style::Epic, &mut rng)
        })
    });
}

fn bench_radial_gradient(c: &mut Criterion) {
    let colors = [Rgb::new(16, 24, 32), Rgb::new(48, 80, 106), Rgb::new(127, 176, 208)];
    c.bench_function("radial_390x844", |b| {
        b.iter(|| gradient::render_radial(390, 844, &colors, gradient::DEFAULT_CENTER))
    });
}

criterion_group!(benches, bench_motif_render, bench_radial_gradient);
criterion_main!(benches);
