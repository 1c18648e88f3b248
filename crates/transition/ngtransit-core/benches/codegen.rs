use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ngtransit_core::{generate, presets, Session, TransitionConfig, TriggerMode};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    let cfg = TransitionConfig::default();
    group.bench_function("enter_leave_default", |b| {
        b.iter(|| generate(black_box(&cfg)))
    });

    let mut toggle = TransitionConfig::default();
    toggle.mode = TriggerMode::StateToggle;
    group.bench_function("state_toggle_default", |b| {
        b.iter(|| generate(black_box(&toggle)))
    });

    group.bench_function("all_presets", |b| {
        let mut session = Session::default();
        b.iter(|| {
            for preset in presets() {
                session.apply_preset(preset);
                black_box(session.code());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
