//! Criterion micro-benchmarks for single propagations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use muex_core::{Charge, FreeTrajectoryState, GlobalPoint, GlobalVector};
use muex_geometry::Surface;
use muex_propagator::{PropagationDirection, Propagator};
use muex_propagators::{
    AnalyticalPropagator, RungeKuttaPropagator, StraightLinePropagator, UniformField,
};

fn targets() -> [(&'static str, Surface); 2] {
    [
        ("barrel", Surface::coaxial_cylinder(500.0)),
        ("endcap", Surface::plane_at_z(790.0)),
    ]
}

fn bench_propagators(c: &mut Criterion) {
    let field = UniformField::axial(3.8);
    let start = FreeTrajectoryState::new(
        GlobalPoint::new(0.1, -0.2, 3.0),
        GlobalVector::new(12.0, 5.0, 9.0),
        Charge::Negative,
        &field,
    );
    let along = PropagationDirection::Along;
    let propagators: Vec<(&str, Box<dyn Propagator>)> = vec![
        (
            "analytical",
            Box::new(AnalyticalPropagator::builder().direction(along).build().unwrap()),
        ),
        (
            "runge_kutta",
            Box::new(RungeKuttaPropagator::builder().direction(along).build().unwrap()),
        ),
        (
            "straight_line",
            Box::new(StraightLinePropagator::builder().direction(along).build().unwrap()),
        ),
    ];

    for (name, propagator) in &propagators {
        for (target, surface) in targets() {
            c.bench_function(&format!("{name}_{target}"), |b| {
                b.iter(|| black_box(propagator.propagate(black_box(&start), &surface)));
            });
        }
    }
}

fn bench_opposite_fallback_miss(c: &mut Criterion) {
    // Worst case for the engine: the along attempt scans to the path
    // limit before the opposite attempt is made.
    let field = UniformField::axial(3.8);
    let start = FreeTrajectoryState::new(
        GlobalPoint::ORIGIN,
        GlobalVector::new(0.0, 0.0, 40.0),
        Charge::Positive,
        &field,
    );
    let along = AnalyticalPropagator::builder()
        .direction(PropagationDirection::Along)
        .build()
        .unwrap();
    let surface = Surface::plane_at_z(-790.0);

    c.bench_function("analytical_miss_to_path_limit", |b| {
        b.iter(|| black_box(along.propagate(black_box(&start), &surface)));
    });
}

criterion_group!(benches, bench_propagators, bench_opposite_fallback_miss);
criterion_main!(benches);
