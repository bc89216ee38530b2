//! Cross-checks between the reference propagators on sampled tracks.

use muex_core::FreeTrajectoryState;
use muex_geometry::Surface;
use muex_propagator::{PropagationDirection, Propagator};
use muex_propagators::{
    AnalyticalPropagator, RungeKuttaPropagator, SolenoidField, StraightLinePropagator,
    UniformField,
};
use muex_test_utils::fixtures::random_tracks;

fn targets() -> [Surface; 3] {
    [
        Surface::coaxial_cylinder(500.0),
        Surface::plane_at_z(790.0),
        Surface::plane_at_z(-790.0),
    ]
}

#[test]
fn helix_and_runge_kutta_agree_in_uniform_field() {
    let field = UniformField::axial(3.8);
    let analytical = AnalyticalPropagator::builder()
        .direction(PropagationDirection::Along)
        .build()
        .unwrap();
    let rk = RungeKuttaPropagator::builder()
        .direction(PropagationDirection::Along)
        .build()
        .unwrap();

    for track in random_tracks(42, 64) {
        let start = FreeTrajectoryState::from_track(&track, &field);
        for surface in targets() {
            let a = analytical.propagate(&start, &surface);
            let r = rk.propagate(&start, &surface);
            assert_eq!(a.is_valid(), r.is_valid(), "{surface} for {track:?}");
            if let (Some(pa), Some(pr)) = (a.global_position(), r.global_position()) {
                assert!(
                    (pa - pr).mag() < 0.5,
                    "{surface}: helix {pa} vs rk {pr} for {track:?}"
                );
            }
        }
    }
}

#[test]
fn valid_states_lie_on_their_surface() {
    let field = SolenoidField::builder().field_strength(3.8).build().unwrap();
    let tolerance = 1e-3;
    for direction in [PropagationDirection::Along, PropagationDirection::Opposite] {
        let rk = RungeKuttaPropagator::builder()
            .direction(direction)
            .confine_to_field_volume(false)
            .build()
            .unwrap();
        for track in random_tracks(3, 32) {
            let start = FreeTrajectoryState::from_track(&track, &field);
            for surface in targets() {
                let t = rk.propagate(&start, &surface);
                if let Some(pos) = t.global_position() {
                    assert!(surface.contains(&pos, tolerance), "{surface}: {pos}");
                    let s = t.path_length().unwrap();
                    assert!(s == 0.0 || s.signum() == direction.sign());
                }
            }
        }
    }
}

#[test]
fn straight_line_reaches_at_most_one_endcap() {
    let field = UniformField::axial(0.0);
    let along = StraightLinePropagator::builder()
        .direction(PropagationDirection::Along)
        .build()
        .unwrap();
    for track in random_tracks(11, 32) {
        let start = FreeTrajectoryState::from_track(&track, &field);
        let plus = along.propagate(&start, &Surface::plane_at_z(790.0));
        let minus = along.propagate(&start, &Surface::plane_at_z(-790.0));
        assert!(!(plus.is_valid() && minus.is_valid()));
        if plus.is_valid() {
            assert!(track.inner_momentum().z > 0.0);
        }
        if minus.is_valid() {
            assert!(track.inner_momentum().z < 0.0);
        }
    }
}
