use cubeflow::easing::{expo_in_out, CubicBezier};
use cubeflow::layout::Placement;
use cubeflow::palette::Color;
use cubeflow::scene::{loop_rotation, SceneObject, UniformState};
use cubeflow::shading::write_time;

const EPSILON: f32 = 1e-3;

#[test]
fn rotation_is_periodic_in_playhead() {
    for playhead in [0.0_f32, 0.1, 0.25, 0.4, 0.75, 0.9] {
        let a = loop_rotation(playhead);
        let b = loop_rotation(playhead + 1.0);
        assert!(
            (a - b).abs() < EPSILON,
            "rotation not periodic at playhead {}: {} vs {}",
            playhead,
            a,
            b
        );
    }
}

#[test]
fn rotation_at_playhead_zero_is_the_eased_origin() {
    assert_eq!(loop_rotation(0.0), expo_in_out(0.0));
    assert_eq!(loop_rotation(0.0), 0.0);
}

#[test]
fn rotation_at_quarter_playhead_is_the_eased_peak() {
    // sin(0.25 * 2pi) == 1
    let t = (0.25_f32 * std::f32::consts::TAU).sin();
    assert!((t - 1.0).abs() < 1e-6);
    assert!((loop_rotation(0.25) - expo_in_out(1.0)).abs() < EPSILON);
}

#[test]
fn expo_in_out_hits_the_endpoints_exactly() {
    assert_eq!(expo_in_out(0.0), 0.0);
    assert_eq!(expo_in_out(1.0), 1.0);
    assert_eq!(expo_in_out(0.5), 0.5);
}

#[test]
fn expo_in_out_is_symmetric_about_the_midpoint() {
    for t in [0.1_f32, 0.25, 0.4] {
        let sum = expo_in_out(t) + expo_in_out(1.0 - t);
        assert!((sum - 1.0).abs() < 1e-6);
    }
}

#[test]
fn bezier_signature_curve_maps_the_endpoints() {
    let curve = CubicBezier::SIGNATURE;
    assert_eq!(curve.ease(0.0), 0.0);
    assert_eq!(curve.ease(1.0), 1.0);
}

#[test]
fn bezier_signature_curve_is_monotonic() {
    let curve = CubicBezier::SIGNATURE;
    let mut previous = 0.0;
    for step in 1..=100 {
        let value = curve.ease(step as f32 / 100.0);
        assert!(
            value >= previous - 1e-4,
            "curve decreased at step {}: {} -> {}",
            step,
            previous,
            value
        );
        previous = value;
    }
}

#[test]
fn bezier_diagonal_control_points_give_identity() {
    let curve = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
    for step in 0..=10 {
        let x = step as f32 / 10.0;
        assert!((curve.ease(x) - x).abs() < 1e-3);
    }
}

fn test_objects() -> Vec<SceneObject> {
    (0..4)
        .map(|i| SceneObject {
            placement: Placement {
                position: cgmath::Vector3::new(i as f32, 0.0, 0.0),
                scale: cgmath::Vector3::new(0.5, 0.5, 0.5),
            },
            color: Color::WHITE,
            uniform: UniformState::default(),
        })
        .collect()
}

#[test]
fn uniform_time_starts_at_zero() {
    for object in test_objects() {
        assert_eq!(object.uniform.time, 0.0);
    }
}

#[test]
fn write_time_updates_every_object() {
    let mut objects = test_objects();
    write_time(&mut objects, 0.0);
    assert!(objects.iter().all(|o| o.uniform.time == 0.0));
    write_time(&mut objects, 1.5);
    assert!(objects.iter().all(|o| o.uniform.time == 1.5));
}
