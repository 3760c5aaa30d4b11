use cubeflow::layout::{scatter, SCALE_ATTENUATION, SPREAD};
use cubeflow::scene::OBJECT_COUNT;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn scatter_produces_the_requested_count() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(scatter(&mut rng, OBJECT_COUNT).len(), OBJECT_COUNT);
}

#[test]
fn scatter_components_stay_in_bounds() {
    let scale_bound = SPREAD * SCALE_ATTENUATION;
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        for placement in scatter(&mut rng, OBJECT_COUNT) {
            for component in [
                placement.position.x,
                placement.position.y,
                placement.position.z,
            ] {
                assert!(
                    (-SPREAD..=SPREAD).contains(&component),
                    "position component {} out of range for seed {}",
                    component,
                    seed
                );
            }
            for component in [placement.scale.x, placement.scale.y, placement.scale.z] {
                assert!(
                    (-scale_bound..=scale_bound).contains(&component),
                    "scale component {} out of range for seed {}",
                    component,
                    seed
                );
            }
        }
    }
}

#[test]
fn scatter_permits_mirrored_scales() {
    // The sampling range deliberately includes negative scales.
    let mut rng = StdRng::seed_from_u64(3);
    let placements = scatter(&mut rng, OBJECT_COUNT);
    assert!(placements
        .iter()
        .any(|p| p.scale.x < 0.0 || p.scale.y < 0.0 || p.scale.z < 0.0));
}

#[test]
fn scatter_is_deterministic_for_equal_seeds() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    assert_eq!(scatter(&mut a, OBJECT_COUNT), scatter(&mut b, OBJECT_COUNT));
}

#[test]
fn scatter_differs_across_seeds() {
    let mut a = StdRng::seed_from_u64(1);
    let mut b = StdRng::seed_from_u64(2);
    assert_ne!(scatter(&mut a, OBJECT_COUNT), scatter(&mut b, OBJECT_COUNT));
}
