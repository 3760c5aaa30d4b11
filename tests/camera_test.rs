use cubeflow::camera::{OrthographicCamera, FAR, NEAR, ZOOM};

#[test]
fn square_viewport_yields_the_fixed_frustum() {
    // 512x512 -> aspect 1
    let mut camera = OrthographicCamera::new();
    camera.resize(512.0 / 512.0);
    assert_eq!(camera.left, -2.0);
    assert_eq!(camera.right, 2.0);
    assert_eq!(camera.top, 2.0);
    assert_eq!(camera.bottom, -2.0);
    assert_eq!(camera.near, NEAR);
    assert_eq!(camera.far, FAR);
}

#[test]
fn resize_scales_only_the_horizontal_extent() {
    let mut camera = OrthographicCamera::new();
    camera.resize(2.0);
    assert_eq!(camera.left, -2.0 * ZOOM);
    assert_eq!(camera.right, 2.0 * ZOOM);
    assert_eq!(camera.top, ZOOM);
    assert_eq!(camera.bottom, -ZOOM);
}

#[test]
fn resize_repositions_the_eye_on_the_diagonal() {
    let mut camera = OrthographicCamera::new();
    camera.resize(1.5);
    assert_eq!(camera.eye, cgmath::Point3::new(ZOOM, ZOOM, ZOOM));
    assert_eq!(camera.target, cgmath::Point3::new(0.0, 0.0, 0.0));
}

#[test]
fn resize_is_idempotent() {
    let mut once = OrthographicCamera::new();
    once.resize(1.0);
    let mut twice = OrthographicCamera::new();
    twice.resize(1.0);
    twice.resize(1.0);
    assert_eq!(once, twice);
    assert_eq!(once.view_proj(), twice.view_proj());
}

#[test]
fn resize_depends_only_on_the_latest_aspect() {
    let mut direct = OrthographicCamera::new();
    direct.resize(1.0);
    let mut detour = OrthographicCamera::new();
    detour.resize(2.5);
    detour.resize(1.0);
    assert_eq!(direct, detour);
}
