use jewelkit_designer::viewport::Viewport;

#[test]
fn test_new_viewport_centers_origin() {
    let viewport = Viewport::new(500.0, 500.0);
    let (px, py) = viewport.world_to_pixel(0.0, 0.0);
    assert_eq!(px, 250.0);
    assert_eq!(py, 250.0);
}

#[test]
fn test_world_pixel_round_trip() {
    let mut viewport = Viewport::new(500.0, 400.0);
    viewport.set_zoom(3.5);
    viewport.set_pan(120.0, 80.0);

    let (px, py) = viewport.world_to_pixel(13.0, -7.0);
    let world = viewport.pixel_to_world(px, py);
    assert!((world.x - 13.0).abs() < 1e-9);
    assert!((world.y + 7.0).abs() < 1e-9);
}

#[test]
fn test_y_axis_is_flipped() {
    let viewport = Viewport::new(100.0, 100.0);
    let (_, y_low) = viewport.world_to_pixel(0.0, -10.0);
    let (_, y_high) = viewport.world_to_pixel(0.0, 10.0);
    // Larger world Y is closer to the top of the screen.
    assert!(y_high < y_low);
}

#[test]
fn test_fit_to_bounds_uses_uniform_scale() {
    let mut viewport = Viewport::new(500.0, 500.0);
    // Wide bounds: the x extent limits the zoom.
    viewport.fit_to_bounds(-20.0, -5.0, 20.0, 5.0, 0.9);
    assert!((viewport.zoom() - 500.0 / 40.0 * 0.9).abs() < 1e-9);

    // Bounds center lands on the canvas center.
    let (px, py) = viewport.world_to_pixel(0.0, 0.0);
    assert!((px - 250.0).abs() < 1e-9);
    assert!((py - 250.0).abs() < 1e-9);
}

#[test]
fn test_fit_keeps_bounds_inside_canvas() {
    let mut viewport = Viewport::new(500.0, 500.0);
    viewport.fit_to_bounds(-21.0, -21.0, 21.0, 21.0, 0.9);
    for (x, y) in [(-21.0, -21.0), (21.0, 21.0), (-21.0, 21.0), (21.0, -21.0)] {
        let (px, py) = viewport.world_to_pixel(x, y);
        assert!((0.0..=500.0).contains(&px));
        assert!((0.0..=500.0).contains(&py));
    }
}

#[test]
fn test_degenerate_bounds_only_recenter() {
    let mut viewport = Viewport::new(500.0, 500.0);
    viewport.set_zoom(2.0);
    viewport.fit_to_bounds(0.0, 0.0, 0.0, 0.0, 0.9);
    assert_eq!(viewport.zoom(), 2.0);
    let (px, py) = viewport.world_to_pixel(0.0, 0.0);
    assert_eq!((px, py), (250.0, 250.0));
}

#[test]
fn test_zoom_rejects_nonpositive_values() {
    let mut viewport = Viewport::new(500.0, 500.0);
    viewport.set_zoom(0.0);
    assert_eq!(viewport.zoom(), 1.0);
    viewport.set_zoom(-3.0);
    assert_eq!(viewport.zoom(), 1.0);
    viewport.set_zoom(f64::NAN);
    assert_eq!(viewport.zoom(), 1.0);
}
