use jewelkit_designer::model::{ChainLink, DesignShape, JumpRing, Point, LINK_SAMPLES};

#[test]
fn test_point_distance() {
    let p1 = Point::new(0.0, 0.0);
    let p2 = Point::new(3.0, 4.0);
    assert_eq!(p1.distance_to(&p2), 5.0);
}

#[test]
fn test_ring_bounds() {
    let ring = JumpRing::new(Point::ORIGIN, 13.0);
    assert_eq!(ring.bounds(), (-13.0, -13.0, 13.0, 13.0));
}

#[test]
fn test_link_from_size_semi_axes() {
    let link = ChainLink::from_size(Point::ORIGIN, 8.0);
    assert_eq!(link.rx, 4.0);
    assert_eq!(link.ry, 2.0);
    assert_eq!(link.bounds(), (-4.0, -2.0, 4.0, 2.0));
}

#[test]
fn test_link_outline_is_closed_polyline() {
    let link = ChainLink::from_size(Point::ORIGIN, 8.0);
    let path = link.render();

    let mut begins = 0;
    let mut lines = 0;
    let mut closed = false;
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { .. } => begins += 1,
            lyon::path::Event::Line { .. } => lines += 1,
            lyon::path::Event::End { close, .. } => closed = close,
            _ => {}
        }
    }
    assert_eq!(begins, 1);
    // One segment between each consecutive pair of samples; the closing
    // segment comes from the End event.
    assert_eq!(lines, LINK_SAMPLES - 1);
    assert!(closed);
}

#[test]
fn test_link_outline_stays_inside_bounds() {
    let link = ChainLink::from_size(Point::ORIGIN, 10.0);
    let (min_x, min_y, max_x, max_y) = link.bounds();
    for event in link.render().iter() {
        if let lyon::path::Event::Line { to, .. } = event {
            assert!(f64::from(to.x) >= min_x - 1e-4 && f64::from(to.x) <= max_x + 1e-4);
            assert!(f64::from(to.y) >= min_y - 1e-4 && f64::from(to.y) <= max_y + 1e-4);
        }
    }
}

#[test]
fn test_zero_size_shapes_are_degenerate_points() {
    let ring = JumpRing::new(Point::ORIGIN, 0.0);
    assert_eq!(ring.bounds(), (0.0, 0.0, 0.0, 0.0));

    let link = ChainLink::from_size(Point::ORIGIN, 0.0);
    assert_eq!(link.bounds(), (0.0, 0.0, 0.0, 0.0));
}
