use super::*;

const VIEWPORT: Viewport = Viewport {
    width: 1200.0,
    height: 800.0,
};

#[test]
fn pointer_with_room_is_unchanged() {
    let at = clamp_menu_position(Point { x: 100.0, y: 50.0 }, VIEWPORT, &MenuBox::default());
    assert_eq!(at, Point { x: 100.0, y: 50.0 });
}

#[test]
fn right_edge_overflow_pulls_back_with_margin() {
    let at = clamp_menu_position(Point { x: 900.0, y: 10.0 }, VIEWPORT, &MenuBox::default());
    assert!((at.x - 695.0).abs() < f64::EPSILON);
    assert!((at.y - 10.0).abs() < f64::EPSILON);
}

#[test]
fn bottom_edge_overflow_pulls_back_with_margin() {
    let at = clamp_menu_position(Point { x: 10.0, y: 700.0 }, VIEWPORT, &MenuBox::default());
    assert!((at.y - 395.0).abs() < f64::EPSILON);
}

#[test]
fn box_exactly_fitting_is_unchanged() {
    let at = clamp_menu_position(Point { x: 700.0, y: 400.0 }, VIEWPORT, &MenuBox::default());
    assert_eq!(at, Point { x: 700.0, y: 400.0 });
}

#[test]
fn tiny_viewport_pins_to_origin() {
    let small = Viewport {
        width: 320.0,
        height: 240.0,
    };
    let at = clamp_menu_position(Point { x: 200.0, y: 200.0 }, small, &MenuBox::default());
    assert_eq!(at, Point { x: 0.0, y: 0.0 });
}
