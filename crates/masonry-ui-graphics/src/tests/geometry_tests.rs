use super::*;

#[test]
fn scale_to_fill_covers_target_and_keeps_aspect() {
    let landscape = Size::new(300.0, 200.0);
    let filled = landscape.scale_to_fill(Size::new(150.0, 150.0));
    assert_eq!(filled, Size::new(225.0, 150.0));

    let portrait = Size::new(300.0, 350.0);
    let filled = portrait.scale_to_fill(Size::new(312.0, 100.0));
    assert!((filled.width - 312.0).abs() < 1e-3);
    assert!(filled.height > 100.0);
    assert!((filled.width / filled.height - 300.0 / 350.0).abs() < 1e-5);
}

#[test]
fn scale_to_fill_of_empty_size_is_target() {
    assert_eq!(
        Size::default().scale_to_fill(Size::new(10.0, 20.0)),
        Size::new(10.0, 20.0)
    );
}

#[test]
fn centered_rect_shares_center() {
    let frame = Rect::new(10.0, 20.0, 100.0, 50.0);
    let inner = frame.centered(Size::new(120.0, 50.0));
    assert_eq!(inner, Rect::new(0.0, 20.0, 120.0, 50.0));
    assert_eq!(inner.center(), frame.center());
}

#[test]
fn adjacent_rects_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 10.0, 10.0);
    let c = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&c));
    assert!(c.overlaps(&b));
}
