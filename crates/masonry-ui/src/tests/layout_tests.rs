use super::*;
use masonry_testing::{items_with_heights, TestItem};
use masonry_ui_layout::{balance_columns, BalanceStrategy};

const GALLERY: [f32; 6] = [200.0, 150.0, 300.0, 180.0, 220.0, 260.0];

fn build(items: &[TestItem], columns: usize, width: f32, spacing: f32) -> GridLayout {
    let geometry = GridGeometry::resolve(width, spacing, columns).expect("geometry");
    let partition = balance_columns(items, columns, BalanceStrategy::ItemCount).expect("partition");
    GridLayout::build(items, &partition, geometry)
}

#[test]
fn columns_run_left_to_right_and_items_stack_down() {
    let items = items_with_heights(&GALLERY);
    let layout = build(&items, 2, 400.0, 12.0);

    assert_eq!(layout.column_width(), 194.0);
    let xs: Vec<f32> = layout.columns().iter().map(|column| column.x).collect();
    assert_eq!(xs, vec![0.0, 206.0]);

    let first = layout.column(0).expect("column 0");
    let ys: Vec<f32> = first.items.iter().map(|placed| placed.frame.y).collect();
    assert_eq!(ys, vec![0.0, 212.0, 524.0]);
    assert_eq!(first.height, 744.0);

    let second = layout.column(1).expect("column 1");
    let ys: Vec<f32> = second.items.iter().map(|placed| placed.frame.y).collect();
    assert_eq!(ys, vec![0.0, 162.0, 354.0]);
    assert_eq!(second.height, 614.0);

    assert_eq!(layout.content_height(), 744.0);
    assert_eq!(layout.content_size(), Size::new(400.0, 744.0));
}

#[test]
fn every_item_gets_column_width_and_its_declared_height() {
    let items = items_with_heights(&GALLERY);
    let layout = build(&items, 2, 400.0, 12.0);

    for (index, item) in items.iter().enumerate() {
        let placed = layout.placement_of(index).expect("placed");
        assert_eq!(placed.index, index);
        assert_eq!(placed.frame.width, 194.0);
        assert_eq!(placed.frame.height, item.height);
        assert!(placed.constraints.is_tight());
        assert_eq!(
            placed.constraints.min_size(),
            Size::new(194.0, item.height)
        );
    }
    assert_eq!(layout.frame_of(3), Some(Rect::new(206.0, 162.0, 194.0, 180.0)));
    assert_eq!(layout.frame_of(6), None);
}

#[test]
fn placed_items_follow_column_order() {
    let items = items_with_heights(&GALLERY);
    let layout = build(&items, 3, 600.0, 0.0);
    let order: Vec<(usize, usize, usize)> = layout
        .placed_items()
        .map(|placed| (placed.index, placed.column, placed.row))
        .collect();
    assert_eq!(
        order,
        vec![
            (0, 0, 0),
            (3, 0, 1),
            (1, 1, 0),
            (4, 1, 1),
            (2, 2, 0),
            (5, 2, 1)
        ]
    );
    assert_eq!(layout.item_count(), 6);
}

#[test]
fn frames_never_overlap() {
    let heights: Vec<f32> = (0..40).map(|i| 40.0 + ((i * 37) % 200) as f32).collect();
    let items = items_with_heights(&heights);
    let layout = build(&items, 4, 1000.0, 8.0);
    let frames: Vec<Rect> = layout.placed_items().map(|placed| placed.frame).collect();
    for (i, a) in frames.iter().enumerate() {
        for b in &frames[i + 1..] {
            assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn unusable_heights_collapse_to_zero() {
    let items = items_with_heights(&[100.0, -5.0, f32::NAN]);
    let layout = build(&items, 1, 300.0, 12.0);
    let heights: Vec<f32> = layout
        .placed_items()
        .map(|placed| placed.frame.height)
        .collect();
    assert_eq!(heights, vec![100.0, 0.0, 0.0]);
    assert_eq!(layout.content_height(), 124.0);
}

#[test]
fn empty_columns_have_no_height() {
    let items = items_with_heights(&[120.0, 80.0]);
    let layout = build(&items, 4, 400.0, 0.0);
    assert_eq!(layout.columns().len(), 4);
    assert!(layout.columns()[2].items.is_empty());
    assert_eq!(layout.columns()[3].height, 0.0);
    assert_eq!(layout.content_height(), 120.0);

    let empty: Vec<TestItem> = Vec::new();
    let layout = build(&empty, 3, 300.0, 12.0);
    assert_eq!(layout.columns().len(), 3);
    assert_eq!(layout.content_height(), 0.0);
    assert_eq!(layout.placed_items().count(), 0);
}
