use super::*;

#[test]
fn two_columns_split_remaining_width() {
    let geometry = GridGeometry::resolve(636.0, 12.0, 2).expect("valid");
    assert_eq!(geometry.column_width(), 312.0);
    assert_eq!(geometry.column_offsets(), vec![0.0, 324.0]);
}

#[test]
fn single_column_takes_full_width() {
    let geometry = GridGeometry::resolve(375.0, 12.0, 1).expect("valid");
    assert_eq!(geometry.column_width(), 375.0);
    assert_eq!(geometry.column_offsets(), vec![0.0]);
}

#[test]
fn spacing_wider_than_content_is_rejected() {
    let error = GridGeometry::resolve(10.0, 12.0, 2).unwrap_err();
    assert!(error.is_invalid_configuration());
    assert_eq!(
        error.config_error(),
        ConfigError::NonPositiveColumnWidth {
            total_width: 10.0,
            spacing: 12.0,
            columns: 2,
        }
    );
}

#[test]
fn exactly_consumed_width_is_rejected() {
    assert!(GridGeometry::resolve(24.0, 12.0, 3).is_err());
    assert!(GridGeometry::resolve(0.0, 0.0, 1).is_err());
}

#[test]
fn zero_columns_is_rejected() {
    let error = GridGeometry::resolve(100.0, 0.0, 0).unwrap_err();
    assert_eq!(error.config_error(), ConfigError::ZeroColumns);
}

#[test]
fn non_finite_and_negative_inputs_are_rejected() {
    assert!(matches!(
        GridGeometry::resolve(f32::NAN, 0.0, 2).unwrap_err().config_error(),
        ConfigError::NonFiniteGeometry { .. }
    ));
    assert!(matches!(
        GridGeometry::resolve(100.0, f32::INFINITY, 2)
            .unwrap_err()
            .config_error(),
        ConfigError::NonFiniteGeometry { .. }
    ));
    assert_eq!(
        GridGeometry::resolve(100.0, -1.0, 2).unwrap_err().config_error(),
        ConfigError::NegativeSpacing { spacing: -1.0 }
    );
}

#[test]
fn item_constraints_are_tight_to_column_width_and_declared_height() {
    let geometry = GridGeometry::resolve(636.0, 12.0, 2).expect("valid");
    let constraints = geometry.item_constraints(150.0);
    assert!(constraints.is_tight());
    assert_eq!(constraints.min_size(), masonry_ui_graphics::Size::new(312.0, 150.0));
    assert_eq!(geometry.item_constraints(-5.0).max_height, 0.0);
}
