use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Tile {
    id: usize,
    height: f32,
}

impl MasonryItem for Tile {
    type Key = usize;

    fn key(&self) -> usize {
        self.id
    }

    fn declared_height(&self) -> f32 {
        self.height
    }
}

fn tiles(heights: &[f32]) -> Vec<Tile> {
    heights
        .iter()
        .enumerate()
        .map(|(id, &height)| Tile { id, height })
        .collect()
}

// Deterministic spread of heights in [50, 350).
fn varied_tiles(count: usize) -> Vec<Tile> {
    (0..count)
        .map(|id| Tile {
            id,
            height: 50.0 + ((id * 7919) % 300) as f32,
        })
        .collect()
}

fn ids(partition: &ColumnPartition, items: &[Tile]) -> Vec<Vec<usize>> {
    partition
        .resolve(items)
        .into_iter()
        .map(|column| column.into_iter().map(|tile| tile.id).collect())
        .collect()
}

#[test]
fn five_items_two_columns_alternate() {
    let items = tiles(&[200.0, 150.0, 300.0, 180.0, 220.0]);
    let partition = balance_columns(&items, 2, BalanceStrategy::ItemCount).expect("valid");
    assert_eq!(ids(&partition, &items), vec![vec![0, 2, 4], vec![1, 3]]);
}

#[test]
fn empty_input_yields_empty_columns() {
    let items: Vec<Tile> = Vec::new();
    let partition = balance_columns(&items, 3, BalanceStrategy::ItemCount).expect("valid");
    assert_eq!(partition.column_count(), 3);
    assert!(partition.columns().all(|column| column.is_empty()));
    assert_eq!(partition.item_count(), 0);
}

#[test]
fn more_columns_than_items_leaves_trailing_columns_empty() {
    let items = tiles(&[10.0, 20.0]);
    let partition = balance_columns(&items, 4, BalanceStrategy::ItemCount).expect("valid");
    assert_eq!(ids(&partition, &items), vec![vec![0], vec![1], vec![], vec![]]);
}

#[test]
fn zero_columns_is_invalid_configuration() {
    let items = tiles(&[10.0]);
    for strategy in [BalanceStrategy::ItemCount, BalanceStrategy::DeclaredHeight] {
        let error = balance_columns(&items, 0, strategy).unwrap_err();
        assert!(error.is_invalid_configuration());
        assert_eq!(error.config_error(), ConfigError::ZeroColumns);
    }
}

#[test]
fn partition_is_exact_balanced_and_order_preserving() {
    for count in 0..40 {
        let items = varied_tiles(count);
        for columns in 1..8 {
            let partition =
                balance_columns(&items, columns, BalanceStrategy::ItemCount).expect("valid");
            assert_eq!(partition.column_count(), columns);
            assert_eq!(partition.item_count(), count);

            let mut seen = vec![false; count];
            for column in partition.columns() {
                assert!(column.windows(2).all(|pair| pair[0] < pair[1]));
                for &index in column {
                    assert!(!seen[index], "index {index} assigned twice");
                    seen[index] = true;
                }
            }
            assert!(seen.iter().all(|&assigned| assigned));

            let lengths: Vec<usize> = partition.columns().map(|column| column.len()).collect();
            let max = lengths.iter().copied().max().unwrap_or(0);
            let min = lengths.iter().copied().min().unwrap_or(0);
            assert!(max - min <= 1, "{count} items over {columns}: {lengths:?}");
        }
    }
}

#[test]
fn rerunning_yields_identical_partition() {
    let items = varied_tiles(23);
    for strategy in [BalanceStrategy::ItemCount, BalanceStrategy::DeclaredHeight] {
        let first = balance_columns(&items, 3, strategy).expect("valid");
        let second = balance_columns(&items, 3, strategy).expect("valid");
        assert_eq!(first, second);
    }
}

#[test]
fn count_strategy_ignores_heights() {
    let items = tiles(&[1000.0, 10.0, 10.0, 10.0]);
    let partition = balance_columns(&items, 2, BalanceStrategy::ItemCount).expect("valid");
    assert_eq!(ids(&partition, &items), vec![vec![0, 2], vec![1, 3]]);
}

#[test]
fn height_strategy_fills_the_shortest_column() {
    let items = tiles(&[1000.0, 10.0, 10.0, 10.0]);
    let partition = balance_columns(&items, 2, BalanceStrategy::DeclaredHeight).expect("valid");
    assert_eq!(ids(&partition, &items), vec![vec![0], vec![1, 2, 3]]);
}

#[test]
fn height_strategy_breaks_ties_towards_lowest_index() {
    let items = tiles(&[100.0, 100.0, 50.0, 50.0, 20.0]);
    let partition = balance_columns(&items, 3, BalanceStrategy::DeclaredHeight).expect("valid");
    // Loads after three items: [100, 100, 50]; the fourth goes to column 2
    // (now 100), the fifth to column 0.
    assert_eq!(ids(&partition, &items), vec![vec![0, 4], vec![1], vec![2, 3]]);
}

#[test]
fn height_strategy_treats_unusable_heights_as_zero() {
    let items = tiles(&[f32::NAN, -40.0, 30.0]);
    let partition = balance_columns(&items, 2, BalanceStrategy::DeclaredHeight).expect("valid");
    // Both early columns stay at zero load, so ties keep picking column 0
    // until the 30pt item lands there.
    assert_eq!(ids(&partition, &items), vec![vec![0, 1, 2], vec![]]);
}

#[test]
fn column_of_finds_assignment() {
    let items = tiles(&[1.0, 1.0, 1.0]);
    let partition = balance_columns(&items, 2, BalanceStrategy::ItemCount).expect("valid");
    assert_eq!(partition.column_of(0), Some(0));
    assert_eq!(partition.column_of(1), Some(1));
    assert_eq!(partition.column_of(2), Some(0));
    assert_eq!(partition.column_of(3), None);
}

#[test]
fn shortest_column_prefers_first_minimum() {
    assert_eq!(find_shortest_column(&[3.0, 1.0, 1.0]), 1);
    assert_eq!(find_shortest_column(&[0.0, 0.0]), 0);
    assert_eq!(find_shortest_column::<f32>(&[]), 0);
}

#[test]
fn item_counts_stay_exact_past_float_precision() {
    let base = 1usize << 24;
    // An f32 counter can no longer tell these loads apart.
    assert_eq!(base as f32 + 1.0, base as f32);

    assert_eq!(find_shortest_column(&[base + 1, base]), 1);
    assert_eq!(find_shortest_column(&[base + 1, base + 1, base]), 2);
    assert_eq!(find_shortest_column(&[base, base]), 0);
}
