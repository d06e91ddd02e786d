use super::*;

#[derive(Clone, Debug)]
struct Tile {
    id: &'static str,
    height: f32,
}

impl MasonryItem for Tile {
    type Key = &'static str;

    fn key(&self) -> &'static str {
        self.id
    }

    fn declared_height(&self) -> f32 {
        self.height
    }
}

fn gallery() -> Vec<Tile> {
    vec![
        Tile { id: "a", height: 200.0 },
        Tile { id: "b", height: 150.0 },
        Tile { id: "c", height: 300.0 },
    ]
}

#[test]
fn unchanged_inputs_hit_the_memo() {
    let items = gallery();
    let mut memo = PartitionMemo::new();
    let first = memo
        .partition(&items, 2, BalanceStrategy::ItemCount)
        .expect("valid")
        .clone();
    let second = memo
        .partition(&items, 2, BalanceStrategy::ItemCount)
        .expect("valid")
        .clone();
    assert_eq!(first, second);
    assert_eq!((memo.hits(), memo.misses()), (1, 1));
}

#[test]
fn column_count_or_identity_change_misses() {
    let mut items = gallery();
    let mut memo = PartitionMemo::new();
    memo.partition(&items, 2, BalanceStrategy::ItemCount)
        .expect("valid");
    memo.partition(&items, 3, BalanceStrategy::ItemCount)
        .expect("valid");
    items.swap(0, 1);
    let reordered = memo
        .partition(&items, 3, BalanceStrategy::ItemCount)
        .expect("valid")
        .clone();
    assert_eq!(memo.misses(), 3);
    assert_eq!(
        reordered,
        ColumnBalancer::new(BalanceStrategy::ItemCount)
            .balance(&items, 3)
            .expect("valid")
    );
}

#[test]
fn height_changes_only_matter_to_height_strategy() {
    let mut items = gallery();
    let mut memo = PartitionMemo::new();
    memo.partition(&items, 2, BalanceStrategy::ItemCount)
        .expect("valid");
    items[0].height = 10.0;
    memo.partition(&items, 2, BalanceStrategy::ItemCount)
        .expect("valid");
    assert_eq!(memo.hits(), 1);

    memo.partition(&items, 2, BalanceStrategy::DeclaredHeight)
        .expect("valid");
    items[0].height = 500.0;
    memo.partition(&items, 2, BalanceStrategy::DeclaredHeight)
        .expect("valid");
    assert_eq!(memo.hits(), 1);
    assert_eq!(memo.misses(), 3);
}

#[test]
fn failed_pass_keeps_previous_entry() {
    let items = gallery();
    let mut memo = PartitionMemo::new();
    memo.partition(&items, 2, BalanceStrategy::ItemCount)
        .expect("valid");
    assert!(memo.partition(&items, 0, BalanceStrategy::ItemCount).is_err());
    memo.partition(&items, 2, BalanceStrategy::ItemCount)
        .expect("valid");
    assert_eq!((memo.hits(), memo.misses()), (1, 1));
}

#[test]
fn invalidate_forces_recompute() {
    let items = gallery();
    let mut memo = PartitionMemo::new();
    memo.partition(&items, 2, BalanceStrategy::ItemCount)
        .expect("valid");
    memo.invalidate();
    memo.partition(&items, 2, BalanceStrategy::ItemCount)
        .expect("valid");
    assert_eq!(memo.misses(), 2);
}
