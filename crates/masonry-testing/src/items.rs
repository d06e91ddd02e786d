use masonry_ui_layout::MasonryItem;

/// Grid item with a numeric identity and a synthetic content source.
#[derive(Clone, Debug, PartialEq)]
pub struct TestItem {
    pub id: u32,
    pub height: f32,
    pub source: String,
}

impl TestItem {
    pub fn new(id: u32, height: f32) -> Self {
        Self {
            id,
            height,
            source: format!("test://image/{id}"),
        }
    }
}

impl MasonryItem for TestItem {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn declared_height(&self) -> f32 {
        self.height
    }
}

/// One item per height, with ids counting up from zero.
pub fn items_with_heights(heights: &[f32]) -> Vec<TestItem> {
    heights
        .iter()
        .zip(0u32..)
        .map(|(&height, id)| TestItem::new(id, height))
        .collect()
}
