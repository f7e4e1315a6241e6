use std::collections::HashMap;

/// A secondary index over one column of a [`super::Table`].
///
/// Maps a column value to every row position whose insert supplied that value,
/// in insertion order. Many rows may share a value.
///
/// # Issues
/// - Buckets only ever grow. An update rewrites the row a position points to,
/// it never moves a position from one bucket to another, so a rewritten payload
/// stays reachable under the value it was inserted with.
#[derive(Default)]
pub(crate) struct ColumnIndex {
    value_rows_map: HashMap<String, Vec<usize>>,
}

impl ColumnIndex {
    pub fn new() -> ColumnIndex {
        ColumnIndex {
            value_rows_map: HashMap::new(),
        }
    }

    pub fn insert(&mut self, value: &str, position: usize) {
        self.value_rows_map
            .entry(value.to_string())
            .or_default()
            .push(position);
    }

    pub fn get(&self, value: &str) -> Option<&[usize]> {
        self.value_rows_map.get(value).map(Vec::as_slice)
    }

    pub fn n_values(&self) -> usize {
        self.value_rows_map.len()
    }
}
