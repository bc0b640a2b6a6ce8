//! Comment indexing for fast lookup

use super::model::CommentRecord;
use crate::types::CommentId;
use std::collections::HashMap;

/// Id index over a borrowed slice of records
#[derive(Debug, Clone)]
pub struct CommentIndex<'a> {
    records: &'a [CommentRecord],
    by_id: HashMap<String, usize>,
}

impl<'a> CommentIndex<'a> {
    /// Build the index. When an id repeats, the first record wins.
    pub fn new(records: &'a [CommentRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            by_id.entry(record.id.key()).or_insert(pos);
        }
        Self { records, by_id }
    }

    /// Get a record by id
    pub fn get(&self, id: &CommentId) -> Option<&'a CommentRecord> {
        self.by_id.get(&id.key()).map(|&pos| &self.records[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let records = vec![CommentRecord::new(1, "one"), CommentRecord::new("two", "two")];
        let index = CommentIndex::new(&records);

        assert_eq!(index.get(&CommentId::Number(1)).unwrap().body, "one");
        assert_eq!(index.get(&CommentId::from("two")).unwrap().body, "two");
        assert!(index.get(&CommentId::Number(3)).is_none());
    }

    #[test]
    fn test_numeric_and_text_ids_match() {
        let records = vec![CommentRecord::new("17", "body")];
        let index = CommentIndex::new(&records);
        assert_eq!(index.get(&CommentId::Number(17)).unwrap().body, "body");
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let records = vec![CommentRecord::new(1, "first"), CommentRecord::new(1, "second")];
        let index = CommentIndex::new(&records);
        assert_eq!(index.get(&CommentId::Number(1)).unwrap().body, "first");
    }

    #[test]
    fn test_empty() {
        let index = CommentIndex::new(&[]);
        assert!(index.get(&CommentId::Number(1)).is_none());
    }
}
