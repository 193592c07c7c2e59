use std::collections::HashMap;

use crate::record::GlyphRecord;

/// Owns a set of [`GlyphRecord`]s keyed by glyph id. Insertion order is
/// irrelevant (spec §3); keys are unique by construction since inserting a
/// duplicate id replaces the previous record.
pub struct GlyphTable<P> {
    records: HashMap<i32, GlyphRecord<P>>,
}

impl<P> GlyphTable<P> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Insert a record, keyed by its own `id`. Returns the previous record
    /// at that id, if any (mirrors `addGlyph` from spec §4.1).
    pub fn insert(&mut self, record: GlyphRecord<P>) -> Option<GlyphRecord<P>> {
        self.records.insert(record.id, record)
    }

    pub fn get(&self, id: i32) -> Option<&GlyphRecord<P>> {
        self.records.get(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<P> Default for GlyphTable<P> {
    fn default() -> Self {
        Self::new()
    }
}
