use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;

/// Identifies the element holding one mapping in the registry table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The parts of the editor page the actions read from and mutate.
pub trait Document: Send + Sync {
    /// Current value of the input with the given id.
    fn value_of(&self, id: &str) -> Option<String>;

    /// Detaches `row` from the page. Returns false if it wasn't there.
    fn remove_row(&self, row: &RowId) -> bool;
}

#[derive(Debug, Default)]
struct State {
    fields: HashMap<String, String>,
    rows: Vec<RowId>,
}

/// A document kept in memory, for headless editing.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: Mutex<State>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_value(id, value);
        self
    }

    pub fn with_rows<I, R>(self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.state
            .lock()
            .rows
            .extend(rows.into_iter().map(RowId::new));
        self
    }

    pub fn set_value(&self, id: impl Into<String>, value: impl Into<String>) {
        self.state.lock().fields.insert(id.into(), value.into());
    }

    pub fn insert_row(&self, row: RowId) {
        self.state.lock().rows.push(row);
    }

    pub fn rows(&self) -> Vec<RowId> {
        self.state.lock().rows.clone()
    }
}

impl Document for MemoryDocument {
    fn value_of(&self, id: &str) -> Option<String> {
        self.state.lock().fields.get(id).cloned()
    }

    fn remove_row(&self, row: &RowId) -> bool {
        let mut state = self.state.lock();
        match state.rows.iter().position(|r| r == row) {
            Some(index) => {
                state.rows.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_latest_field_value() {
        let doc = MemoryDocument::new().with_field("destination", "https://a");
        doc.set_value("destination", "https://b");
        assert_eq!(doc.value_of("destination").as_deref(), Some("https://b"));
        assert_eq!(doc.value_of("missing"), None);
    }

    #[test]
    fn removes_only_the_named_row() {
        let doc = MemoryDocument::new().with_rows(["row-1", "row-2", "row-3"]);
        assert!(doc.remove_row(&RowId::new("row-2")));
        assert!(!doc.remove_row(&RowId::new("row-2")));
        assert_eq!(doc.rows(), vec![RowId::new("row-1"), RowId::new("row-3")]);
    }
}
