//! Append-only ordered collection of sent messages.

use super::message::Message;

/// Read side of a list the renderer draws from.
///
/// The renderer asks for the row count and then for each row it needs.
pub trait RowSource {
    fn row_count(&self) -> usize;
    fn row_at(&self, index: usize) -> Option<&Message>;
}

/// Notification that a row was added at the tail of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowInserted {
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    /// Appends `text` as a new message at the end.
    ///
    /// Empty or whitespace-only text is ignored and `None` is returned.
    pub fn append(&mut self, text: &str) -> Option<RowInserted> {
        let message = Message::new(text)?;
        self.messages.push(message);

        Some(RowInserted {
            index: self.messages.len() - 1,
        })
    }

    pub fn count(&self) -> usize {
        self.messages.len()
    }

    /// Returns the message at `index`, or `None` when out of range.
    pub fn at(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl RowSource for MessageStore {
    fn row_count(&self) -> usize {
        self.count()
    }

    fn row_at(&self, index: usize) -> Option<&Message> {
        self.at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = MessageStore::default();

        assert!(store.is_empty());
        assert_eq!(store.count(), 0);
        assert_eq!(store.at(0), None);
    }

    #[test]
    fn append_to_empty_store_adds_first_message() {
        let mut store = MessageStore::default();

        let inserted = store.append("hello");

        assert_eq!(inserted, Some(RowInserted { index: 0 }));
        assert_eq!(store.count(), 1);
        assert_eq!(store.at(0).map(Message::text), Some("hello"));
    }

    #[test]
    fn append_empty_text_is_noop() {
        let mut store = MessageStore::default();

        assert_eq!(store.append(""), None);
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn append_whitespace_only_text_is_noop() {
        let mut store = MessageStore::default();
        store.append("first");

        for blank in [" ", "\t", "   \n  ", "\u{3000}"] {
            assert_eq!(store.append(blank), None, "accepted {blank:?}");
        }

        assert_eq!(store.count(), 1);
    }

    #[test]
    fn append_grows_by_exactly_one_and_stores_text_at_tail() {
        let mut store = MessageStore::default();

        for (i, text) in ["a", " b ", "hello world", "Привет", "🙂"].iter().enumerate() {
            let before = store.count();
            let inserted = store.append(text);

            assert_eq!(inserted, Some(RowInserted { index: i }));
            assert_eq!(store.count(), before + 1);
            assert_eq!(store.at(store.count() - 1).map(Message::text), Some(*text));
        }
    }

    #[test]
    fn preserves_insertion_order() {
        let mut store = MessageStore::default();
        let texts: Vec<String> = (0..20).map(|i| format!("message {i}")).collect();

        for text in &texts {
            store.append(text);
        }

        assert_eq!(store.count(), texts.len());
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(store.at(i).map(Message::text), Some(text.as_str()));
        }
    }

    #[test]
    fn three_appends_leave_last_at_index_two() {
        let mut store = MessageStore::default();
        store.append("a");
        store.append("b");
        let inserted = store.append("c");

        assert_eq!(inserted, Some(RowInserted { index: 2 }));
        assert_eq!(store.count(), 3);
        assert_eq!(store.at(2).map(Message::text), Some("c"));
        assert_eq!(store.at(3), None);
    }

    #[test]
    fn row_source_mirrors_store_contents() {
        let mut store = MessageStore::default();
        store.append("one");
        store.append("two");

        let source: &dyn RowSource = &store;

        assert_eq!(source.row_count(), 2);
        assert_eq!(source.row_at(1).map(Message::text), Some("two"));
        assert_eq!(source.row_at(2), None);
    }
}
