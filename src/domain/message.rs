/// A single piece of user-entered text shown in the message list.
///
/// The text is never empty after trimming. It is kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
}

impl Message {
    /// Builds a message, or returns `None` when the text is empty or whitespace-only.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }

        Some(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_regular_text() {
        let message = Message::new("Hello world").expect("text is not empty");

        assert_eq!(message.text(), "Hello world");
    }

    #[test]
    fn new_rejects_empty_text() {
        assert_eq!(Message::new(""), None);
    }

    #[test]
    fn new_rejects_whitespace_only_text() {
        assert_eq!(Message::new("  \t \n "), None);
    }

    #[test]
    fn new_keeps_surrounding_whitespace_as_typed() {
        let message = Message::new("  padded ").expect("text is not empty");

        assert_eq!(message.text(), "  padded ");
    }
}
