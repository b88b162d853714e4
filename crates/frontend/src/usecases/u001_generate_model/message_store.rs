use contracts::domain::a001_chat_message::ChatMessage;

/// Ordered, append-only list of chat entries for the current session.
///
/// Insertion order is display order. Every mutation bumps `revision` so the
/// view can scroll to the newest entry.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<ChatMessage>,
    revision: u64,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.revision += 1;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut store = MessageStore::new();
        store.append(ChatMessage::user("first"));
        store.append(ChatMessage::bot("second", None, None));
        store.append(ChatMessage::user("first"));

        let texts: Vec<&str> = store.messages().iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["first", "second", "first"]);
        assert_eq!(store.messages().last().map(|m| m.text()), Some("first"));
    }

    #[test]
    fn test_clear_empties() {
        let mut store = MessageStore::new();
        for i in 0..5 {
            store.append(ChatMessage::user(format!("m{}", i)));
        }
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);

        store.clear();
        assert!(store.messages().is_empty());
    }

    #[test]
    fn test_every_mutation_bumps_revision() {
        let mut store = MessageStore::new();
        assert_eq!(store.revision(), 0);
        store.append(ChatMessage::user("a"));
        assert_eq!(store.revision(), 1);
        store.clear();
        assert_eq!(store.revision(), 2);
        store.clear();
        assert_eq!(store.revision(), 3);
    }
}
