//! # Chat Roster
//!
//! The fixed conversation list and the operations over it. Chats are
//! compiled-in fixture data: there is no create/update/delete, no
//! persistence, and every entry is a voice conversation. The rest of
//! the app only ever reads this roster.

/// A single conversation record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: u32,
    pub name: String,
    /// Avatar image reference. Always absent in the fixture; the UI
    /// falls back to [`initials`].
    pub avatar: Option<String>,
    pub last_message: String,
    /// Free-form activity label ("14:23", "Yesterday"), not a timestamp.
    pub time: String,
    pub unread: u32,
    pub is_voice: bool,
}

impl Chat {
    fn new(id: u32, name: &str, time: &str, unread: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            avatar: None,
            last_message: "Voice message".to_string(),
            time: time.to_string(),
            unread,
            is_voice: true,
        }
    }
}

/// The hardcoded roster, in display order.
pub fn roster() -> Vec<Chat> {
    vec![
        Chat::new(1, "Anna Smirnova", "14:23", 2),
        Chat::new(2, "Maxim Petrov", "13:45", 0),
        Chat::new(3, "Elena Volkova", "Yesterday", 1),
        Chat::new(4, "Dmitry Kozlov", "Yesterday", 0),
        Chat::new(5, "Olga Novikova", "21.11", 0),
    ]
}

/// Case-insensitive substring filter on display names.
///
/// Returns an ordered subsequence of `chats`; an empty query matches
/// everything.
pub fn filter<'a>(chats: &'a [Chat], query: &str) -> Vec<&'a Chat> {
    if query.is_empty() {
        return chats.iter().collect();
    }
    let needle = query.to_lowercase();
    chats
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}

/// Avatar fallback: uppercased first letter of each word in the name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_shape() {
        let chats = roster();
        assert_eq!(chats.len(), 5);
        assert_eq!(chats[0].id, 1);
        assert_eq!(chats[4].id, 5);
        assert!(chats.iter().all(|c| c.is_voice));
        assert!(chats.iter().all(|c| c.avatar.is_none()));
        assert_eq!(chats[0].unread, 2);
        assert_eq!(chats[2].unread, 1);
    }

    #[test]
    fn test_filter_empty_query_returns_all() {
        let chats = roster();
        let filtered = filter(&chats, "");
        assert_eq!(filtered.len(), 5);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let chats = roster();
        let filtered = filter(&chats, "aNNa");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Anna Smirnova");
    }

    #[test]
    fn test_filter_preserves_order() {
        let chats = roster();
        // "ov" hits Petrov, Volkova, Kozlov, Novikova, in roster order
        let filtered = filter(&chats, "ov");
        let ids: Vec<u32> = filtered.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_only_returns_matches() {
        let chats = roster();
        for query in ["anna", "OV", "e", "Smirnova", " "] {
            let filtered = filter(&chats, query);
            let needle = query.to_lowercase();
            assert!(
                filtered.iter().all(|c| c.name.to_lowercase().contains(&needle)),
                "query {query:?} returned a non-match"
            );
        }
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let chats = roster();
        assert!(filter(&chats, "zzz").is_empty());
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Anna Smirnova"), "AS");
        assert_eq!(initials("Olga Novikova"), "ON");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials(""), "");
    }
}
