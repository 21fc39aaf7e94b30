//! Record identifier generation.

use uuid::Uuid;

/// Generate a fresh record identifier.
///
/// Called once per created record. UUID v4 gives uniqueness across the
/// resource's lifetime without any shared counter state, so two concurrent
/// creations can never collide.
#[must_use]
pub fn next_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn ids_are_nonempty_strings() {
        let id = next_id();
        assert!(!id.is_empty());
        assert!(id.is_ascii());
    }
}
