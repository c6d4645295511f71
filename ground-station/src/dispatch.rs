/// One selectable menu entry.
#[derive(Debug, Clone)]
pub struct Entry<T> {
    pub token: &'static str,
    pub description: &'static str,
    pub action: T,
}

/// Maps operator input tokens to actions.
#[derive(Debug, Clone)]
pub struct DispatchTable<T> {
    entries: Vec<Entry<T>>,
}

impl<T> DispatchTable<T> {
    pub fn new(entries: Vec<Entry<T>>) -> Self {
        Self { entries }
    }

    /// Action bound to `token`, ignoring surrounding whitespace.
    pub fn lookup(&self, token: &str) -> Option<&T> {
        let token = token.trim();
        self.entries
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| &entry.action)
    }

    /// Menu text, one `token: description` line per entry.
    pub fn menu(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}: {}", entry.token, entry.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DispatchTable<u8> {
        DispatchTable::new(vec![
            Entry {
                token: "a",
                description: "first",
                action: 1,
            },
            Entry {
                token: "b",
                description: "second",
                action: 2,
            },
        ])
    }

    #[test]
    fn test_lookup() {
        let table = table();

        assert_eq!(table.lookup("a"), Some(&1));
        assert_eq!(table.lookup(" b\t"), Some(&2));
        assert_eq!(table.lookup("A"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_menu_lists_entries_in_order() {
        assert_eq!(table().menu(), "a: first\nb: second");
    }
}
