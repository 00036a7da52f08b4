use indexmap::IndexSet;

/// Ordered set of user-entered ingredient names.
///
/// Entries are trimmed and deduplicated by exact match at insertion time.
/// Order is preserved for display; it has no effect on matching.
#[derive(Debug, Clone, Default)]
pub struct IngredientSet {
    items: IndexSet<String>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient. Returns false if the name is empty after trimming
    /// or an exact duplicate of an existing entry.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.items.insert(name.to_string())
    }

    /// Remove an ingredient by exact name, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> bool {
        self.items.shift_remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Comma-joined query string for the search endpoint.
    ///
    /// An ingredient name that itself contains a comma is passed through
    /// verbatim; what the search endpoint does with it is undefined.
    pub fn to_query(&self) -> String {
        self.items.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }
}

impl<'a> FromIterator<&'a str> for IngredientSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.add(name);
        }
        set
    }
}
