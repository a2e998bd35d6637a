//! Order specification types

/// Single ORDER BY entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEntry {
    /// Field with an explicit direction, validated when compiled
    Named { field: String, direction: String },
    /// Field sorted ascending
    Positional(String),
}

/// Ordered list of sort entries. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderSpec {
    pub entries: Vec<OrderEntry>,
}

impl OrderSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with a direction token such as "ASC" or "desc"
    pub fn by(mut self, field: &str, direction: &str) -> Self {
        self.entries.push(OrderEntry::Named {
            field: field.to_string(),
            direction: direction.to_string(),
        });
        self
    }

    pub fn asc(self, field: &str) -> Self {
        self.by(field, "ASC")
    }

    pub fn desc(self, field: &str) -> Self {
        self.by(field, "DESC")
    }

    /// Add a field without a direction
    pub fn field(mut self, field: &str) -> Self {
        self.entries.push(OrderEntry::Positional(field.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<S: Into<String>> FromIterator<S> for OrderSpec {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|field| OrderEntry::Positional(field.into()))
                .collect(),
        }
    }
}
