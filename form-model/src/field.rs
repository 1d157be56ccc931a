use indexmap::IndexMap;
use std::fmt;

/// One named, independently validated input of the form.
///
/// The variant list is the single source of truth for the form's key set:
/// validation, state initialization and rendering all enumerate `Field::ALL`,
/// so the three bookkeeping maps can never drift out of key-sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Age,
}

impl Field {
    /// Declaration order is also render order.
    pub const ALL: [Field; 2] = [Field::Name, Field::Age];

    /// Wire key, as reported in the submit payload.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Age => "Your age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Snapshot of the raw string value of every declared field.
///
/// Always holds an entry per `Field::ALL` member; values start empty and are
/// only ever overwritten, never removed.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldEntries {
    entries: IndexMap<Field, String>,
}

impl FieldEntries {
    pub fn new() -> Self {
        Self {
            entries: Field::ALL
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
        }
    }

    /// Builder-style overwrite, mostly for tests and fixtures.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: Field) -> &str {
        &self.entries[&field]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.entries.insert(field, value.into());
    }

    /// Fields with their current raw values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }
}

impl Default for FieldEntries {
    fn default() -> Self {
        Self::new()
    }
}
