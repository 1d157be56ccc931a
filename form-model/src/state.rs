//! Generic merge-patch store, instantiated three times per form
//! (errors, changed, touched). The three instances never interact directly.

use crate::field::Field;
use indexmap::IndexMap;

/// Field-keyed state mapping with a single transition: `merge`.
///
/// Mirrors a reducer whose action is a partial map: patched keys are
/// overwritten, the rest keep their previous values. The key set is fixed at
/// construction (`Field::ALL`), so merging is total and the map never grows
/// or shrinks.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStates<V> {
    states: IndexMap<Field, V>,
}

impl<V: Clone + Default> FieldStates<V> {
    /// All fields at their default ("falsy") state.
    pub fn new() -> Self {
        Self {
            states: Field::ALL
                .into_iter()
                .map(|field| (field, V::default()))
                .collect(),
        }
    }

    /// Immutable merge-patch: a copy of this map with every patched key
    /// overwritten by the supplied value.
    #[must_use]
    pub fn merge(&self, patch: impl IntoIterator<Item = (Field, V)>) -> Self {
        let mut next = self.clone();
        for (field, value) in patch {
            next.states.insert(field, value);
        }
        next
    }

    pub fn get(&self, field: Field) -> &V {
        &self.states[&field]
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.states.values()
    }
}

impl<V: Clone + Default> Default for FieldStates<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Field → current error message; `Some` only for currently invalid fields.
pub type ErrorStates = FieldStates<Option<String>>;

/// Field → boolean flag (used for both `changed` and `touched`).
pub type FlagStates = FieldStates<bool>;

impl FieldStates<Option<String>> {
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).as_deref()
    }

    /// True iff no field currently carries an error message.
    pub fn all_clear(&self) -> bool {
        self.values().all(Option::is_none)
    }
}

impl FieldStates<bool> {
    pub fn is_set(&self, field: Field) -> bool {
        *self.get(field)
    }

    /// True iff at least one flag is set.
    pub fn any_set(&self) -> bool {
        self.values().any(|flag| *flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_flags_are_all_false() {
        let flags = FlagStates::new();
        assert!(!flags.any_set());
        for field in Field::ALL {
            assert!(!flags.is_set(field));
        }
    }

    #[test]
    fn merge_overwrites_patched_keys_and_retains_the_rest() {
        let flags = FlagStates::new().merge([(Field::Name, true)]);
        assert!(flags.is_set(Field::Name));
        assert!(!flags.is_set(Field::Age));

        let flags = flags.merge([(Field::Name, false), (Field::Age, true)]);
        assert!(!flags.is_set(Field::Name));
        assert!(flags.is_set(Field::Age));
    }

    #[test]
    fn merge_leaves_the_original_untouched() {
        let before = FlagStates::new();
        let after = before.merge([(Field::Age, true)]);
        assert!(!before.any_set());
        assert!(after.any_set());
    }

    #[test]
    fn error_map_helpers_track_messages() {
        let errors = ErrorStates::new();
        assert!(errors.all_clear());

        let errors = errors.merge([(Field::Age, Some("Must be at least 18".to_string()))]);
        assert!(!errors.all_clear());
        assert_eq!(errors.message(Field::Age), Some("Must be at least 18"));
        assert_eq!(errors.message(Field::Name), None);
    }
}
