use std::collections::HashMap;
use std::hash::Hash;

use crate::models::ApplicationId;

/// Per-session multi-select state.
///
/// Keys that were never touched read as unselected. Flags for items that drop
/// out of the current view are kept, so narrowing and widening a filter does not
/// lose the user's picks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet<K = ApplicationId>
where
    K: Eq + Hash,
{
    flags: HashMap<K, bool>,
}

impl<K: Eq + Hash> Default for SelectionSet<K> {
    fn default() -> Self {
        Self {
            flags: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> SelectionSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set with every key present and unselected
    pub fn unselected<'a>(keys: impl IntoIterator<Item = &'a K>) -> Self
    where
        K: 'a,
    {
        Self {
            flags: keys.into_iter().map(|key| (key.clone(), false)).collect(),
        }
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Flips one flag and returns its new value
    pub fn toggle(&mut self, key: &K) -> bool {
        let flag = self.flags.entry(key.clone()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn set(&mut self, key: &K, selected: bool) {
        self.flags.insert(key.clone(), selected);
    }

    /// Sets every key of `view` to `selected`; keys outside the view are untouched.
    pub fn select_all<'a>(&mut self, view: impl IntoIterator<Item = &'a K>, selected: bool)
    where
        K: 'a,
    {
        for key in view {
            self.set(key, selected);
        }
    }

    pub fn selected_count(&self) -> usize {
        self.flags.values().filter(|selected| **selected).count()
    }

    /// Selected keys, ordered as they appear in `ordered`
    pub fn selected_in<'a>(&self, ordered: impl IntoIterator<Item = &'a K>) -> Vec<K>
    where
        K: 'a,
    {
        ordered
            .into_iter()
            .filter(|key| self.is_selected(key))
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.flags.clear();
    }
}
