//! Frontend attribute maps
//!
//! A frontend attribute is an out-of-band `name -> value` string pair attached
//! to an instruction. Frontends and early passes use them to hand semantic
//! hints to later stages without changing the structure of the graph.
//!
//! Attributes are grouped in [`FrontendAttributes`] maps. An instruction does
//! not own a single merged map but a sequence of maps: each pass appends its
//! own map and never has to know (or overwrite) what other passes attached.
//! Readers therefore look for a key across *all* maps, see
//! [`FrontendAttributed`].
use std::collections::{BTreeMap, btree_map};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::FLAG_VALUE;

/// A single frontend attribute map.
///
/// Keys are unique within a map. Entries are kept sorted by key so that the
/// textual form is deterministic; the order carries no meaning.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FrontendAttributes {
    map: BTreeMap<String, String>,
}

impl FrontendAttributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map holding the single presence-only entry `name="true"`.
    pub fn flag(name: &str) -> Self {
        let mut attrs = Self::new();
        attrs.insert(name, FLAG_VALUE);
        attrs
    }

    /// Inserts `key = value` into this map.
    ///
    /// Within one map a later insert replaces the earlier value, which is
    /// returned. This never affects other maps attached to the same instruction.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.map.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FrontendAttributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attrs = Self::new();
        attrs.extend(iter);
        attrs
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for FrontendAttributes {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for FrontendAttributes {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

/// Returns true if `c` may appear in an unquoted attribute key.
pub fn is_bare_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

fn write_key(f: &mut std::fmt::Formatter<'_>, key: &str) -> std::fmt::Result {
    if !key.is_empty() && key.chars().all(is_bare_key_char) {
        write!(f, "{}", key)
    } else {
        write_quoted(f, key)
    }
}

fn write_quoted(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
    write!(f, "\"")?;
    for c in value.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "\"")
}

/// Renders the map as `{key="value", other="x"}`. Keys that are empty or
/// contain characters outside `[A-Za-z0-9_.-]` are quoted like values.
impl std::fmt::Display for FrontendAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_key(f, key)?;
            write!(f, "=")?;
            write_quoted(f, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(feature = "chumsky")]
impl std::str::FromStr for FrontendAttributes {
    type Err = crate::utils::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_frontend_attributes(s)
    }
}

/// Anything that owns a sequence of frontend attribute maps.
///
/// Implementors only provide the append-one-map and read-all-maps primitives;
/// lookups are derived from those and look through every attached map.
pub trait FrontendAttributed {
    /// All attribute maps attached so far, in append order.
    fn frontend_attribute_sets(&self) -> &[FrontendAttributes];

    /// Append a new attribute map. Existing maps are left untouched.
    fn add_frontend_attributes(&mut self, attrs: FrontendAttributes);

    /// Returns true if any attached map contains `key`.
    fn has_frontend_attribute(&self, key: &str) -> bool {
        self.frontend_attribute_sets()
            .iter()
            .any(|attrs| attrs.contains_key(key))
    }

    /// Value of `key` in the first map (in append order) that defines it.
    fn frontend_attribute(&self, key: &str) -> Option<&str> {
        self.frontend_attribute_sets()
            .iter()
            .find_map(|attrs| attrs.get(key))
    }

    /// Fold every attached map into one. On key collisions the first
    /// appended value wins, consistent with [`Self::frontend_attribute`].
    fn merged_frontend_attributes(&self) -> FrontendAttributes {
        let mut merged = FrontendAttributes::new();
        for attrs in self.frontend_attribute_sets() {
            for (key, value) in attrs.iter() {
                if !merged.contains_key(key) {
                    merged.insert(key, value);
                }
            }
        }
        merged
    }
}
