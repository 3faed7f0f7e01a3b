//! String interner for identifiers, operators and literal text.
//!
//! Single-threaded: a formatter run owns its interner for the whole render,
//! so there is no per-shard locking.

use rustc_hash::FxHashMap;

use crate::arena::to_u32;
use crate::Name;

/// Interner mapping strings to compact [`Name`] handles.
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned as [`Name::EMPTY`].
    pub fn new() -> Self {
        let mut interner = Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        interner.strings.push("".into());
        interner.map.insert("".into(), Name::EMPTY);
        interner
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let name = Name::from_raw(to_u32(self.strings.len(), "interned strings"));
        self.strings.push(s.into());
        self.map.insert(s.into(), name);
        name
    }

    /// Look up an already-interned name without inserting.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Resolve a name back to its string.
    ///
    /// Names from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| s)
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_dedups() {
        let mut interner = StringInterner::new();
        let a = interner.intern("foo");
        let b = interner.intern("foo");
        let c = interner.intern("bar");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.len(), 3);
    }

    #[test]
    fn test_lookup_roundtrip() {
        let mut interner = StringInterner::new();
        let name = interner.intern(">>=");
        assert_eq!(interner.lookup(name), ">>=");
        assert_eq!(interner.lookup(Name::EMPTY), "");
    }

    #[test]
    fn test_get_does_not_insert() {
        let mut interner = StringInterner::new();
        assert_eq!(interner.get("x"), None);
        let x = interner.intern("x");
        assert_eq!(interner.get("x"), Some(x));
    }

    #[test]
    fn test_lookup_unknown_is_empty() {
        let interner = StringInterner::new();
        assert_eq!(interner.lookup(Name::from_raw(99)), "");
    }
}
