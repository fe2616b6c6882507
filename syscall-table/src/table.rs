/// In-memory form of the master file.
use std::collections::btree_map::{self, BTreeMap};

/// Upper bound on arguments a call can take: the calling convention
/// passes them in six registers.
pub const MAX_ARGS: i64 = 6;

/// One line of the master file.
///
/// `arg_count` is signed so that out-of-range values reach validation
/// intact instead of failing to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallDefinition {
    number: u32,
    name: String,
    arg_count: i64,
}

impl CallDefinition {
    pub fn new(number: u32, name: impl Into<String>, arg_count: i64) -> Self {
        Self {
            number,
            name: name.into(),
            arg_count,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arg_count(&self) -> i64 {
        self.arg_count
    }
}

/// Call definitions keyed by call number, iterated in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallTable {
    entries: BTreeMap<u32, CallDefinition>,
}

impl CallTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition. A definition already present under the same
    /// number is replaced and returned.
    pub fn insert(&mut self, def: CallDefinition) -> Option<CallDefinition> {
        self.entries.insert(def.number, def)
    }

    pub fn get(&self, number: u32) -> Option<&CallDefinition> {
        self.entries.get(&number)
    }

    pub fn contains(&self, number: u32) -> bool {
        self.entries.contains_key(&number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.values(),
        }
    }

    pub fn numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    pub fn max_number(&self) -> Option<u32> {
        self.entries.keys().next_back().copied()
    }

    /// One past the highest call number: the size any array indexed by
    /// call number must have. Derived from the current contents each time.
    pub fn max_nr(&self) -> Option<u64> {
        self.max_number().map(|n| u64::from(n) + 1)
    }
}

pub struct Iter<'a> {
    inner: btree_map::Values<'a, u32, CallDefinition>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CallDefinition;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a CallTable {
    type Item = &'a CallDefinition;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<CallDefinition> for CallTable {
    fn from_iter<I: IntoIterator<Item = CallDefinition>>(iter: I) -> Self {
        let mut table = CallTable::new();
        for def in iter {
            table.insert(def);
        }
        table
    }
}
