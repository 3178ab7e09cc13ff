use crate::error::{Result, VennError};
use ahash::AHashSet;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

/// Number of sets in a diagram. Only these five have a geometry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SetCount {
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl SetCount {
    pub const ALL: [SetCount; 5] = [
        SetCount::Two,
        SetCount::Three,
        SetCount::Four,
        SetCount::Five,
        SetCount::Six,
    ];

    pub fn get(self) -> usize {
        match self {
            SetCount::Two => 2,
            SetCount::Three => 3,
            SetCount::Four => 4,
            SetCount::Five => 5,
            SetCount::Six => 6,
        }
    }

    /// Number of non-empty regions, `2^n - 1`.
    pub fn n_petals(self) -> usize {
        (1usize << self.get()) - 1
    }

    /// All valid logic codes in increasing integer order.
    pub fn logics(self) -> impl Iterator<Item = LogicCode> {
        (1..=self.n_petals()).map(move |i| LogicCode::from_index(i, self))
    }
}

impl TryFrom<usize> for SetCount {
    type Error = VennError;

    fn try_from(n: usize) -> Result<Self> {
        match n {
            2 => Ok(SetCount::Two),
            3 => Ok(SetCount::Three),
            4 => Ok(SetCount::Four),
            5 => Ok(SetCount::Five),
            6 => Ok(SetCount::Six),
            other => Err(VennError::InvalidCardinality(other)),
        }
    }
}

impl fmt::Display for SetCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Binary inclusion code of a petal, e.g. `"101"`: in set 0 and 2, not in set 1.
///
/// Codes of the same width sort lexicographically in the same order as their
/// integer values, so a `BTreeMap<LogicCode, _>` iterates petals in code order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LogicCode(String);

impl LogicCode {
    /// Zero-padded binary representation of `index` for `count` sets.
    pub fn from_index(index: usize, count: SetCount) -> Self {
        LogicCode(format!("{:0width$b}", index, width = count.get()))
    }

    /// Validate a user-supplied key against `count` sets.
    pub fn parse(code: &str, count: SetCount) -> Result<Self> {
        let len = code.chars().count();
        if len != count.get() {
            return Err(VennError::LogicLength {
                code: code.to_string(),
                len,
                expected: count.get(),
            });
        }
        if !code.chars().all(|c| c == '0' || c == '1') {
            return Err(VennError::LogicAlphabet(code.to_string()));
        }
        if !code.contains('1') {
            return Err(VennError::IllegalLogic(code.to_string()));
        }
        Ok(LogicCode(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if set `set_idx` is part of this petal.
    pub fn includes(&self, set_idx: usize) -> bool {
        self.0.as_bytes().get(set_idx) == Some(&b'1')
    }

    pub fn index(&self) -> usize {
        usize::from_str_radix(&self.0, 2).unwrap_or(0)
    }
}

impl Borrow<str> for LogicCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One named input set.
#[derive(Debug, Clone)]
pub struct NamedSet<T> {
    pub name: String,
    pub elements: AHashSet<T>,
}

/// Insertion-ordered collection of uniquely named sets.
///
/// The insertion order is the set order: position `i` of every logic code,
/// the `i`-th palette color and the `i`-th legend entry all refer to the
/// `i`-th inserted set.
#[derive(Debug, Clone)]
pub struct SetCollection<T> {
    sets: Vec<NamedSet<T>>,
}

impl<T> Default for SetCollection<T> {
    fn default() -> Self {
        Self { sets: Vec::new() }
    }
}

impl<T: Eq + Hash> SetCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a set. Names must be unique.
    pub fn insert<I>(&mut self, name: impl Into<String>, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let name = name.into();
        if self.sets.iter().any(|s| s.name == name) {
            return Err(VennError::DuplicateName(name));
        }
        self.sets.push(NamedSet {
            name,
            elements: elements.into_iter().collect(),
        });
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_set<I>(mut self, name: impl Into<String>, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        self.insert(name, elements)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn sets(&self) -> &[NamedSet<T>] {
        &self.sets
    }

    pub fn names(&self) -> Vec<String> {
        self.sets.iter().map(|s| s.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&NamedSet<T>> {
        self.sets.iter().find(|s| s.name == name)
    }

    pub fn count(&self) -> Result<SetCount> {
        SetCount::try_from(self.sets.len())
    }

    /// Union of all sets.
    pub fn universe(&self) -> AHashSet<&T> {
        self.sets.iter().flat_map(|s| s.elements.iter()).collect()
    }
}

/// Display string per petal for a fixed number of sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetalLabels {
    count: SetCount,
    labels: BTreeMap<LogicCode, String>,
}

impl PetalLabels {
    pub fn new(count: SetCount) -> Self {
        Self {
            count,
            labels: BTreeMap::new(),
        }
    }

    /// Validate caller-supplied `code -> label` pairs against `names`.
    ///
    /// Every key must be a legal logic code for `names.len()` sets; the error
    /// names the first offending key.
    pub fn from_pairs<K, V, I>(pairs: I, names: &[String]) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let count = SetCount::try_from(names.len())?;
        let mut seen = AHashSet::with_capacity(names.len());
        if let Some(dup) = names.iter().find(|n| !seen.insert(n.as_str())) {
            return Err(VennError::DuplicateName(dup.clone()));
        }
        let mut out = PetalLabels::new(count);
        for (key, value) in pairs {
            let code = LogicCode::parse(key.as_ref(), count)?;
            out.labels.insert(code, value.into());
        }
        Ok(out)
    }

    pub(crate) fn insert(&mut self, code: LogicCode, label: String) {
        self.labels.insert(code, label);
    }

    pub fn count(&self) -> SetCount {
        self.count
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LogicCode, &str)> {
        self.labels.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &LogicCode> {
        self.labels.keys()
    }
}
