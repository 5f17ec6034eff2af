use indexmap::IndexMap;
use serde::Serialize;

/// Label name -> byte address, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Labels {
    labels: IndexMap<String, u8>,
}

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, addr: u8) -> Option<u8> {
        self.labels.insert(name, addr)
    }

    pub fn get(&self, name: &str) -> Option<u8> {
        self.labels.get(name).copied()
    }

    /// Every label declared at `addr`.
    pub fn at(&self, addr: u8) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(move |(_, a)| *a == addr)
            .map(|(name, _)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.labels.iter().map(|(name, addr)| (name.as_str(), *addr))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Placeholder bytes waiting for a label address.
#[derive(Debug, Default)]
pub struct Backpatches(Vec<(usize, String)>);

impl Backpatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, offset: usize, name: String) {
        self.0.push((offset, name));
    }

    pub fn iter(&self) -> impl Iterator<Item = &(usize, String)> {
        self.0.iter()
    }
}
