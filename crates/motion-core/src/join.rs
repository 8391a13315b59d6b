// File: crates/motion-core/src/join.rs
// Summary: Keyed enter/update/exit join between the shapes drawn last pass and the data of this pass.

use indexmap::IndexSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Join {
    /// Keys new in this pass, in data order.
    pub enter: Vec<String>,
    /// Keys present in both passes, in data order.
    pub update: Vec<String>,
    /// Keys that disappeared, in previous order.
    pub exit: Vec<String>,
}

/// Live keys of one layer.
#[derive(Clone, Debug, Default)]
pub struct KeyedLayer {
    keys: IndexSet<String>,
}

impl KeyedLayer {
    pub fn new() -> Self { Self::default() }

    pub fn keys(&self) -> impl Iterator<Item = &str> { self.keys.iter().map(String::as_str) }

    pub fn len(&self) -> usize { self.keys.len() }

    pub fn is_empty(&self) -> bool { self.keys.is_empty() }

    /// Diff against `next` and adopt it as the live key set. Duplicate keys in
    /// `next` keep their first occurrence.
    pub fn join<I, S>(&mut self, next: I) -> Join
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next: IndexSet<String> = next.into_iter().map(Into::into).collect();
        let mut join = Join::default();
        for k in &next {
            if self.keys.contains(k) {
                join.update.push(k.clone());
            } else {
                join.enter.push(k.clone());
            }
        }
        join.exit = self.keys.iter().filter(|k| !next.contains(*k)).cloned().collect();
        self.keys = next;
        join
    }

    /// Forget every key, returning them as exits.
    pub fn clear(&mut self) -> Vec<String> {
        std::mem::take(&mut self.keys).into_iter().collect()
    }
}
