use duplicate::duplicate_item;
use std::borrow::Borrow;
use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

/// An unordered collection of distinct values.
///
/// Storage is allocated on the first insertion. Until then the set reads as
/// empty, so `Set::default()` and `Set::new()` can be used straight away,
/// including in `const` and `static` items.
#[derive(Clone)]
pub struct Set<T> {
    base: Option<HashMap<T, ()>>,
}

impl<T> Set<T> {
    pub const fn new() -> Self {
        Self { base: None }
    }

    pub fn len(&self) -> usize {
        self.base.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the elements in unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            keys: self.base.as_ref().map(HashMap::keys),
        }
    }

    /// Removes every element. Allocated storage is kept for reuse.
    pub fn clear(&mut self) {
        if let Some(base) = &mut self.base {
            base.clear();
        }
    }

    /// Calls `visitor` on each element until it returns `false`.
    ///
    /// The element for which `visitor` returned `false` is the last one
    /// visited. The set itself is never modified.
    pub fn visit(&self, mut visitor: impl FnMut(&T) -> bool) {
        for element in self.iter() {
            if !visitor(element) {
                break;
            }
        }
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Builds a set holding the distinct values of `elements`.
    pub fn of(elements: impl IntoIterator<Item = T>) -> Self {
        let mut set = Self::new();
        set.add(elements);
        set
    }

    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.base
            .as_ref()
            .is_some_and(|base| base.contains_key(element))
    }

    // `contains_any` holds when the sets share an element, `contains_all`
    // when every element of `other` is in `self` (vacuously for an empty
    // `other`).
    #[duplicate_item(
      method         quantifier;
      [contains_any] [any];
      [contains_all] [all];
    )]
    pub fn method(&self, other: &Self) -> bool {
        other.iter().quantifier(|element| self.contains(element))
    }

    /// Inserts each of `elements` not already present.
    pub fn add(&mut self, elements: impl IntoIterator<Item = T>) {
        let mut elements = elements.into_iter().peekable();
        if elements.peek().is_none() {
            return;
        }

        let base = self.base.get_or_insert_with(HashMap::new);
        base.extend(elements.map(|element| (element, ())));
    }

    /// Removes each of `elements` that is present.
    pub fn remove<'a, Q>(&mut self, elements: impl IntoIterator<Item = &'a Q>)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        if let Some(base) = &mut self.base {
            for element in elements {
                base.remove(element);
            }
        }
    }

    /// Removes every element that is also in `other`.
    pub fn remove_set(&mut self, other: &Self) {
        self.remove(other.iter());
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain(&mut self, mut predicate: impl FnMut(&T) -> bool) {
        if let Some(base) = &mut self.base {
            base.retain(|element, _| predicate(element));
        }
    }
}

impl<T: Hash + Eq + Clone> Set<T> {
    /// Inserts every element of `other`.
    pub fn add_set(&mut self, other: &Self) {
        self.add(other.iter().cloned());
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.contains_all(other)
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        Self::of(elements)
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a, T: Hash + Eq + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add(iter.into_iter().copied());
    }
}

pub struct Iter<'a, T> {
    keys: Option<hash_map::Keys<'a, T, ()>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

pub struct IntoIter<T> {
    keys: Option<hash_map::IntoKeys<T, ()>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            keys: self.base.map(HashMap::into_keys),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
