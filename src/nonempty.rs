//! Non-empty vector type
//!
//! A composite [`ValidationError`](crate::ValidationError) only exists because at
//! least one child failed. `NonEmptyVec<T>` carries that guarantee in the type, so
//! an empty composite error cannot be constructed.
//!
//! # Examples
//!
//! ```
//! use shapeguard::NonEmptyVec;
//!
//! let nev = NonEmptyVec::new("root[0]", vec!["root[2]"]);
//! assert_eq!(nev.head(), &"root[0]");
//! assert_eq!(nev.len(), 2);
//! ```

use crate::Semigroup;

/// A vector guaranteed to contain at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a head element and a tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector holding a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use shapeguard::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton(42);
    /// assert_eq!(nev.len(), 1);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Get the first element (always succeeds).
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Get the number of elements. Always >= 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`. Present to satisfy clippy's `len_without_is_empty` lint.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Convert into a regular `Vec`, preserving order.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

// Semigroup: concatenation
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(self, other: Self) -> Self {
        let mut rest = self.tail;
        rest.push(other.head);
        Self::new(self.head, rest.combine(other.tail))
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        if index == 0 {
            &self.head
        } else {
            &self.tail[index - 1]
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyVec<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton() {
        let nev = NonEmptyVec::singleton(42);
        assert_eq!(nev.head(), &42);
        assert_eq!(nev.len(), 1);
        assert!(!nev.is_empty());
    }

    #[test]
    fn test_semigroup_preserves_order() {
        let left = NonEmptyVec::new(1, vec![2]);
        let right = NonEmptyVec::new(3, vec![4]);
        assert_eq!(left.combine(right).into_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_iter_and_index() {
        let nev = NonEmptyVec::new("a", vec!["b", "c"]);
        assert_eq!(nev.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(nev[0], "a");
        assert_eq!(nev[2], "c");
    }

    #[test]
    fn test_into_iter_by_ref() {
        let nev = NonEmptyVec::new(1, vec![2]);
        let mut seen = Vec::new();
        for item in &nev {
            seen.push(*item);
        }
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let nev = NonEmptyVec::singleton(1);
        let _ = nev[1];
    }
}
