//! Semigroup trait for accumulating validation failures
//!
//! Compound validators never stop at the first failing child. Every element,
//! field, or tuple position is checked, and the failures are folded together
//! with [`Semigroup::combine`]. The only requirement on the fold is that it is
//! associative, so the order in which children are grouped never changes the
//! order in which their failures are reported.
//!
//! # Examples
//!
//! ```
//! use shapeguard::Semigroup;
//!
//! let first = vec!["root[0] is not string: 1"];
//! let second = vec!["root[2] is not string: true"];
//! assert_eq!(
//!     first.combine(second),
//!     vec!["root[0] is not string: 1", "root[2] is not string: true"]
//! );
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value. Clone first if the originals are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup_keeps_order() {
        let v1 = vec![1, 2];
        let v2 = vec![3];
        assert_eq!(v1.combine(v2), vec![1, 2, 3]);
    }

    #[test]
    fn test_vec_semigroup_empty() {
        let v1: Vec<i32> = vec![];
        assert_eq!(v1.combine(vec![1]), vec![1]);
    }

    #[test]
    fn test_vec_associativity() {
        let a = vec!["a"];
        let b = vec!["b"];
        let c = vec!["c"];

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}
