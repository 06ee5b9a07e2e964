//! A generic hash set whose default value is usable without construction.
//!
//! ```
//! use unique_set::{set, Set};
//!
//! let mut seen: Set<i32> = Set::default();
//! assert!(!seen.contains(&1));
//!
//! seen.add([1, 2, 3]);
//! seen.remove_set(&set![2]);
//! assert_eq!(seen, set![1, 3]);
//! ```

pub mod set;

pub use set::{IntoIter, Iter, Set};

/// Builds a [`Set`] from a list of elements, collapsing duplicates.
///
/// `set![]` is the same as [`Set::new`].
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Set::of([$($element),+])
    };
}
