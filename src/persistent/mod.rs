//! Persistent (immutable) data structures.
//!
//! This module provides the two containers of the crate:
//!
//! - [`CowArray`]: persistent contiguous array with copy-on-write storage
//! - [`PersistentList`]: persistent singly-linked cons list
//!
//! # Structural Sharing
//!
//! Both structures hand out cheap handles to shared storage. Cloning a
//! handle is an O(1) reference-count increment; the underlying buffer or
//! node chain is only copied when a mutation would otherwise be visible
//! through another live handle.
//!
//! # Examples
//!
//! ## `CowArray`
//!
//! ```rust
//! use cowarray::persistent::CowArray;
//!
//! let array: CowArray<i32> = (1..=3).collect();
//!
//! // Retain the old version explicitly, then mutate
//! let retained = array.clone();
//! let updated = array.set(1, 99);
//!
//! assert_eq!(retained.get(1), Some(&2)); // Original unchanged
//! assert_eq!(updated.get(1), Some(&99)); // New version
//! ```
//!
//! ## `PersistentList`
//!
//! ```rust
//! use cowarray::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! let extended = list.cons(0);
//!
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // Shares [1, 2, 3] with `list`
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod array;
mod list;

pub use array::CowArray;
pub use array::CowArrayIntoIterator;
pub use array::CowArrayIterator;
pub use list::PersistentList;
pub use list::PersistentListIntoIterator;
pub use list::PersistentListIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_clone() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(*reference_counter, *reference_counter_clone);
    }

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
