//! Persistent (immutable) array with copy-on-write storage.
//!
//! This module provides [`CowArray`], a contiguous 0-indexed sequence with
//! value semantics: every operation returns a new logical array and the
//! original, observed through any other handle, never changes.
//!
//! # Overview
//!
//! `CowArray` keeps its elements in a single reference-counted buffer.
//! Mutating operations consume the array by value and route through one
//! choke point that grants exclusive access to the buffer only when the
//! reference count is exactly one, cloning the buffer otherwise. This
//! gives:
//!
//! - amortized O(1) `push` and O(1) `pop`/`set` on a uniquely owned array
//! - O(n) copy-on-write when the storage is shared
//! - O(1) retention of any previous version via `clone()`
//!
//! On top of the primitive operations sit the traversal combinators:
//! forward and reverse accumulator-threading walks, left and right folds,
//! element-wise `map`/`map_indexed`, truncating `zip_with`, and the
//! conversions to and from [`PersistentList`].
//!
//! # Examples
//!
//! ```rust
//! use cowarray::persistent::CowArray;
//!
//! let array: CowArray<i32> = (1..=5).collect();
//!
//! let sum = array.fold_left(0, |accumulator, x| accumulator + x);
//! assert_eq!(sum, 15);
//!
//! // Mutation consumes the array; clone first to keep the old version
//! let original = array.clone();
//! let squared = array.map(|x| x * x);
//! assert_eq!(original.get(2), Some(&3));
//! assert_eq!(squared.get(2), Some(&9));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Index;

use super::ReferenceCounter;
use super::list::PersistentList;

// =============================================================================
// CowArray Definition
// =============================================================================

/// A persistent array backed by a reference-counted contiguous buffer.
///
/// # Time Complexity
///
/// | Operation     | Unique owner      | Shared storage |
/// |---------------|-------------------|----------------|
/// | `len`         | O(1)              | O(1)           |
/// | `get`         | O(1)              | O(1)           |
/// | `push`        | amortized O(1)    | O(n)           |
/// | `pop`         | O(1)              | O(n)           |
/// | `set`         | O(1)              | O(n)           |
/// | `map`         | O(n), in place    | O(n), one copy |
/// | `zip_with`    | O(min), in place  | O(min) + copy  |
/// | `fold_left`   | O(n)              | O(n)           |
/// | `fold_right`  | O(n)              | O(n)           |
///
/// "Shared storage" costs are paid once per mutation: the copy restores
/// unique ownership, so a chain of mutations on the copy runs at the
/// unique-owner rates.
///
/// # Examples
///
/// ```rust
/// use cowarray::persistent::CowArray;
///
/// let array: CowArray<i32> = (0..100).collect();
/// assert_eq!(array.len(), 100);
/// assert_eq!(array.get(50), Some(&50));
/// ```
pub struct CowArray<T> {
    /// Backing storage. All slots `[0, len)` hold valid elements; the
    /// length is whatever the buffer currently reports.
    buffer: ReferenceCounter<Vec<T>>,
}

impl<T> Clone for CowArray<T> {
    /// Retains the storage: an O(1) reference-count increment.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
        }
    }
}

// =============================================================================
// Constructors and Primitive Operations
// =============================================================================

impl<T> CowArray<T> {
    /// Creates a new empty array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<i32> = CowArray::new();
    /// assert!(array.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: ReferenceCounter::new(Vec::new()),
        }
    }

    /// Creates an array containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array = CowArray::singleton(42);
    /// assert_eq!(array.len(), 1);
    /// assert_eq!(array.get(0), Some(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            buffer: ReferenceCounter::new(vec![element]),
        }
    }

    /// Returns the number of elements in the array.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<i32> = (1..=5).collect();
    /// assert_eq!(array.len(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the array contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let empty: CowArray<i32> = CowArray::new();
    /// assert!(empty.is_empty());
    ///
    /// let non_empty = CowArray::singleton(1);
    /// assert!(!non_empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Returns `None` if the index is out of bounds. This is the
    /// bounds-checked counterpart of indexing with `array[index]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<i32> = (1..=3).collect();
    /// assert_eq!(array.get(0), Some(&1));
    /// assert_eq!(array.get(3), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buffer.get(index)
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<i32> = (1..=3).collect();
    /// let collected: Vec<&i32> = array.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> CowArrayIterator<'_, T> {
        CowArrayIterator {
            array: self,
            index: 0,
        }
    }
}

impl<T: Clone> CowArray<T> {
    /// Creates an array of `count` copies of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array = CowArray::filled(3, 7);
    /// let collected: Vec<&i32> = array.iter().collect();
    /// assert_eq!(collected, vec![&7, &7, &7]);
    /// ```
    #[inline]
    #[must_use]
    pub fn filled(count: usize, value: T) -> Self {
        Self {
            buffer: ReferenceCounter::new(vec![value; count]),
        }
    }

    /// Grants exclusive access to the backing buffer.
    ///
    /// When the reference count is exactly one the buffer is handed out
    /// as-is and the caller mutates it in place; otherwise the buffer is
    /// cloned first so the mutation stays invisible to every other handle.
    #[inline]
    fn buffer_mut(&mut self) -> &mut Vec<T> {
        ReferenceCounter::make_mut(&mut self.buffer)
    }

    /// Appends an element to the end of the array.
    ///
    /// # Complexity
    ///
    /// Amortized O(1) when the array is uniquely owned; O(n) when the
    /// storage is shared and must be copied first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array = CowArray::new().push(1).push(2);
    /// assert_eq!(array.len(), 2);
    /// assert_eq!(array.get(1), Some(&2));
    /// ```
    #[inline]
    #[must_use]
    pub fn push(mut self, element: T) -> Self {
        self.buffer_mut().push(element);
        self
    }

    /// Removes the last element of the array.
    ///
    /// Returns the array unchanged if it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<i32> = (1..=3).collect();
    /// assert_eq!(array.pop().len(), 2);
    ///
    /// let empty: CowArray<i32> = CowArray::new();
    /// assert!(empty.pop().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn pop(mut self) -> Self {
        if self.is_empty() {
            return self;
        }
        self.buffer_mut().pop();
        self
    }

    /// Replaces the element at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Use [`CowArray::update`] for the
    /// bounds-checked variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<i32> = (1..=3).collect();
    /// let updated = array.set(1, 99);
    /// assert_eq!(updated.get(1), Some(&99));
    /// ```
    #[inline]
    #[must_use]
    pub fn set(mut self, index: usize, value: T) -> Self {
        self.buffer_mut()[index] = value;
        self
    }

    /// Replaces the element at the given index, if it exists.
    ///
    /// Returns the array unchanged if the index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<i32> = (1..=3).collect();
    /// let updated = array.update(10, 99);
    /// assert_eq!(updated.get(1), Some(&2)); // Out of range: unchanged
    /// ```
    #[inline]
    #[must_use]
    pub fn update(self, index: usize, value: T) -> Self {
        if index < self.len() {
            self.set(index, value)
        } else {
            self
        }
    }
}

// =============================================================================
// Traversal Engines
// =============================================================================

impl<T> CowArray<T> {
    /// Walks the array front to back, threading an accumulator through
    /// `function(index, element, accumulator)`.
    ///
    /// The loop bound is re-read from the array on every step rather than
    /// captured once at entry, so the walk stops early if the visible
    /// length ever shrinks below the cursor. Contrast with
    /// [`CowArray::reverse_iterate`], which fixes its bound at entry.
    ///
    /// # Complexity
    ///
    /// O(n), single pass, no suspension points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<char> = "abc".chars().collect();
    /// let trace = array.iterate(String::new(), |index, element, mut accumulator| {
    ///     accumulator.push_str(&format!("{index}{element}"));
    ///     accumulator
    /// });
    /// assert_eq!(trace, "0a1b2c");
    /// ```
    pub fn iterate<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(usize, &T, A) -> A,
    {
        let mut accumulator = initial;
        let mut index = 0;
        // Bound deliberately re-read every step, not hoisted.
        while index < self.len() {
            accumulator = function(index, &self.buffer[index], accumulator);
            index += 1;
        }
        accumulator
    }

    /// Walks the array back to front, threading an accumulator through
    /// `function(index, element, accumulator)`.
    ///
    /// The bound is captured once at entry and only decremented; unlike
    /// [`CowArray::iterate`] the length is never re-read mid-walk. Indices
    /// only decrease from that starting bound, so the walk stays in range
    /// regardless.
    ///
    /// # Complexity
    ///
    /// O(n), single pass, no suspension points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<char> = "abc".chars().collect();
    /// let trace = array.reverse_iterate(String::new(), |index, element, mut accumulator| {
    ///     accumulator.push_str(&format!("{index}{element}"));
    ///     accumulator
    /// });
    /// assert_eq!(trace, "2c1b0a");
    /// ```
    pub fn reverse_iterate<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(usize, &T, A) -> A,
    {
        let mut accumulator = initial;
        // Bound captured once; the cursor only counts down from here.
        let mut remaining = self.len();
        while remaining != 0 {
            remaining -= 1;
            accumulator = function(remaining, &self.buffer[remaining], accumulator);
        }
        accumulator
    }
}

// =============================================================================
// Fold Combinators
// =============================================================================

impl<T> CowArray<T> {
    /// Folds the array left to right: `f(...f(f(z, a[0]), a[1])..., a[n-1])`.
    ///
    /// Built on the forward traversal engine; the index is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<i32> = (1..=3).collect();
    /// assert_eq!(array.fold_left(0, |accumulator, x| accumulator + x), 6);
    /// ```
    #[inline]
    pub fn fold_left<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iterate(initial, |_, element, accumulator| {
            function(accumulator, element)
        })
    }

    /// Folds the array right to left: `f(a[0], f(a[1], ... f(a[n-1], z)))`.
    ///
    /// Built on the reverse traversal engine; the index is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<i32> = (1..=3).collect();
    /// // 1 - (2 - (3 - 0))
    /// assert_eq!(array.fold_right(0, |x, accumulator| x - accumulator), 2);
    /// ```
    #[inline]
    pub fn fold_right<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        self.reverse_iterate(initial, |_, element, accumulator| {
            function(element, accumulator)
        })
    }
}

// =============================================================================
// Element-wise Combinators
// =============================================================================

impl<T: Clone> CowArray<T> {
    /// Rewrites every slot with `function(index, element)`.
    ///
    /// The input's storage is reused as the output buffer when the array
    /// is uniquely owned (a true in-place rewrite, O(1) extra space);
    /// otherwise the buffer is copied once before the loop runs. Each slot
    /// is read before it is overwritten, so aliasing the output with the
    /// input is always safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<usize> = CowArray::filled(3, 10);
    /// let offset = array.map_indexed(|index, element| element + index);
    /// let collected: Vec<&usize> = offset.iter().collect();
    /// assert_eq!(collected, vec![&10, &11, &12]);
    /// ```
    #[must_use]
    pub fn map_indexed<F>(mut self, mut function: F) -> Self
    where
        F: FnMut(usize, &T) -> T,
    {
        let buffer = self.buffer_mut();
        let mut index = 0;
        while index < buffer.len() {
            let mapped = function(index, &buffer[index]);
            buffer[index] = mapped;
            index += 1;
        }
        self
    }

    /// Rewrites every slot with `function(element)`.
    ///
    /// Identical to [`CowArray::map_indexed`] except the callable only
    /// receives the element. Storage reuse rules are the same.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<i32> = (1..=3).collect();
    /// let doubled = array.map(|x| x * 2);
    /// let collected: Vec<&i32> = doubled.iter().collect();
    /// assert_eq!(collected, vec![&2, &4, &6]);
    /// ```
    #[inline]
    #[must_use]
    pub fn map<F>(self, mut function: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        self.map_indexed(move |_, element| function(element))
    }

    /// Combines two arrays element-wise, truncating to the shorter one.
    ///
    /// The output has length `min(self.len(), other.len())` and holds
    /// `function(&self[i], &other[i])` at every index — the first argument
    /// always comes from `self`, whichever operand is shorter. The shorter
    /// operand's storage is reused as the output buffer, with the tie on
    /// equal lengths going to `self`. Elements of the longer array beyond
    /// the truncation point are never visited and are dropped with its
    /// handle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let a: CowArray<i32> = (1..=4).collect();
    /// let b: CowArray<i32> = [10, 20].into_iter().collect();
    /// let summed = a.zip_with(b, |x, y| x + y);
    /// let collected: Vec<&i32> = summed.iter().collect();
    /// assert_eq!(collected, vec![&11, &22]);
    /// ```
    #[must_use]
    pub fn zip_with<F>(self, other: Self, mut function: F) -> Self
    where
        F: FnMut(&T, &T) -> T,
    {
        if self.len() <= other.len() {
            let mut output = self;
            let buffer = output.buffer_mut();
            let mut index = 0;
            while index < buffer.len() {
                let combined = function(&buffer[index], &other.buffer[index]);
                buffer[index] = combined;
                index += 1;
            }
            output
        } else {
            let mut output = other;
            let buffer = output.buffer_mut();
            let mut index = 0;
            while index < buffer.len() {
                let combined = function(&self.buffer[index], &buffer[index]);
                buffer[index] = combined;
                index += 1;
            }
            output
        }
    }
}

// =============================================================================
// List Bridge
// =============================================================================

impl<T: Clone> CowArray<T> {
    /// Converts the array to a persistent list in a single reverse pass.
    ///
    /// The reverse traversal engine visits indices from `len - 1` down to
    /// `0`, consing each element onto the front of the accumulator;
    /// because the walk descends, the consing rebuilds the array's
    /// ascending order without a separate reversal step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::CowArray;
    ///
    /// let array: CowArray<i32> = (1..=3).collect();
    /// let list = array.to_list();
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn to_list(&self) -> PersistentList<T> {
        self.reverse_iterate(PersistentList::new(), |_, element, accumulator| {
            accumulator.cons(element.clone())
        })
    }

    /// Builds an array from a persistent list in a single forward pass.
    ///
    /// Folds over the list left to right, appending each element to an
    /// initially empty array; relies on the amortized O(1) append of a
    /// uniquely owned buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowarray::persistent::{CowArray, PersistentList};
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// let array = CowArray::from_list(&list);
    /// assert_eq!(array.get(0), Some(&1));
    /// assert_eq!(array.len(), 3);
    /// ```
    #[must_use]
    pub fn from_list(list: &PersistentList<T>) -> Self {
        list.iter()
            .fold(Self::new(), |array, element| array.push(element.clone()))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`CowArray`].
pub struct CowArrayIterator<'a, T> {
    array: &'a CowArray<T>,
    index: usize,
}

impl<'a, T> Iterator for CowArrayIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.array.get(self.index)?;
        self.index += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for CowArrayIterator<'_, T> {
    fn len(&self) -> usize {
        self.array.len().saturating_sub(self.index)
    }
}

/// An owning iterator over elements of a [`CowArray`].
pub struct CowArrayIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for CowArrayIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for CowArrayIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for CowArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CowArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buffer: ReferenceCounter::new(iter.into_iter().collect()),
        }
    }
}

impl<T> From<Vec<T>> for CowArray<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self {
            buffer: ReferenceCounter::new(elements),
        }
    }
}

impl<T: Clone> IntoIterator for CowArray<T> {
    type Item = T;
    type IntoIter = CowArrayIntoIterator<T>;

    /// Consumes the array into an iterator over its elements.
    ///
    /// When the array is the unique owner of its storage the buffer is
    /// moved out without copying; otherwise the elements are cloned.
    fn into_iter(self) -> Self::IntoIter {
        let elements = ReferenceCounter::try_unwrap(self.buffer)
            .unwrap_or_else(|shared| shared.as_ref().clone());
        CowArrayIntoIterator {
            inner: elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a CowArray<T> {
    type Item = &'a T;
    type IntoIter = CowArrayIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for CowArray<T> {
    type Output = T;

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds. Use [`CowArray::get`] for the
    /// bounds-checked variant.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.buffer[index]
    }
}

impl<T: PartialEq> PartialEq for CowArray<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for CowArray<T> {}

/// Computes a hash value for this array.
///
/// The hash is computed by first hashing the length, then hashing each
/// element in order. Equal arrays produce equal hash values.
impl<T: Hash> Hash for CowArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CowArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CowArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CowArray<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct CowArrayVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> CowArrayVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for CowArrayVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = CowArray<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(CowArray::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for CowArray<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CowArrayVisitor::new())
    }
}

// =============================================================================
// Auto-trait Assertions
// =============================================================================

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(CowArray<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(CowArray<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
