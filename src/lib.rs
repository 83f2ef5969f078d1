//! # cowarray
//!
//! Persistent copy-on-write arrays with ownership-aware traversal
//! combinators.
//!
//! ## Overview
//!
//! This library provides value-semantics sequences for Rust that behave
//! like immutable arrays while quietly reusing their backing storage
//! whenever it is safe to do so:
//!
//! - **`CowArray`**: a contiguous, 0-indexed persistent array whose
//!   mutating operations rewrite the buffer in place when it is uniquely
//!   owned and copy it otherwise
//! - **Traversal combinators**: forward/reverse iteration, left/right
//!   folds, element-wise map and zip-with-truncation, all threading an
//!   accumulator through a single synchronous pass
//! - **`PersistentList`**: a structurally shared cons list used as the
//!   conversion target/source for arrays
//!
//! ## Ownership model
//!
//! Mutating operations consume the array by value. Keeping the previous
//! version costs one `clone()` of the handle, which only bumps a
//! reference count; the first subsequent mutation through either handle
//! then copies the buffer. Observed through any number of handles, an
//! array never appears to change.
//!
//! ## Feature Flags
//!
//! - `arc`: back storage with `Arc` instead of `Rc` (thread-safe)
//! - `serde`: `Serialize`/`Deserialize` for both container types
//!
//! ## Example
//!
//! ```rust
//! use cowarray::prelude::*;
//!
//! let array: CowArray<i32> = (1..=4).collect();
//! let doubled = array.clone().map(|x| x * 2);
//!
//! assert_eq!(array.to_list(), (1..=4).collect());
//! assert_eq!(doubled.fold_left(0, |sum, x| sum + x), 20);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use cowarray::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
}

pub mod persistent;
