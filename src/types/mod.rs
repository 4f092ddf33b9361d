//! Value types of the Result algebra.
//!
//! - [`ResultArray`]: an ordered batch of `Result`s with element-wise,
//!   fan-out and grouping combinators
//! - [`NonEmptyVec`]: the bucket type produced by grouping
//!
//! # Examples
//!
//! ```
//! use result_rail::ResultArray;
//!
//! let array = ResultArray::from(vec![Ok(1), Ok(2), Ok(1)]).map_err(|e: &str| e.len());
//! let groups = array.group(|n| *n);
//!
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups.iter_oks().next().map(|(k, b)| (*k, b.len())), Some((1, 2)));
//! ```
pub(crate) mod alloc_type;
pub mod non_empty;
pub mod result_array;

pub use non_empty::{BucketVec, EmptyCollectionError, NonEmptyVec};
#[cfg(feature = "serde")]
pub use result_array::canonical_key;
pub use result_array::{try_flat_map_each, try_map_each, ResultArray};
