//! A `Result` algebra for batches and async code.
//!
//! The crate extends the standard `Result` with the pieces needed to keep
//! error handling algebraic once values come in batches or behind futures:
//!
//! - [`ResultExt`]: `flip`, `result_array` and diagnostic `display` for `Result`
//! - [`ResultArray`]: an ordered batch of `Result`s with element-wise,
//!   fan-out, grouping and chunking combinators
//! - `AsyncResult` / `AsyncResultArray` (feature `async`): the same algebra on
//!   deferred values, with a collect-all join that never fails fast
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `result_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Keeping every error of a batch
//!
//! ```
//! use result_rail::ResultArray;
//!
//! let ids = ResultArray::<u32, String>::ok([3, 0, 7]);
//! let checked = ids.and_then(|id| {
//!     if id == 0 {
//!         Err("id 0 is reserved".to_string())
//!     } else {
//!         Ok(id * 10)
//!     }
//! });
//!
//! assert_eq!(checked.len(), 3);
//! let (oks, errs) = checked.partition();
//! assert_eq!(oks, vec![30, 70]);
//! assert_eq!(errs, vec!["id 0 is reserved".to_string()]);
//! ```
//!
//! ## Chunking
//!
//! ```
//! use result_rail::ResultArray;
//!
//! let batches = ResultArray::<_, ()>::ok(1..=5).batch(2);
//! let sizes: Vec<usize> = batches.oks().iter().map(|(_, bucket)| bucket.len()).collect();
//! assert_eq!(sizes, vec![2, 2, 1]);
//! ```
//!
//! ## Going async
//!
//! ```rust
//! # #[cfg(feature = "async")]
//! # mod demo {
//! use result_rail::prelude_async::*;
//!
//! async fn lookup(id: u32) -> Result<String, String> {
//!     Ok(format!("user-{id}"))
//! }
//!
//! async fn example() -> Result<usize, String> {
//!     Ok::<u32, String>(42)
//!         .into_async()
//!         .and_then_async(lookup)
//!         .map(|name| name.len())
//!         .await
//! }
//! # }
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits extending `Result`
pub mod traits;
/// ResultArray and its supporting value types
pub mod types;

/// Async Result types and bridges (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use traits::*;
pub use types::{try_flat_map_each, try_map_each, NonEmptyVec, ResultArray};

#[cfg(feature = "async")]
pub use async_ext::{AsyncResult, AsyncResultArray};
