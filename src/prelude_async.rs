//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async-specific items.
//!
//! # Usage
//!
//! ```rust
//! use result_rail::prelude_async::*;
//!
//! async fn fetch_price(sku: &str) -> Result<u32, String> {
//!     if sku.is_empty() { Err("empty sku".to_string()) } else { Ok(250) }
//! }
//!
//! async fn example() {
//!     let total = fetch_price("A-1")
//!         .into_async_result()
//!         .and_then_async(|price| async move { Ok(price * 2) })
//!         .await;
//!     assert_eq!(total, Ok(500));
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Types**: [`ResultArray`], [`NonEmptyVec`]
//! - **Traits**: [`ResultExt`]
//! - **Functions**: [`try_map_each`], [`try_flat_map_each`]
//!
//! ## Async-Specific
//!
//! - **Types**: [`AsyncResult`], [`AsyncResultArray`] and their boxed aliases
//! - **Traits**: [`ResultAsyncExt`], [`FutureResultExt`], [`FutureResultArrayExt`]
//! - **Functions**: [`async_ok`], [`async_err`], [`try_map_each_async`],
//!   [`try_flat_map_each_async`]

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{
    async_err, async_ok, try_flat_map_each_async, try_map_each_async, AsyncResult,
    AsyncResultArray, BoxAsyncResult, BoxAsyncResultArray, FutureResultArrayExt, FutureResultExt,
    LocalBoxAsyncResult, LocalBoxAsyncResultArray, ResultAsyncExt,
};
