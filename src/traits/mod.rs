//! Core traits of the synchronous Result algebra.
//!
//! - [`ResultExt`]: variant swapping, the bridge into
//!   [`ResultArray`](crate::ResultArray) and diagnostic display for `Result`
//!
//! The asynchronous bridge lives in
//! `async_ext::ResultAsyncExt` (requires the `async` feature).
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::ResultExt;
//!
//! let swapped: Result<&str, i32> = Ok::<i32, &str>(7).flip();
//! assert_eq!(swapped, Err(7));
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;
