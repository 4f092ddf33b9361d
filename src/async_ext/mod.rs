//! Async extensions for result-rail.
//!
//! [`AsyncResult`] and [`AsyncResultArray`] carry the sync algebra over to
//! deferred values: combinators compose without resolving, closures attached
//! to the non-matching side never run, and batches of deferred results are
//! joined with collect-all semantics instead of failing fast.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! result-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use result_rail::prelude_async::*;
//!
//! async fn ping(host: &str) -> Result<u32, String> {
//!     if host.ends_with(".invalid") { Err(format!("{host}: unreachable")) } else { Ok(12) }
//! }
//!
//! async fn example() {
//!     let hosts = ["a.example", "b.invalid", "c.example"];
//!     let (latencies, failures) = try_map_each_async(hosts, ping).partition().await;
//!     assert_eq!(latencies, vec![12, 12]);
//!     assert_eq!(failures, vec!["b.invalid: unreachable".to_string()]);
//! }
//! ```

mod array_async;
mod async_result;
mod async_result_array;
mod collect_all;
mod future_ext;
mod result_async_ext;

pub use array_async::{try_flat_map_each_async, try_map_each_async};
pub use async_result::{async_err, async_ok, AsyncResult, BoxAsyncResult, LocalBoxAsyncResult};
pub use async_result_array::{
    AsyncResultArray, BoxAsyncResultArray, CollectResults, LocalBoxAsyncResultArray,
};
pub use collect_all::CollectAll;
pub use future_ext::{FutureResultArrayExt, FutureResultExt};
pub use result_async_ext::ResultAsyncExt;
