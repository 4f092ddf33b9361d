//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use result_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`ResultArray`], [`NonEmptyVec`]
//! - **Traits**: [`ResultExt`]
//! - **Functions**: [`try_map_each`], [`try_flat_map_each`]
//!
//! # Examples
//!
//! ```
//! use result_rail::prelude::*;
//!
//! let checked = try_map_each(["12", "-4", "9"], |raw| {
//!     raw.parse::<u16>().map_err(|_| format!("rejected {raw}"))
//! });
//! assert_eq!(checked.oks(), vec![12, 9]);
//!
//! let swapped = Ok::<u8, &str>(1).flip();
//! assert_eq!(swapped, Err(1));
//! ```

// Core types
pub use crate::types::{NonEmptyVec, ResultArray};

// Traits
pub use crate::traits::ResultExt;

// Free functions
pub use crate::types::{try_flat_map_each, try_map_each};
