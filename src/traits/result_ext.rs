//! Extension trait adding the combinators `Result` is missing.
//!
//! The standard `Result` already covers most of the algebra (`map`,
//! `map_err`, `and_then`, `or_else`, `unwrap_or`, ...). [`ResultExt`] adds
//! the remaining pieces: swapping the variants, bridging into
//! [`ResultArray`], and diagnostic display.
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::ResultExt;
//!
//! let parsed: Result<u16, &str> = "8080".parse::<u16>().map_err(|_| "not a port");
//! let ports = parsed.result_array(|e| vec![e], |port| vec![port, port + 1]);
//!
//! assert_eq!(ports.oks(), vec![8080, 8081]);
//! ```

use crate::types::ResultArray;
use core::fmt::Debug;

/// Extension trait for `Result` adding variant swapping and the bridge into
/// [`ResultArray`].
///
/// # Examples
///
/// ```
/// use result_rail::traits::ResultExt;
///
/// let missing: Result<(), &str> = Err("missing");
/// assert_eq!(missing.flip(), Ok("missing"));
/// ```
pub trait ResultExt<T, E>: Sized {
    /// Swaps the `Ok` and `Err` roles, keeping the payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::ResultExt;
    ///
    /// assert_eq!(Ok::<i32, &str>(1).flip(), Err(1));
    /// ```
    fn flip(self) -> Result<E, T>;

    /// Expands the payload into a [`ResultArray`].
    ///
    /// An `Ok` payload becomes a fully-`Ok` array of the values `ok_fn`
    /// returns; an `Err` payload becomes a fully-`Err` array of the errors
    /// `err_fn` returns. Only the function matching the variant runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::ResultExt;
    ///
    /// let failed: Result<&str, &str> = Err("a,b");
    /// let errors = failed.result_array(|e| e.split(','), |v| [v]);
    /// assert_eq!(errors.errs(), vec!["a", "b"]);
    /// ```
    fn result_array<U, F, IU, IF, D, O>(self, err_fn: D, ok_fn: O) -> ResultArray<U, F>
    where
        D: FnOnce(E) -> IF,
        O: FnOnce(T) -> IU,
        IF: IntoIterator<Item = F>,
        IU: IntoIterator<Item = U>;

    /// Emits a diagnostic event with the payload, then returns `self`
    /// unchanged.
    ///
    /// Only has an effect with the `tracing` feature enabled; it never
    /// influences the value.
    fn display(self) -> Self
    where
        T: Debug,
        E: Debug;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn flip(self) -> Result<E, T> {
        match self {
            Ok(value) => Err(value),
            Err(error) => Ok(error),
        }
    }

    #[inline]
    fn result_array<U, F, IU, IF, D, O>(self, err_fn: D, ok_fn: O) -> ResultArray<U, F>
    where
        D: FnOnce(E) -> IF,
        O: FnOnce(T) -> IU,
        IF: IntoIterator<Item = F>,
        IU: IntoIterator<Item = U>,
    {
        match self {
            Ok(value) => ResultArray::ok(ok_fn(value)),
            Err(error) => ResultArray::err(err_fn(error)),
        }
    }

    #[inline]
    fn display(self) -> Self
    where
        T: Debug,
        E: Debug,
    {
        #[cfg(feature = "tracing")]
        match &self {
            Ok(value) => tracing::debug!(value = ?value, "OK"),
            Err(error) => tracing::debug!(error = ?error, "Err"),
        }
        self
    }
}
