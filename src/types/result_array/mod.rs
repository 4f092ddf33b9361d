//! Batch-oriented Result sequences.
//!
//! [`ResultArray`] extends the `Result` algebra over an ordered sequence while
//! keeping every element's own error, instead of collapsing the batch into a
//! single failure like `Iterator::collect::<Result<Vec<_>, _>>()` does.
//!
//! # Examples
//!
//! ```
//! use result_rail::ResultArray;
//!
//! let parsed: ResultArray<i32, String> = ["1", "x", "3"]
//!     .into_iter()
//!     .map(|s| s.parse::<i32>().map_err(|_| format!("bad input: {s}")))
//!     .collect();
//!
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled.clone().oks(), vec![2, 6]);
//! assert_eq!(doubled.errs(), vec!["bad input: x".to_string()]);
//! ```

use crate::types::alloc_type::Vec;
use core::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
mod canonical;
mod group;

#[cfg(feature = "serde")]
pub use canonical::canonical_key;

/// An ordered sequence of `Result<T, E>` with element-wise combinators.
///
/// Element-wise operations (`map`, `map_err`, `and_then`, ...) preserve length
/// and order. The fan-out operations (`flat_map`, `flat_and_then`,
/// `flat_map_err`) splice several outputs in place of one input. Only
/// [`group`](Self::group), [`batch`](Self::batch) and [`map_all`](Self::map_all)
/// reorder elements, by moving every `Err` after the regrouped values.
///
/// Partial failure is never turned into aggregate failure: callers decide
/// through [`oks`](Self::oks), [`errs`](Self::errs) or
/// [`partition`](Self::partition).
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResultArray<T, E> {
    results: Vec<Result<T, E>>,
}

impl<T, E> ResultArray<T, E> {
    /// Wraps an existing list of results.
    #[inline]
    pub fn new(results: Vec<Result<T, E>>) -> Self {
        Self { results }
    }

    /// Wraps every value as `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::ResultArray;
    ///
    /// let array = ResultArray::<_, ()>::ok([1, 2]);
    /// assert_eq!(array.into_vec(), vec![Ok(1), Ok(2)]);
    /// ```
    pub fn ok<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(Ok).collect()
    }

    /// Wraps every error as `Err`.
    pub fn err<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        errors.into_iter().map(Err).collect()
    }

    /// Returns the number of elements, `Ok` and `Err` alike.
    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if the array holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Result<T, E>> {
        self.results.iter()
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Result<T, E>] {
        &self.results
    }

    /// Consumes the array and returns the underlying results.
    #[inline]
    pub fn into_vec(self) -> Vec<Result<T, E>> {
        self.results
    }

    /// Iterates over the `Ok` values in order.
    pub fn iter_oks(&self) -> impl Iterator<Item = &T> + '_ {
        self.results.iter().filter_map(|result| result.as_ref().ok())
    }

    /// Iterates over the `Err` values in order.
    pub fn iter_errs(&self) -> impl Iterator<Item = &E> + '_ {
        self.results.iter().filter_map(|result| result.as_ref().err())
    }

    /// Returns `true` if at least one element is `Ok`.
    #[inline]
    pub fn has_ok(&self) -> bool {
        self.results.iter().any(Result::is_ok)
    }

    /// Returns `true` if at least one element is `Err`.
    #[inline]
    pub fn has_err(&self) -> bool {
        self.results.iter().any(Result::is_err)
    }

    /// Returns the `Ok` values in their original order.
    pub fn oks(self) -> Vec<T> {
        self.results.into_iter().filter_map(Result::ok).collect()
    }

    /// Returns the `Err` values in their original order.
    pub fn errs(self) -> Vec<E> {
        self.results.into_iter().filter_map(Result::err).collect()
    }

    /// Splits the array into its `Ok` values and its `Err` values.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::ResultArray;
    ///
    /// let array = ResultArray::from(vec![Ok(1), Err("a"), Ok(2)]);
    /// let (oks, errs) = array.partition();
    /// assert_eq!(oks, vec![1, 2]);
    /// assert_eq!(errs, vec!["a"]);
    /// ```
    pub fn partition(self) -> (Vec<T>, Vec<E>) {
        let mut oks = Vec::new();
        let mut errs = Vec::new();
        for result in self.results {
            match result {
                Ok(value) => oks.push(value),
                Err(error) => errs.push(error),
            }
        }
        (oks, errs)
    }

    /// Returns `Ok` with every successful value; errors are dropped.
    #[inline]
    pub fn oks_result(self) -> Result<Vec<T>, Vec<E>> {
        Ok(self.oks())
    }

    /// Returns `Err` with every error; successful values are dropped.
    #[inline]
    pub fn errs_result(self) -> Result<Vec<T>, Vec<E>> {
        Err(self.errs())
    }

    /// Transforms the raw list of results into a new array.
    pub fn map_results<U, F, O>(self, op: O) -> ResultArray<U, F>
    where
        O: FnOnce(Vec<Result<T, E>>) -> Vec<Result<U, F>>,
    {
        ResultArray::new(op(self.results))
    }

    /// Maps every `Ok` value through `op`, leaving errors in place.
    ///
    /// `op` is called once per `Ok` element and never for an `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::ResultArray;
    ///
    /// let array = ResultArray::from(vec![Ok(1), Err("e"), Ok(3)]);
    /// assert_eq!(array.map(|n| n * 10).into_vec(), vec![Ok(10), Err("e"), Ok(30)]);
    /// ```
    pub fn map<U, O>(self, mut op: O) -> ResultArray<U, E>
    where
        O: FnMut(T) -> U,
    {
        self.results.into_iter().map(|result| result.map(&mut op)).collect()
    }

    /// Replaces every `Ok` element with the `Ok` outputs of `op`, in place.
    ///
    /// `Err` elements pass through as single elements, so the resulting length
    /// is the sum of the output counts plus the number of errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::ResultArray;
    ///
    /// let array = ResultArray::from(vec![Ok(2), Err("e"), Ok(0), Ok(1)]);
    /// let expanded = array.flat_map(|n| vec![n; n]);
    /// assert_eq!(expanded.into_vec(), vec![Ok(2), Ok(2), Err("e"), Ok(1)]);
    /// ```
    pub fn flat_map<U, I, O>(self, mut op: O) -> ResultArray<U, E>
    where
        O: FnMut(T) -> I,
        I: IntoIterator<Item = U>,
    {
        let mut results = Vec::with_capacity(self.results.len());
        for result in self.results {
            match result {
                Ok(value) => results.extend(op(value).into_iter().map(Ok)),
                Err(error) => results.push(Err(error)),
            }
        }
        ResultArray::new(results)
    }

    /// Applies `op` once to all `Ok` values, followed by every `Err` in order.
    ///
    /// `op` is not invoked when the array holds no `Ok` value.
    pub fn map_all<U, I, O>(self, op: O) -> ResultArray<U, E>
    where
        O: FnOnce(Vec<T>) -> I,
        I: IntoIterator<Item = U>,
    {
        let (oks, errs) = self.partition();
        let mut results: Vec<Result<U, E>> = Vec::with_capacity(oks.len() + errs.len());
        if !oks.is_empty() {
            results.extend(op(oks).into_iter().map(Ok));
        }
        results.extend(errs.into_iter().map(Err));
        ResultArray::new(results)
    }

    /// Folds every element to `op(value)`, or `default` for an `Err`.
    pub fn map_or<U, O>(self, default: U, mut op: O) -> Vec<U>
    where
        U: Clone,
        O: FnMut(T) -> U,
    {
        self.results.into_iter().map(|result| result.map_or(default.clone(), &mut op)).collect()
    }

    /// Folds every element with `op` for values and `default` for errors.
    pub fn map_or_else<U, D, O>(self, mut default: D, mut op: O) -> Vec<U>
    where
        D: FnMut(E) -> U,
        O: FnMut(T) -> U,
    {
        self.results.into_iter().map(|result| result.map_or_else(&mut default, &mut op)).collect()
    }

    /// Maps every `Err` through `op`, leaving values in place.
    pub fn map_err<F, O>(self, mut op: O) -> ResultArray<T, F>
    where
        O: FnMut(E) -> F,
    {
        self.results.into_iter().map(|result| result.map_err(&mut op)).collect()
    }

    /// Replaces every `Err` element with the `Err` outputs of `op`, in place.
    pub fn flat_map_err<F, I, O>(self, mut op: O) -> ResultArray<T, F>
    where
        O: FnMut(E) -> I,
        I: IntoIterator<Item = F>,
    {
        let mut results = Vec::with_capacity(self.results.len());
        for result in self.results {
            match result {
                Ok(value) => results.push(Ok(value)),
                Err(error) => results.extend(op(error).into_iter().map(Err)),
            }
        }
        ResultArray::new(results)
    }

    /// Replaces every `Ok` element with a copy of `res`.
    pub fn and<U>(self, res: Result<U, E>) -> ResultArray<U, E>
    where
        U: Clone,
        E: Clone,
    {
        self.results.into_iter().map(|result| result.and(res.clone())).collect()
    }

    /// Chains a fallible step onto every `Ok` element.
    ///
    /// Elements keep their position; an `Err` from `op` replaces the value it
    /// was given.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::ResultArray;
    ///
    /// let array = ResultArray::from(vec![Ok("4"), Ok("x"), Err("lost")]);
    /// let parsed = array.and_then(|s| s.parse::<u8>().map_err(|_| "bad"));
    /// assert_eq!(parsed.into_vec(), vec![Ok(4), Err("bad"), Err("lost")]);
    /// ```
    pub fn and_then<U, O>(self, mut op: O) -> ResultArray<U, E>
    where
        O: FnMut(T) -> Result<U, E>,
    {
        self.results.into_iter().map(|result| result.and_then(&mut op)).collect()
    }

    /// Replaces every `Ok` element with the elements of the array `op` returns.
    pub fn flat_and_then<U, O>(self, mut op: O) -> ResultArray<U, E>
    where
        O: FnMut(T) -> ResultArray<U, E>,
    {
        let mut results = Vec::with_capacity(self.results.len());
        for result in self.results {
            match result {
                Ok(value) => results.extend(op(value).results),
                Err(error) => results.push(Err(error)),
            }
        }
        ResultArray::new(results)
    }

    /// Replaces every `Err` element with a copy of `res`.
    pub fn or<F>(self, res: Result<T, F>) -> ResultArray<T, F>
    where
        T: Clone,
        F: Clone,
    {
        self.results.into_iter().map(|result| result.or(res.clone())).collect()
    }

    /// Gives every `Err` element a chance to recover through `op`.
    pub fn or_else<F, O>(self, mut op: O) -> ResultArray<T, F>
    where
        O: FnMut(E) -> Result<T, F>,
    {
        self.results.into_iter().map(|result| result.or_else(&mut op)).collect()
    }

    /// Returns every value, substituting `default` for each error.
    pub fn unwrap_or(self, default: T) -> Vec<T>
    where
        T: Clone,
    {
        self.results.into_iter().map(|result| result.unwrap_or(default.clone())).collect()
    }

    /// Returns every value, computing a substitute from each error.
    pub fn unwrap_or_else<O>(self, mut op: O) -> Vec<T>
    where
        O: FnMut(E) -> T,
    {
        self.results.into_iter().map(|result| result.unwrap_or_else(&mut op)).collect()
    }

    /// Returns every value, provided all elements are `Ok`.
    ///
    /// # Panics
    ///
    /// Panics with the first error if any element is `Err`.
    #[track_caller]
    pub fn unwrap(self) -> Vec<T>
    where
        E: Debug,
    {
        self.expect("Expected Oks, got at least one Err")
    }

    /// Returns every value, provided all elements are `Ok`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` and the first error if any element is `Err`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> Vec<T>
    where
        E: Debug,
    {
        let mut values = Vec::with_capacity(self.results.len());
        for result in self.results {
            match result {
                Ok(value) => values.push(value),
                Err(error) => unwrap_failed(msg, &error),
            }
        }
        values
    }

    /// Returns every error, provided all elements are `Err`.
    ///
    /// # Panics
    ///
    /// Panics with the first value if any element is `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> Vec<E>
    where
        T: Debug,
    {
        self.expect_err("Expected Errs, got at least one Ok")
    }

    /// Returns every error, provided all elements are `Err`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` and the first value if any element is `Ok`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> Vec<E>
    where
        T: Debug,
    {
        let mut errors = Vec::with_capacity(self.results.len());
        for result in self.results {
            match result {
                Ok(value) => unwrap_failed(msg, &value),
                Err(error) => errors.push(error),
            }
        }
        errors
    }

    /// Swaps the `Ok` and `Err` role of every element.
    pub fn flip(self) -> ResultArray<E, T> {
        self.results
            .into_iter()
            .map(|result| match result {
                Ok(value) => Err(value),
                Err(error) => Ok(error),
            })
            .collect()
    }

    /// Emits a diagnostic event describing the array, then returns it unchanged.
    ///
    /// Only has an effect with the `tracing` feature enabled.
    #[inline]
    pub fn display(self) -> Self
    where
        T: Debug,
        E: Debug,
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            len = self.results.len(),
            errors = self.iter_errs().count(),
            results = ?self.results,
            "ResultArray"
        );
        self
    }

    /// Retypes the `Ok` side when every element is `Err`; otherwise hands
    /// `self` back untouched.
    #[cfg_attr(not(feature = "async"), allow(dead_code))]
    pub(crate) fn into_all_errs<U>(self) -> Result<ResultArray<U, E>, Self> {
        if self.has_ok() {
            return Err(self);
        }
        Ok(self.results.into_iter().filter_map(Result::err).map(Err).collect())
    }

    /// Retypes the `Err` side when every element is `Ok`; otherwise hands
    /// `self` back untouched.
    #[cfg_attr(not(feature = "async"), allow(dead_code))]
    pub(crate) fn into_all_oks<F>(self) -> Result<ResultArray<T, F>, Self> {
        if self.has_err() {
            return Err(self);
        }
        Ok(self.results.into_iter().filter_map(Result::ok).map(Ok).collect())
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed(msg: &str, payload: &dyn Debug) -> ! {
    panic!("{msg}: {payload:?}")
}

impl<T, E> Default for ResultArray<T, E> {
    fn default() -> Self {
        Self { results: Vec::new() }
    }
}

impl<T, E> From<Vec<Result<T, E>>> for ResultArray<T, E> {
    #[inline]
    fn from(results: Vec<Result<T, E>>) -> Self {
        Self { results }
    }
}

impl<T, E> From<ResultArray<T, E>> for Vec<Result<T, E>> {
    #[inline]
    fn from(array: ResultArray<T, E>) -> Self {
        array.results
    }
}

impl<T, E> FromIterator<Result<T, E>> for ResultArray<T, E> {
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        Self { results: iter.into_iter().collect() }
    }
}

impl<T, E> Extend<Result<T, E>> for ResultArray<T, E> {
    fn extend<I: IntoIterator<Item = Result<T, E>>>(&mut self, iter: I) {
        self.results.extend(iter);
    }
}

impl<T, E> IntoIterator for ResultArray<T, E> {
    type Item = Result<T, E>;
    type IntoIter = <Vec<Result<T, E>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a ResultArray<T, E> {
    type Item = &'a Result<T, E>;
    type IntoIter = core::slice::Iter<'a, Result<T, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Applies `op` to every value, collecting each outcome.
///
/// # Examples
///
/// ```
/// use result_rail::try_map_each;
///
/// let parsed = try_map_each(["4", "two"], |s| s.parse::<u8>().map_err(|_| s));
/// assert_eq!(parsed.into_vec(), vec![Ok(4), Err("two")]);
/// ```
pub fn try_map_each<T, U, E, I, O>(values: I, op: O) -> ResultArray<U, E>
where
    I: IntoIterator<Item = T>,
    O: FnMut(T) -> Result<U, E>,
{
    ResultArray::<T, E>::ok(values).and_then(op)
}

/// Applies `op` to every value and splices the arrays it returns.
pub fn try_flat_map_each<T, U, E, I, O>(values: I, op: O) -> ResultArray<U, E>
where
    I: IntoIterator<Item = T>,
    O: FnMut(T) -> ResultArray<U, E>,
{
    ResultArray::<T, E>::ok(values).flat_and_then(op)
}
