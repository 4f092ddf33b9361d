//! Async combinators on a resolved [`ResultArray`].
//!
//! Every element-wise operation lifts each element into its own deferred
//! computation and recombines them through [`CollectAll`], so the output keeps
//! input order regardless of which element finishes first, and one failing
//! element never cancels the others.

use core::future::{Future, Ready};

use super::async_result_array::AsyncResultArray;
use super::collect_all::CollectAll;
use super::result_async_ext::{settle_bind, settle_err, settle_ok, settle_recover};
use crate::types::ResultArray;

impl<T, E> ResultArray<T, E> {
    /// Lifts the array into an [`AsyncResultArray`] that resolves immediately.
    #[inline]
    pub fn into_async(self) -> AsyncResultArray<Ready<ResultArray<T, E>>> {
        AsyncResultArray::resolved(self)
    }

    /// Maps every `Ok` value through an async function.
    ///
    /// `op` is invoked once per `Ok` element and never for `Err` elements.
    /// The resulting futures run concurrently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use result_rail::prelude_async::*;
    ///
    /// async fn double(n: u32) -> u32 {
    ///     n * 2
    /// }
    ///
    /// async fn example() {
    ///     let array = ResultArray::from(vec![Ok(1), Err("x"), Ok(3)]);
    ///     let doubled = array.map_async(double).await;
    ///     assert_eq!(doubled.into_vec(), vec![Ok(2), Err("x"), Ok(6)]);
    /// }
    /// ```
    pub fn map_async<U, O, R>(
        self,
        mut op: O,
    ) -> AsyncResultArray<CollectAll<impl Future<Output = Result<U, E>>>>
    where
        O: FnMut(T) -> R,
        R: Future<Output = U>,
    {
        let pending: Vec<_> = self.into_iter().map(|result| settle_ok(result.map(&mut op))).collect();
        AsyncResultArray::from_async_array(pending)
    }

    /// Expands every `Ok` value through an async function and splices the
    /// outputs in place.
    pub fn flat_map_async<U, I, O, R>(
        self,
        op: O,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        O: FnMut(T) -> R,
        R: Future<Output = I>,
        I: IntoIterator<Item = U>,
    {
        self.map_async(op).flat_map(|outputs| outputs)
    }

    /// Maps every `Err` through an async function, concurrently.
    ///
    /// Values pass through untouched and `op` is never called for them.
    pub fn map_err_async<F, O, R>(
        self,
        mut op: O,
    ) -> AsyncResultArray<CollectAll<impl Future<Output = Result<T, F>>>>
    where
        O: FnMut(E) -> R,
        R: Future<Output = F>,
    {
        let pending: Vec<_> =
            self.into_iter().map(|result| settle_err(result.map_err(&mut op))).collect();
        AsyncResultArray::from_async_array(pending)
    }

    /// Replaces every `Ok` element with the outcome of `res`.
    ///
    /// `res` is awaited at most once, and only if the array holds an `Ok`.
    pub fn and_async<U, R>(self, res: R) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        U: Clone,
        E: Clone,
        R: Future<Output = Result<U, E>>,
    {
        AsyncResultArray::from_future(async move {
            match self.into_all_errs() {
                Ok(errors) => errors,
                Err(array) => array.and(res.await),
            }
        })
    }

    /// Chains an async fallible step onto every `Ok` element, concurrently.
    ///
    /// Every step runs to completion; a failing element never cancels the others.
    pub fn and_then_async<U, O, R>(
        self,
        mut op: O,
    ) -> AsyncResultArray<CollectAll<impl Future<Output = Result<U, E>>>>
    where
        O: FnMut(T) -> R,
        R: Future<Output = Result<U, E>>,
    {
        let pending: Vec<_> = self.into_iter().map(|result| settle_bind(result.map(&mut op))).collect();
        AsyncResultArray::from_async_array(pending)
    }

    /// Replaces every `Ok` element with the elements of the array its async
    /// continuation yields.
    pub fn flat_and_then_async<U, O, R>(
        self,
        op: O,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        O: FnMut(T) -> R,
        R: Future<Output = ResultArray<U, E>>,
    {
        self.map_async(op).flat_and_then(|array| array)
    }

    /// Replaces every `Err` element with the outcome of `res`.
    ///
    /// `res` is awaited at most once, and only if the array holds an `Err`.
    pub fn or_async<F, R>(self, res: R) -> AsyncResultArray<impl Future<Output = ResultArray<T, F>>>
    where
        T: Clone,
        F: Clone,
        R: Future<Output = Result<T, F>>,
    {
        AsyncResultArray::from_future(async move {
            match self.into_all_oks() {
                Ok(values) => values,
                Err(array) => array.or(res.await),
            }
        })
    }

    /// Recovers every `Err` element through an async function, concurrently.
    pub fn or_else_async<F, O, R>(
        self,
        mut op: O,
    ) -> AsyncResultArray<CollectAll<impl Future<Output = Result<T, F>>>>
    where
        O: FnMut(E) -> R,
        R: Future<Output = Result<T, F>>,
    {
        let pending: Vec<_> =
            self.into_iter().map(|result| settle_recover(result.map_err(&mut op))).collect();
        AsyncResultArray::from_async_array(pending)
    }
}

/// Applies an async `op` to every value, collecting each outcome in input
/// order.
///
/// # Examples
///
/// ```rust
/// use result_rail::prelude_async::*;
///
/// async fn parse(raw: &str) -> Result<u8, String> {
///     raw.parse().map_err(|_| format!("not a number: {raw}"))
/// }
///
/// async fn example() {
///     let parsed = try_map_each_async(["7", "seven"], parse).await;
///     assert_eq!(parsed.into_vec(), vec![Ok(7), Err("not a number: seven".to_string())]);
/// }
/// ```
pub fn try_map_each_async<T, U, E, I, O, R>(
    values: I,
    op: O,
) -> AsyncResultArray<CollectAll<impl Future<Output = Result<U, E>>>>
where
    I: IntoIterator<Item = T>,
    O: FnMut(T) -> R,
    R: Future<Output = Result<U, E>>,
{
    ResultArray::<T, E>::ok(values).and_then_async(op)
}

/// Applies an async `op` to every value and splices the arrays it yields.
pub fn try_flat_map_each_async<T, U, E, I, O, R>(
    values: I,
    op: O,
) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
where
    I: IntoIterator<Item = T>,
    O: FnMut(T) -> R,
    R: Future<Output = ResultArray<U, E>>,
{
    ResultArray::<T, E>::ok(values).flat_and_then_async(op)
}
