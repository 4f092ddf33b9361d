//! A deferred [`ResultArray`] with the ResultArray combinator set.

use core::fmt::Debug;
use core::future::{ready, Future, Ready};
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::{BoxFuture, FusedFuture, LocalBoxFuture};
use futures_util::future::{FutureExt, Map};
use pin_project_lite::pin_project;

use super::collect_all::CollectAll;
use crate::types::{NonEmptyVec, ResultArray};

pin_project! {
    /// A future resolving to a [`ResultArray<T, E>`](ResultArray).
    ///
    /// Every synchronous `ResultArray` combinator has a mirrored form here
    /// that applies once the array resolves. The `*_async` family lifts each
    /// element into its own deferred computation and recombines them with
    /// collect-all semantics (see [`from_async_array`](Self::from_async_array)).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use result_rail::prelude_async::*;
    ///
    /// async fn load(id: u32) -> Result<String, String> {
    ///     if id % 2 == 0 { Ok(format!("row {id}")) } else { Err(format!("missing {id}")) }
    /// }
    ///
    /// async fn example() {
    ///     let rows = AsyncResultArray::from_async_array((1..=4).map(load))
    ///         .map(|row| row.to_uppercase())
    ///         .await;
    ///
    ///     assert_eq!(rows.len(), 4);
    ///     assert_eq!(rows.oks(), vec!["ROW 2".to_string(), "ROW 4".to_string()]);
    /// }
    /// ```
    #[derive(Debug, Clone)]
    #[must_use = "futures do nothing unless polled"]
    pub struct AsyncResultArray<Fut> {
        #[pin]
        future: Fut,
    }
}

/// Type-erased [`AsyncResultArray`].
pub type BoxAsyncResultArray<'a, T, E> = AsyncResultArray<BoxFuture<'a, ResultArray<T, E>>>;

/// Type-erased [`AsyncResultArray`] for futures that are not `Send`.
pub type LocalBoxAsyncResultArray<'a, T, E> =
    AsyncResultArray<LocalBoxFuture<'a, ResultArray<T, E>>>;

impl<Fut> AsyncResultArray<Fut> {
    /// Wraps a future yielding a [`ResultArray`].
    #[inline]
    pub fn from_future(future: Fut) -> Self {
        Self { future }
    }

    /// Returns the wrapped future.
    #[inline]
    pub fn into_inner(self) -> Fut {
        self.future
    }
}

impl<T, E> AsyncResultArray<Ready<ResultArray<T, E>>> {
    /// Creates an `AsyncResultArray` already resolved to `array`.
    #[inline]
    pub fn resolved(array: ResultArray<T, E>) -> Self {
        Self::from_future(ready(array))
    }

    /// Creates an already resolved, fully-`Ok` array.
    pub fn ok<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::resolved(ResultArray::ok(values))
    }

    /// Creates an already resolved, fully-`Err` array.
    pub fn err<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::resolved(ResultArray::err(errors))
    }
}

/// Converts a resolved list of results into a [`ResultArray`].
pub type CollectResults<I, T, E> = fn(I) -> ResultArray<T, E>;

impl<V, I, T, E> AsyncResultArray<Map<V, CollectResults<I, T, E>>>
where
    V: Future<Output = I>,
    I: IntoIterator<Item = Result<T, E>>,
{
    /// Wraps a future yielding a plain list of results.
    ///
    /// The list is collected into a [`ResultArray`] in order once `future`
    /// resolves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use result_rail::prelude_async::*;
    ///
    /// async fn fetch_page() -> Vec<Result<u32, String>> {
    ///     vec![Ok(1), Err("gone".to_string()), Ok(3)]
    /// }
    ///
    /// async fn example() {
    ///     let ids = AsyncResultArray::from_future_vec(fetch_page()).oks().await;
    ///     assert_eq!(ids, vec![1, 3]);
    /// }
    /// ```
    pub fn from_future_vec(future: V) -> Self {
        Self::from_future(FutureExt::map(future, ResultArray::from_iter as CollectResults<I, T, E>))
    }
}

impl<F, T, E> AsyncResultArray<CollectAll<F>>
where
    F: Future<Output = Result<T, E>>,
{
    /// Waits for every deferred result and collects them in input order.
    ///
    /// Collect-all, never fail-fast: an input resolving to `Err` is recorded
    /// in place and the remaining inputs keep running, so `N` inputs always
    /// yield an array of length `N`.
    pub fn from_async_array<I>(results: I) -> Self
    where
        I: IntoIterator<Item = F>,
    {
        Self::from_future(CollectAll::new(results))
    }
}

impl<Fut, T, E> AsyncResultArray<Fut>
where
    Fut: Future<Output = ResultArray<T, E>>,
{
    #[inline]
    fn continue_with<U, F, O>(self, op: O) -> AsyncResultArray<impl Future<Output = ResultArray<U, F>>>
    where
        O: FnOnce(ResultArray<T, E>) -> ResultArray<U, F>,
    {
        AsyncResultArray::from_future(async move { op(self.await) })
    }

    /// Resolves to the `Ok` values in order.
    pub async fn oks(self) -> Vec<T> {
        self.await.oks()
    }

    /// Resolves to the `Err` values in order.
    pub async fn errs(self) -> Vec<E> {
        self.await.errs()
    }

    /// Resolves to the values and the errors, each in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use result_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let array = ResultArray::from(vec![Ok(1), Err("e"), Ok(2)]);
    ///     let (oks, errs) = array.into_async().partition().await;
    ///     assert_eq!((oks, errs), (vec![1, 2], vec!["e"]));
    /// }
    /// ```
    pub async fn partition(self) -> (Vec<T>, Vec<E>) {
        self.await.partition()
    }

    /// Resolves to `Ok` of the values, see [`ResultArray::oks_result`].
    pub async fn oks_result(self) -> Result<Vec<T>, Vec<E>> {
        self.await.oks_result()
    }

    /// Resolves to `Err` of the errors, see [`ResultArray::errs_result`].
    pub async fn errs_result(self) -> Result<Vec<T>, Vec<E>> {
        self.await.errs_result()
    }

    /// Transforms the raw list of results once it resolves.
    pub fn map_results<U, F, O>(self, op: O) -> AsyncResultArray<impl Future<Output = ResultArray<U, F>>>
    where
        O: FnOnce(Vec<Result<T, E>>) -> Vec<Result<U, F>>,
    {
        self.continue_with(move |array| array.map_results(op))
    }

    /// Resolves and buckets the `Ok` values, see [`ResultArray::group`].
    pub fn group<K, O>(
        self,
        key_fn: O,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<(K, NonEmptyVec<T>), E>>>
    where
        K: Ord + Clone,
        O: FnMut(&T) -> K,
    {
        self.continue_with(move |array| array.group(key_fn))
    }

    /// Resolves and buckets the `Ok` values by an encoded key, see
    /// [`ResultArray::group_by_encoding`].
    pub fn group_by_encoding<K, S, O, C>(
        self,
        key_fn: O,
        encode: C,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<(K, NonEmptyVec<T>), E>>>
    where
        S: Ord,
        O: FnMut(&T) -> K,
        C: FnMut(&K) -> S,
    {
        self.continue_with(move |array| array.group_by_encoding(key_fn, encode))
    }

    /// Resolves and buckets the `Ok` values by canonical JSON key, see
    /// [`ResultArray::group_canonical`].
    #[cfg(feature = "serde")]
    pub async fn group_canonical<K, O>(
        self,
        key_fn: O,
    ) -> Result<ResultArray<(K, NonEmptyVec<T>), E>, serde_json::Error>
    where
        K: serde::Serialize,
        O: FnMut(&T) -> K,
    {
        self.await.group_canonical(key_fn)
    }

    /// Resolves and chunks the `Ok` values, see [`ResultArray::batch`].
    ///
    /// # Panics
    ///
    /// Panics on resolution if `size` is zero.
    pub fn batch(
        self,
        size: usize,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<(usize, NonEmptyVec<T>), E>>> {
        self.continue_with(move |array| array.batch(size))
    }

    /// Maps every `Ok` value once the array resolves.
    pub fn map<U, O>(self, op: O) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        O: FnMut(T) -> U,
    {
        self.continue_with(move |array| array.map(op))
    }

    /// Applies `op` once to all values, see [`ResultArray::map_all`].
    pub fn map_all<U, I, O>(self, op: O) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        O: FnOnce(Vec<T>) -> I,
        I: IntoIterator<Item = U>,
    {
        self.continue_with(move |array| array.map_all(op))
    }

    /// Expands every `Ok` value in place, see [`ResultArray::flat_map`].
    pub fn flat_map<U, I, O>(self, op: O) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        O: FnMut(T) -> I,
        I: IntoIterator<Item = U>,
    {
        self.continue_with(move |array| array.flat_map(op))
    }

    /// Resolves to `op(value)` per element, or `default` for each error.
    pub async fn map_or<U, O>(self, default: U, op: O) -> Vec<U>
    where
        U: Clone,
        O: FnMut(T) -> U,
    {
        self.await.map_or(default, op)
    }

    /// Resolves to one folded output per element, see [`ResultArray::map_or_else`].
    pub async fn map_or_else<U, D, O>(self, default: D, op: O) -> Vec<U>
    where
        D: FnMut(E) -> U,
        O: FnMut(T) -> U,
    {
        self.await.map_or_else(default, op)
    }

    /// Maps every `Err` once the array resolves.
    pub fn map_err<F, O>(self, op: O) -> AsyncResultArray<impl Future<Output = ResultArray<T, F>>>
    where
        O: FnMut(E) -> F,
    {
        self.continue_with(move |array| array.map_err(op))
    }

    /// Expands every `Err` in place, see [`ResultArray::flat_map_err`].
    pub fn flat_map_err<F, I, O>(
        self,
        op: O,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<T, F>>>
    where
        O: FnMut(E) -> I,
        I: IntoIterator<Item = F>,
    {
        self.continue_with(move |array| array.flat_map_err(op))
    }

    /// Replaces every `Ok` element with a copy of `res`.
    pub fn and<U>(self, res: Result<U, E>) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        U: Clone,
        E: Clone,
    {
        self.continue_with(move |array| array.and(res))
    }

    /// Chains a synchronous fallible step onto every `Ok` element.
    pub fn and_then<U, O>(self, op: O) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        O: FnMut(T) -> Result<U, E>,
    {
        self.continue_with(move |array| array.and_then(op))
    }

    /// Splices the array `op` returns in place of each `Ok` element.
    pub fn flat_and_then<U, O>(
        self,
        op: O,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        O: FnMut(T) -> ResultArray<U, E>,
    {
        self.continue_with(move |array| array.flat_and_then(op))
    }

    /// Replaces every `Err` element with a copy of `res`.
    pub fn or<F>(self, res: Result<T, F>) -> AsyncResultArray<impl Future<Output = ResultArray<T, F>>>
    where
        T: Clone,
        F: Clone,
    {
        self.continue_with(move |array| array.or(res))
    }

    /// Gives every `Err` element a chance to recover through `op`.
    pub fn or_else<F, O>(self, op: O) -> AsyncResultArray<impl Future<Output = ResultArray<T, F>>>
    where
        O: FnMut(E) -> Result<T, F>,
    {
        self.continue_with(move |array| array.or_else(op))
    }

    /// Resolves to every value, substituting `default` for each error.
    pub async fn unwrap_or(self, default: T) -> Vec<T>
    where
        T: Clone,
    {
        self.await.unwrap_or(default)
    }

    /// Resolves to every value, computing a substitute from each error.
    pub async fn unwrap_or_else<O>(self, op: O) -> Vec<T>
    where
        O: FnMut(E) -> T,
    {
        self.await.unwrap_or_else(op)
    }

    /// Resolves to every value.
    ///
    /// # Panics
    ///
    /// Panics on resolution with the first error if any element is `Err`.
    pub async fn unwrap(self) -> Vec<T>
    where
        E: Debug,
    {
        self.await.unwrap()
    }

    /// Resolves to every value.
    ///
    /// # Panics
    ///
    /// Panics on resolution with `msg` if any element is `Err`.
    pub async fn expect<M>(self, msg: M) -> Vec<T>
    where
        E: Debug,
        M: AsRef<str>,
    {
        self.await.expect(msg.as_ref())
    }

    /// Resolves to every error.
    ///
    /// # Panics
    ///
    /// Panics on resolution with the first value if any element is `Ok`.
    pub async fn unwrap_err(self) -> Vec<E>
    where
        T: Debug,
    {
        self.await.unwrap_err()
    }

    /// Resolves to every error.
    ///
    /// # Panics
    ///
    /// Panics on resolution with `msg` if any element is `Ok`.
    pub async fn expect_err<M>(self, msg: M) -> Vec<E>
    where
        T: Debug,
        M: AsRef<str>,
    {
        self.await.expect_err(msg.as_ref())
    }

    /// Swaps `Ok` and `Err` in every element.
    pub fn flip(self) -> AsyncResultArray<impl Future<Output = ResultArray<E, T>>> {
        self.continue_with(|array| array.flip())
    }

    /// Returns `self`; an `AsyncResultArray` is already async.
    #[inline]
    pub fn into_async(self) -> Self {
        self
    }

    /// Maps every `Ok` value through an async function, see
    /// [`ResultArray::map_async`].
    pub fn map_async<U, O, R>(self, op: O) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        O: FnMut(T) -> R,
        R: Future<Output = U>,
    {
        AsyncResultArray::from_future(async move { self.await.map_async(op).await })
    }

    /// Expands every `Ok` value through an async function, see
    /// [`ResultArray::flat_map_async`].
    pub fn flat_map_async<U, I, O, R>(
        self,
        op: O,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        O: FnMut(T) -> R,
        R: Future<Output = I>,
        I: IntoIterator<Item = U>,
    {
        AsyncResultArray::from_future(async move { self.await.flat_map_async(op).await })
    }

    /// Maps every `Err` through an async function.
    pub fn map_err_async<F, O, R>(
        self,
        op: O,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<T, F>>>
    where
        O: FnMut(E) -> R,
        R: Future<Output = F>,
    {
        AsyncResultArray::from_future(async move { self.await.map_err_async(op).await })
    }

    /// Replaces every `Ok` element with the outcome of `res`.
    ///
    /// `res` is awaited at most once, and only if some element is `Ok`.
    pub fn and_async<U, R>(self, res: R) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        U: Clone,
        E: Clone,
        R: Future<Output = Result<U, E>>,
    {
        AsyncResultArray::from_future(async move { self.await.and_async(res).await })
    }

    /// Chains an async fallible step onto every `Ok` element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use result_rail::prelude_async::*;
    ///
    /// async fn lookup(id: u32) -> Result<String, String> {
    ///     if id < 3 { Ok(format!("user {id}")) } else { Err(format!("no user {id}")) }
    /// }
    ///
    /// async fn example() {
    ///     let users = AsyncResultArray::ok([1, 5]).and_then_async(lookup).await;
    ///     assert_eq!(users.into_vec(), vec![Ok("user 1".to_string()), Err("no user 5".to_string())]);
    /// }
    /// ```
    pub fn and_then_async<U, O, R>(
        self,
        op: O,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        O: FnMut(T) -> R,
        R: Future<Output = Result<U, E>>,
    {
        AsyncResultArray::from_future(async move { self.await.and_then_async(op).await })
    }

    /// Splices the array each async step returns in place of its `Ok` element.
    pub fn flat_and_then_async<U, O, R>(
        self,
        op: O,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<U, E>>>
    where
        O: FnMut(T) -> R,
        R: Future<Output = ResultArray<U, E>>,
    {
        AsyncResultArray::from_future(async move { self.await.flat_and_then_async(op).await })
    }

    /// Replaces every `Err` element with the outcome of `res`.
    ///
    /// `res` is awaited at most once, and only if some element is `Err`.
    pub fn or_async<F, R>(self, res: R) -> AsyncResultArray<impl Future<Output = ResultArray<T, F>>>
    where
        T: Clone,
        F: Clone,
        R: Future<Output = Result<T, F>>,
    {
        AsyncResultArray::from_future(async move { self.await.or_async(res).await })
    }

    /// Recovers every `Err` element through an async function.
    pub fn or_else_async<F, O, R>(
        self,
        op: O,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<T, F>>>
    where
        O: FnMut(E) -> R,
        R: Future<Output = Result<T, F>>,
    {
        AsyncResultArray::from_future(async move { self.await.or_else_async(op).await })
    }

    /// Erases the future type.
    pub fn boxed<'a>(self) -> BoxAsyncResultArray<'a, T, E>
    where
        Fut: Send + 'a,
    {
        let future: BoxFuture<'a, ResultArray<T, E>> = Box::pin(self.future);
        AsyncResultArray::from_future(future)
    }

    /// Erases the future type without requiring `Send`.
    pub fn boxed_local<'a>(self) -> LocalBoxAsyncResultArray<'a, T, E>
    where
        Fut: 'a,
    {
        let future: LocalBoxFuture<'a, ResultArray<T, E>> = Box::pin(self.future);
        AsyncResultArray::from_future(future)
    }
}

impl<Fut> Future for AsyncResultArray<Fut>
where
    Fut: Future,
{
    type Output = Fut::Output;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx)
    }
}

impl<Fut> FusedFuture for AsyncResultArray<Fut>
where
    Fut: FusedFuture,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}

impl<T, E> From<ResultArray<T, E>> for AsyncResultArray<Ready<ResultArray<T, E>>> {
    #[inline]
    fn from(array: ResultArray<T, E>) -> Self {
        Self::resolved(array)
    }
}
