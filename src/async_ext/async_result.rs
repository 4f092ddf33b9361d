//! A deferred `Result` with the full Result combinator set.
//!
//! [`AsyncResult`] wraps any `Future<Output = Result<T, E>>`. Each combinator
//! attaches a continuation and returns a new `AsyncResult`, so a chain is
//! resolved exactly once, by the caller's final `.await`.

use core::fmt::Debug;
use core::future::{ready, Future, Ready};
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::{BoxFuture, FusedFuture, LocalBoxFuture};
use pin_project_lite::pin_project;

use super::async_result_array::AsyncResultArray;
use super::result_async_ext::ResultAsyncExt;
use crate::traits::ResultExt;
use crate::types::ResultArray;

pin_project! {
    /// A future resolving to a `Result<T, E>`, with Result combinators that
    /// compose without resolving early.
    ///
    /// Combinators short-circuit exactly like their `Result` counterparts:
    /// closures attached to the non-matching variant are never invoked, and
    /// futures attached to it are never polled. Awaiting consumes the value,
    /// so a chain resolves once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use result_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let total = async_ok::<_, &str>(20)
    ///         .map(|n| n + 1)
    ///         .and_then(|n| if n > 0 { Ok(n * 2) } else { Err("negative") })
    ///         .await;
    ///     assert_eq!(total, Ok(42));
    /// }
    /// ```
    #[derive(Debug, Clone)]
    #[must_use = "futures do nothing unless polled"]
    pub struct AsyncResult<Fut> {
        #[pin]
        future: Fut,
    }
}

/// Type-erased [`AsyncResult`], for storing heterogeneous chains.
pub type BoxAsyncResult<'a, T, E> = AsyncResult<BoxFuture<'a, Result<T, E>>>;

/// Type-erased [`AsyncResult`] for futures that are not `Send`.
pub type LocalBoxAsyncResult<'a, T, E> = AsyncResult<LocalBoxFuture<'a, Result<T, E>>>;

/// Creates an [`AsyncResult`] already resolved to `Ok(value)`.
#[inline]
pub fn async_ok<T, E>(value: T) -> AsyncResult<Ready<Result<T, E>>> {
    AsyncResult::resolved(Ok(value))
}

/// Creates an [`AsyncResult`] already resolved to `Err(error)`.
#[inline]
pub fn async_err<T, E>(error: E) -> AsyncResult<Ready<Result<T, E>>> {
    AsyncResult::resolved(Err(error))
}

impl<Fut> AsyncResult<Fut> {
    /// Wraps a future yielding a `Result`.
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

impl<T, E> AsyncResult<Ready<Result<T, E>>> {
    /// Creates an `AsyncResult` already resolved to `result`.
    #[inline]
    pub fn resolved(result: Result<T, E>) -> Self {
        Self::from_future(ready(result))
    }
}

impl<Fut, T, E> AsyncResult<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn continue_with<U, F, O>(self, op: O) -> AsyncResult<impl Future<Output = Result<U, F>>>
    where
        O: FnOnce(Result<T, E>) -> Result<U, F>,
    {
        AsyncResult::from_future(async move { op(self.await) })
    }

    /// Resolves to `true` if the result is `Ok`.
    pub async fn is_ok(self) -> bool {
        self.await.is_ok()
    }

    /// Resolves to `true` if the result is `Err`.
    pub async fn is_err(self) -> bool {
        self.await.is_err()
    }

    /// Resolves to the `Ok` value, if any.
    pub async fn ok(self) -> Option<T> {
        self.await.ok()
    }

    /// Resolves to the `Err` value, if any.
    pub async fn err(self) -> Option<E> {
        self.await.err()
    }

    /// Maps the `Ok` value once the result resolves.
    ///
    /// `op` is never called for an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use result_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let len = async_ok::<_, String>("hello").map(str::len).await;
    ///     assert_eq!(len, Ok(5));
    /// }
    /// ```
    pub fn map<U, O>(self, op: O) -> AsyncResult<impl Future<Output = Result<U, E>>>
    where
        O: FnOnce(T) -> U,
    {
        self.continue_with(move |result| result.map(op))
    }

    /// Resolves to `op(value)`, or `default` for an `Err`.
    pub async fn map_or<U, O>(self, default: U, op: O) -> U
    where
        O: FnOnce(T) -> U,
    {
        self.await.map_or(default, op)
    }

    /// Resolves to `op(value)`, or `default(error)` for an `Err`.
    pub async fn map_or_else<U, D, O>(self, default: D, op: O) -> U
    where
        D: FnOnce(E) -> U,
        O: FnOnce(T) -> U,
    {
        self.await.map_or_else(default, op)
    }

    /// Maps the `Err` value once the result resolves.
    pub fn map_err<F, O>(self, op: O) -> AsyncResult<impl Future<Output = Result<T, F>>>
    where
        O: FnOnce(E) -> F,
    {
        self.continue_with(move |result| result.map_err(op))
    }

    /// Replaces an `Ok` result with `res`.
    pub fn and<U>(self, res: Result<U, E>) -> AsyncResult<impl Future<Output = Result<U, E>>> {
        self.continue_with(move |result| result.and(res))
    }

    /// Chains a synchronous fallible step onto the `Ok` value.
    pub fn and_then<U, O>(self, op: O) -> AsyncResult<impl Future<Output = Result<U, E>>>
    where
        O: FnOnce(T) -> Result<U, E>,
    {
        self.continue_with(move |result| result.and_then(op))
    }

    /// Replaces an `Err` result with `res`.
    pub fn or<F>(self, res: Result<T, F>) -> AsyncResult<impl Future<Output = Result<T, F>>> {
        self.continue_with(move |result| result.or(res))
    }

    /// Recovers from an `Err` through `op`.
    pub fn or_else<F, O>(self, op: O) -> AsyncResult<impl Future<Output = Result<T, F>>>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        self.continue_with(move |result| result.or_else(op))
    }

    /// Resolves to the value, or `default` for an `Err`.
    pub async fn unwrap_or(self, default: T) -> T {
        self.await.unwrap_or(default)
    }

    /// Resolves to the value, computing a substitute from the error.
    pub async fn unwrap_or_else<O>(self, op: O) -> T
    where
        O: FnOnce(E) -> T,
    {
        self.await.unwrap_or_else(op)
    }

    /// Resolves to the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics on resolution if the value is an `Err`, with the error's
    /// `Debug` output.
    pub async fn unwrap(self) -> T
    where
        E: Debug,
    {
        self.await.unwrap()
    }

    /// Resolves to the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics on resolution with `msg` if the value is an `Err`.
    pub async fn expect<M>(self, msg: M) -> T
    where
        E: Debug,
        M: AsRef<str>,
    {
        self.await.expect(msg.as_ref())
    }

    /// Resolves to the `Err` value.
    ///
    /// # Panics
    ///
    /// Panics on resolution if the value is an `Ok`, with the value's `Debug`
    /// output.
    pub async fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        self.await.unwrap_err()
    }

    /// Resolves to the `Err` value.
    ///
    /// # Panics
    ///
    /// Panics on resolution with `msg` if the value is an `Ok`.
    pub async fn expect_err<M>(self, msg: M) -> E
    where
        T: Debug,
        M: AsRef<str>,
    {
        self.await.expect_err(msg.as_ref())
    }

    /// Expands the resolved payload into a [`ResultArray`], see
    /// [`ResultExt::result_array`].
    pub fn result_array<U, F, IU, IF, D, O>(
        self,
        err_fn: D,
        ok_fn: O,
    ) -> AsyncResultArray<impl Future<Output = ResultArray<U, F>>>
    where
        D: FnOnce(E) -> IF,
        O: FnOnce(T) -> IU,
        IF: IntoIterator<Item = F>,
        IU: IntoIterator<Item = U>,
    {
        AsyncResultArray::from_future(async move { self.await.result_array(err_fn, ok_fn) })
    }

    /// Swaps `Ok` and `Err` once the result resolves.
    pub fn flip(self) -> AsyncResult<impl Future<Output = Result<E, T>>> {
        self.continue_with(|result| result.flip())
    }

    /// Returns `self`; an `AsyncResult` is already async.
    #[inline]
    pub fn into_async(self) -> Self {
        self
    }

    /// Maps the `Ok` value through an async function, see
    /// [`ResultAsyncExt::map_async`].
    pub fn map_async<U, O, R>(self, op: O) -> AsyncResult<impl Future<Output = Result<U, E>>>
    where
        O: FnOnce(T) -> R,
        R: Future<Output = U>,
    {
        AsyncResult::from_future(async move { self.await.map_async(op).await })
    }

    /// Maps the `Err` value through an async function; values skip it.
    pub fn map_err_async<F, O, R>(self, op: O) -> AsyncResult<impl Future<Output = Result<T, F>>>
    where
        O: FnOnce(E) -> R,
        R: Future<Output = F>,
    {
        AsyncResult::from_future(async move { self.await.map_err_async(op).await })
    }

    /// Replaces an `Ok` result with the outcome of `res`.
    ///
    /// `res` is only awaited when the result is `Ok`.
    pub fn and_async<U, R>(self, res: R) -> AsyncResult<impl Future<Output = Result<U, E>>>
    where
        R: Future<Output = Result<U, E>>,
    {
        AsyncResult::from_future(async move { self.await.and_async(res).await })
    }

    /// Chains an async computation that may fail on the `Ok` value.
    ///
    /// `op` may return another `AsyncResult` or any future yielding a
    /// `Result`; the chain is not resolved until the caller awaits it.
    pub fn and_then_async<U, O, R>(self, op: O) -> AsyncResult<impl Future<Output = Result<U, E>>>
    where
        O: FnOnce(T) -> R,
        R: Future<Output = Result<U, E>>,
    {
        AsyncResult::from_future(async move { self.await.and_then_async(op).await })
    }

    /// Replaces an `Err` result with the outcome of `res`.
    ///
    /// `res` is only awaited when the result is `Err`.
    pub fn or_async<F, R>(self, res: R) -> AsyncResult<impl Future<Output = Result<T, F>>>
    where
        R: Future<Output = Result<T, F>>,
    {
        AsyncResult::from_future(async move { self.await.or_async(res).await })
    }

    /// Recovers from an `Err` through an async function.
    pub fn or_else_async<F, O, R>(self, op: O) -> AsyncResult<impl Future<Output = Result<T, F>>>
    where
        O: FnOnce(E) -> R,
        R: Future<Output = Result<T, F>>,
    {
        AsyncResult::from_future(async move { self.await.or_else_async(op).await })
    }

    /// Erases the future type.
    pub fn boxed<'a>(self) -> BoxAsyncResult<'a, T, E>
    where
        Fut: Send + 'a,
    {
        let future: BoxFuture<'a, Result<T, E>> = Box::pin(self.future);
        AsyncResult::from_future(future)
    }

    /// Erases the future type without requiring `Send`.
    pub fn boxed_local<'a>(self) -> LocalBoxAsyncResult<'a, T, E>
    where
        Fut: 'a,
    {
        let future: LocalBoxFuture<'a, Result<T, E>> = Box::pin(self.future);
        AsyncResult::from_future(future)
    }
}

impl<Fut> Future for AsyncResult<Fut>
where
    Fut: Future,
{
    type Output = Fut::Output;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx)
    }
}

impl<Fut> FusedFuture for AsyncResult<Fut>
where
    Fut: FusedFuture,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}

impl<T, E> From<Result<T, E>> for AsyncResult<Ready<Result<T, E>>> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::resolved(result)
    }
}
