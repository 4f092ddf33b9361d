//! Bridge from a resolved `Result` into [`AsyncResult`].
//!
//! Every method here short-circuits synchronously: the closure or future for
//! the non-matching variant is dropped without being invoked or polled.

use core::future::{Future, Ready};

use super::async_result::AsyncResult;

/// Extension trait lifting a `Result` into the async algebra.
///
/// # Examples
///
/// ```rust
/// use result_rail::prelude_async::*;
///
/// async fn fetch_quota(user: &str) -> u32 {
///     if user == "admin" { 1_000 } else { 10 }
/// }
///
/// async fn example() {
///     let quota = Ok::<_, &str>("admin")
///         .map_async(fetch_quota)
///         .await;
///     assert_eq!(quota, Ok(1_000));
/// }
/// ```
pub trait ResultAsyncExt<T, E>: Sized {
    /// Lifts the result into an [`AsyncResult`] that resolves immediately.
    fn into_async(self) -> AsyncResult<Ready<Result<T, E>>>;

    /// Maps the `Ok` value through an async function.
    ///
    /// `op` is invoked only for `Ok`; an `Err` resolves unchanged.
    fn map_async<U, O, R>(self, op: O) -> AsyncResult<impl Future<Output = Result<U, E>>>
    where
        O: FnOnce(T) -> R,
        R: Future<Output = U>;

    /// Maps the `Err` value through an async function.
    ///
    /// `op` is invoked only for `Err`; an `Ok` resolves unchanged.
    fn map_err_async<F, O, R>(self, op: O) -> AsyncResult<impl Future<Output = Result<T, F>>>
    where
        O: FnOnce(E) -> R,
        R: Future<Output = F>;

    /// Continues with `res` on `Ok`; an `Err` resolves unchanged and `res` is
    /// never polled.
    fn and_async<U, R>(self, res: R) -> AsyncResult<impl Future<Output = Result<U, E>>>
    where
        R: Future<Output = Result<U, E>>;

    /// Chains an async computation that may fail on the `Ok` value.
    fn and_then_async<U, O, R>(self, op: O) -> AsyncResult<impl Future<Output = Result<U, E>>>
    where
        O: FnOnce(T) -> R,
        R: Future<Output = Result<U, E>>;

    /// Falls back to `res` on `Err`; an `Ok` resolves unchanged and `res` is
    /// never polled.
    fn or_async<F, R>(self, res: R) -> AsyncResult<impl Future<Output = Result<T, F>>>
    where
        R: Future<Output = Result<T, F>>;

    /// Recovers from the `Err` value with an async computation.
    fn or_else_async<F, O, R>(self, op: O) -> AsyncResult<impl Future<Output = Result<T, F>>>
    where
        O: FnOnce(E) -> R,
        R: Future<Output = Result<T, F>>;
}

impl<T, E> ResultAsyncExt<T, E> for Result<T, E> {
    #[inline]
    fn into_async(self) -> AsyncResult<Ready<Result<T, E>>> {
        AsyncResult::resolved(self)
    }

    #[inline]
    fn map_async<U, O, R>(self, op: O) -> AsyncResult<impl Future<Output = Result<U, E>>>
    where
        O: FnOnce(T) -> R,
        R: Future<Output = U>,
    {
        AsyncResult::from_future(settle_ok(self.map(op)))
    }

    #[inline]
    fn map_err_async<F, O, R>(self, op: O) -> AsyncResult<impl Future<Output = Result<T, F>>>
    where
        O: FnOnce(E) -> R,
        R: Future<Output = F>,
    {
        AsyncResult::from_future(settle_err(self.map_err(op)))
    }

    #[inline]
    fn and_async<U, R>(self, res: R) -> AsyncResult<impl Future<Output = Result<U, E>>>
    where
        R: Future<Output = Result<U, E>>,
    {
        AsyncResult::from_future(settle_bind(self.map(|_| res)))
    }

    #[inline]
    fn and_then_async<U, O, R>(self, op: O) -> AsyncResult<impl Future<Output = Result<U, E>>>
    where
        O: FnOnce(T) -> R,
        R: Future<Output = Result<U, E>>,
    {
        AsyncResult::from_future(settle_bind(self.map(op)))
    }

    #[inline]
    fn or_async<F, R>(self, res: R) -> AsyncResult<impl Future<Output = Result<T, F>>>
    where
        R: Future<Output = Result<T, F>>,
    {
        AsyncResult::from_future(settle_recover(self.map_err(|_| res)))
    }

    #[inline]
    fn or_else_async<F, O, R>(self, op: O) -> AsyncResult<impl Future<Output = Result<T, F>>>
    where
        O: FnOnce(E) -> R,
        R: Future<Output = Result<T, F>>,
    {
        AsyncResult::from_future(settle_recover(self.map_err(op)))
    }
}

// The helpers below take a `Result` whose matching side already holds the
// pending future, so callers can invoke their closure eagerly (borrowing it
// only for the call) while the future itself stays lazy.

pub(crate) async fn settle_ok<R, E>(pending: Result<R, E>) -> Result<R::Output, E>
where
    R: Future,
{
    match pending {
        Ok(future) => Ok(future.await),
        Err(error) => Err(error),
    }
}

pub(crate) async fn settle_err<T, R>(pending: Result<T, R>) -> Result<T, R::Output>
where
    R: Future,
{
    match pending {
        Ok(value) => Ok(value),
        Err(future) => Err(future.await),
    }
}

pub(crate) async fn settle_bind<R, U, E>(pending: Result<R, E>) -> Result<U, E>
where
    R: Future<Output = Result<U, E>>,
{
    match pending {
        Ok(future) => future.await,
        Err(error) => Err(error),
    }
}

pub(crate) async fn settle_recover<T, R, F>(pending: Result<T, R>) -> Result<T, F>
where
    R: Future<Output = Result<T, F>>,
{
    match pending {
        Ok(value) => Ok(value),
        Err(future) => future.await,
    }
}
