//! Extension traits turning plain futures into [`AsyncResult`] /
//! [`AsyncResultArray`].

use core::future::Future;

use super::async_result::AsyncResult;
use super::async_result_array::AsyncResultArray;
use crate::types::ResultArray;

/// Wraps any `Future<Output = Result<T, E>>` as an [`AsyncResult`].
///
/// # Examples
///
/// ```rust
/// use result_rail::prelude_async::*;
///
/// async fn read_config() -> Result<String, String> {
///     Ok("port = 8080".to_string())
/// }
///
/// async fn example() {
///     let lines = read_config()
///         .into_async_result()
///         .map(|text| text.lines().count())
///         .await;
///     assert_eq!(lines, Ok(1));
/// }
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the future without polling it.
    fn into_async_result(self) -> AsyncResult<Self>;
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn into_async_result(self) -> AsyncResult<Self> {
        AsyncResult::from_future(self)
    }
}

/// Wraps any `Future<Output = ResultArray<T, E>>` as an [`AsyncResultArray`].
pub trait FutureResultArrayExt<T, E>: Future<Output = ResultArray<T, E>> + Sized {
    /// Wraps the future without polling it.
    fn into_async_result_array(self) -> AsyncResultArray<Self>;
}

impl<Fut, T, E> FutureResultArrayExt<T, E> for Fut
where
    Fut: Future<Output = ResultArray<T, E>>,
{
    #[inline]
    fn into_async_result_array(self) -> AsyncResultArray<Self> {
        AsyncResultArray::from_future(self)
    }
}
