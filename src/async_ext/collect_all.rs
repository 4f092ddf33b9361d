//! Collect-all join of many deferred results.

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_util::future::{join_all, JoinAll};
use pin_project_lite::pin_project;

use crate::types::ResultArray;

pin_project! {
    /// Future that waits for every input to settle and yields their results
    /// as a [`ResultArray`] in input order.
    ///
    /// It never fails fast: an `Err` from one input does not stop the others,
    /// so the aggregate always has one element per input. Inputs are polled
    /// concurrently within the task that polls this future; completion order
    /// has no influence on the output order.
    ///
    /// Created by [`AsyncResultArray::from_async_array`](super::AsyncResultArray::from_async_array).
    #[must_use = "futures do nothing unless polled"]
    pub struct CollectAll<F>
    where
        F: Future,
    {
        #[pin]
        inner: JoinAll<F>,
    }
}

impl<F> CollectAll<F>
where
    F: Future,
{
    pub(crate) fn new<I>(futures: I) -> Self
    where
        I: IntoIterator<Item = F>,
    {
        Self { inner: join_all(futures) }
    }
}

impl<F, T, E> Future for CollectAll<F>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = ResultArray<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.inner.poll(cx).map(|results| {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                total = results.len(),
                failed = results.iter().filter(|result| result.is_err()).count(),
                "collect-all settled"
            );
            ResultArray::new(results)
        })
    }
}

impl<F> fmt::Debug for CollectAll<F>
where
    F: Future + fmt::Debug,
    F::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectAll").field("inner", &self.inner).finish()
    }
}
