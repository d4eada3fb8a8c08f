//! Async task and stream handles used by the GitHub service.
//!
//! Client operations hand back an [`AsyncTask`]; listings hand back an
//! [`AsyncStream`] fed by an [`EmitterBuilder`].

use futures::Stream;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::{mpsc, oneshot};

/// Pinned, sendable future resolving to a batch of items.
type BoxedBatchFuture<T, E> = Pin<Box<dyn Future<Output = Result<Vec<T>, E>> + Send>>;

/// Deferred producer of a [`BoxedBatchFuture`].
type BatchFactory<T, E> = Box<dyn FnOnce() -> BoxedBatchFuture<T, E> + Send>;

// ============================================================================
// AsyncTask - Single-result async operation
// ============================================================================

/// Handle to a spawned operation producing a single result.
///
/// Awaiting the handle yields `Err(RecvError)` only if the worker panicked
/// before sending its result.
pub struct AsyncTask<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> AsyncTask<T>
where
    T: Send + 'static,
{
    #[inline]
    #[must_use]
    pub fn new(rx: oneshot::Receiver<T>) -> Self {
        Self { rx }
    }

    /// Run blocking work (local repository access) on the blocking pool.
    #[inline]
    pub fn spawn<F>(f: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn_blocking(move || {
            let _ = tx.send(f());
        });
        Self::new(rx)
    }

    /// Run an async API call on the runtime.
    #[inline]
    pub fn spawn_async<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn(async move {
            let _ = tx.send(future.await);
        });
        Self::new(rx)
    }
}

impl<T> Future for AsyncTask<T> {
    type Output = Result<T, oneshot::error::RecvError>;

    #[inline]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx)
    }
}

// ============================================================================
// AsyncStream - Multi-result streaming operation
// ============================================================================

/// Deferred spawn of the producer feeding an [`AsyncStream`].
type Starter = Box<dyn FnOnce() + Send>;

/// Single-pass stream of results. Once drained it stays exhausted; a new
/// listing needs a new call.
pub struct AsyncStream<T> {
    rx: mpsc::UnboundedReceiver<T>,
    start: Option<Starter>,
}

impl<T> AsyncStream<T> {
    #[inline]
    #[must_use]
    pub fn new(rx: mpsc::UnboundedReceiver<T>) -> Self {
        Self { rx, start: None }
    }

    /// Stream whose producer is started by the first poll.
    #[must_use]
    pub fn deferred(rx: mpsc::UnboundedReceiver<T>, start: Starter) -> Self {
        Self {
            rx,
            start: Some(start),
        }
    }
}

impl<T> Stream for AsyncStream<T> {
    type Item = T;

    #[inline]
    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(start) = self.start.take() {
            start();
        }
        self.rx.poll_recv(cx)
    }
}

// ============================================================================
// EmitterBuilder - Batch-to-stream conversion for API results
// ============================================================================

/// Turns a batch-producing API call into an [`AsyncStream`].
///
/// The batch is fetched on a task spawned when the stream is first polled;
/// each item is converted with the `transform` passed to
/// [`EmitterBuilder::emit`] and sent in provider order. A failed fetch yields
/// exactly one `Err` item.
pub struct EmitterBuilder<T, E> {
    factory: BatchFactory<T, E>,
}

impl<T, E> EmitterBuilder<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    #[must_use]
    pub fn new(factory: BatchFactory<T, E>) -> Self {
        Self { factory }
    }

    /// Stream the items of the fetch, which starts on the first poll.
    ///
    /// - `transform`: converts each provider item into the caller's shape
    /// - `on_error`: observes the failure before it is forwarded (logging)
    pub fn emit<U, F, G>(self, transform: F, on_error: G) -> AsyncStream<Result<U, E>>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + 'static,
        G: Fn(&E) + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let factory = self.factory;

        let producer = async move {
            match factory().await {
                Ok(items) => {
                    for item in items {
                        if tx.send(Ok(transform(item))).is_err() {
                            break; // Receiver dropped
                        }
                    }
                }
                Err(e) => {
                    on_error(&e);
                    let _ = tx.send(Err(e));
                }
            }
        };

        AsyncStream::deferred(
            rx,
            Box::new(move || {
                tokio::spawn(producer);
            }),
        )
    }
}
