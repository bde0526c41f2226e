use crate::foundation::error::{SettleError, SettleResult};
use crate::scan::scanner::{DepthLimit, scan_tree};
use crate::tree::node::{ComputedStyle, ComputedStyleReader, ElementNode, StyleReader};
use serde_json::{Map, Value};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Key under which the computed time is stored in a [`Completion`].
pub const TIME_KEY: &str = "time";

/// Callback run once when the transitions of a tree are expected to be over.
///
/// The returned map is passed back through the [`PendingCompletion`], with [`TIME_KEY`] set.
pub struct EndListener(Box<dyn FnOnce() -> Map<String, Value> + Send + 'static>);

impl EndListener {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Map<String, Value> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Listener that produces an empty map.
    pub fn noop() -> Self {
        Self::new(Map::new)
    }

    fn call(self) -> Map<String, Value> {
        (self.0)()
    }
}

impl Default for EndListener {
    fn default() -> Self {
        Self::noop()
    }
}

impl std::fmt::Debug for EndListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EndListener(..)")
    }
}

/// Result of a fired completion: the listener's map plus the computed `time`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Completion {
    fields: Map<String, Value>,
}

impl Completion {
    fn new(mut fields: Map<String, Value>, time_ms: f64) -> Self {
        fields.insert(TIME_KEY.to_owned(), Value::from(time_ms));
        Self { fields }
    }

    /// The computed transition time in milliseconds.
    pub fn time_ms(&self) -> f64 {
        self.fields
            .get(TIME_KEY)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    /// Look up a field produced by the listener (or `time`).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Borrow all fields.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Take all fields.
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

/// Cancels a [`PendingCompletion`] from anywhere, including while it is being awaited.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    abort: AbortHandle,
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Stop the timer. The listener will not run unless it already has.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.abort.abort();
    }

    /// Return `true` once [`Self::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// A completion that becomes ready once the computed time has elapsed.
///
/// The timer runs independently of this value: dropping it does not stop the listener from
/// running. Resolves to [`SettleError::Cancelled`] only through a [`CancelHandle`].
#[derive(Debug)]
pub struct PendingCompletion {
    time_ms: f64,
    rx: oneshot::Receiver<Completion>,
    cancel: CancelHandle,
}

impl PendingCompletion {
    /// The computed transition time in milliseconds, known as soon as the timer is scheduled.
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    /// Handle that can cancel the timer.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Cancel the timer; awaiting afterwards yields [`SettleError::Cancelled`] unless the timer
    /// had already fired.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Future for PendingCompletion {
    type Output = SettleResult<Completion>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(Ok(completion)) => Poll::Ready(Ok(completion)),
            Poll::Ready(Err(_)) if this.cancel.is_cancelled() => {
                Poll::Ready(Err(SettleError::Cancelled))
            }
            Poll::Ready(Err(_)) => Poll::Ready(Err(SettleError::runtime(
                "completion timer ended without a result",
            ))),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Compute the transition time of `root` now, then run `listener` once after that many
/// milliseconds.
///
/// A `None` listener behaves like [`EndListener::noop`]. Must be called from within a tokio
/// runtime.
pub fn add_end_event_listener<N>(
    root: &N,
    listener: Option<EndListener>,
    depth: DepthLimit,
) -> SettleResult<PendingCompletion>
where
    N: ElementNode + ComputedStyle,
{
    add_end_event_listener_with(root, &ComputedStyleReader, listener, depth)
}

/// Like [`add_end_event_listener`], reading styles through `reader`.
#[tracing::instrument(skip(root, reader, listener))]
pub fn add_end_event_listener_with<N, R>(
    root: &N,
    reader: &R,
    listener: Option<EndListener>,
    depth: DepthLimit,
) -> SettleResult<PendingCompletion>
where
    N: ElementNode,
    R: StyleReader<N> + ?Sized,
{
    let time_ms = scan_tree(root, reader, depth).time_ms;
    schedule_completion(time_ms, listener)
}

/// Run `listener` once after `time_ms` milliseconds.
///
/// Negative or non-finite times are treated as zero.
pub fn schedule_completion(
    time_ms: f64,
    listener: Option<EndListener>,
) -> SettleResult<PendingCompletion> {
    let handle = tokio::runtime::Handle::try_current().map_err(|e| {
        SettleError::runtime(format!("completion timer needs a tokio runtime: {e}"))
    })?;

    let time_ms = if time_ms.is_finite() && time_ms > 0.0 {
        time_ms
    } else {
        0.0
    };
    let delay = Duration::try_from_secs_f64(time_ms / 1000.0).unwrap_or(Duration::MAX);
    let deadline = Instant::now().checked_add(delay);
    let listener = listener.unwrap_or_default();
    let (tx, rx) = oneshot::channel();

    tracing::debug!(time_ms, "scheduling transition end timer");
    let task = handle.spawn(async move {
        match deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending::<()>().await,
        }
        let completion = Completion::new(listener.call(), time_ms);
        tracing::debug!(time_ms, "transition end timer fired");
        if tx.send(completion).is_err() {
            tracing::trace!("pending completion was dropped before the timer fired");
        }
    });

    Ok(PendingCompletion {
        time_ms,
        rx,
        cancel: CancelHandle {
            abort: task.abort_handle(),
            cancelled: Arc::new(AtomicBool::new(false)),
        },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/notify/listener.rs"]
mod tests;
