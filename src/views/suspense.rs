//! Suspension boundary for lazy views.
//!
//! # Responsibilities
//! - Track load state of each lazy view for one mount
//! - Start a load on first render, share it with concurrent renders
//! - Show a placeholder while a load is slower than the boundary allows
//! - Contain load failures so the next render retries
//!
//! # State Transitions
//! ```text
//! (absent) → Loading: first render of the view
//! Loading → Ready:    load succeeded
//! Loading → (absent): load failed (next render retries)
//! ```
//!
//! # Design Decisions
//! - Load tasks hold a weak reference; a result arriving after unmount is dropped
//! - Timed-out renders do not cancel the load

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;

use crate::observability::metrics;
use crate::views::loader::{LoadError, ViewBundle, ViewLoader};
use crate::views::ViewId;

type Outcome = Option<Result<Arc<ViewBundle>, Arc<LoadError>>>;

enum SlotState {
    Loading(watch::Receiver<Outcome>),
    Ready(Arc<ViewBundle>),
}

/// Result of rendering a lazy view through the boundary.
#[derive(Debug, Clone)]
pub enum Rendered {
    /// Bundle is loaded.
    Ready(Arc<ViewBundle>),
    /// Still loading; show the placeholder.
    Placeholder(String),
    /// Load failed; a later render retries.
    Failed { view: ViewId, error: String },
}

struct Slots {
    slots: DashMap<ViewId, SlotState>,
}

/// Per-mount boundary around all lazy views.
#[derive(Clone)]
pub struct Suspense {
    inner: Arc<Slots>,
    loader: Arc<dyn ViewLoader>,
    timeout: Duration,
    placeholder: String,
}

impl Suspense {
    pub fn new(
        loader: Arc<dyn ViewLoader>,
        timeout: Duration,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(Slots {
                slots: DashMap::new(),
            }),
            loader,
            timeout,
            placeholder: placeholder.into(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether `view` has finished loading in this boundary.
    pub fn is_ready(&self, view: ViewId) -> bool {
        matches!(
            self.inner.slots.get(&view).as_deref(),
            Some(SlotState::Ready(_))
        )
    }

    /// Render `view`, waiting at most the boundary timeout for its bundle.
    pub async fn render(&self, view: ViewId) -> Rendered {
        let (mut rx, start) = match self.inner.slots.entry(view) {
            Entry::Occupied(slot) => match slot.get() {
                SlotState::Ready(bundle) => return Rendered::Ready(Arc::clone(bundle)),
                SlotState::Loading(rx) => (rx.clone(), None),
            },
            Entry::Vacant(slot) => {
                let (tx, rx) = watch::channel(None);
                slot.insert(SlotState::Loading(rx.clone()));
                (rx, Some(tx))
            }
        };
        // Shard lock is released here; the load task writes back into the map.
        if let Some(tx) = start {
            self.spawn_load(view, tx);
        }

        let waited = tokio::time::timeout(self.timeout, rx.wait_for(Option::is_some)).await;
        match waited {
            Ok(Ok(outcome)) => match outcome.as_ref() {
                Some(Ok(bundle)) => Rendered::Ready(Arc::clone(bundle)),
                Some(Err(e)) => Rendered::Failed {
                    view,
                    error: e.to_string(),
                },
                None => Rendered::Placeholder(self.placeholder.clone()),
            },
            // Sender dropped without a result.
            Ok(Err(_)) => Rendered::Failed {
                view,
                error: LoadError::Interrupted(view).to_string(),
            },
            Err(_) => {
                tracing::debug!(view = %view, "Lazy view still loading, showing placeholder");
                Rendered::Placeholder(self.placeholder.clone())
            }
        }
    }

    fn spawn_load(&self, view: ViewId, tx: watch::Sender<Outcome>) {
        let slots: Weak<Slots> = Arc::downgrade(&self.inner);
        let loader = Arc::clone(&self.loader);
        tracing::debug!(view = %view, "Lazy view load started");

        tokio::spawn(async move {
            let result = loader.load(view).await;

            let Some(slots) = slots.upgrade() else {
                tracing::debug!(view = %view, "Mount gone before load finished, discarding");
                metrics::record_lazy_load("discarded");
                return;
            };

            match result {
                Ok(bundle) => {
                    let bundle = Arc::new(bundle);
                    slots.slots.insert(view, SlotState::Ready(Arc::clone(&bundle)));
                    metrics::record_lazy_load("ready");
                    tracing::info!(view = %view, "Lazy view loaded");
                    let _ = tx.send(Some(Ok(bundle)));
                }
                Err(e) => {
                    slots.slots.remove(&view);
                    metrics::record_lazy_load("failed");
                    tracing::error!(view = %view, error = %e, "Lazy view failed to load");
                    let _ = tx.send(Some(Err(Arc::new(e))));
                }
            }
        });
    }
}

impl std::fmt::Debug for Suspense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suspense")
            .field("slots", &self.inner.slots.len())
            .field("timeout", &self.timeout)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails the first `failures` loads, then succeeds after `delay`.
    struct ScriptedLoader {
        calls: AtomicUsize,
        failures: usize,
        delay: Duration,
    }

    impl ScriptedLoader {
        fn new(failures: usize, delay: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                failures,
                delay,
            }
        }
    }

    #[async_trait]
    impl ViewLoader for ScriptedLoader {
        async fn load(&self, view: ViewId) -> Result<ViewBundle, LoadError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if call < self.failures {
                return Err(LoadError::Interrupted(view));
            }
            Ok(ViewBundle {
                view,
                source: format!("bundle:{}", view),
            })
        }
    }

    #[tokio::test]
    async fn test_fast_load_renders_ready() {
        let loader = Arc::new(ScriptedLoader::new(0, Duration::from_millis(1)));
        let suspense = Suspense::new(loader.clone(), Duration::from_secs(2), "Loading...");

        match suspense.render(ViewId::Driver).await {
            Rendered::Ready(bundle) => assert_eq!(bundle.source, "bundle:driver"),
            other => panic!("expected Ready, got {:?}", other),
        }
        assert!(suspense.is_ready(ViewId::Driver));

        // Second render hits the cache.
        assert!(matches!(suspense.render(ViewId::Driver).await, Rendered::Ready(_)));
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_slow_load_shows_placeholder_then_completes() {
        let loader = Arc::new(ScriptedLoader::new(0, Duration::from_millis(200)));
        let suspense = Suspense::new(loader.clone(), Duration::from_millis(10), "Loading...");

        match suspense.render(ViewId::Car).await {
            Rendered::Placeholder(text) => assert_eq!(text, "Loading..."),
            other => panic!("expected Placeholder, got {:?}", other),
        }

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(suspense.is_ready(ViewId::Car));
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_contained_and_retried() {
        let loader = Arc::new(ScriptedLoader::new(1, Duration::from_millis(1)));
        let suspense = Suspense::new(loader.clone(), Duration::from_secs(2), "Loading...");

        match suspense.render(ViewId::Driver).await {
            Rendered::Failed { view, .. } => assert_eq!(view, ViewId::Driver),
            other => panic!("expected Failed, got {:?}", other),
        }
        assert!(!suspense.is_ready(ViewId::Driver));

        assert!(matches!(suspense.render(ViewId::Driver).await, Rendered::Ready(_)));
        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_result_after_drop_is_discarded() {
        let loader = Arc::new(ScriptedLoader::new(0, Duration::from_millis(50)));
        let suspense = Suspense::new(loader.clone(), Duration::from_millis(1), "Loading...");
        let slots = Arc::downgrade(&suspense.inner);

        assert!(matches!(suspense.render(ViewId::Car).await, Rendered::Placeholder(_)));
        drop(suspense);
        assert!(slots.upgrade().is_none());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    }
}
