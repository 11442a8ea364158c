use std::sync::{Arc, Mutex};

use carousel::EngineEvent;

/// A registered listener callback.
pub type Listener = Arc<dyn Fn(EngineEvent) + Send + Sync>;

/// Handle returned by [`EventEmitter::on`]; pass it back to
/// [`EventEmitter::off`] to unregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct EmitterInner {
    next_id: u64,
    listeners: Vec<(EngineEvent, ListenerId, Listener)>,
}

/// Multi-listener pub/sub over [`EngineEvent`]s.
///
/// Clonable handle semantics: clones share one listener registry, which is
/// what lets the engine's `on_event` seam fan into the same emitter the host
/// registers against. Registration and removal are idempotent — `off` with
/// a stale or never-issued id is a no-op — and listeners may register or
/// remove listeners from inside a callback (the registry is not locked
/// during dispatch).
#[derive(Clone, Default)]
pub struct EventEmitter {
    inner: Arc<Mutex<EmitterInner>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for `event` and returns its removal handle.
    pub fn on(
        &self,
        event: EngineEvent,
        listener: impl Fn(EngineEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((event, id, Arc::new(listener)));
        id
    }

    /// Unregisters a listener. Returns whether anything was removed;
    /// removing a never-added or already-removed listener is a no-op.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let before = inner.listeners.len();
        inner.listeners.retain(|&(_, lid, _)| lid != id);
        inner.listeners.len() != before
    }

    /// Notifies every listener registered for `event`, in registration
    /// order. Fire-and-forget: no payload, no return values.
    pub fn emit(&self, event: EngineEvent) {
        let matching: Vec<Listener> = {
            let inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            inner
                .listeners
                .iter()
                .filter(|&&(e, _, _)| e == event)
                .map(|(_, _, l)| Arc::clone(l))
                .collect()
        };
        for listener in matching {
            listener(event);
        }
    }

    /// Drops every listener.
    pub fn clear(&self) {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner).listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner).listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl core::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.len())
            .finish()
    }
}

/// A scoped-registration list of teardown callbacks.
///
/// Hosts register a disposer for every listener they attach to the outside
/// world; [`EventStore::clear`] invokes each exactly once and empties the
/// list, so bulk teardown (destroy, re-activation) cannot leak a dangling
/// registration. Clearing also runs on drop.
#[derive(Default)]
pub struct EventStore {
    disposers: Vec<Box<dyn FnOnce() + Send>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks `disposer` for the next [`EventStore::clear`].
    pub fn add(&mut self, disposer: impl FnOnce() + Send + 'static) {
        self.disposers.push(Box::new(disposer));
    }

    /// Invokes every tracked disposer exactly once and empties the list.
    pub fn clear(&mut self) {
        for disposer in self.disposers.drain(..) {
            disposer();
        }
    }

    pub fn len(&self) -> usize {
        self.disposers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disposers.is_empty()
    }
}

impl Drop for EventStore {
    fn drop(&mut self) {
        self.clear();
    }
}

impl core::fmt::Debug for EventStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventStore")
            .field("disposers", &self.disposers.len())
            .finish()
    }
}
