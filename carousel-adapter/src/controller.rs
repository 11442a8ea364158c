use std::sync::Arc;

use carousel::{
    Engine, EngineError, EngineEvent, EngineOptions, Frame, PointerEvent, PointerPhase,
    ScrollDirection, SlideLayout,
};

use crate::{EventEmitter, EventStore, ListenerId};

/// Frame scheduler injected into a [`Controller`].
///
/// `request_tick` asks the host to call [`Controller::tick`] once on its
/// next frame (animation frame, timer, test harness); `cancel_tick` retracts
/// an outstanding request. The controller keeps at most one request
/// outstanding and never leaves one dangling across stop/destroy/reinit, so
/// a deterministic fake scheduler in tests sees exactly the re-arming the
/// spec promises.
#[derive(Clone)]
pub struct SchedulerHooks {
    pub request_tick: Arc<dyn Fn() + Send + Sync>,
    pub cancel_tick: Arc<dyn Fn() + Send + Sync>,
}

impl SchedulerHooks {
    pub fn new(
        request_tick: impl Fn() + Send + Sync + 'static,
        cancel_tick: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            request_tick: Arc::new(request_tick),
            cancel_tick: Arc::new(cancel_tick),
        }
    }
}

impl core::fmt::Debug for SchedulerHooks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SchedulerHooks(..)")
    }
}

/// A framework-neutral controller that wraps a [`carousel::Engine`] and
/// provides the common adapter workflows: event fan-out to multiple
/// listeners, scheduler re-arming, and whole-engine re-activation.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `pointer` when input events occur
/// - `tick` each frame (or install [`SchedulerHooks`] and tick on demand)
/// - `resize`/`reinit` when the host re-measures geometry
///
/// Re-activation rebuilds the engine wholesale from fresh measurements with
/// the previously selected index as the new start index, so an equivalent
/// layout keeps its visual position; listeners survive because they live
/// here, not in the discarded engine.
pub struct Controller {
    engine: Engine,
    options: EngineOptions,
    emitter: EventEmitter,
    store: EventStore,
    scheduler: Option<SchedulerHooks>,
    tick_scheduled: bool,
    destroyed: bool,
}

impl Controller {
    /// Builds an engine from `options` and `layout` and announces `Init`.
    ///
    /// The host's own `on_event` callback (if any) keeps firing alongside
    /// the controller's listener registry.
    pub fn try_new(options: EngineOptions, layout: SlideLayout) -> Result<Self, EngineError> {
        let emitter = EventEmitter::new();
        let host_event = options.on_event.clone();
        let fan = emitter.clone();

        let mut engine_options = options;
        engine_options.on_event = Some(Arc::new(move |event| {
            if let Some(host) = &host_event {
                host(event);
            }
            fan.emit(event);
        }));

        let engine = Engine::try_new(engine_options.clone(), layout)?;
        let controller = Self {
            engine,
            options: engine_options,
            emitter,
            store: EventStore::new(),
            scheduler: None,
            tick_scheduled: false,
            destroyed: false,
        };
        controller.notify(EngineEvent::Init);
        Ok(controller)
    }

    /// Installs frame-scheduler hooks.
    pub fn with_scheduler(mut self, scheduler: SchedulerHooks) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn set_scheduler(&mut self, scheduler: Option<SchedulerHooks>) {
        self.cancel_pending();
        self.scheduler = scheduler;
        self.pump();
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn is_animating(&self) -> bool {
        self.engine.is_animating()
    }

    pub fn selected_index(&self) -> usize {
        self.engine.selected_index()
    }

    pub fn click_allowed(&self) -> bool {
        self.engine.click_allowed()
    }

    /// Registers a listener for `event`; see [`EventEmitter::on`].
    pub fn on(
        &self,
        event: EngineEvent,
        listener: impl Fn(EngineEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        self.emitter.on(event, listener)
    }

    /// Unregisters a listener; a no-op for unknown ids.
    pub fn off(&self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }

    /// Tracks a teardown callback to run on [`Controller::destroy`].
    pub fn defer_cleanup(&mut self, disposer: impl FnOnce() + Send + 'static) {
        self.store.add(disposer);
    }

    /// Advances one frame and re-arms the scheduler while still animating.
    pub fn tick(&mut self) -> Option<Frame> {
        if self.destroyed {
            return None;
        }
        self.tick_scheduled = false;
        let frame = self.engine.tick();
        self.pump();
        frame
    }

    /// Routes one pointer event into the engine.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<PointerPhase> {
        if self.destroyed {
            return None;
        }
        let accepted = self.engine.pointer(event);
        if accepted.is_some() {
            self.pump();
        }
        accepted
    }

    /// Scrolls to a snap index (wrapped or clamped per loop mode).
    pub fn scroll_to(&mut self, index: i64) {
        if self.destroyed {
            return;
        }
        self.engine.scroll_to_index(index, None);
        self.pump();
    }

    /// Advances one snap forward (wrapping in loop mode).
    pub fn scroll_next(&mut self) {
        if self.destroyed {
            return;
        }
        let next = self.engine.selected_index() as i64 + 1;
        self.engine
            .scroll_to_index(next, Some(ScrollDirection::Forward));
        self.pump();
    }

    /// Goes one snap backward (wrapping in loop mode).
    pub fn scroll_prev(&mut self) {
        if self.destroyed {
            return;
        }
        let prev = self.engine.selected_index() as i64 - 1;
        self.engine
            .scroll_to_index(prev, Some(ScrollDirection::Backward));
        self.pump();
    }

    /// Offsets the scroll target by a raw distance; see
    /// [`Engine::scroll_by`].
    pub fn scroll_by(&mut self, distance: f64, snap: bool) {
        if self.destroyed {
            return;
        }
        self.engine.scroll_by(distance, snap);
        self.pump();
    }

    /// Re-activates with fresh measurements, preserving the selected index.
    ///
    /// The replacement engine is built before the old one is torn down, so a
    /// failed rebuild (invalid measurements) leaves the controller running
    /// on its previous state.
    pub fn reinit(&mut self, layout: SlideLayout) -> Result<(), EngineError> {
        if self.destroyed {
            return Ok(());
        }
        let mut options = self.options.clone();
        options.start_index = self.engine.selected_index();
        let engine = Engine::try_new(options.clone(), layout)?;

        cdebug!(start_index = options.start_index, "Controller::reinit");
        self.cancel_pending();
        self.engine.stop();
        self.engine = engine;
        self.options = options;
        self.notify(EngineEvent::ReInit);
        Ok(())
    }

    /// Handles a viewport/content resize: announces it, then re-activates.
    pub fn resize(&mut self, layout: SlideLayout) -> Result<(), EngineError> {
        if self.destroyed {
            return Ok(());
        }
        self.notify(EngineEvent::Resize);
        self.reinit(layout)
    }

    /// Halts the animation and retracts any outstanding tick request.
    pub fn stop(&mut self) {
        self.engine.stop();
        self.cancel_pending();
    }

    /// Tears the controller down: stops the loop, runs every tracked
    /// disposer exactly once, announces `Destroy` and drops all listeners.
    /// Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        cdebug!("Controller::destroy");
        self.engine.stop();
        self.cancel_pending();
        self.store.clear();
        self.notify(EngineEvent::Destroy);
        self.emitter.clear();
        self.destroyed = true;
    }

    fn notify(&self, event: EngineEvent) {
        if let Some(on_event) = &self.options.on_event {
            on_event(event);
        }
    }

    fn pump(&mut self) {
        if !self.engine.is_animating() || self.tick_scheduled {
            return;
        }
        if let Some(scheduler) = &self.scheduler {
            (scheduler.request_tick)();
            self.tick_scheduled = true;
        }
    }

    fn cancel_pending(&mut self) {
        if !self.tick_scheduled {
            return;
        }
        if let Some(scheduler) = &self.scheduler {
            (scheduler.cancel_tick)();
        }
        self.tick_scheduled = false;
    }
}

impl core::fmt::Debug for Controller {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("selected_index", &self.engine.selected_index())
            .field("is_animating", &self.engine.is_animating())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
