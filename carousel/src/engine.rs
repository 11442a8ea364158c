use crate::animation::Animation;
use crate::drag::DragHandler;
use crate::in_view;
use crate::looper::{ScrollLooper, SlideLooper};
use crate::snaps::ScrollSnaps;
use crate::{
    EngineError, EngineEvent, EngineOptions, Frame, Index, Limit, PointerEvent, PointerPhase,
    ScrollBody, ScrollDirection, SlideLayout,
};

/// One-shot scroll body overrides used while a pointer drags, chosen so the
/// body closes most of the gap to the pointer every frame (visually 1:1)
/// instead of springing after it.
const DRAG_SPEED: f64 = 90.0;
const DRAG_MASS: f64 = 0.1;

/// Frames of undecayed travel used to project a flick's landing position.
const MOMENTUM_FRAMES: f64 = 10.0;

/// The carousel engine: measurement model, snap calculator, spring-damper
/// scroll body, index state machine, drag translator and frame loop for one
/// carousel instance.
///
/// The engine is headless and poll-driven. A host activates it with
/// validated options plus measured geometry, routes pointer events through
/// [`Engine::pointer`], and calls [`Engine::tick`] once per frame while
/// [`Engine::is_animating`] — each tick advances the physics, invokes the
/// render sink, recomputes visibility and notifies observers, in that
/// order. Re-activation (resize, slide changes) discards the engine and
/// constructs a fresh one; nothing is re-measured in place, so a rebuild
/// with an equivalent layout and the previous index as `start_index` cannot
/// jump the visual position.
#[derive(Clone, Debug)]
pub struct Engine {
    options: EngineOptions,
    layout: SlideLayout,
    limit: Limit,
    snaps: ScrollSnaps,
    looping: bool,
    index: Index,
    previous_index: Index,
    last_selected: usize,
    body: ScrollBody,
    drag: DragHandler,
    animation: Animation,
    scroll_looper: Option<ScrollLooper>,
    slide_looper: Option<SlideLooper>,
    in_view: Vec<usize>,
}

impl Engine {
    /// Builds an engine from options and measured geometry.
    ///
    /// Fails without constructing anything when either input is invalid;
    /// see [`EngineError`]. Degenerate layouts (zero slides, content
    /// smaller than the viewport) construct fine and settle instantly.
    pub fn try_new(options: EngineOptions, layout: SlideLayout) -> Result<Self, EngineError> {
        options.validate()?;
        layout.validate()?;

        let looping = options.looping && SlideLooper::can_loop(&layout);
        if options.looping && !looping {
            cwarn!(
                content = layout.content_size(),
                viewport = layout.viewport(),
                "loop disabled: content does not cover the viewport"
            );
        }

        let limit = Limit::measure(layout.content_size(), layout.viewport(), looping);
        let snaps = ScrollSnaps::measure(&layout, options.slides_to_scroll, &limit, looping);
        let index = Index::new(options.start_index, snaps.len(), looping);
        let start_location = snaps.limited(index.get());
        let body = ScrollBody::new(start_location, options.speed, options.mass);
        let drag = DragHandler::new(options.axis);

        cdebug!(
            slides = layout.len(),
            snap_count = snaps.len(),
            start_index = index.get(),
            looping,
            "Engine::try_new"
        );

        let mut engine = Self {
            limit,
            looping,
            previous_index: index,
            last_selected: index.get(),
            index,
            body,
            drag,
            animation: Animation::new(),
            scroll_looper: looping.then(|| ScrollLooper::new(limit)),
            slide_looper: looping.then(|| SlideLooper::new(&layout)),
            in_view: Vec::new(),
            snaps,
            layout,
            options,
        };
        if let Some(looper) = &mut engine.slide_looper {
            looper.update(start_location);
        }
        engine.refresh_in_view();
        Ok(engine)
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn layout(&self) -> &SlideLayout {
        &self.layout
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    /// Whether wraparound scrolling is actually active (requested and
    /// geometrically possible).
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn location(&self) -> f64 {
        self.body.location()
    }

    pub fn target(&self) -> f64 {
        self.body.target()
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.body.direction()
    }

    pub fn selected_index(&self) -> usize {
        self.index.get()
    }

    pub fn previous_index(&self) -> usize {
        self.previous_index.get()
    }

    pub fn snap_count(&self) -> usize {
        self.snaps.len()
    }

    /// The snap locations, one per slide group, after limiting.
    pub fn snap_list(&self) -> &[f64] {
        self.snaps.limited_all()
    }

    /// Slide-index ranges `[start, end)` backing each snap point.
    pub fn snap_groups(&self) -> &[(usize, usize)] {
        self.snaps.groups()
    }

    /// Snap group that owns `slide` (the last group for out-of-range input).
    pub fn snap_index_of(&self, slide: usize) -> usize {
        self.snaps.group_of(slide)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether a synthetic click may pass through (false for the rest of an
    /// input cycle whose drag actually moved).
    pub fn click_allowed(&self) -> bool {
        self.drag.click_allowed()
    }

    /// Normalized scroll progress in `[0, 1]` at the current location.
    pub fn scroll_progress(&self) -> f64 {
        in_view::scroll_progress(&self.limit, self.body.location())
    }

    /// Slide indexes currently intersecting the viewport (ascending).
    pub fn slides_in_view(&self) -> &[usize] {
        &self.in_view
    }

    /// Complement of [`Engine::slides_in_view`] over the full slide set.
    pub fn slides_not_in_view(&self) -> Vec<usize> {
        (0..self.layout.len())
            .filter(|i| !self.in_view.contains(i))
            .collect()
    }

    /// Per-slide translate shifts for seamless wraparound (loop mode only).
    pub fn loop_offsets(&self) -> Option<&[f64]> {
        self.slide_looper.as_ref().map(|l| l.offsets())
    }

    /// Requests a scroll to `index` (wrapped or clamped per loop mode).
    ///
    /// In loop mode the wrapped snap representative nearest the current
    /// location is chosen, unless `direction` forces a side. Requesting the
    /// already-current index with its target in place is a silent no-op.
    pub fn scroll_to_index(&mut self, index: i64, direction: Option<ScrollDirection>) {
        let next = self.index.set(index);
        let snap = self.snaps.limited(next.get());
        let target = if self.looping {
            self.resolve_loop_target(snap, direction)
        } else {
            snap
        };
        if next.get() == self.index.get() && target == self.body.target() {
            return;
        }

        ctrace!(index = next.get(), target, "scroll_to_index");
        self.previous_index = self.index;
        self.index = next;
        self.body.set_target(target);
        if direction.is_some() {
            self.body.set_direction(direction);
        }
        self.animation.start();
    }

    /// Offsets the current target by a raw distance, optionally re-snapping
    /// to the nearest snap point (the drag-release path).
    pub fn scroll_by(&mut self, distance: f64, snap: bool) {
        let mut target = self.body.target() + distance;
        if !self.looping {
            target = self.limit.constrain(target);
        }
        if snap {
            let (group, snapped) = self.nearest_snap(target);
            self.previous_index = self.index;
            self.index = self.index.set(group as i64);
            target = snapped;
        }
        if target == self.body.target() && self.body.settled() {
            return;
        }
        ctrace!(distance, snap, target, "scroll_by");
        self.body.set_target(target);
        self.animation.start();
    }

    /// Routes one pointer event through the drag state machine.
    ///
    /// Returns the accepted phase, or `None` when the event was a no-op
    /// (dragging disabled, non-primary press, phase out of sequence) or
    /// malformed (non-finite coordinates are dropped individually — a
    /// transient input error never tears anything down).
    pub fn pointer(&mut self, event: PointerEvent) -> Option<PointerPhase> {
        if !self.options.draggable {
            return None;
        }
        let position = self.drag.axis().coordinate(event.x, event.y);
        if !position.is_finite() {
            cwarn!(phase = ?event.phase, "ignoring pointer event with non-finite position");
            return None;
        }

        match event.phase {
            PointerPhase::Down => {
                if !event.primary {
                    return None;
                }
                let location = self.body.location();
                if !self.drag.pointer_down(position, event.time_ms, location) {
                    return None;
                }
                // Grab the body where it is; it tracks the pointer from
                // here under the low-mass overrides.
                self.body.set_target(location);
                self.body.use_speed(DRAG_SPEED);
                self.body.use_mass(DRAG_MASS);
                self.animation.start();
                self.emit(EngineEvent::PointerDown);
                Some(PointerPhase::Down)
            }
            PointerPhase::Move => {
                let diff = self.drag.pointer_move(position, event.time_ms)?;
                let raw = self.drag.start_location() + diff;
                let target = if self.looping {
                    raw
                } else {
                    self.rubber_band(raw)
                };
                self.body.set_target(target);
                self.animation.start();
                Some(PointerPhase::Move)
            }
            PointerPhase::Up => {
                let velocity = self.drag.pointer_up(position, event.time_ms)?;
                self.release(velocity);
                self.emit(EngineEvent::PointerUp);
                Some(PointerPhase::Up)
            }
        }
    }

    fn release(&mut self, velocity: f64) {
        self.body.use_default_speed();
        self.body.use_default_mass();
        self.body.set_velocity(velocity);
        ctrace!(velocity, "drag release");
        self.scroll_by(velocity * MOMENTUM_FRAMES, true);
    }

    /// Attenuates the part of `target` that lies beyond the limit.
    ///
    /// Diminishing-returns curve with the viewport extent as the softness
    /// threshold; overscroll is resisted, never hard-clamped.
    fn rubber_band(&self, target: f64) -> f64 {
        let constrained = self.limit.constrain(target);
        let excess = target - constrained;
        if excess == 0.0 {
            return target;
        }
        let threshold = self.layout.viewport().max(1.0);
        constrained + excess / (1.0 + excess.abs() / threshold)
    }

    /// Advances one frame: physics, render sink, visibility, notification.
    ///
    /// Returns `None` while the animation is Idle (ticking an idle engine
    /// is a no-op). On the first settled frame with no pointer held, a
    /// changed selection announces `Select`, then `Settle` fires exactly
    /// once and the loop returns to Idle.
    pub fn tick(&mut self) -> Option<Frame> {
        if !self.animation.is_running() {
            return None;
        }

        self.body.seek();
        if let Some(looper) = &self.scroll_looper {
            looper.loop_body(&mut self.body);
        }
        let just_settled = self.body.settled() && !self.drag.is_dragging();
        if just_settled && self.looping {
            // Settle on the canonical (min, max] representative so the final
            // location equals the selected snap exactly.
            let location = self.body.location();
            let shift = self.limit.remove_offset(location) - location;
            if shift != 0.0 {
                self.body.shift(shift);
            }
        }
        let location = self.body.location();
        if let Some(looper) = &mut self.slide_looper {
            looper.update(location);
        }

        if let Some(on_frame) = &self.options.on_frame {
            on_frame(location);
        }
        self.refresh_in_view();
        self.emit(EngineEvent::Scroll);

        let mut selection_changed = false;
        if just_settled {
            if self.index.get() != self.last_selected {
                self.last_selected = self.index.get();
                selection_changed = true;
                self.emit(EngineEvent::Select);
            }
            self.emit(EngineEvent::Settle);
            self.animation.stop();
        }

        Some(Frame {
            location,
            target: self.body.target(),
            progress: self.scroll_progress(),
            just_settled,
            selection_changed,
        })
    }

    /// Halts the frame loop. Idempotent; callable from Idle.
    pub fn stop(&mut self) {
        self.animation.stop();
    }

    /// One-shot speed override for the next scroll; a drag release or
    /// [`Engine::use_default_speed`] restores the configured value.
    pub fn use_speed(&mut self, speed: f64) {
        self.body.use_speed(speed);
    }

    /// One-shot mass override for the next scroll; a drag release or
    /// [`Engine::use_default_mass`] restores the configured value.
    pub fn use_mass(&mut self, mass: f64) {
        self.body.use_mass(mass);
    }

    pub fn use_default_speed(&mut self) {
        self.body.use_default_speed();
    }

    pub fn use_default_mass(&mut self) {
        self.body.use_default_mass();
    }

    fn refresh_in_view(&mut self) {
        in_view::slides_in_view(
            &self.layout,
            &self.limit,
            self.body.location(),
            self.looping,
            &mut self.in_view,
        );
    }

    fn emit(&self, event: EngineEvent) {
        if let Some(on_event) = &self.options.on_event {
            on_event(event);
        }
    }

    /// Nearest snap to `target`; in loop mode each snap competes with its
    /// wrapped representatives.
    fn nearest_snap(&self, target: f64) -> (usize, f64) {
        let content = self.limit.length();
        let steps: &[f64] = if self.looping {
            &[-1.0, 0.0, 1.0]
        } else {
            &[0.0]
        };

        let mut best = (0, self.snaps.limited(0));
        let mut best_distance = f64::INFINITY;
        for group in 0..self.snaps.len() {
            let snap = self.snaps.limited(group);
            for &step in steps {
                let candidate = snap + step * content;
                let distance = (candidate - target).abs();
                if distance < best_distance {
                    best_distance = distance;
                    best = (group, candidate);
                }
            }
        }
        best
    }

    /// Picks the wrapped representative of `snap` per the direction hint,
    /// or the one nearest the current location.
    fn resolve_loop_target(&self, snap: f64, direction: Option<ScrollDirection>) -> f64 {
        let content = self.limit.length();
        let location = self.body.location();
        let candidates = [snap - content, snap, snap + content];

        let pick_nearest = |mut allowed: Vec<f64>| -> Option<f64> {
            allowed.sort_by(|a, b| {
                (a - location)
                    .abs()
                    .partial_cmp(&(b - location).abs())
                    .unwrap_or(core::cmp::Ordering::Equal)
            });
            allowed.first().copied()
        };

        let filtered = match direction {
            Some(ScrollDirection::Forward) => candidates
                .iter()
                .copied()
                .filter(|&c| c <= location)
                .collect(),
            Some(ScrollDirection::Backward) => candidates
                .iter()
                .copied()
                .filter(|&c| c >= location)
                .collect(),
            None => candidates.to_vec(),
        };

        pick_nearest(filtered).unwrap_or_else(|| {
            pick_nearest(candidates.to_vec()).unwrap_or(snap)
        })
    }
}
