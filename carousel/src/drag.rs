use crate::Axis;

/// Trailing sample window used to derive the release velocity.
const VELOCITY_WINDOW_MS: u64 = 100;

/// Net movement above which a drag suppresses the trailing click.
const CLICK_SUPPRESS_DISTANCE: f64 = 5.0;

/// Millisecond-to-frame conversion for release velocity (60 fps cadence).
const MS_PER_FRAME: f64 = 1000.0 / 60.0;

/// Which part of a pointer gesture an event describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// One pointer event along the host's input stream.
///
/// The engine does not care whether these originate from a mouse, a touch
/// surface, or a synthetic source — only the phase, the 2-D position (the
/// active [`Axis`] picks its scalar), and a monotonic millisecond timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
    pub time_ms: u64,
    /// Primary button / single touch. Non-primary downs are ignored.
    pub primary: bool,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            phase: PointerPhase::Down,
            x,
            y,
            time_ms,
            primary: true,
        }
    }

    pub fn move_to(x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            phase: PointerPhase::Move,
            x,
            y,
            time_ms,
            primary: true,
        }
    }

    pub fn up(x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            phase: PointerPhase::Up,
            x,
            y,
            time_ms,
            primary: true,
        }
    }

    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging,
    /// A drag just ended with real movement; synthetic clicks stay
    /// suppressed until the next pointer-down.
    ClickSuppressed,
}

/// Converts raw pointer events into drag deltas and a release velocity.
///
/// State machine: Idle → Dragging → (Idle | ClickSuppressed). All state is
/// transient — one pointer-down..pointer-up cycle — and discarded after the
/// handoff to the scroll body.
#[derive(Clone, Debug)]
pub(crate) struct DragHandler {
    axis: Axis,
    state: DragState,
    start_position: f64,
    start_location: f64,
    last_position: f64,
    samples: Vec<(u64, f64)>,
}

impl DragHandler {
    pub(crate) fn new(axis: Axis) -> Self {
        Self {
            axis,
            state: DragState::Idle,
            start_position: 0.0,
            start_location: 0.0,
            last_position: 0.0,
            samples: Vec::new(),
        }
    }

    pub(crate) fn axis(&self) -> Axis {
        self.axis
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Whether a synthetic click may pass through right now.
    ///
    /// False after a drag with real movement, until the next pointer-down.
    pub(crate) fn click_allowed(&self) -> bool {
        match self.state {
            DragState::Idle => true,
            DragState::Dragging => !self.moved(),
            DragState::ClickSuppressed => false,
        }
    }

    fn moved(&self) -> bool {
        (self.last_position - self.start_position).abs() > CLICK_SUPPRESS_DISTANCE
    }

    /// Begins a drag. Returns false (no-op) when one is already active.
    pub(crate) fn pointer_down(&mut self, position: f64, time_ms: u64, location: f64) -> bool {
        if self.state == DragState::Dragging {
            return false;
        }
        self.state = DragState::Dragging;
        self.start_position = position;
        self.last_position = position;
        self.start_location = location;
        self.samples.clear();
        self.samples.push((time_ms, position));
        true
    }

    pub(crate) fn start_location(&self) -> f64 {
        self.start_location
    }

    /// Records a move and returns the accumulated delta since pointer-down.
    ///
    /// `None` while no drag is active.
    pub(crate) fn pointer_move(&mut self, position: f64, time_ms: u64) -> Option<f64> {
        if self.state != DragState::Dragging {
            return None;
        }
        self.last_position = position;
        self.push_sample(time_ms, position);
        Some(position - self.start_position)
    }

    /// Ends the drag and derives the release velocity in px/frame.
    ///
    /// `None` while no drag is active (a spurious up is ignored).
    pub(crate) fn pointer_up(&mut self, position: f64, time_ms: u64) -> Option<f64> {
        if self.state != DragState::Dragging {
            return None;
        }
        self.last_position = position;
        self.push_sample(time_ms, position);

        let velocity = self.trailing_velocity();
        self.state = if self.moved() {
            DragState::ClickSuppressed
        } else {
            DragState::Idle
        };
        self.samples.clear();
        Some(velocity)
    }

    fn push_sample(&mut self, time_ms: u64, position: f64) {
        self.samples
            .retain(|&(t, _)| time_ms.saturating_sub(t) <= VELOCITY_WINDOW_MS);
        self.samples.push((time_ms, position));
    }

    /// Velocity in px/frame over the retained trailing window.
    fn trailing_velocity(&self) -> f64 {
        let (first_t, first_p) = match self.samples.first() {
            Some(&s) => s,
            None => return 0.0,
        };
        let (last_t, last_p) = match self.samples.last() {
            Some(&s) => s,
            None => return 0.0,
        };
        let elapsed = last_t.saturating_sub(first_t);
        if elapsed == 0 {
            return 0.0;
        }
        (last_p - first_p) / elapsed as f64 * MS_PER_FRAME
    }
}
