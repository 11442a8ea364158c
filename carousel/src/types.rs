use std::sync::Arc;

/// The scroll dimension active for one carousel instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Reduces a 2-D point to the scalar coordinate along this axis.
    pub fn coordinate(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }
}

/// Travel direction of a scroll request.
///
/// `Forward` moves toward higher snap indexes (more negative locations under
/// the engine's sign convention), `Backward` toward lower ones. Recorded when
/// a target is set and exposed as a styling hint; it plays no role in the
/// physics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

impl ScrollDirection {
    /// Direction implied by a location delta (`target - location`), if any.
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta < 0.0 {
            Some(Self::Forward)
        } else if delta > 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

/// Named signals the engine and its adapter announce.
///
/// Each is a fire-and-forget notification with no payload; observers query
/// the engine for whatever state they need.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineEvent {
    Init,
    ReInit,
    Destroy,
    Select,
    Settle,
    Scroll,
    Resize,
    PointerDown,
    PointerUp,
}

/// Render sink: invoked once per running frame with the current location.
///
/// The host is expected to apply the value as a transform along the active
/// axis; the engine never touches rendering directly.
pub type RenderCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// Notification sink for [`EngineEvent`]s.
pub type EventCallback = Arc<dyn Fn(EngineEvent) + Send + Sync>;

/// Per-frame report returned by [`crate::Engine::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Current render location (wrapped into range in loop mode).
    pub location: f64,
    /// The location the body is attracted toward.
    pub target: f64,
    /// Normalized scroll progress in `[0, 1]`.
    pub progress: f64,
    /// `true` on the first frame the body settled (at most once per scroll).
    pub just_settled: bool,
    /// `true` when this settle announced a new selected index.
    pub selection_changed: bool,
}
