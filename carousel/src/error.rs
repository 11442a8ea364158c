/// Errors surfaced when constructing an [`crate::Engine`].
///
/// Construction is the only fallible entry point: once an engine exists, its
/// inputs have been validated and the per-frame paths never fail. Malformed
/// pointer events are dropped locally (see [`crate::Engine::pointer`]) and
/// redundant requests (scrolling to the current index, stopping an idle
/// animation) are silent no-ops rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// An option field holds a value the engine cannot run with.
    #[error("invalid option `{option}`: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: &'static str,
    },

    /// The measured slide geometry is unusable (non-finite or inconsistent).
    #[error("invalid measurements: {reason}")]
    InvalidMeasurements { reason: &'static str },
}
