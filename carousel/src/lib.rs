//! A headless slide carousel engine inspired by Embla Carousel.
//!
//! For adapter-level utilities (controller, event fan-out, scheduler
//! re-arming), see the `carousel-adapter` crate.
//!
//! This crate focuses on the core mechanics behind a slide carousel: the
//! snap-point/limit calculator over measured slide extents, a spring-damper
//! scroll body, a wraparound-aware index counter, a pointer-drag-to-velocity
//! translator with rubber-band overscroll, and the frame loop that ties them
//! into one coherent update per tick.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - measured slide extents/offsets and the viewport extent ([`SlideLayout`])
//! - a pointer event stream with timestamps ([`PointerEvent`])
//! - a frame cadence (call [`Engine::tick`] while [`Engine::is_animating`])
//! - a render sink applying the per-frame location as a transform
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod animation;
mod body;
mod drag;
mod engine;
mod error;
mod in_view;
mod index;
mod layout;
mod limit;
mod looper;
mod options;
mod snaps;
mod types;


pub use body::ScrollBody;
pub use drag::{PointerEvent, PointerPhase};
pub use engine::Engine;
pub use error::EngineError;
pub use index::Index;
pub use layout::SlideLayout;
pub use limit::Limit;
pub use options::EngineOptions;
pub use snaps::SlidesToScroll;
pub use types::{Axis, EngineEvent, EventCallback, Frame, RenderCallback, ScrollDirection};
