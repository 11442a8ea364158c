use std::sync::Arc;

use crate::{Axis, EngineError, EngineEvent, EventCallback, RenderCallback, SlidesToScroll};

/// Configuration for [`crate::Engine`].
///
/// A closed set of named fields with documented defaults, validated once at
/// engine construction — nothing is read ad hoc at point of use, and an
/// engine never exists with values outside the ranges below. Cheap to
/// clone: the callback seams are `Arc`s, so an adapter can tweak a field
/// and rebuild the engine without reallocating closures.
pub struct EngineOptions {
    /// Active scroll dimension. Default: [`Axis::Horizontal`].
    pub axis: Axis,
    /// Wraparound scrolling. Requires the content to cover the viewport;
    /// otherwise the engine falls back to bounded mode. Default: `false`.
    pub looping: bool,
    /// Snap grouping policy. Default: one slide per snap.
    pub slides_to_scroll: SlidesToScroll,
    /// Whether pointer dragging moves the carousel. Default: `true`.
    pub draggable: bool,
    /// Snap index selected at activation. Out-of-range values are
    /// normalized like any other index input. Default: `0`.
    pub start_index: usize,
    /// Spring responsiveness, valid over `(0, 100]`. Default: `20.0`.
    pub speed: f64,
    /// Inertia of the scroll body, valid over `(0, ∞)`. Heavier bodies
    /// carry more momentum per tick. Default: `1.0`.
    pub mass: f64,
    /// Render sink, invoked once per running frame with the location.
    pub on_frame: Option<RenderCallback>,
    /// Notification sink for [`EngineEvent`]s.
    pub on_event: Option<EventCallback>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            looping: false,
            slides_to_scroll: SlidesToScroll::default(),
            draggable: true,
            start_index: 0,
            speed: 20.0,
            mass: 1.0,
            on_frame: None,
            on_event: None,
        }
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_slides_to_scroll(mut self, slides_to_scroll: SlidesToScroll) -> Self {
        self.slides_to_scroll = slides_to_scroll;
        self
    }

    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_on_frame(mut self, on_frame: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.on_frame = Some(Arc::new(on_frame));
        self
    }

    pub fn with_on_event(
        mut self,
        on_event: impl Fn(EngineEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_event = Some(Arc::new(on_event));
        self
    }

    pub(crate) fn validate(&self) -> Result<(), EngineError> {
        if !self.speed.is_finite() || self.speed <= 0.0 || self.speed > 100.0 {
            return Err(EngineError::InvalidOption {
                option: "speed",
                reason: "must be finite and within (0, 100]",
            });
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(EngineError::InvalidOption {
                option: "mass",
                reason: "must be finite and positive",
            });
        }
        if let SlidesToScroll::Count(0) = self.slides_to_scroll {
            return Err(EngineError::InvalidOption {
                option: "slides_to_scroll",
                reason: "group size must be at least 1",
            });
        }
        Ok(())
    }
}

impl Clone for EngineOptions {
    fn clone(&self) -> Self {
        Self {
            axis: self.axis,
            looping: self.looping,
            slides_to_scroll: self.slides_to_scroll,
            draggable: self.draggable,
            start_index: self.start_index,
            speed: self.speed,
            mass: self.mass,
            on_frame: self.on_frame.clone(),
            on_event: self.on_event.clone(),
        }
    }
}

impl core::fmt::Debug for EngineOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EngineOptions")
            .field("axis", &self.axis)
            .field("looping", &self.looping)
            .field("slides_to_scroll", &self.slides_to_scroll)
            .field("draggable", &self.draggable)
            .field("start_index", &self.start_index)
            .field("speed", &self.speed)
            .field("mass", &self.mass)
            .finish_non_exhaustive()
    }
}
