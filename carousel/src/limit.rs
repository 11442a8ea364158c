/// The legal range for a scroll location.
///
/// Sign convention: scrolling forward (toward higher snap indexes) moves the
/// location in the negative direction, so `max` is the scroll-start position
/// (`0.0` with slide 0 aligned) and `min` is the scroll-end position.
/// `min <= max` always; degenerate content collapses to `min == max == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limit {
    pub min: f64,
    pub max: f64,
}

impl Limit {
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min <= max, "Limit: min must not exceed max");
        Self { min, max }
    }

    /// Measures the range for the given content and viewport extents.
    ///
    /// Non-loop: `max = 0`, `min = -(content - viewport)`, or a single point
    /// at zero when the content fits the viewport. Loop: the range spans one
    /// full content length so every wrapped location has a unique
    /// representative.
    pub fn measure(content_size: f64, viewport: f64, looping: bool) -> Self {
        if looping {
            return Self::new(-content_size.max(0.0), 0.0);
        }
        let scrollable = (content_size - viewport).max(0.0);
        Self::new(-scrollable, 0.0)
    }

    /// Range length (`max - min`).
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Clamps `value` into `[min, max]`.
    pub fn constrain(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Wraps `value` modulo the range length into `(min, max]`.
    ///
    /// Used in loop mode, where positions one content length apart are the
    /// same physical position. A degenerate range returns `max`.
    pub fn remove_offset(&self, value: f64) -> f64 {
        let length = self.length();
        if length <= 0.0 {
            return self.max;
        }
        value - length * ((value - self.max) / length).ceil()
    }

    pub fn reached_min(&self, value: f64) -> bool {
        value < self.min
    }

    pub fn reached_max(&self, value: f64) -> bool {
        value > self.max
    }

    pub fn reached_any(&self, value: f64) -> bool {
        self.reached_min(value) || self.reached_max(value)
    }
}
