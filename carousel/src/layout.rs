use crate::EngineError;

/// Measured slide geometry along the active axis.
///
/// The engine never measures anything itself: a host layer reduces each
/// slide to an extent and an offset (however it obtains them — DOM rects,
/// terminal cells, synthetic fixtures) and hands the scalars over. The
/// values are treated as stable for the duration of one activation; a layout
/// change is a re-activation with a fresh `SlideLayout`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideLayout {
    viewport: f64,
    sizes: Vec<f64>,
    starts: Vec<f64>,
}

impl SlideLayout {
    /// Builds a layout from explicit per-slide extents and start offsets.
    ///
    /// Offsets are relative to the content start (slide 0 at offset 0 in the
    /// common case). Lengths must match.
    pub fn new(viewport: f64, sizes: Vec<f64>, starts: Vec<f64>) -> Result<Self, EngineError> {
        if sizes.len() != starts.len() {
            return Err(EngineError::InvalidMeasurements {
                reason: "sizes and starts must have the same length",
            });
        }
        let layout = Self {
            viewport,
            sizes,
            starts,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Builds a layout with slides packed end to end from offset 0.
    pub fn packed(viewport: f64, sizes: Vec<f64>) -> Self {
        let mut starts = Vec::with_capacity(sizes.len());
        let mut offset = 0.0;
        for &size in &sizes {
            starts.push(offset);
            offset += size;
        }
        Self {
            viewport,
            sizes,
            starts,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), EngineError> {
        if !self.viewport.is_finite() || self.viewport < 0.0 {
            return Err(EngineError::InvalidMeasurements {
                reason: "viewport extent must be finite and non-negative",
            });
        }
        if self.sizes.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(EngineError::InvalidMeasurements {
                reason: "slide extents must be finite and non-negative",
            });
        }
        if self.starts.iter().any(|s| !s.is_finite()) {
            return Err(EngineError::InvalidMeasurements {
                reason: "slide offsets must be finite",
            });
        }
        Ok(())
    }

    pub fn viewport(&self) -> f64 {
        self.viewport
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn slide_size(&self, index: usize) -> Option<f64> {
        self.sizes.get(index).copied()
    }

    pub fn slide_start(&self, index: usize) -> Option<f64> {
        self.starts.get(index).copied()
    }

    pub fn slide_end(&self, index: usize) -> Option<f64> {
        Some(self.slide_start(index)? + self.slide_size(index)?)
    }

    /// Span from the first slide start to the last slide end.
    ///
    /// Zero for an empty layout.
    pub fn content_size(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let first = self.starts.iter().copied().fold(f64::INFINITY, f64::min);
        let last = self
            .starts
            .iter()
            .zip(&self.sizes)
            .map(|(s, z)| s + z)
            .fold(f64::NEG_INFINITY, f64::max);
        (last - first).max(0.0)
    }
}
