use crate::{Limit, ScrollBody, SlideLayout};

/// Keeps loop-mode numbers bounded.
///
/// After each physics step, a location that left the limit range is wrapped
/// back in — and the target is shifted by the same amount, so the body never
/// notices: the gap and the velocity are preserved while the coordinates
/// stay within one content length.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScrollLooper {
    limit: Limit,
}

impl ScrollLooper {
    pub(crate) fn new(limit: Limit) -> Self {
        Self { limit }
    }

    pub(crate) fn loop_body(&self, body: &mut ScrollBody) {
        let location = body.location();
        if !self.limit.reached_any(location) {
            return;
        }
        let shift = self.limit.remove_offset(location) - location;
        body.shift(shift);
    }
}

/// Translate bookkeeping that makes wraparound render seamlessly.
///
/// For every slide, picks the wrapped representative (`start + s * content`,
/// `s` in {-1, 0, 1}) whose center lies nearest the viewport center at the
/// current location, and exposes the chosen shift per slide. The render
/// layer applies these as additional transforms; no physics involved.
#[derive(Clone, Debug)]
pub(crate) struct SlideLooper {
    content_size: f64,
    viewport: f64,
    centers: Vec<f64>,
    offsets: Vec<f64>,
}

impl SlideLooper {
    pub(crate) fn new(layout: &SlideLayout) -> Self {
        let centers = (0..layout.len())
            .map(|i| {
                let start = layout.slide_start(i).unwrap_or(0.0);
                let size = layout.slide_size(i).unwrap_or(0.0);
                start + size / 2.0
            })
            .collect();
        Self {
            content_size: layout.content_size(),
            viewport: layout.viewport(),
            centers,
            offsets: vec![0.0; layout.len()],
        }
    }

    /// True when the layout can wrap without visible gaps.
    pub(crate) fn can_loop(layout: &SlideLayout) -> bool {
        let content = layout.content_size();
        content > 0.0 && content >= layout.viewport()
    }

    /// Recomputes per-slide shifts for `location`.
    pub(crate) fn update(&mut self, location: f64) {
        let window_center = self.viewport / 2.0;
        for (offset, &center) in self.offsets.iter_mut().zip(&self.centers) {
            let mut best = 0.0;
            let mut best_distance = f64::INFINITY;
            for step in [-1.0, 0.0, 1.0] {
                let shift = step * self.content_size;
                let distance = (center + shift + location - window_center).abs();
                if distance < best_distance {
                    best_distance = distance;
                    best = shift;
                }
            }
            *offset = best;
        }
    }

    /// Current per-slide translate shifts (same order as the layout).
    pub(crate) fn offsets(&self) -> &[f64] {
        &self.offsets
    }
}
