use crate::{Limit, SlideLayout};

/// Grouping policy: how many slides advance per snap point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlidesToScroll {
    /// As many slides as fit the viewport form one group.
    Auto,
    /// A fixed number of slides per group (must be at least 1).
    Count(usize),
}

impl Default for SlidesToScroll {
    fn default() -> Self {
        Self::Count(1)
    }
}

/// The discrete stop points of one activation.
///
/// A pure function of the measured layout and the grouping policy: identical
/// inputs always produce identical snaps. Each group contributes one target
/// location — the offset that aligns the group's first slide to the viewport
/// start — clamped into the limit unless looping. Zero slides collapse to a
/// single snap at `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ScrollSnaps {
    limited: Vec<f64>,
    groups: Vec<(usize, usize)>,
}

impl ScrollSnaps {
    pub(crate) fn measure(
        layout: &SlideLayout,
        policy: SlidesToScroll,
        limit: &Limit,
        looping: bool,
    ) -> Self {
        let groups = partition(layout, policy);
        if groups.is_empty() {
            return Self {
                limited: vec![0.0],
                groups: vec![(0, 0)],
            };
        }

        let aligned = groups
            .iter()
            .map(|&(first, _)| -layout.slide_start(first).unwrap_or(0.0));
        let limited = if looping {
            aligned.collect()
        } else {
            aligned.map(|s| limit.constrain(s)).collect()
        };

        Self { limited, groups }
    }

    pub(crate) fn len(&self) -> usize {
        self.limited.len()
    }

    /// Snap location for `group`, after limiting.
    pub(crate) fn limited(&self, group: usize) -> f64 {
        let i = group.min(self.limited.len() - 1);
        self.limited[i]
    }

    pub(crate) fn limited_all(&self) -> &[f64] {
        &self.limited
    }

    pub(crate) fn groups(&self) -> &[(usize, usize)] {
        &self.groups
    }

    /// Group containing `slide` (the last group for out-of-range input).
    pub(crate) fn group_of(&self, slide: usize) -> usize {
        self.groups
            .iter()
            .position(|&(start, end)| slide >= start && slide < end)
            .unwrap_or(self.groups.len() - 1)
    }
}

/// Splits slide indexes into `[start, end)` groups per the policy.
fn partition(layout: &SlideLayout, policy: SlidesToScroll) -> Vec<(usize, usize)> {
    let count = layout.len();
    let mut groups = Vec::new();
    match policy {
        SlidesToScroll::Count(n) => {
            let n = n.max(1);
            let mut start = 0;
            while start < count {
                let end = (start + n).min(count);
                groups.push((start, end));
                start = end;
            }
        }
        SlidesToScroll::Auto => {
            let viewport = layout.viewport();
            let mut start = 0;
            while start < count {
                let mut end = start + 1;
                // Grow the group while the span from its first slide start to
                // the candidate slide end still fits the viewport.
                while end < count {
                    let span = layout.slide_end(end).unwrap_or(0.0)
                        - layout.slide_start(start).unwrap_or(0.0);
                    if span > viewport {
                        break;
                    }
                    end += 1;
                }
                groups.push((start, end));
                start = end;
            }
        }
    }
    groups
}
