use crate::{Limit, SlideLayout};

/// Collects the slide indexes whose extent intersects the viewport at
/// `location` into `out` (cleared first, ascending order).
///
/// A rendered slide occupies `[start + location, end + location)` against
/// the viewport window `[0, viewport)`. Loop mode also tests the wrapped
/// representatives one content length to either side. When the scrollable
/// range is degenerate (content fits the viewport) every slide reports in
/// view, whatever the location.
pub(crate) fn slides_in_view(
    layout: &SlideLayout,
    limit: &Limit,
    location: f64,
    looping: bool,
    out: &mut Vec<usize>,
) {
    out.clear();
    let count = layout.len();
    if count == 0 {
        return;
    }
    if limit.length() <= 0.0 {
        out.extend(0..count);
        return;
    }

    let viewport = layout.viewport();
    let content = layout.content_size();
    let shifts: &[f64] = if looping {
        &[-content, 0.0, content]
    } else {
        &[0.0]
    };

    for index in 0..count {
        let start = layout.slide_start(index).unwrap_or(0.0);
        let end = start + layout.slide_size(index).unwrap_or(0.0);
        let visible = shifts.iter().any(|shift| {
            let lo = start + shift + location;
            let hi = end + shift + location;
            lo < viewport && hi > 0.0
        });
        if visible {
            out.push(index);
        }
    }
}

/// Normalized scroll progress.
///
/// Exactly `0` at `limit.max` (scroll start), exactly `1` at `limit.min`
/// (scroll end), linear in between; `0` for a degenerate range.
pub(crate) fn scroll_progress(limit: &Limit, location: f64) -> f64 {
    let length = limit.length();
    if length <= 0.0 {
        return 0.0;
    }
    (location - limit.max) / (limit.min - limit.max)
}
