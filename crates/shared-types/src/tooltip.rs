//! Tooltip markup for hovered samples.

use crate::data_types::MemorySample;

/// Renders the tooltip for one sample: the total size in megabytes,
/// then one line per backtrace frame in recorded order.
///
/// Takes the sample explicitly so the markup can be precomputed when the
/// series is built; nothing here depends on hover-time context.
pub fn format_tooltip(sample: &MemorySample) -> String {
    let mut out = format!("Total: <b>{}MB</b><br/>", sample.y);
    for frame in &sample.bt {
        out.push_str(frame);
        out.push_str("<br/>");
    }
    out
}
