//! Small text helpers shared by the header, bottom bar and cart summary.

use crate::BADGE_COUNT_CAP;

/// Badge text for a cart count: the number itself, or `"9+"` above the cap.
///
/// ```rust
/// use powerzone_core::display::format_badge_count;
///
/// assert_eq!(format_badge_count(3), "3");
/// assert_eq!(format_badge_count(12), "9+");
/// ```
pub fn format_badge_count(count: i64) -> String {
    if count > BADGE_COUNT_CAP {
        format!("{}+", BADGE_COUNT_CAP)
    } else {
        count.to_string()
    }
}

/// Badge text, or `None` when the badge should be hidden (empty cart).
pub fn badge_label(total_items: i64) -> Option<String> {
    (total_items > 0).then(|| format_badge_count(total_items))
}

/// Heading of the cart summary, e.g. `"Subtotal (3 productos)"`.
pub fn subtotal_label(total_items: i64) -> String {
    let noun = if total_items == 1 { "producto" } else { "productos" };
    format!("Subtotal ({} {})", total_items, noun)
}
