//! Item display helpers.

/// Friendly display label for an item status; unrecognized statuses map to
/// `"Unknown"`, never an error.
#[must_use]
pub fn friendly_item_status(status: &str) -> &'static str {
    match status {
        "available" => "Available",
        "checkedout" => "Checked out",
        "await_checkout" => "Checking out",
        "in_custody" => "In custody",
        "expired" => "Expired",
        _ => "Unknown",
    }
}

/// CSS label class for an item status, `""` for unrecognized ones.
#[must_use]
pub fn friendly_item_css(status: &str) -> &'static str {
    match status {
        "available" => "label-available",
        "checkedout" | "await_checkout" => "label-checkedout",
        "in_custody" => "label-custody",
        "expired" => "label-expired",
        _ => "",
    }
}
