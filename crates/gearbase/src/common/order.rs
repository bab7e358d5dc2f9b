//! Order display helpers and date predicates.

use gearbase_core::model::OrderFields;
use time::OffsetDateTime;

/// Friendly display label for an order status; unrecognized statuses map to
/// `"Unknown"`, never an error.
#[must_use]
pub fn friendly_order_status(status: &str) -> &'static str {
    match status {
        "creating" => "Draft",
        "open" => "Open",
        "closed" => "Completed",
        _ => "Unknown",
    }
}

/// CSS label class for an order status, `""` for unrecognized ones.
#[must_use]
pub fn friendly_order_css(status: &str) -> &'static str {
    match status {
        "creating" => "label-creating",
        "open" => "label-open",
        "closed" => "label-closed",
        _ => "",
    }
}

/// Open and past its due date.
#[must_use]
pub fn is_order_overdue(order: &OrderFields, now: OffsetDateTime) -> bool {
    order.status == "open" && order.due.is_some_and(|due| now > due)
}

#[must_use]
pub fn is_order_archived(order: &OrderFields) -> bool {
    order.archived.is_some()
}

/// Status CSS, striped when the order is archived.
#[must_use]
pub fn order_css(order: &OrderFields) -> String {
    let css = friendly_order_css(&order.status);

    if is_order_archived(order) {
        format!("{css} label-striped")
    } else {
        css.to_owned()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn open_order() -> OrderFields {
        OrderFields {
            status: "open".to_owned(),
            due: Some(datetime!(2026-09-01 10:00 UTC)),
            ..OrderFields::default()
        }
    }

    #[test]
    fn friendly_status_maps_known_values() {
        assert_eq!(friendly_order_status("open"), "Open");
        assert_eq!(friendly_order_status("creating"), "Draft");
        assert_eq!(friendly_order_status("bogus"), "Unknown");
    }

    #[test]
    fn overdue_means_open_and_past_due() {
        let order = open_order();

        assert!(!is_order_overdue(&order, datetime!(2026-08-31 10:00 UTC)));
        assert!(is_order_overdue(&order, datetime!(2026-09-02 10:00 UTC)));

        let mut closed = open_order();
        closed.status = "closed".to_owned();
        assert!(!is_order_overdue(&closed, datetime!(2026-09-02 10:00 UTC)));
    }

    #[test]
    fn archived_orders_get_striped_css() {
        let mut order = open_order();
        assert_eq!(order_css(&order), "label-open");

        order.archived = Some(datetime!(2026-09-05 10:00 UTC));
        assert_eq!(order_css(&order), "label-open label-striped");
    }
}
