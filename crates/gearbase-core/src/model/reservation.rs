use crate::{
    model::{EntityFields, Model},
    validate::Issues,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

///
/// Reservation
/// A booking of items for a contact over a future date window.
///

pub type Reservation = Model<ReservationFields>;

///
/// ReservationFields
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReservationFields {
    pub status: String,
    /// Id of the contact the reservation is booked for.
    pub contact: String,
    /// Id of the location the items will leave from.
    pub location: String,
    /// Ids of the reserved items.
    pub items: Vec<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub from_date: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub to_date: Option<OffsetDateTime>,
    /// Set when the reservation was archived.
    #[serde(with = "time::serde::rfc3339::option")]
    pub archived: Option<OffsetDateTime>,
}

impl Default for ReservationFields {
    fn default() -> Self {
        Self {
            status: "creating".to_owned(),
            contact: String::new(),
            location: String::new(),
            items: Vec::new(),
            from_date: None,
            to_date: None,
            archived: None,
        }
    }
}

impl EntityFields for ReservationFields {
    const ENTITY: &'static str = "reservation";

    fn validate(&self, _: &mut Issues) {}
}
