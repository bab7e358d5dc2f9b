//! Core domain layer for Gearbase: the model lifecycle contract, domain
//! entities, permission derivation, stat lookup, and the event boundary.

// public exports are one module level down
pub mod access;
pub mod error;
pub mod model;
pub mod obs;
pub mod stats;
pub mod validate;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        access::{AccessRights, Limits, Profile, Role},
        model::{
            Contact, ContactFields, EntityFields, Item, ItemFields, Kit, KitFields, Location,
            LocationFields, Model, Order, OrderFields, Reservation, ReservationFields,
            ToJsonOptions, User, UserFields,
        },
        stats::Stats,
    };
}
