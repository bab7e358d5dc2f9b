//! ## Crate layout
//! - `common`: stateless helpers (sticker codes, status labels, image URLs).
//! - `core`: model lifecycle, entities, access rights, stats, events.
//! - `helper`: settings-bound helper facade.
//! - `settings`: deployment settings (TOML-loadable).
//!
//! The `prelude` module mirrors the surface application code uses.

pub use gearbase_core as core;

pub mod common;
pub mod helper;
pub mod settings;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        common,
        core::{
            access::{AccessRights, Limits, Profile, Role},
            model::{
                Contact, ContactFields, Item, ItemFields, Kit, KitFields, Location,
                LocationFields, Model, Order, OrderFields, Reservation, ReservationFields,
                ToJsonOptions, User, UserFields,
            },
            obs::{EventSink, ModelEvent, with_event_sink},
            stats::{StatError, StatValue, Stats},
        },
        helper::Helper,
        settings::Settings,
    };
    pub use serde::{Deserialize, Serialize};
}
