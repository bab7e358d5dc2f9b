//! The model lifecycle contract shared by every domain entity.
//!
//! The original layer built this with a prototype chain; here the shared
//! behavior lives in a generic [`Model`] wrapper composed with a small
//! per-entity [`EntityFields`] descriptor (defaults via `Default`, wire
//! shape via serde, validators via `validate`).

mod contact;
mod item;
mod kit;
mod location;
mod order;
mod reservation;
mod user;

pub use contact::{Contact, ContactFields};
pub use item::{Item, ItemFields};
pub use kit::{Kit, KitFields};
pub use location::{Location, LocationFields};
pub use order::{Order, OrderFields};
pub use reservation::{Reservation, ReservationFields};
pub use user::{User, UserFields};

use crate::{
    error::ModelError,
    obs::{self, ModelEvent},
    validate::Issues,
};
use derive_more::{Deref, DerefMut};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

///
/// EntityFields
///
/// Declared field set for one entity. `Default` is the authority on field
/// defaults, serde on the wire shape, and `validate` runs every field-level
/// validator. An entity with zero validators is vacuously valid.
///

pub trait EntityFields: Clone + Default + PartialEq + Serialize + DeserializeOwned {
    /// Stable external name used in event channel keys (`"contact"`, ...).
    const ENTITY: &'static str;

    fn validate(&self, ctx: &mut Issues);
}

///
/// ToJsonOptions
/// Optional sections a caller may suppress when serializing.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ToJsonOptions {
    /// Omit the `_id` key even when the entity is persisted.
    pub skip_id: bool,
}

///
/// Model
///
/// Generic lifecycle wrapper around an entity field set: construction from a
/// partial spec, dirty/empty/valid predicates, and two-way JSON mapping.
/// Derefs to the field set so call sites read like plain structs.
///

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Model<F: EntityFields> {
    /// Opaque identifier, absent until persisted.
    pub id: Option<String>,
    /// Last-synced snapshot, absent for new entities.
    raw: Option<F>,
    #[deref]
    #[deref_mut]
    pub fields: F,
}

impl<F: EntityFields> Model<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct from a partial field-value object. Unset fields take the
    /// entity defaults; a malformed spec falls back to all-default. Absence
    /// always means "use default", never an error.
    #[must_use]
    pub fn from_spec(spec: &Value) -> Self {
        let fields = decode_fields(spec).unwrap_or_default();
        let id = spec
            .get("_id")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Self {
            id,
            raw: None,
            fields,
        }
    }

    /// Last-synced snapshot, if the entity has been loaded from the API.
    #[must_use]
    pub const fn raw(&self) -> Option<&F> {
        self.raw.as_ref()
    }

    /// True iff every field equals its declared default.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields == F::default()
    }

    /// True iff the entity needs saving: new and non-empty, or any field
    /// differs from the last-synced snapshot.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        match &self.raw {
            None => !self.is_empty(),
            Some(raw) => self.fields != *raw,
        }
    }

    /// Conjunction of all field validators.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validation_issues().is_empty()
    }

    /// Collected validation issues; empty when valid.
    #[must_use]
    pub fn validation_issues(&self) -> Issues {
        let mut ctx = Issues::new();
        self.fields.validate(&mut ctx);
        ctx
    }

    /// Plain serializable snapshot: `_id` first when present and not
    /// suppressed, entity fields merged in.
    #[must_use]
    pub fn to_json(&self, options: ToJsonOptions) -> Value {
        let mut data = Map::new();

        if !options.skip_id
            && let Some(id) = &self.id
        {
            data.insert("_id".to_owned(), Value::String(id.clone()));
        }

        if let Ok(Value::Object(fields)) = serde_json::to_value(&self.fields) {
            data.extend(fields);
        }

        Value::Object(data)
    }

    /// Apply an external payload onto the fields. Assignment, not merge:
    /// absent fields reset to their defaults. Refreshes the `raw` snapshot,
    /// records a `FromJson` event on the sink, and returns the applied
    /// payload.
    pub fn from_json(&mut self, data: &Value) -> Result<Value, ModelError> {
        let fields: F = decode_fields(data)?;

        if let Some(id) = data.get("_id").and_then(Value::as_str) {
            self.id = Some(id.to_owned());
        }

        self.raw = Some(fields.clone());
        self.fields = fields;

        obs::record(&ModelEvent::FromJson {
            entity: F::ENTITY,
            data: data.clone(),
        });

        Ok(data.clone())
    }
}

/// Decode a payload onto the declared field set. Null values are stripped
/// first so that absent and null both mean "use default"; unknown keys are
/// ignored.
fn decode_fields<F: EntityFields>(data: &Value) -> Result<F, ModelError> {
    let mut map = data.as_object().cloned().ok_or(ModelError::NotAnObject)?;
    map.retain(|_, value| !value.is_null());

    serde_json::from_value(Value::Object(map)).map_err(|err| ModelError::Decode(err.to_string()))
}

///
/// TESTS
///
