use crate::{
    model::{EntityFields, Model},
    validate::{Issues, TrimmedMin, Validator},
};
use serde::{Deserialize, Serialize};

///
/// Item
/// A single piece of trackable equipment.
///

pub type Item = Model<ItemFields>;

///
/// ItemFields
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ItemFields {
    pub name: String,
    pub status: String,
    pub brand: String,
    pub model: String,
    /// Id of the location the item lives at.
    pub location: String,
    /// Id of the category the item is filed under.
    pub category: String,
}

impl EntityFields for ItemFields {
    const ENTITY: &'static str = "item";

    fn validate(&self, ctx: &mut Issues) {
        TrimmedMin::new(2).validate_field("name", self.name.as_str(), ctx);
    }
}
