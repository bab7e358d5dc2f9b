use crate::{
    model::{EntityFields, Model},
    validate::{Issues, TrimmedMin, Validator},
};
use serde::{Deserialize, Serialize};

///
/// Location
/// A place items live at and check out from.
///

pub type Location = Model<LocationFields>;

///
/// LocationFields
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct LocationFields {
    pub name: String,
    pub address: String,
}

impl EntityFields for LocationFields {
    const ENTITY: &'static str = "location";

    fn validate(&self, ctx: &mut Issues) {
        TrimmedMin::new(2).validate_field("name", self.name.as_str(), ctx);
    }
}
