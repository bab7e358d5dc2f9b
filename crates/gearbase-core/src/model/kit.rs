use crate::{
    model::{EntityFields, Model},
    validate::{Issues, TrimmedMin, Validator},
};
use serde::{Deserialize, Serialize};

///
/// Kit
/// A named bundle of items that checks out as one unit.
///

pub type Kit = Model<KitFields>;

///
/// KitFields
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct KitFields {
    pub name: String,
    pub status: String,
    /// Ids of the items bundled in the kit.
    pub items: Vec<String>,
}

impl EntityFields for KitFields {
    const ENTITY: &'static str = "kit";

    fn validate(&self, ctx: &mut Issues) {
        TrimmedMin::new(2).validate_field("name", self.name.as_str(), ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kit_requires_a_name() {
        let mut kit = Kit::new();
        assert!(!kit.is_valid());

        kit.name = "Camera kit A".to_owned();
        assert!(kit.is_valid());
    }
}
