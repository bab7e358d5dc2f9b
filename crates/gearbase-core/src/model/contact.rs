use crate::{
    model::{EntityFields, Model},
    validate::{Issues, TrimmedMin, Validator},
};
use serde::{Deserialize, Serialize};

///
/// Contact
/// Person or company that items are checked out to.
///

pub type Contact = Model<ContactFields>;

///
/// ContactFields
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
}

impl EntityFields for ContactFields {
    const ENTITY: &'static str = "contact";

    fn validate(&self, ctx: &mut Issues) {
        const MIN: TrimmedMin = TrimmedMin::new(2);

        MIN.validate_field("name", self.name.as_str(), ctx);
        MIN.validate_field("company", self.company.as_str(), ctx);
        MIN.validate_field("phone", self.phone.as_str(), ctx);
        MIN.validate_field("email", self.email.as_str(), ctx);
    }
}
