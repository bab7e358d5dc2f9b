use crate::{
    model::{EntityFields, Model},
    validate::{Issues, TrimmedMin, Validator},
};
use serde::{Deserialize, Serialize};

///
/// User
/// An account that signs in and operates the application.
///

pub type User = Model<UserFields>;

///
/// UserFields
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    /// Role string as the API reports it (`root`, `admin`, ...).
    pub role: String,
    /// Id of the account group the user belongs to.
    pub group: String,
    /// Attachment id of the profile picture, empty when unset.
    pub picture: String,
}

impl EntityFields for UserFields {
    const ENTITY: &'static str = "user";

    fn validate(&self, ctx: &mut Issues) {
        const MIN: TrimmedMin = TrimmedMin::new(2);

        MIN.validate_field("name", self.name.as_str(), ctx);
        MIN.validate_field("email", self.email.as_str(), ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_requires_name_and_email() {
        let mut user = User::new();
        user.name = "Ada".to_owned();
        assert!(!user.is_valid());

        user.email = "ada@example.com".to_owned();
        assert!(user.is_valid());
    }
}
