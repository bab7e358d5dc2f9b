//! Permission derivation: a pure mapping from (role, profile flags, account
//! limits) to the capability matrix the UI keys its affordances on.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// Role
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Root,
    Admin,
    User,
    SelfService,
}

impl Role {
    #[must_use]
    pub const fn is_root_or_admin(self) -> bool {
        matches!(self, Self::Root | Self::Admin)
    }

    #[must_use]
    pub const fn is_root_or_admin_or_user(self) -> bool {
        matches!(self, Self::Root | Self::Admin | Self::User)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Root => "root",
            Self::Admin => "admin",
            Self::User => "user",
            Self::SelfService => "selfservice",
        };
        write!(f, "{label}")
    }
}

///
/// UnknownRoleError
///

#[derive(Debug, ThisError)]
#[error("unknown role: {0}")]
pub struct UnknownRoleError(String);

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "root" => Ok(Self::Root),
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "selfservice" => Ok(Self::SelfService),
            other => Err(UnknownRoleError(other.to_owned())),
        }
    }
}

///
/// Profile
/// Per-group usage flags; a feature is live only when the account limit
/// allows it AND the group profile enables it.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub use_reservations: bool,
    pub use_order_agreements: bool,
    pub use_kits: bool,
    pub use_custody: bool,
    pub use_order_transfers: bool,
}

///
/// Limits
/// Account-level plan limits.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Limits {
    pub allow_reservations: bool,
    pub allow_generate_pdf: bool,
    pub allow_web_hooks: bool,
    pub allow_kits: bool,
    pub allow_custody: bool,
    pub allow_order_transfers: bool,
    pub max_items: i64,
    pub max_users: i64,
}

///
/// AccessRights
///
/// Fixed, exhaustive capability matrix. Every boolean is a pure
/// conjunction/disjunction of the role checks and feature gates; fields are
/// independent of each other.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRights {
    pub contacts: ContactRights,
    pub items: ItemRights,
    pub orders: OrderRights,
    pub reservations: ReservationRights,
    pub locations: LocationRights,
    pub users: UserRights,
    pub web_hooks: WebHookRights,
    pub stickers: StickerRights,
    pub categories: CategoryRights,
    pub account: AccountRights,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRights {
    pub create: bool,
    pub remove: bool,
    pub update: bool,
    pub archive: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRights {
    pub create: bool,
    pub remove: bool,
    pub update: bool,
    pub update_flag: bool,
    pub update_location: bool,
    pub update_geo: bool,
    pub update_custody: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRights {
    pub create: bool,
    pub remove: bool,
    pub update: bool,
    pub update_contact: bool,
    pub update_location: bool,
    pub generate_pdf: bool,
    pub transfer_order: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRights {
    pub create: bool,
    pub remove: bool,
    pub update: bool,
    pub update_contact: bool,
    pub update_location: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRights {
    pub create: bool,
    pub remove: bool,
    pub update: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRights {
    pub create: bool,
    pub remove: bool,
    pub update: bool,
    pub update_other: bool,
    pub update_own: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebHookRights {
    pub create: bool,
    pub remove: bool,
    pub update: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerRights {
    pub print: bool,
    pub buy: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRights {
    pub create: bool,
    pub update: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRights {
    pub update: bool,
}

impl AccessRights {
    /// Derive the capability matrix. Pure function of its three inputs; no
    /// I/O, no ordering concerns.
    #[must_use]
    pub const fn derive(role: Role, profile: &Profile, limits: &Limits) -> Self {
        let is_root_or_admin = role.is_root_or_admin();
        let is_root_or_admin_or_user = role.is_root_or_admin_or_user();
        let not_selfservice = !matches!(role, Role::SelfService);

        let use_reservations = limits.allow_reservations && profile.use_reservations;
        let use_order_agreements = limits.allow_generate_pdf && profile.use_order_agreements;
        let use_web_hooks = limits.allow_web_hooks;
        let use_custody = limits.allow_custody && profile.use_custody;
        let use_order_transfers = limits.allow_order_transfers && profile.use_order_transfers;

        Self {
            contacts: ContactRights {
                create: is_root_or_admin_or_user,
                remove: is_root_or_admin_or_user,
                update: true,
                archive: is_root_or_admin_or_user,
            },
            items: ItemRights {
                create: is_root_or_admin,
                remove: is_root_or_admin,
                update: is_root_or_admin,
                update_flag: is_root_or_admin,
                update_location: is_root_or_admin,
                update_geo: true,
                update_custody: use_custody,
            },
            orders: OrderRights {
                create: true,
                remove: true,
                update: true,
                update_contact: not_selfservice,
                update_location: true,
                generate_pdf: use_order_agreements && is_root_or_admin_or_user,
                transfer_order: use_order_transfers,
            },
            reservations: ReservationRights {
                create: use_reservations,
                remove: use_reservations,
                update: use_reservations,
                update_contact: use_reservations && not_selfservice,
                update_location: use_reservations,
            },
            locations: LocationRights {
                create: is_root_or_admin,
                remove: is_root_or_admin,
                update: is_root_or_admin,
            },
            users: UserRights {
                create: is_root_or_admin,
                remove: is_root_or_admin,
                update: is_root_or_admin,
                update_other: is_root_or_admin,
                update_own: true,
            },
            web_hooks: WebHookRights {
                create: use_web_hooks && is_root_or_admin,
                remove: use_web_hooks && is_root_or_admin,
                update: use_web_hooks && is_root_or_admin,
            },
            stickers: StickerRights {
                print: is_root_or_admin,
                buy: is_root_or_admin,
            },
            categories: CategoryRights {
                create: is_root_or_admin,
                update: is_root_or_admin,
            },
            account: AccountRights {
                update: is_root_or_admin,
            },
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn everything_on() -> (Profile, Limits) {
        (
            Profile {
                use_reservations: true,
                use_order_agreements: true,
                use_kits: true,
                use_custody: true,
                use_order_transfers: true,
            },
            Limits {
                allow_reservations: true,
                allow_generate_pdf: true,
                allow_web_hooks: true,
                allow_kits: true,
                allow_custody: true,
                allow_order_transfers: true,
                max_items: 500,
                max_users: 10,
            },
        )
    }

    #[test]
    fn selfservice_cannot_reassign_contacts() {
        let (profile, limits) = everything_on();

        let selfservice = AccessRights::derive(Role::SelfService, &profile, &limits);
        let admin = AccessRights::derive(Role::Admin, &profile, &limits);

        assert!(!selfservice.orders.update_contact);
        assert!(!selfservice.reservations.update_contact);
        assert!(admin.orders.update_contact);
        assert!(admin.reservations.update_contact);
    }

    #[test]
    fn reservations_gate_needs_limit_and_profile() {
        let (mut profile, mut limits) = everything_on();

        let rights = AccessRights::derive(Role::Admin, &profile, &limits);
        assert!(rights.reservations.create);

        profile.use_reservations = false;
        let rights = AccessRights::derive(Role::Admin, &profile, &limits);
        assert!(!rights.reservations.create);

        profile.use_reservations = true;
        limits.allow_reservations = false;
        let rights = AccessRights::derive(Role::Admin, &profile, &limits);
        assert!(!rights.reservations.create);
    }

    #[test]
    fn web_hooks_gate_on_the_limit_flag_alone() {
        let (mut profile, limits) = everything_on();
        profile.use_reservations = false;
        profile.use_order_agreements = false;

        let rights = AccessRights::derive(Role::Root, &profile, &limits);
        assert!(rights.web_hooks.create);

        let user = AccessRights::derive(Role::User, &profile, &limits);
        assert!(!user.web_hooks.create);
    }

    #[test]
    fn plain_users_manage_contacts_but_not_items() {
        let (profile, limits) = everything_on();

        let rights = AccessRights::derive(Role::User, &profile, &limits);

        assert!(rights.contacts.create);
        assert!(rights.contacts.archive);
        assert!(!rights.items.create);
        assert!(!rights.locations.create);
        assert!(rights.items.update_geo);
        assert!(rights.users.update_own);
        assert!(!rights.users.update_other);
    }

    #[test]
    fn role_parses_from_wire_strings() {
        assert_eq!("selfservice".parse::<Role>().unwrap(), Role::SelfService);
        assert_eq!("root".parse::<Role>().unwrap(), Role::Root);
        assert!("owner".parse::<Role>().is_err());
    }
}
