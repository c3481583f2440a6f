//! Shop account model matching the frontend User interface.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a shop never provided a phone number.
pub const PHONE_PLACEHOLDER: &str = "+91 98765 43210";

/// Account status of a shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Suspended,
}

impl UserStatus {
    /// The opposite status, used by the suspend/activate toggle.
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Suspended,
            UserStatus::Suspended => UserStatus::Active,
        }
    }
}

/// A registered shop account, normalized for the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub shop_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    pub last_active: String,
}

impl User {
    /// Platform operators never show up in the shop registry.
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// The lenient shape persisted under the users key. Consumer apps write
/// these records incrementally, so most fields may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub registration_date: Option<String>,
    #[serde(default)]
    pub last_active: Option<String>,
}

impl StoredUser {
    /// Normalize into a panel [`User`], filling the documented defaults.
    ///
    /// `now` is the load timestamp (RFC 3339) substituted for a missing
    /// `lastActive`. Defaults are applied here once and only reach the
    /// store again when a mutation persists the collection.
    pub fn into_user(self, now: &str) -> User {
        let first_name = self.name.split(' ').next().unwrap_or_default();
        let shop_name = self
            .shop_name
            .unwrap_or_else(|| format!("{first_name}'s Store"));

        User {
            id: self.id,
            name: self.name,
            email: self.email,
            shop_name,
            phone: self.phone.unwrap_or_else(|| PHONE_PLACEHOLDER.to_string()),
            role: self.role,
            status: self.status.unwrap_or(UserStatus::Active),
            registration_date: self.registration_date,
            last_active: self.last_active.unwrap_or_else(|| now.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(name: &str) -> StoredUser {
        StoredUser {
            id: "u-1".to_string(),
            name: name.to_string(),
            email: "owner@example.com".to_string(),
            ..StoredUser::default()
        }
    }

    #[test]
    fn test_shop_name_defaults_to_first_name() {
        let user = stored("Asha Verma").into_user("2024-01-01T00:00:00Z");
        assert_eq!(user.shop_name, "Asha's Store");
    }

    #[test]
    fn test_explicit_shop_name_kept() {
        let mut raw = stored("Asha Verma");
        raw.shop_name = Some("Verma General Store".to_string());
        let user = raw.into_user("2024-01-01T00:00:00Z");
        assert_eq!(user.shop_name, "Verma General Store");
    }

    #[test]
    fn test_status_defaults_to_active() {
        let user = stored("Ravi Nair").into_user("2024-01-01T00:00:00Z");
        assert_eq!(user.status, UserStatus::Active);
    }

    #[test]
    fn test_missing_last_active_uses_load_time() {
        let user = stored("Ravi Nair").into_user("2024-03-05T10:30:00Z");
        assert_eq!(user.last_active, "2024-03-05T10:30:00Z");
        assert_eq!(user.phone, PHONE_PLACEHOLDER);
    }

    #[test]
    fn test_toggled_round_trips() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Suspended);
        assert_eq!(UserStatus::Active.toggled().toggled(), UserStatus::Active);
    }
}
