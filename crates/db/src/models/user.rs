//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use teamspace_core::types::EntityId;

/// A person known to the workspace.
///
/// Chat users carry presence (`online`), directory users carry a `role`,
/// users added at runtime carry both. On the wire the profile fields are
/// flattened next to `id`, `name` and `avatar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub avatar: String,
    #[serde(flatten)]
    pub profile: UserProfile,
}

/// The optional attributes of a [`User`], as explicit variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserProfile {
    Member { role: String, online: bool },
    Directory { role: String },
    Chat { online: bool },
    Bare {},
}

impl UserProfile {
    /// Pick the variant matching whichever attributes are present.
    pub fn new(role: Option<String>, online: Option<bool>) -> Self {
        match (role, online) {
            (Some(role), Some(online)) => Self::Member { role, online },
            (Some(role), None) => Self::Directory { role },
            (None, Some(online)) => Self::Chat { online },
            (None, None) => Self::Bare {},
        }
    }
}

/// Uniform read access to optional user attributes.
pub trait Profile {
    fn online(&self) -> Option<bool>;
    fn role(&self) -> Option<&str>;
}

impl Profile for UserProfile {
    fn online(&self) -> Option<bool> {
        match self {
            Self::Member { online, .. } | Self::Chat { online } => Some(*online),
            Self::Directory { .. } | Self::Bare {} => None,
        }
    }

    fn role(&self) -> Option<&str> {
        match self {
            Self::Member { role, .. } | Self::Directory { role } => Some(role),
            Self::Chat { .. } | Self::Bare {} => None,
        }
    }
}

impl Profile for User {
    fn online(&self) -> Option<bool> {
        self.profile.online()
    }

    fn role(&self) -> Option<&str> {
        self.profile.role()
    }
}

/// DTO for adding a user. Id, avatar and presence are derived.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub role: Option<String>,
}

/// DTO for updating a user. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub online: Option<bool>,
    pub role: Option<String>,
}

impl User {
    pub fn apply(&mut self, input: &UpdateUser) {
        if let Some(name) = &input.name {
            self.name = name.clone();
        }
        if let Some(avatar) = &input.avatar {
            self.avatar = avatar.clone();
        }
        if input.online.is_some() || input.role.is_some() {
            let role = input
                .role
                .clone()
                .or_else(|| self.profile.role().map(str::to_string));
            let online = input.online.or(self.profile.online());
            self.profile = UserProfile::new(role, online);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> User {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn chat_user_parses_presence_only() {
        let user = parse(r#"{"id":"u1","name":"Alice","avatar":"a","online":true}"#);
        assert_eq!(user.profile, UserProfile::Chat { online: true });
        assert_eq!(user.role(), None);
    }

    #[test]
    fn directory_user_parses_role_only() {
        let user = parse(r#"{"name":"Alex","avatar":"a","id":"u7","role":"Team Lead"}"#);
        assert_eq!(user.role(), Some("Team Lead"));
        assert_eq!(user.online(), None);
    }

    #[test]
    fn member_user_keeps_both_fields() {
        let user = parse(r#"{"id":"u-1","name":"Dana","avatar":"a","online":true,"role":"PM"}"#);
        assert_eq!(
            user.profile,
            UserProfile::Member { role: "PM".into(), online: true }
        );
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "PM");
        assert_eq!(json["online"], true);
    }

    #[test]
    fn bare_user_serializes_without_optional_fields() {
        let user = parse(r#"{"id":"u0","name":"Ghost","avatar":"a"}"#);
        assert_eq!(user.profile, UserProfile::Bare {});
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("role").is_none());
        assert!(json.get("online").is_none());
    }

    #[test]
    fn apply_merges_profile_fields() {
        let mut user = parse(r#"{"id":"u1","name":"Alice","avatar":"a","online":true}"#);
        user.apply(&UpdateUser {
            role: Some("Designer".into()),
            ..Default::default()
        });
        assert_eq!(
            user.profile,
            UserProfile::Member { role: "Designer".into(), online: true }
        );
    }

    #[test]
    fn empty_update_changes_nothing() {
        let original = parse(r#"{"id":"u7","name":"Alex","avatar":"a","role":"Team Lead"}"#);
        let mut user = original.clone();
        user.apply(&UpdateUser::default());
        assert_eq!(user, original);
    }
}
