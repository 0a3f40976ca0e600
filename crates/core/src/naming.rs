//! Id and avatar derivation rules.
//!
//! Ids are not globally unique: they combine a fixed prefix or a name slug
//! with a millisecond timestamp, which is unique enough for one user creating
//! entities by hand.

/// Base URL of the placeholder avatar service.
pub const AVATAR_BASE_URL: &str = "https://picsum.photos/seed";

/// Avatar edge length used for users created at runtime.
pub const USER_AVATAR_SIZE: u32 = 40;

/// Avatar edge length used for squad and space member chips.
pub const MEMBER_AVATAR_SIZE: u32 = 32;

/// Lowercase `name` and collapse every whitespace run into a single `-`.
///
/// Leading and trailing whitespace produce a leading or trailing `-`, which
/// keeps ids derived from the same input stable.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

/// `"{prefix}-{millis}"`, e.g. `doc-1718000000000`.
pub fn prefixed_id(prefix: &str, millis: i64) -> String {
    format!("{prefix}-{millis}")
}

/// `"{slug(name)}-{millis}"`, used for squads and spaces.
pub fn slug_id(name: &str, millis: i64) -> String {
    format!("{}-{millis}", slugify(name))
}

/// Placeholder avatar for an arbitrary seed string.
pub fn avatar_url(seed: &str, size: u32) -> String {
    format!("{AVATAR_BASE_URL}/{seed}/{size}/{size}")
}

/// Avatar assigned to a user created at runtime (seeded by lowercase name).
pub fn user_avatar(name: &str) -> String {
    avatar_url(&name.to_lowercase(), USER_AVATAR_SIZE)
}

/// Id given to a placeholder user synthesized for an unmatched member name.
pub fn placeholder_user_id(name: &str) -> String {
    format!("u-{}", name.to_lowercase())
}
