//! User entity mapped from a Gitea user object.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// A Gitea account.
///
/// Always embedded by value inside a pull request, review, or review
/// comment; it has no independent lifecycle. Equality is structural over
/// every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    pub full_name: String,
    pub email: String,
    pub avatar_url: String,
    #[serde(deserialize_with = "wire_bool")]
    pub is_admin: bool,
    pub language: String,
    /// Last login timestamp; the server sends the zero date
    /// `0001-01-01T00:00:00Z` for accounts that never logged in.
    pub last_login: String,
    pub created: String,
}

/// Gitea encodes some booleans as native JSON booleans and some as the
/// strings `"true"`/`"false"`. Normalize with a case-insensitive compare
/// against `"true"`.
pub(crate) fn wire_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireBool {
        Native(bool),
        Text(String),
    }

    Ok(match WireBool::deserialize(deserializer)? {
        WireBool::Native(value) => value,
        WireBool::Text(text) => text.eq_ignore_ascii_case("true"),
    })
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User {{")?;
        writeln!(f, "\tname: {}", self.full_name)?;
        writeln!(f, "\temail: {}", self.email)?;
        writeln!(f, "\tlogin: {}", self.login)?;
        writeln!(f, "\tis_admin: {}", self.is_admin)?;
        writeln!(f, "\tavatar: {}", self.avatar_url)?;
        writeln!(f, "\tlanguage: {}", self.language)?;
        writeln!(f, "\tlast_login: {}", self.last_login)?;
        write!(f, "}}")
    }
}
