const ACCESS_TOKEN: &str = "ACCESS_TOKEN";
const REFRESH_TOKEN: &str = "REFRESH_TOKEN";
const USER: &str = "USER";

/// The fixed keys backing the named session accessors.
///
/// These are the only keys the accessor writes on its own behalf, so a typo can
/// never create a stray entry. Arbitrary keys go through the generic
/// `get_entry`/`set_entry`/`clear_entry` path instead.
#[derive(uniffi::Enum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    AccessToken,
    RefreshToken,
    User,
}

impl SessionKey {
    pub const ALL: [SessionKey; 3] = [
        SessionKey::AccessToken,
        SessionKey::RefreshToken,
        SessionKey::User,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SessionKey::AccessToken => ACCESS_TOKEN,
            SessionKey::RefreshToken => REFRESH_TOKEN,
            SessionKey::User => USER,
        }
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SessionKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
