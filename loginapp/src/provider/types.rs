use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ProviderKindError;

/// Email/password pair submitted by the login form.
///
/// Lives only for the duration of one `authenticate` call. The password is never
/// printed, including through `Debug`.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields carry something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Opaque identifier a provider returns for an authenticated account.
///
/// Firebase `localId`, Supabase user UUID or Pocketbase record id. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject(String);

impl Subject {
    /// Returns `None` for an empty value.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Subject {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Subject::new(value).ok_or("subject must not be empty")
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.0
    }
}

/// The identity providers a login can be delegated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Firebase,
    Supabase,
    Pocketbase,
}

impl ProviderKind {
    /// All providers, in the order the login form offers them.
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::Firebase,
        ProviderKind::Supabase,
        ProviderKind::Pocketbase,
    ];

    /// Wire tag used by the login form's `base` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Firebase => "firebase",
            ProviderKind::Supabase => "supabase",
            ProviderKind::Pocketbase => "pocketbase",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::Firebase => "Firebase",
            ProviderKind::Supabase => "Supabase",
            ProviderKind::Pocketbase => "Pocketbase",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ProviderKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firebase" => Ok(ProviderKind::Firebase),
            "supabase" => Ok(ProviderKind::Supabase),
            "pocketbase" => Ok(ProviderKind::Pocketbase),
            other => Err(ProviderKindError::Unknown(other.to_string())),
        }
    }
}
