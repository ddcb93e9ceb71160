use std::fmt::{Display, Formatter};
use validator::validate_email;

/// A mailbox: a validated email address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    email: String,
    name: Option<String>,
}

impl Address {
    pub fn parse(s: impl Into<String>) -> Result<Self, String> {
        let s = s.into();
        if validate_email(&s) {
            Ok(Self { email: s, name: None })
        } else {
            Err(format!("{} is not a valid email address.", s))
        }
    }

    /// Same as [`Address::parse`], attaching a display name.
    /// A blank name is stored as no name at all.
    pub fn named(s: impl Into<String>, name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        let mut address = Self::parse(s)?;
        if !name.trim().is_empty() {
            address.name = Some(name);
        }
        Ok(address)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.email
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "\"{}\" <{}>", name.replace('"', "\\\""), self.email),
            None => write!(f, "{}", self.email),
        }
    }
}
