//! ContactPhone value object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Placeholder rendered wherever a submitter left the phone field blank.
pub const NOT_PROVIDED: &str = "Not provided";

/// The optional phone number on a contact submission.
///
/// The contact form places no constraint on the number itself; the only
/// rule is that an absent or empty value is carried as an explicit
/// [`ContactPhone::NotProvided`] so templates never show a blank field.
///
/// # Example
///
/// ```
/// use newsequence_contact::domain::ContactPhone;
///
/// assert_eq!(ContactPhone::from_input(Some("")).to_string(), "Not provided");
/// assert_eq!(ContactPhone::from_input(Some("+31 6 1234")).to_string(), "+31 6 1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ContactPhone {
    Provided(String),
    #[default]
    NotProvided,
}

impl ContactPhone {
    /// Build from raw form input. `None` and `""` both mean not provided.
    pub fn from_input(phone: Option<&str>) -> Self {
        match phone {
            Some(p) if !p.is_empty() => Self::Provided(p.to_string()),
            _ => Self::NotProvided,
        }
    }

    /// The number, if one was given.
    pub fn as_option(&self) -> Option<&str> {
        match self {
            Self::Provided(p) => Some(p),
            Self::NotProvided => None,
        }
    }

    /// The number, or the "Not provided" placeholder.
    pub fn display_value(&self) -> &str {
        self.as_option().unwrap_or(NOT_PROVIDED)
    }
}

// Serialize as the raw number, or null when not provided
impl Serialize for ContactPhone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactPhone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(ContactPhone::from_input(s.as_deref()))
    }
}

impl fmt::Display for ContactPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_value())
    }
}
