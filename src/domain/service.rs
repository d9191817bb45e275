//! Service codes offered on the contact form.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Known service codes and their display labels.
const SERVICE_LABELS: [(&str, &str); 4] = [
    ("photography", "Photography"),
    ("videography", "Videography"),
    ("3d-rendering", "3D Rendering"),
    ("full-package", "Full Package"),
];

/// Map a service code to its display label, falling back to the raw code.
pub fn service_label(code: &str) -> &str {
    SERVICE_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// The service a visitor asked about.
///
/// Unrecognized codes are not an error: they are kept verbatim in
/// [`Service::Other`] and rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Service {
    Photography,
    Videography,
    Rendering3d,
    FullPackage,
    Other(String),
}

impl Service {
    /// Parse a non-empty service code.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` if the code is empty.
    pub fn parse(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        Ok(match code.as_str() {
            "" => return Err(ValidationError::Empty),
            "photography" => Self::Photography,
            "videography" => Self::Videography,
            "3d-rendering" => Self::Rendering3d,
            "full-package" => Self::FullPackage,
            _ => Self::Other(code),
        })
    }

    /// The wire code, e.g. `3d-rendering`.
    pub fn code(&self) -> &str {
        match self {
            Self::Photography => "photography",
            Self::Videography => "videography",
            Self::Rendering3d => "3d-rendering",
            Self::FullPackage => "full-package",
            Self::Other(code) => code,
        }
    }

    /// Human-readable label, e.g. `3D Rendering`.
    pub fn label(&self) -> &str {
        service_label(self.code())
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Serialize for Service {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.code().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Service {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Service::parse(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
