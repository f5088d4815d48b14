use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Semantic version stamped into generated file headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    /// Parses `X.Y.Z`; a pre-release or build suffix (`-alpha`, `+sha`) is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let core = s.split(['-', '+']).next().unwrap_or_default();
        let mut parts = core.split('.');
        let mut next = |label: &str| -> Result<u32, String> {
            parts
                .next()
                .ok_or_else(|| format!("invalid version '{}', expected 'X.Y.Z'", s))?
                .parse()
                .map_err(|_| format!("invalid {} component in version '{}'", label, s))
        };
        let version = Self::new(next("major")?, next("minor")?, next("patch")?);
        if parts.next().is_some() {
            return Err(format!("invalid version '{}', expected 'X.Y.Z'", s));
        }
        Ok(version)
    }
}
