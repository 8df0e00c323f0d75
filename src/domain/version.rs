use crate::error::{Result, VersionTrackError};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

fn version_grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        // MAJOR.MINOR.PATCH with an optional literal -SNAPSHOT suffix
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(-SNAPSHOT)?$").unwrap()
    })
}

/// An application version with major, minor and patch components and a
/// snapshot marker.
///
/// A snapshot is a pre-release build of the version it is numbered as, so it
/// orders strictly below the release with the same numbers:
/// `1.2.3-SNAPSHOT < 1.2.3 < 1.2.4-SNAPSHOT`.
///
/// Values are immutable once constructed; comparison and formatting never
/// mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    snapshot: bool,
}

impl Version {
    /// Create a release version from its numeric components
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            snapshot: false,
        }
    }

    /// Create a snapshot version from its numeric components
    pub fn new_snapshot(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            snapshot: true,
        }
    }

    /// Parse a version string of the form `MAJOR.MINOR.PATCH[-SNAPSHOT]`.
    ///
    /// Surrounding whitespace and leading zeros are normalized away; anything
    /// else that deviates from the grammar is rejected. The suffix is
    /// case-sensitive: `1.2.3-snapshot` does not parse.
    ///
    /// # Example
    /// ```
    /// use version_track::Version;
    ///
    /// let v = Version::parse("1.2.3-SNAPSHOT").unwrap();
    /// assert!(v.is_snapshot());
    /// assert_eq!(v.to_string(), "1.2.3-SNAPSHOT");
    /// assert!(Version::parse("1.2").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();

        let captures = version_grammar().captures(trimmed).ok_or_else(|| {
            VersionTrackError::parse(format!(
                "Invalid version format: '{}' - expected MAJOR.MINOR.PATCH[-SNAPSHOT]",
                text
            ))
        })?;

        let major = captures[1].parse::<u32>().map_err(|_| {
            VersionTrackError::parse(format!("Invalid major version: {}", &captures[1]))
        })?;
        let minor = captures[2].parse::<u32>().map_err(|_| {
            VersionTrackError::parse(format!("Invalid minor version: {}", &captures[2]))
        })?;
        let patch = captures[3].parse::<u32>().map_err(|_| {
            VersionTrackError::parse(format!("Invalid patch version: {}", &captures[3]))
        })?;

        Ok(Version {
            major,
            minor,
            patch,
            snapshot: captures.get(4).is_some(),
        })
    }

    /// Whether this version is a snapshot (pre-release) build
    pub fn is_snapshot(&self) -> bool {
        self.snapshot
    }

    /// Whether this version is a release build
    pub fn is_release(&self) -> bool {
        !self.snapshot
    }

    /// The release version carrying the same numeric components.
    ///
    /// For a release this is an identical copy; for a snapshot it is the
    /// release the snapshot leads up to.
    pub fn as_release(&self) -> Self {
        Version {
            snapshot: false,
            ..*self
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            // for equal triples the snapshot sorts below the release
            .then_with(|| other.snapshot.cmp(&self.snapshot))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.snapshot {
            write!(f, "{}", SNAPSHOT_SUFFIX)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionTrackError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Version::parse(&text).map_err(serde::de::Error::custom)
    }
}
