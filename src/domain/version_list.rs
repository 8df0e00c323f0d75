use crate::domain::version::Version;
use crate::error::{Result, VersionTrackError};
use serde::{Deserialize, Serialize};

/// An ordered collection of [`Version`]s with optional duplicate suppression.
///
/// Elements keep their insertion order; the list never sorts on its own.
/// With `ensure_no_duplicates` enabled, inserting a version equal to an
/// existing element is a silent no-op reported through the operation's return
/// value rather than an error.
///
/// The list is a plain mutable container with no internal synchronization;
/// callers sharing one across threads must serialize access themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionList {
    items: Vec<Version>,
    #[serde(skip)]
    ensure_no_duplicates: bool,
}

impl VersionList {
    /// Create an empty list with duplicate suppression disabled
    pub fn new() -> Self {
        VersionList::default()
    }

    /// Create an empty list with storage reserved for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        VersionList {
            items: Vec::with_capacity(capacity),
            ensure_no_duplicates: false,
        }
    }

    /// Enable or disable duplicate suppression, builder style
    pub fn with_ensure_no_duplicates(mut self, ensure: bool) -> Self {
        self.ensure_no_duplicates = ensure;
        self
    }

    /// Enable or disable duplicate suppression for future insertions.
    ///
    /// Existing contents are left untouched: turning the flag on does not
    /// retroactively deduplicate the list.
    pub fn set_ensure_no_duplicates(&mut self, ensure: bool) {
        self.ensure_no_duplicates = ensure;
    }

    /// Whether duplicate suppression is enabled
    pub fn ensure_no_duplicates(&self) -> bool {
        self.ensure_no_duplicates
    }

    fn is_duplicate(&self, version: &Version) -> bool {
        self.ensure_no_duplicates && self.contains(version)
    }

    /// Append a version to the end of the list.
    ///
    /// Returns `false` when duplicate suppression is enabled and an equal
    /// element already exists; the list is unchanged in that case.
    pub fn add(&mut self, version: Version) -> bool {
        if self.is_duplicate(&version) {
            return false;
        }
        self.items.push(version);
        true
    }

    /// Insert a version at position `index`, shifting later elements.
    ///
    /// `index` may equal the current length (append). Returns `false` for a
    /// suppressed duplicate, [`VersionTrackError::IndexOutOfBounds`] when
    /// `index > len`.
    pub fn add_at(&mut self, index: usize, version: Version) -> Result<bool> {
        if index > self.items.len() {
            return Err(VersionTrackError::index_out_of_bounds(
                index,
                self.items.len(),
            ));
        }
        if self.is_duplicate(&version) {
            return Ok(false);
        }
        self.items.insert(index, version);
        Ok(true)
    }

    /// Append every version from `versions` in order.
    ///
    /// Each element is checked against the list state at its own insertion
    /// point, so with duplicate suppression enabled the input is also
    /// deduplicated against itself (first occurrence wins). Returns how many
    /// elements were actually inserted.
    pub fn add_all<I>(&mut self, versions: I) -> usize
    where
        I: IntoIterator<Item = Version>,
    {
        let mut inserted = 0;
        for version in versions {
            if self.add(version) {
                inserted += 1;
            }
        }
        inserted
    }

    /// Insert every version from `versions` starting at position `index`,
    /// preserving their relative order.
    ///
    /// The nominal `index` is validated against the list length before any
    /// mutation. Each element actually inserted advances the effective
    /// insertion position by one; suppressed duplicates do not. Returns how
    /// many elements were actually inserted.
    pub fn add_all_at<I>(&mut self, index: usize, versions: I) -> Result<usize>
    where
        I: IntoIterator<Item = Version>,
    {
        if index > self.items.len() {
            return Err(VersionTrackError::index_out_of_bounds(
                index,
                self.items.len(),
            ));
        }
        let mut inserted = 0;
        for version in versions {
            if self.is_duplicate(&version) {
                continue;
            }
            self.items.insert(index + inserted, version);
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Remove the first element equal to `version`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, version: &Version) -> bool {
        match self.items.iter().position(|v| v == version) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the element at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Version> {
        if index >= self.items.len() {
            return Err(VersionTrackError::index_out_of_bounds(
                index,
                self.items.len(),
            ));
        }
        Ok(self.items.remove(index))
    }

    /// Remove every snapshot from the list, keeping release order intact
    pub fn remove_snapshots(&mut self) {
        self.items.retain(|v| v.is_release());
    }

    /// Whether the list contains an element equal to `version`
    pub fn contains(&self, version: &Version) -> bool {
        self.items.contains(version)
    }

    /// Whether the list contains at least one snapshot version
    pub fn contains_snapshot(&self) -> bool {
        self.items.iter().any(|v| v.is_snapshot())
    }

    /// Whether the list contains at least one release version
    pub fn contains_release(&self) -> bool {
        self.items.iter().any(|v| v.is_release())
    }

    /// Number of elements in the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Version> {
        self.items.get(index)
    }

    /// The first element, if any
    pub fn first(&self) -> Option<&Version> {
        self.items.first()
    }

    /// The last element, if any
    pub fn last(&self) -> Option<&Version> {
        self.items.last()
    }

    /// Iterate over the elements in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Version> {
        self.items.iter()
    }
}

impl From<Vec<Version>> for VersionList {
    fn from(items: Vec<Version>) -> Self {
        VersionList {
            items,
            ensure_no_duplicates: false,
        }
    }
}

impl FromIterator<Version> for VersionList {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        VersionList::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<Version> for VersionList {
    fn extend<I: IntoIterator<Item = Version>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl IntoIterator for VersionList {
    type Item = Version;
    type IntoIter = std::vec::IntoIter<Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a VersionList {
    type Item = &'a Version;
    type IntoIter = std::slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
