pub mod domain;
pub mod error;
pub mod history;

pub use domain::{Version, VersionList};
pub use error::{Result, VersionTrackError};
