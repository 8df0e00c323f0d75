pub mod version;
pub mod version_list;

pub use version::Version;
pub use version_list::VersionList;
