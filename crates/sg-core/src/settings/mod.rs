pub mod defaults;
pub mod model;

pub use model::{ArchiveSettings, GeneralSettings, Settings, CURRENT_SCHEMA_VERSION};
