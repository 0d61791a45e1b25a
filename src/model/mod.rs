//! Data model: document metadata and the detected table region.

mod metadata;
mod table;

pub use metadata::{Metadata, MetaKey, MetaValue};
pub use table::TableRegion;
