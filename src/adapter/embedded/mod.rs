mod embedded_adapter;
mod metadata;

pub use embedded_adapter::{EmbeddedMetadataAdapter, EmbeddedNumber};
pub use metadata::{NumberDesc, RegionMetadata, METADATA};
