pub mod error;
pub mod store;

pub use error::MetadataError;
pub use store::MetadataStore;
