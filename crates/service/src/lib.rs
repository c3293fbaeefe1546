pub mod error;
pub mod service;

pub use error::DocumentError;
pub use service::{DocumentService, FetchedDocument};
