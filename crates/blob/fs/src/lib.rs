pub mod store;

pub use store::FsBlobStore;
