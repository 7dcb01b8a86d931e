//! Error handling for Memento retrieval and WARC conversion.

mod types;

pub use types::MementoError;
