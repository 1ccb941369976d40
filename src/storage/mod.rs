mod client;

pub use client::{GcsObjectStore, ObjectStore};
#[cfg(test)]
pub use client::MockObjectStore;

pub const PNG_CONTENT_TYPE: &str = "image/png";
