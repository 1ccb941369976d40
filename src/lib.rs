pub mod config;
pub mod error;
pub mod generation;
pub mod prediction;
pub mod server;
pub mod storage;

pub use error::{Error, ErrorKind, Result};
