use crate::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{Local, NaiveDateTime};

pub const FILE_NAME_PREFIX: &str = "generated_image";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// `generated_image_{YYYYMMDD_HHMMSS}_{prompt}.png` with spaces turned into
/// underscores. No other characters are touched, so identical prompts in the
/// same second map to the same name.
pub fn artifact_file_name(prompt: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}.png",
        FILE_NAME_PREFIX,
        timestamp.format(TIMESTAMP_FORMAT),
        prompt.replace(' ', "_")
    )
}

/// Joins the public host, bucket and the last `/` segment of the storage path.
/// Purely syntactic: the object's visibility is never checked.
pub fn public_url(public_base: &str, bucket: &str, gcs_path: &str) -> String {
    let file_name = gcs_path.rsplit('/').next().unwrap_or(gcs_path);
    format!(
        "{}/{}/{}",
        public_base.trim_end_matches('/'),
        bucket,
        file_name
    )
}

pub fn decode_image(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(BASE64.decode(compact.as_bytes())?)
}
