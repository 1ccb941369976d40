pub mod artifact;
mod pipeline;
pub mod stage;

pub use artifact::{Clock, SystemClock, artifact_file_name, public_url};
pub use pipeline::{GeneratedImage, ImageGenerator, validate_prompt};
pub use stage::{GenerationEvent, GenerationState, GenerationStateMachine};
