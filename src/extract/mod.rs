//! Prompt construction and model-reply cleanup

mod cleanup;
mod prompt;

pub use cleanup::strip_code_fences;
pub use prompt::{build_prompt, RECORD_FIELDS};
