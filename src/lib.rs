//! Structured extraction of identity-document data over HTTP
//!
//! One endpoint, `POST /ocr-curp`: the uploaded PDF or image is rasterized,
//! OCR'd with a Spanish language hint, and handed to a Cohere chat model
//! that structures the text into a fixed set of personal-data fields
//! returned as the JSON response. Nothing is stored between requests.

pub mod completion;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod ocr;
pub mod server;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use server::{router, run_server, AppState};
