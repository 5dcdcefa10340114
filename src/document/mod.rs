//! Document decoding layer
//!
//! Turns an uploaded PDF or raster image into an ordered sequence of page
//! images, using PDFium for PDFs and the `image` crate for everything else.

mod decoder;

pub use decoder::{DocumentDecoder, PdfiumDecoder, PDF_CONTENT_TYPE};
