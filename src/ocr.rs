//! OCR engine seam and Tesseract implementation

use async_trait::async_trait;
use image::DynamicImage;
use tesseract::Tesseract;

use crate::error::{Error, Result};

/// Deriving machine-readable text from one raster image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognize text in the image.
    async fn recognize(&self, image: &DynamicImage) -> Result<String>;
}

/// Tesseract-backed OCR with a fixed language hint.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    language: String,
}

impl TesseractOcr {
    /// Create an engine for the given Tesseract language code (e.g. "spa").
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    async fn recognize(&self, image: &DynamicImage) -> Result<String> {
        // Tesseract consumes encoded bytes; PNG keeps the raster lossless
        let mut png = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .map_err(|e| Error::Ocr {
                reason: e.to_string(),
            })?;

        let language = self.language.clone();

        // Recognition is CPU-bound and can run for seconds on large scans
        tokio::task::spawn_blocking(move || {
            let mut engine = Tesseract::new(None, Some(&language))
                .map_err(|e| Error::Ocr {
                    reason: e.to_string(),
                })?
                .set_image_from_mem(&png)
                .map_err(|e| Error::Ocr {
                    reason: e.to_string(),
                })?;

            engine.get_text().map_err(|e| Error::Ocr {
                reason: e.to_string(),
            })
        })
        .await
        .map_err(|e| Error::Ocr {
            reason: e.to_string(),
        })?
    }
}
