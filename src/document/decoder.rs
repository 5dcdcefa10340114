//! Uploaded-document decoding with PDFium

use async_trait::async_trait;
use image::DynamicImage;
use pdfium_render::prelude::*;

use crate::error::{Error, Result};

/// Declared MIME type that routes an upload through the PDF path.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Render width in pixels for rasterized PDF pages, sized for OCR input.
const RENDER_TARGET_WIDTH: i32 = 2000;

/// Turning uploaded bytes into an ordered sequence of page images.
///
/// PDFs yield one image per page in document order; plain raster uploads
/// yield a single image. Callers that only need the first page take the
/// head of the sequence.
#[async_trait]
pub trait DocumentDecoder: Send + Sync {
    /// Decode the payload according to its declared content type.
    async fn decode(
        &self,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<Vec<DynamicImage>>;
}

/// Get a PDFium instance (created per call - PDFium is not thread-safe)
fn create_pdfium() -> Result<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Decode {
            reason: format!("Failed to initialize PDFium: {e}"),
        })?;

    Ok(Pdfium::new(bindings))
}

/// Decoder backed by PDFium for PDFs and the `image` crate for raster
/// uploads.
#[derive(Debug, Clone, Default)]
pub struct PdfiumDecoder;

impl PdfiumDecoder {
    pub fn new() -> Self {
        Self
    }

    fn decode_pdf(data: &[u8]) -> Result<Vec<DynamicImage>> {
        if data.len() < 4 || &data[0..4] != b"%PDF" {
            return Err(Error::Decode {
                reason: "Not a valid PDF file".to_string(),
            });
        }

        let pdfium = create_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(|e| Error::Decode {
                reason: format!("{e}"),
            })?;

        let pages = document.pages();
        let config = PdfRenderConfig::new().set_target_width(RENDER_TARGET_WIDTH);
        let mut images = Vec::with_capacity(pages.len() as usize);

        for index in 0..pages.len() {
            let page = pages.get(index).map_err(|e| Error::Decode {
                reason: format!("Failed to get page {}: {e}", index + 1),
            })?;

            let bitmap = page.render_with_config(&config).map_err(|e| Error::Decode {
                reason: format!("Failed to render page {}: {e}", index + 1),
            })?;

            images.push(bitmap.as_image());
        }

        Ok(images)
    }

    fn decode_image(data: &[u8]) -> Result<Vec<DynamicImage>> {
        let img = image::load_from_memory(data).map_err(|e| Error::Decode {
            reason: e.to_string(),
        })?;

        Ok(vec![img])
    }
}

#[async_trait]
impl DocumentDecoder for PdfiumDecoder {
    async fn decode(
        &self,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<Vec<DynamicImage>> {
        let is_pdf = content_type == Some(PDF_CONTENT_TYPE);

        // Rendering and image decoding are CPU-bound
        tokio::task::spawn_blocking(move || {
            if is_pdf {
                Self::decode_pdf(&data)
            } else {
                Self::decode_image(&data)
            }
        })
        .await
        .map_err(|e| Error::Decode {
            reason: e.to_string(),
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgba8(width, height);
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("in-memory PNG encode");
        bytes
    }

    #[test]
    fn raster_payload_decodes_to_one_page() {
        let pages = PdfiumDecoder::decode_image(&png_bytes(4, 3)).expect("decodable PNG");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].dimensions(), (4, 3));
    }

    #[test]
    fn garbage_raster_payload_is_a_decode_error() {
        let result = PdfiumDecoder::decode_image(b"definitely not an image");
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn pdf_payload_without_magic_is_rejected() {
        let result = PdfiumDecoder::decode_pdf(b"not a pdf at all");
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[tokio::test]
    async fn declared_type_routes_to_the_image_path() {
        let decoder = PdfiumDecoder::new();
        let pages = decoder
            .decode(png_bytes(2, 2), Some("image/png"))
            .await
            .expect("decodable PNG");
        assert_eq!(pages.len(), 1);
    }

    #[tokio::test]
    async fn missing_content_type_is_treated_as_an_image() {
        let decoder = PdfiumDecoder::new();
        let pages = decoder.decode(png_bytes(2, 2), None).await.expect("decodable PNG");
        assert_eq!(pages.len(), 1);
    }
}
