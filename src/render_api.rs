//! # Render Submission Payload
//!
//! The sticker renderer consumes a JSON body of the form
//!
//! ```json
//! {"data": {"stickers": [{"code": "...", "barcode": "...", "prefix": "..."}]}}
//! ```
//!
//! posted against a render document named after the template id. Building
//! that payload is this module's job; the transfer itself belongs to the
//! caller.

use serde::Serialize;

use crate::error::EtiketaError;
use crate::sticker::Sticker;
use crate::template::Template;

/// Request body for a sticker render submission.
#[derive(Debug, Serialize)]
pub struct RenderRequest {
    data: RenderData,
}

#[derive(Debug, Serialize)]
struct RenderData {
    stickers: Vec<Sticker>,
}

impl RenderRequest {
    /// Wrap assembled stickers into a request body.
    pub fn new(stickers: Vec<Sticker>) -> Self {
        Self {
            data: RenderData { stickers },
        }
    }

    /// The stickers carried by this request, in submission order.
    pub fn stickers(&self) -> &[Sticker] {
        &self.data.stickers
    }

    /// Render document name the submission is keyed by.
    pub fn document_name(template: &Template) -> String {
        format!("{}.pdf", template.id)
    }

    /// Serialize to a compact JSON body.
    pub fn to_json(&self) -> Result<String, EtiketaError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to an indented JSON body.
    pub fn to_json_pretty(&self) -> Result<String, EtiketaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sticker() -> Sticker {
        Sticker {
            code: "HF-1".to_string(),
            barcode: "\u{CC}HF-12\u{CE}".to_string(),
            prefix: "HF".to_string(),
        }
    }

    #[test]
    fn test_payload_shape() {
        let json = RenderRequest::new(vec![sticker()]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let stickers = value["data"]["stickers"].as_array().unwrap();
        assert_eq!(stickers.len(), 1);
        assert_eq!(stickers[0]["code"], "HF-1");
        assert_eq!(stickers[0]["barcode"], "\u{CC}HF-12\u{CE}");
        assert_eq!(stickers[0]["prefix"], "HF");
    }

    #[test]
    fn test_empty_batch_serializes() {
        let json = RenderRequest::new(Vec::new()).to_json().unwrap();
        assert_eq!(json, r#"{"data":{"stickers":[]}}"#);
    }

    #[test]
    fn test_document_name() {
        assert_eq!(
            RenderRequest::document_name(&Template::HOFAT_FRONT),
            "hofat-front.pdf"
        );
    }
}
