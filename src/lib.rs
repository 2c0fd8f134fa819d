//! # Etiketa - Product Sticker Barcode Library
//!
//! Etiketa turns lists of human-entered product codes into render-ready
//! sticker records. It provides:
//!
//! - **Code128 encoding**: Subset B symbol strings for barcode fonts
//! - **Dash classification**: per-prefix policy for significant hyphens
//! - **Batch assembly**: order-preserving sticker records with per-code
//!   failure isolation
//! - **Render payload**: the JSON body the sticker renderer consumes
//!
//! ## Quick Start
//!
//! ```
//! use etiketa::{PrefixRegistry, RenderRequest, sticker};
//!
//! // Hyphens are significant for the "HF" product line only.
//! let registry = PrefixRegistry::new(["HF-"]);
//!
//! let batch = sticker::assemble(["HF-0042", "PX-0017"], &registry);
//! assert!(batch.rejected.is_empty());
//!
//! // "PX-0017" is encoded without its hyphen, but keeps it on the sticker.
//! assert_eq!(batch.stickers[1].code, "PX-0017");
//!
//! let payload = RenderRequest::new(batch.stickers).to_json()?;
//! assert!(payload.starts_with(r#"{"data":{"stickers":["#));
//! # Ok::<(), etiketa::EtiketaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`code128`] | Code128 Subset B encoder |
//! | [`classify`] | Dash-significance policy and prefix registry |
//! | [`sticker`] | Sticker records and batch assembly |
//! | [`render_api`] | Render submission payload |
//! | [`template`] | Render template registry |
//! | [`input`] | Line-oriented code list extraction |
//! | [`error`] | Error types |
//!
//! Encoding and classification are pure functions: no shared state, no
//! ordering dependency between codes. Rendering the bars themselves is the
//! barcode font's job.

pub mod classify;
pub mod code128;
pub mod error;
pub mod input;
pub mod render_api;
pub mod sticker;
pub mod template;

// Re-exports for convenience
pub use classify::{PrefixRegistry, classify};
pub use code128::encode;
pub use error::EtiketaError;
pub use render_api::RenderRequest;
pub use sticker::{Batch, Sticker, assemble};
pub use template::Template;
