//! Secret masking for display.
//!
//! Environment variables checked by the validator usually hold tokens, so
//! their values are never printed in full:
//!
//! - [`mask_preview`] - Redacts the middle of a value for a status line
//!
//! # Example
//!
//! ```
//! use mcp_validate::secrets::mask_preview;
//!
//! assert_eq!(mask_preview("glpat-abcdefghijkl"), "glpa...ijkl");
//! assert_eq!(mask_preview("short"), "***");
//! ```

pub mod mask;

pub use mask::{mask_preview, PLACEHOLDER_MASK, PREVIEW_EDGE};
