//! Data layer: pixel buffers, loading/saving, and filtering.
//!
//! Architecture:
//! ```text
//!  .png / .jpg / .jpeg
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  decode file → ImageBuffer (RGBA8)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ ImageBuffer  │  row-major RGBA8, padded stride
//!   └─────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  per-pixel invert → ImageBuffer ──▶ out.bmp
//!   └──────────┘
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
