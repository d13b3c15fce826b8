/*
 * QR Code generator library (Rust)
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * Copyright (c) Abdulrhman Alkhodiry (aalkhodiry@gmail.com)
 * https://www.nayuki.io/page/qr-code-generator-library
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy of
 * this software and associated documentation files (the "Software"), to deal in
 * the Software without restriction, including without limitation the rights to
 * use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
 * the Software, and to permit persons to whom the Software is furnished to do so,
 * subject to the following conditions:
 * - The above copyright notice and this permission notice shall be included in
 *   all copies or substantial portions of the Software.
 * - The Software is provided "as is", without warranty of any kind, express or
 *   implied, including but not limited to the warranties of merchantability,
 *   fitness for a particular purpose and noninfringement. In no event shall the
 *   authors or copyright holders be liable for any claim, damages or other
 *   liability, whether in an action of contract, tort or otherwise, arising from,
 *   out of or in connection with the Software or the use or other dealings in the
 *   Software.
 */

//! # QR Code Generator Library
//!
//! A QR Code (Model 2) encoder: segment encoding, version/error-correction-level
//! selection, Reed-Solomon error correction, matrix construction, and masking.
//!
//! ## Features
//!
//! - Supports all 40 versions (sizes) and all 4 error correction levels
//! - Output format: raw modules/pixels of the QR symbol, plus SVG, ASCII-art, and
//!   raster (PNG/JPEG) renderers
//! - Detects finder-like penalty patterns per the standard's masking rules
//! - Encodes numeric and alphanumeric text in less space than general byte mode
//! - Open-source code under the permissive MIT License
//!
//! ## Examples
//!
//! ### Basic QR Code
//!
//! ```rust
//! use qrcodec::{QrCode, QrCodeEcc};
//!
//! let qr = QrCode::encode_text("Hello, world!", QrCodeEcc::Medium).unwrap();
//! println!("Size: {}x{}", qr.size(), qr.size());
//!
//! // Access individual modules
//! for y in 0..qr.size() {
//!     for x in 0..qr.size() {
//!         let module = qr.get_module(x, y);
//!         print!("{}", if module { "██" } else { "  " });
//!     }
//!     println!();
//! }
//! ```
//!
//! ### SVG Rendering
//!
//! ```rust
//! use qrcodec::{QrCode, QrCodeEcc};
//! use qrcodec::render::to_svg_string;
//!
//! let qr = QrCode::encode_text("https://example.com", QrCodeEcc::Quartile).unwrap();
//! let svg = to_svg_string(&qr, 4, 10).unwrap();
//! ```
//!
//! ### Advanced Segment Usage
//!
//! ```rust
//! use qrcodec::{QrCode, QrCodeEcc, QrSegment, Version, Mask};
//!
//! let text = "3141592653589793238462643383";
//! let segs = QrSegment::make_segments(text);
//! let qr = QrCode::encode_segments_advanced(
//!     &segs,
//!     QrCodeEcc::High,
//!     5,
//!     5,
//!     Some(2),
//!     false
//! ).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Module declarations
mod error;
mod gf256;
mod tables;
mod types;
mod segment;
mod qrcode;
pub mod raster;
pub mod render;

// Re-export public API
pub use error::{DataTooLong, QrError};
pub use types::{QrCodeEcc, Version, Mask};
pub use segment::{QrSegment, QrSegmentMode, BitBuffer};
pub use qrcode::QrCode;
