/*
 * QR Code generator library (Rust)
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * Copyright (c) Abdulrhman Alkhodiry (aalkhodiry@gmail.com)
 */

//! Raster (bitmap) rendering of QR codes, for callers who want a pixel buffer
//! instead of a vector format. Produces an in-memory [`image::RgbImage`];
//! writing it to a file or encoding it to a byte stream is the caller's job
//! (via `RgbImage::save` or `image::DynamicImage::write_to`).

use image::{Rgb, RgbImage};

use crate::error::{QrError, QrResult};
use crate::qrcode::QrCode;

/// Renders a QR code as an RGB raster image.
///
/// Each module is rendered as a `module_size`-by-`module_size` block of solid color, with a
/// quiet zone of `border` modules on each side filled with `light`. If `finder` is `Some`,
/// the three finder patterns (each a 7x7 block anchored at a corner) are painted in that
/// color instead of `dark`, so they stand out from the rest of the symbol.
///
/// Fails with `QrError::InvalidArgument` if `border` is negative or `module_size` is zero.
pub fn to_image(qr: &QrCode, border: i32, module_size: u32, dark: [u8; 3], light: [u8; 3],
		finder: Option<[u8; 3]>) -> QrResult<RgbImage> {
	if border < 0 {
		return Err(QrError::InvalidArgument(format!("border {border} must not be negative")));
	}
	if module_size == 0 {
		return Err(QrError::InvalidArgument("module_size must not be zero".to_string()));
	}

	let size = qr.size();
	let dim = (size + border * 2) as u32 * module_size;
	let mut img = RgbImage::new(dim, dim);

	for py in 0..dim {
		for px in 0..dim {
			let mx = (px / module_size) as i32 - border;
			let my = (py / module_size) as i32 - border;
			if !qr.get_module(mx, my) {
				img.put_pixel(px, py, Rgb(light));
				continue;
			}
			let color = match finder {
				Some(c) if is_in_finder_pattern(mx, my, size) => c,
				_ => dark,
			};
			img.put_pixel(px, py, Rgb(color));
		}
	}
	Ok(img)
}

// The three finder patterns sit in 7x7 blocks anchored at the top-left, top-right, and
// bottom-left corners (mirroring QrCode::draw_finder_pattern's centers at (3,3),
// (size-4,3), (3,size-4), each spanning a 9x9 neighborhood including the separator).
fn is_in_finder_pattern(x: i32, y: i32, size: i32) -> bool {
	let top_left = x < 8 && y < 8;
	let top_right = x >= size - 8 && y < 8;
	let bottom_left = x < 8 && y >= size - 8;
	top_left || top_right || bottom_left
}

/// Parses a hex color string of the form `#RRGGBB` into an RGB triple.
///
/// Fails with `QrError::InvalidArgument` if the string is missing its leading `#`,
/// is not exactly 6 hex digits long after it, or contains a non-hex digit.
pub fn parse_hex_color(s: &str) -> QrResult<[u8; 3]> {
	let Some(hex) = s.strip_prefix('#') else {
		return Err(QrError::InvalidArgument(format!("'{s}' is missing its leading '#'")));
	};
	if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err(QrError::InvalidArgument(format!("'{s}' is not a valid #RRGGBB color")));
	}
	let mut rgb = [0u8; 3];
	for (i, chunk) in rgb.iter_mut().enumerate() {
		*chunk = u8::from_str_radix(&hex[i*2 .. i*2+2], 16)
			.map_err(|_| QrError::InvalidArgument(format!("'{s}' is not a valid #RRGGBB color")))?;
	}
	Ok(rgb)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::QrCodeEcc;

	#[test]
	fn image_dimensions_match_module_count() {
		let qr = QrCode::encode_text("Raster", QrCodeEcc::Low).unwrap();
		let img = to_image(&qr, 4, 10, [0, 0, 0], [255, 255, 255], None).unwrap();
		let expected = (qr.size() + 8) as u32 * 10;
		assert_eq!(img.width(), expected);
		assert_eq!(img.height(), expected);
	}

	#[test]
	fn image_rejects_negative_border() {
		let qr = QrCode::encode_text("Raster", QrCodeEcc::Low).unwrap();
		assert!(matches!(to_image(&qr, -1, 10, [0, 0, 0], [255, 255, 255], None), Err(QrError::InvalidArgument(_))));
	}

	#[test]
	fn image_rejects_zero_module_size() {
		let qr = QrCode::encode_text("Raster", QrCodeEcc::Low).unwrap();
		assert!(matches!(to_image(&qr, 4, 0, [0, 0, 0], [255, 255, 255], None), Err(QrError::InvalidArgument(_))));
	}

	#[test]
	fn border_pixels_use_light_color() {
		let qr = QrCode::encode_text("Raster", QrCodeEcc::Low).unwrap();
		let img = to_image(&qr, 4, 1, [0, 0, 0], [255, 255, 255], None).unwrap();
		assert_eq!(*img.get_pixel(0, 0), Rgb([255, 255, 255]));
	}

	#[test]
	fn finder_patterns_use_highlight_color_when_given() {
		let qr = QrCode::encode_text("Raster", QrCodeEcc::Low).unwrap();
		let border = 4;
		let img = to_image(&qr, border, 1, [0, 0, 0], [255, 255, 255], Some([255, 0, 0])).unwrap();
		// Module (0, 0) is the top-left finder's outer ring, always dark.
		let px = border as u32;
		let py = border as u32;
		assert_eq!(*img.get_pixel(px, py), Rgb([255, 0, 0]));
	}

	#[test]
	fn parse_hex_color_accepts_hash_prefix() {
		assert_eq!(parse_hex_color("#FF8800").unwrap(), [0xFF, 0x88, 0x00]);
	}

	#[test]
	fn parse_hex_color_rejects_malformed_strings() {
		assert!(matches!(parse_hex_color("#ZZZZZZ"), Err(QrError::InvalidArgument(_))));
		assert!(matches!(parse_hex_color("123456"), Err(QrError::InvalidArgument(_))));
		assert!(matches!(parse_hex_color("#12345"), Err(QrError::InvalidArgument(_))));
	}
}
