// Property-based tests driving the universally-quantified invariants of the
// public API: the size formula, out-of-bounds module reads, BitBuffer growth,
// and determinism of automatic mask selection.

use proptest::prelude::*;

use qrcodec::{BitBuffer, QrCode, QrCodeEcc};

proptest! {
	#[test]
	fn size_equals_four_times_version_plus_seventeen(v in 1u8..=40) {
		let segs = qrcodec::QrSegment::make_segments("x");
		let qr = QrCode::encode_segments_advanced(&segs, QrCodeEcc::Low, v, v, None, false);
		if let Ok(qr) = qr {
			prop_assert_eq!(qr.size(), i32::from(v) * 4 + 17);
			prop_assert_eq!(qr.version().value(), v);
		}
	}

	#[test]
	fn get_module_out_of_bounds_is_always_light(
		text in "[ -~]{0,40}",
		dx in -50i32..50,
		dy in -50i32..50,
	) {
		let qr = QrCode::encode_text(&text, QrCodeEcc::Low).unwrap();
		let size = qr.size();
		if dx < 0 || dx >= size || dy < 0 || dy >= size {
			prop_assert!(!qr.get_module(dx, dy));
		}
	}

	#[test]
	fn append_bits_grows_by_exactly_the_bit_length(len in 0u8..=16) {
		let val: u32 = if len == 0 { 0 } else { 1u32 << (len - 1) };
		let mut bb = BitBuffer(Vec::new());
		let before = bb.0.len();
		bb.append_bits(val, len).unwrap();
		prop_assert_eq!(bb.0.len(), before + usize::from(len));
	}

	#[test]
	fn encoding_printable_ascii_never_panics(text in "[ -~]{0,200}") {
		let result = QrCode::encode_text(&text, QrCodeEcc::Low);
		prop_assert!(result.is_ok() || matches!(result, Err(qrcodec::QrError::DataTooLong(_))));
	}

	#[test]
	fn auto_mask_selection_is_deterministic(text in "[ -~]{1,60}") {
		let a = QrCode::encode_text(&text, QrCodeEcc::Medium).unwrap();
		let b = QrCode::encode_text(&text, QrCodeEcc::Medium).unwrap();
		prop_assert_eq!(a.mask(), b.mask());
		for y in 0..a.size() {
			for x in 0..a.size() {
				prop_assert_eq!(a.get_module(x, y), b.get_module(x, y));
			}
		}
	}
}

#[test]
fn every_forced_mask_round_trips_through_get_module() {
	let segs = qrcodec::QrSegment::make_segments("Mask sweep");
	for m in 0u8..8 {
		let qr = QrCode::encode_segments_advanced(&segs, QrCodeEcc::Low, 1, 40, Some(m), true).unwrap();
		assert_eq!(qr.mask().value(), m);
		assert!(qr.get_module(0, 0));
	}
}
