/*
 * QR Code generator library (Rust)
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * Copyright (c) Abdulrhman Alkhodiry (aalkhodiry@gmail.com)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Static per-(version, error-correction-level) capacity tables.

use crate::types::{QrCodeEcc, Version};

/// Returns the number of data bits that can be stored in a QR Code of the given version
/// number, after all function modules are excluded. This includes remainder bits, so it
/// might not be a multiple of 8. The result is in the range [208, 29648].
pub(crate) fn get_num_raw_data_modules(ver: Version) -> usize {
	let ver = usize::from(ver.value());
	let mut result: usize = (16 * ver + 128) * ver + 64;
	if ver >= 2 {
		let numalign: usize = ver / 7 + 2;
		result -= (25 * numalign - 10) * numalign - 55;
		if ver >= 7 {
			result -= 36;
		}
	}
	debug_assert!((208 ..= 29648).contains(&result));
	result
}

/// Returns the number of 8-bit data (not error correction) codewords contained in any
/// QR Code of the given version number and error correction level, with remainder bits discarded.
pub(crate) fn get_num_data_codewords(ver: Version, ecl: QrCodeEcc) -> usize {
	get_num_raw_data_modules(ver) / 8
		- table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl) * table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl)
}

pub(crate) fn ecc_codewords_per_block(ver: Version, ecl: QrCodeEcc) -> usize {
	table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl)
}

pub(crate) fn num_error_correction_blocks(ver: Version, ecl: QrCodeEcc) -> usize {
	table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl)
}

fn table_get(table: &'static [[i8; 41]; 4], ver: Version, ecl: QrCodeEcc) -> usize {
	table[ecl.ordinal()][usize::from(ver.value())] as usize
}

// For each error correction level and version, the number of error correction codewords
// per block. Entry at [_][0] is an illegal sentinel and must never be read.
static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
	[-1,  7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28, 30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
	[-1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28],
	[-1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30, 30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
	[-1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
];

// For each error correction level and version, the number of blocks the data/ecc
// codewords are split into. Entry at [_][0] is an illegal sentinel and must never be read.
static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
	[-1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4,  4,  4,  4,  4,  6,  6,  6,  6,  7,  8,  8,  9,  9, 10, 12, 12, 12, 13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25],
	[-1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5,  5,  8,  9,  9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21, 23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49],
	[-1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8,  8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68],
	[-1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32, 35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81],
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn raw_data_modules_in_range_for_all_versions() {
		for v in 1u8 ..= 40 {
			let n = get_num_raw_data_modules(Version::new_unchecked(v));
			assert!((208 ..= 29648).contains(&n));
		}
	}

	#[test]
	fn data_codewords_positive_for_all_version_ecl_pairs() {
		for v in 1u8 ..= 40 {
			for &ecl in &[QrCodeEcc::Low, QrCodeEcc::Medium, QrCodeEcc::Quartile, QrCodeEcc::High] {
				let ver = Version::new_unchecked(v);
				let data_cw = get_num_data_codewords(ver, ecl);
				assert!(data_cw > 0, "version {v} ecl {ecl:?}");
				let raw_cw = get_num_raw_data_modules(ver) / 8;
				let blocks = num_error_correction_blocks(ver, ecl);
				let ecc_per_block = ecc_codewords_per_block(ver, ecl);
				assert_eq!(raw_cw, data_cw + blocks * ecc_per_block);
			}
		}
	}
}
