/*
 * QR Code generator library (Rust)
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * Copyright (c) Abdulrhman Alkhodiry (aalkhodiry@gmail.com)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! The closed error taxonomy returned by this crate's fallible entry points.

use std::fmt;

/// The single error type returned by every fallible operation in this crate.
///
/// This is a closed taxonomy: callers match on it rather than extend it. `InternalInvariant`
/// is reserved for the rare case where a check that is normally a `debug_assert!` sits directly
/// behind a public entry point; it is never produced by a code path reachable purely from
/// caller-supplied data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrError {
	/// Version/mask out of range, malformed characters for the declared segment mode,
	/// an out-of-range ECI assignment value, a negative render border, or a malformed
	/// hex color string.
	InvalidArgument(String),
	/// No version in the requested range can hold the given segments at the requested ECC level.
	DataTooLong(DataTooLong),
	/// `BitBuffer::append_bits` misuse, or a Reed-Solomon divisor degree of 0.
	ValueOutOfRange(String),
	/// A bug in this crate's own bookkeeping, not caller-triggerable.
	InternalInvariant(String),
}

impl fmt::Display for QrError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::InvalidArgument(msg)  => write!(f, "invalid argument: {msg}"),
			Self::DataTooLong(e)        => write!(f, "{e}"),
			Self::ValueOutOfRange(msg)  => write!(f, "value out of range: {msg}"),
			Self::InternalInvariant(msg) => write!(f, "internal invariant violated: {msg}"),
		}
	}
}

impl std::error::Error for QrError {}

impl From<DataTooLong> for QrError {
	fn from(e: DataTooLong) -> Self {
		Self::DataTooLong(e)
	}
}

/// The reason that no QR Code version could hold the supplied segments.
///
/// Ways to handle this exception include:
///
/// - Decrease the error correction level if it was greater than `QrCodeEcc::Low`.
/// - If `encode_segments_advanced` was called, increase the `max_version` argument if it was
///   less than `Version::MAX`. (This advice does not apply to the other factory functions
///   because they search all versions up to `Version::MAX`.)
/// - Split the text data into better or optimal segments in order to reduce the number of bits
///   required.
/// - Change the text or binary data to be shorter.
/// - Change the text to fit the character set of a particular segment mode (e.g. alphanumeric).
/// - Propagate the error upward to the caller/user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataTooLong {
	/// A segment's character count does not fit its length field at any version in range.
	SegmentTooLong,
	/// The total bit length (data length, max capacity in bits) exceeds capacity at `max_version`.
	DataOverCapacity(usize, usize),
}

impl std::error::Error for DataTooLong {}

impl fmt::Display for DataTooLong {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Self::SegmentTooLong => write!(f, "segment too long"),
			Self::DataOverCapacity(datalen, maxcapacity) =>
				write!(f, "data length = {datalen} bits, max capacity = {maxcapacity} bits"),
		}
	}
}

pub(crate) type QrResult<T> = Result<T, QrError>;
