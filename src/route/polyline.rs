//! Decoder for the compact encoded polyline format used by routing services.
//!
//! The format stores lat/lon deltas, zig-zag encoded and split into 5-bit
//! groups offset by 63 into printable ASCII, with bit 0x20 marking that more
//! groups follow. OSRM emits it with five decimal digits of precision.

use super::error::PolylineFormatError;
use super::structs::Coordinate;

/// Decimal digits of coordinate precision OSRM encodes with.
pub const DEFAULT_PRECISION: u32 = 5;

/// Longest codeword we accept: 13 groups cover a full 64-bit value, so
/// anything beyond that cannot be a legitimate delta.
const MAX_GROUPS: u32 = 13;

/// Decodes an encoded polyline into coordinates.
///
/// Decoding is a single pass with running lat/lon totals; every emitted point
/// consumes two deltas (latitude first, then longitude).
///
/// # Errors
///
/// Fails when the string ends in the middle of a codeword, or contains a
/// character outside the encoding alphabet.
pub fn decode_polyline(
    encoded: &str,
    precision: u32,
) -> Result<Vec<Coordinate>, PolylineFormatError> {
    let factor = 10f64.powi(precision as i32);
    let bytes = encoded.as_bytes();
    let mut coordinates = Vec::new();
    let mut index = 0usize;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    while index < bytes.len() {
        lat += read_delta(bytes, &mut index)?;
        lon += read_delta(bytes, &mut index)?;
        coordinates.push(Coordinate {
            lat: lat as f64 / factor,
            lon: lon as f64 / factor,
        });
    }

    Ok(coordinates)
}

/// Reads one variable-length zig-zag delta starting at `*index`.
fn read_delta(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineFormatError> {
    let start = *index;
    let mut result: u64 = 0;
    let mut shift = 0u32;

    loop {
        let Some(&raw) = bytes.get(*index) else {
            return Err(PolylineFormatError::UnexpectedEnd);
        };
        if !(63..=126).contains(&raw) {
            return Err(PolylineFormatError::InvalidCharacter {
                character: raw as char,
                index: *index,
            });
        }
        if shift >= MAX_GROUPS * 5 {
            return Err(PolylineFormatError::OverlongCodeword { index: start });
        }
        *index += 1;

        let value = u64::from(raw - 63);
        result |= (value & 0x1f) << shift;
        shift += 5;

        if value & 0x20 == 0 {
            break;
        }
    }

    // Un-zigzag: the low bit carries the sign.
    let result = result as i64;
    Ok(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}
