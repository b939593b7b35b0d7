//!STL decoding.
//!
//!A buffer is classified as binary or text STL up front, then handed to the
//!matching parser. Nothing here touches the filesystem; the host supplies
//!the bytes.

use crate::error::DecodeError;
use crate::types::Mesh;

mod binary;
mod text;

/// Byte length of the binary STL header
const HEADER_LEN: usize = 80;
/// Header plus the 4 byte little-endian facet count
const COUNT_END: usize = HEADER_LEN + 4;
/// Byte length of one binary facet record
const FACET_LEN: usize = 50;

///The two on-disk STL encodings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StlFormat {
    ///80 byte header, facet count, then fixed 50 byte facet records
    Binary,
    ///`solid ... facet normal ... endsolid` keyword blocks
    Text,
}

///Classify a buffer as binary or text STL without parsing it
///
///A buffer whose length is exactly `84 + 50 * N` for the count `N` declared
///at offset 80 is binary, even if it happens to start with `solid`.
///Otherwise a leading `solid` token means text. Anything else long enough
///to hold a binary header with a nonzero declared count is treated as
///binary so the parser can report a truncated facet count precisely.
pub fn detect_format(bytes: &[u8]) -> Result<StlFormat, DecodeError> {
    if bytes.len() >= COUNT_END {
        let declared = read_facet_count(bytes);
        if bytes.len() == COUNT_END + FACET_LEN * declared as usize {
            return Ok(StlFormat::Binary);
        }

        if starts_with_solid(bytes) {
            return Ok(StlFormat::Text);
        }

        // A zero count whose length does not match exactly is
        // indistinguishable from noise. Any other count goes to the binary
        // parser, which reports a short buffer as truncation.
        if declared > 0 {
            return Ok(StlFormat::Binary);
        }

        return Err(DecodeError::MalformedFile { facet_index: 0 });
    }

    if starts_with_solid(bytes) {
        return Ok(StlFormat::Text);
    }

    Err(DecodeError::MalformedFile { facet_index: 0 })
}

///Decode a byte buffer holding either binary or text STL into a mesh
pub fn decode(bytes: &[u8]) -> Result<Mesh, DecodeError> {
    match detect_format(bytes)? {
        StlFormat::Binary => binary::parse(bytes),
        StlFormat::Text => text::parse(bytes),
    }
}

fn read_facet_count(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(
        bytes[HEADER_LEN..COUNT_END]
            .try_into()
            .expect("Slice is exactly 4 bytes"),
    )
}

fn starts_with_solid(bytes: &[u8]) -> bool {
    let trimmed = bytes.trim_ascii_start();
    trimmed.starts_with(b"solid") && trimmed.get(5).is_none_or(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_buffer(declared: u32, records: usize) -> Vec<u8> {
        let mut bytes = vec![0_u8; HEADER_LEN];
        bytes.extend_from_slice(&declared.to_le_bytes());
        bytes.extend(std::iter::repeat(0_u8).take(FACET_LEN * records));
        bytes
    }

    #[test]
    fn exact_length_buffer_is_binary() {
        assert_eq!(
            detect_format(&binary_buffer(3, 3)),
            Ok(StlFormat::Binary)
        );
        assert_eq!(
            detect_format(&binary_buffer(0, 0)),
            Ok(StlFormat::Binary)
        );
    }

    #[test]
    fn solid_prefix_is_text() {
        assert_eq!(
            detect_format(b"solid cube\nendsolid cube\n"),
            Ok(StlFormat::Text)
        );
        assert_eq!(
            detect_format(b"  \n\tsolid\nendsolid\n"),
            Ok(StlFormat::Text)
        );
    }

    #[test]
    fn solid_must_be_a_whole_token() {
        assert!(detect_format(b"solidarity forever").is_err());
    }

    #[test]
    fn exact_binary_length_wins_over_solid_prefix() {
        // A binary file whose junk header happens to begin with "solid "
        let mut bytes = binary_buffer(0, 0);
        bytes[..6].copy_from_slice(b"solid ");
        assert_eq!(detect_format(&bytes), Ok(StlFormat::Binary));
    }

    #[test]
    fn mismatched_length_without_solid_is_still_binary() {
        // One record short of the declared count; the binary parser owns
        // the truncation report.
        assert_eq!(
            detect_format(&binary_buffer(2, 1)),
            Ok(StlFormat::Binary)
        );
    }

    #[test]
    fn zero_count_with_trailing_junk_is_malformed() {
        // 100 zero bytes decode to a zero facet count with 16 bytes left
        // over; that is noise, not an empty mesh.
        assert_eq!(
            detect_format(&vec![0_u8; 100]),
            Err(DecodeError::MalformedFile { facet_index: 0 })
        );

        let mut bytes = binary_buffer(0, 0);
        bytes.extend_from_slice(b"junk");
        assert_eq!(
            detect_format(&bytes),
            Err(DecodeError::MalformedFile { facet_index: 0 })
        );
    }

    #[test]
    fn short_junk_is_malformed() {
        assert_eq!(
            detect_format(b"not an stl file"),
            Err(DecodeError::MalformedFile { facet_index: 0 })
        );
        assert_eq!(
            detect_format(b""),
            Err(DecodeError::MalformedFile { facet_index: 0 })
        );
    }
}
