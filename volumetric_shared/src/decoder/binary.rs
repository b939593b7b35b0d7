//!Binary STL parsing.

use super::{read_facet_count, COUNT_END, FACET_LEN};
use crate::error::DecodeError;
use crate::types::{Facet, Mesh, Vertex};
use itertools::Itertools;

/// Parse a binary STL buffer. The caller has already checked that the
/// buffer holds at least the header and the facet count.
pub(crate) fn parse(bytes: &[u8]) -> Result<Mesh, DecodeError> {
    let declared = read_facet_count(bytes);
    let needed = COUNT_END + FACET_LEN * declared as usize;

    if bytes.len() < needed {
        return Err(DecodeError::TruncatedFile {
            declared,
            available: bytes.len(),
        });
    }

    // Bytes past the declared records are tolerated and ignored.
    let facets = bytes[COUNT_END..needed]
        .chunks_exact(FACET_LEN)
        .map(read_facet)
        .collect();

    Ok(Mesh { name: None, facets })
}

/// Decode one 50 byte record: normal, three vertices, then a 2 byte
/// attribute count that is ignored.
fn read_facet(record: &[u8]) -> Facet {
    let (normal, v0, v1, v2) = record
        .chunks_exact(12)
        .map(read_triple)
        .next_tuple()
        .expect("Record holds four vector triples");

    Facet {
        normal,
        verts: [v0, v1, v2],
    }
}

/// Read three little-endian f32 values, widened to f64 so the later
/// summation does not accumulate single precision error.
fn read_triple(chunk: &[u8]) -> Vertex {
    let (x, y, z) = chunk
        .chunks_exact(4)
        .map(|word| {
            f64::from(f32::from_le_bytes(
                word.try_into().expect("Chunk is exactly 4 bytes"),
            ))
        })
        .next_tuple()
        .expect("Vector is exactly three floats");

    Vertex { x, y, z }
}
