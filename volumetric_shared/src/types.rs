use crate::error::VolumeError;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///A single vertex position in the mesh's native coordinate frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// The X axis coordinate
    pub x: f64,
    /// The Y axis coordinate
    pub y: f64,
    /// The Z axis coordinate
    pub z: f64,
}

impl Vertex {
    ///Create a new vertex from its coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vertex { x, y, z }
    }

    ///This vertex as a nalgebra vector
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

///A single triangle of the mesh surface
///
///The normal is whatever the file encoded. It is carried along but never
///trusted; the volume integral uses vertex winding alone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    /// Outward normal as encoded in the file
    pub normal: Vertex,
    /// The three corner vertices, in file winding order
    pub verts: [Vertex; 3],
}

///An ordered collection of facets decoded from one file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Solid name from a text STL header, if one was present
    pub name: Option<String>,
    /// All facets, in file order
    pub facets: Vec<Facet>,
}

///Linear unit a source file is authored in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// Inches, the canonical display unit
    Inch,
    /// Millimeters, converted to inches for display
    Millimeter,
}

impl FromStr for Unit {
    type Err = VolumeError;

    fn from_str(s: &str) -> Result<Self, VolumeError> {
        match s {
            "in" | "inch" => Ok(Unit::Inch),
            "mm" | "millimeter" => Ok(Unit::Millimeter),
            _ => Err(VolumeError::UnknownUnit {
                units: s.to_string(),
            }),
        }
    }
}

///A decoded mesh paired with the unit selection and label for one file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VolumeRequest {
    /// The decoded mesh to integrate over
    pub mesh: Mesh,
    /// Unit string as supplied by the UI layer
    pub units: String,
    /// Display label for the result
    pub name: String,
}

///The computed volume for one file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VolumeResult {
    /// Display label, as supplied with the request
    pub name: String,
    /// Volume in cubic inches, rounded to 3 decimal places
    pub volume: f64,
    /// False when the volume falls outside the expected print-size range
    pub plausible: bool,
}

///Raw bytes of one input file together with its unit selection and label
///
///The host reads the file; the core only ever sees this buffer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadedFile {
    /// Display label, derived from the file path
    pub name: String,
    /// Unit string as supplied by the UI layer
    pub units: String,
    /// The file contents
    pub data: Vec<u8>,
}
