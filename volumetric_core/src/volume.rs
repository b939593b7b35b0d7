//!Signed volume of a triangulated surface via the divergence theorem.

use nalgebra::Matrix3;
use volumetric_shared::error::VolumeError;
use volumetric_shared::types::{Mesh, Unit, VolumeRequest, VolumeResult};

/// Cubic millimeters to cubic inches
pub const MM3_TO_IN3: f64 = 0.000_061_023_7;

/// Smallest rounded volume, in cubic inches, that does not look like a
/// unit mistake. Tuned for 3D printer build volumes.
pub const PLAUSIBLE_MIN_VOLUME: f64 = 1.0;

/// Largest rounded volume, in cubic inches, that does not look like a
/// unit mistake
pub const PLAUSIBLE_MAX_VOLUME: f64 = 50.0;

/// Signed enclosed volume of the mesh, in its native cubic unit.
///
/// Each facet contributes the signed volume of the tetrahedron it forms
/// with the origin, `det([v0; v1; v2]) / 6`, summed in facet order. The
/// sum equals the enclosed volume only for a closed surface with
/// consistent outward winding; neither is checked. Inverted winding comes
/// out negative and is passed through uncorrected.
pub fn signed_volume(mesh: &Mesh) -> f64 {
    mesh.facets
        .iter()
        .map(|facet| {
            let [v0, v1, v2] = facet.verts;
            Matrix3::from_rows(&[
                v0.to_vector().transpose(),
                v1.to_vector().transpose(),
                v2.to_vector().transpose(),
            ])
            .determinant()
                / 6.0
        })
        .sum()
}

/// Compute the displayed result for one mesh.
///
/// The volume is converted to cubic inches, rounded to 3 decimal places
/// (halves away from zero, `f64::round` semantics), then flagged as
/// implausible when it falls strictly outside
/// [`PLAUSIBLE_MIN_VOLUME`, `PLAUSIBLE_MAX_VOLUME`].
pub fn compute_volume(mesh: &Mesh, units: &str, name: &str) -> Result<VolumeResult, VolumeError> {
    let unit: Unit = units.parse()?;

    let mut volume = signed_volume(mesh);
    if unit == Unit::Millimeter {
        volume *= MM3_TO_IN3;
    }

    let volume = round_to_thousandths(volume);
    let plausible = (PLAUSIBLE_MIN_VOLUME..=PLAUSIBLE_MAX_VOLUME).contains(&volume);

    Ok(VolumeResult {
        name: name.to_string(),
        volume,
        plausible,
    })
}

/// Compute the displayed result for a prepared request
pub fn compute_request(request: &VolumeRequest) -> Result<VolumeResult, VolumeError> {
    compute_volume(&request.mesh, &request.units, &request.name)
}

fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
