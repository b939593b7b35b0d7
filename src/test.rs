#[cfg(test)]
mod tests {

    use volumetric_core::prelude::*;
    use volumetric_shared::prelude::*;

    // Unit cube with outward winding, one corner at the origin.
    const CUBE_TRIS: [[[f32; 3]; 3]; 12] = [
        [[0., 0., 0.], [0., 1., 0.], [1., 1., 0.]],
        [[0., 0., 0.], [1., 1., 0.], [1., 0., 0.]],
        [[0., 0., 1.], [1., 0., 1.], [1., 1., 1.]],
        [[0., 0., 1.], [1., 1., 1.], [0., 1., 1.]],
        [[0., 0., 0.], [1., 0., 0.], [1., 0., 1.]],
        [[0., 0., 0.], [1., 0., 1.], [0., 0., 1.]],
        [[1., 1., 0.], [0., 1., 0.], [0., 1., 1.]],
        [[1., 1., 0.], [0., 1., 1.], [1., 1., 1.]],
        [[0., 0., 0.], [0., 0., 1.], [0., 1., 1.]],
        [[0., 0., 0.], [0., 1., 1.], [0., 1., 0.]],
        [[1., 0., 0.], [1., 1., 0.], [1., 1., 1.]],
        [[1., 0., 0.], [1., 1., 1.], [1., 0., 1.]],
    ];

    fn binary_cube(side: f32) -> Vec<u8> {
        let mut bytes = vec![0_u8; 80];
        bytes.extend_from_slice(&(CUBE_TRIS.len() as u32).to_le_bytes());

        for tri in &CUBE_TRIS {
            for value in [0.0_f32, 0.0, 0.0] {
                bytes.extend_from_slice(&value.to_le_bytes());
            }
            for vert in tri {
                for value in vert {
                    bytes.extend_from_slice(&(value * side).to_le_bytes());
                }
            }
            bytes.extend_from_slice(&[0, 0]);
        }

        bytes
    }

    fn loaded(name: &str, units: &str, data: Vec<u8>) -> LoadedFile {
        LoadedFile {
            name: name.to_string(),
            units: units.to_string(),
            data,
        }
    }

    #[test]
    fn binary_cube_end_to_end() {
        let files = vec![
            loaded("cube_in.stl", "in", binary_cube(1.0)),
            loaded("cube_mm.stl", "mm", binary_cube(1.0)),
        ];

        let results = volume_pipeline(&files, &mut ProfilingCallbacks::new());

        let inches = results[0].as_ref().expect("Cube decodes and computes");
        assert!((inches.volume - 1.000).abs() < 1e-6);
        assert!(inches.plausible);

        // The same geometry read as millimeters rounds away to nothing
        // and trips the units warning.
        let millimeters = results[1].as_ref().expect("Cube decodes and computes");
        assert_eq!(millimeters.volume, 0.000);
        assert!(!millimeters.plausible);
    }

    #[test]
    fn malformed_file_in_a_batch_is_isolated() {
        let files = vec![
            loaded("first.stl", "in", binary_cube(2.0)),
            loaded("second.stl", "in", b"garbage".to_vec()),
            loaded("third.stl", "in", binary_cube(3.0)),
        ];

        let results = volume_pipeline(&files, &mut ProfilingCallbacks::new());

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().expect("First file is valid").volume,
            8.000
        );
        assert!(matches!(
            results[1],
            Err(EstimatorErrors::Decode(DecodeError::MalformedFile { .. }))
        ));
        assert_eq!(
            results[2].as_ref().expect("Third file is valid").volume,
            27.000
        );
    }

    #[test]
    fn truncated_file_reports_truncation() {
        let mut bytes = binary_cube(1.0);
        bytes.truncate(bytes.len() - 50);

        let results = volume_pipeline(
            &[loaded("cut.stl", "in", bytes)],
            &mut ProfilingCallbacks::new(),
        );

        assert_eq!(
            results[0],
            Err(EstimatorErrors::Decode(DecodeError::TruncatedFile {
                declared: 12,
                available: 84 + 50 * 11,
            }))
        );
    }

    #[test]
    fn suspect_volumes_emit_warning_messages() {
        // A cube authored in millimeters but read as such rounds to
        // nothing, so message mode must carry the units warning.
        let results = volume_pipeline(
            &[loaded("cube_mm.stl", "mm", binary_cube(1.0))],
            &mut ProfilingCallbacks::new(),
        );

        let warnings = suspect_warnings(&results);
        assert_eq!(
            warnings,
            vec![EstimatorWarnings::SuspectVolume {
                name: "cube_mm.stl".to_string(),
                volume: 0.000,
            }]
        );

        let message = Message::Warning(warnings[0].clone());
        let bytes = bincode::serialize(&message).expect("Message serializes");
        let decoded: Message = bincode::deserialize(&bytes).expect("Message deserializes");
        assert_eq!(decoded, message);
    }

    #[test]
    fn volume_messages_round_trip_through_bincode() {
        let results = volume_pipeline(
            &[
                loaded("cube.stl", "in", binary_cube(2.0)),
                loaded("bad.stl", "in", b"garbage".to_vec()),
            ],
            &mut ProfilingCallbacks::new(),
        );

        let message = Message::Volumes(results);
        let bytes = bincode::serialize(&message).expect("Message serializes");
        let decoded: Message = bincode::deserialize(&bytes).expect("Message deserializes");

        assert_eq!(decoded, message);
    }
}
