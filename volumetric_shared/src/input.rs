use crate::error::EstimatorErrors;
use crate::types::LoadedFile;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

///One file to estimate, as supplied by the UI layer or command line
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputFile {
    ///Path to the STL file on disk
    pub file_path: String,
    ///Unit the file is authored in ("in" or "mm")
    pub units: String,
    ///Display label; derived from the path when absent
    #[serde(default)]
    pub name: Option<String>,
}

///Parse the command line input strings into input files
///
///With `simple_input` every string is a bare path and `default_units`
///applies to all of them; otherwise each string is an hjson object
///carrying its own path and units.
pub fn parse_inputs(
    input: Vec<String>,
    simple_input: bool,
    default_units: &str,
) -> Result<Vec<InputFile>, EstimatorErrors> {
    let inputs: Vec<InputFile> = if simple_input {
        input
            .into_iter()
            .map(|file_path| InputFile {
                file_path,
                units: default_units.to_string(),
                name: None,
            })
            .collect()
    } else {
        input
            .into_iter()
            .map(|value| deser_hjson::from_str(&value).map_err(|_| EstimatorErrors::InputMisformat))
            .collect::<Result<Vec<InputFile>, EstimatorErrors>>()?
    };

    let inputs_str =
        serde_json::to_string(&inputs).map_err(|_| EstimatorErrors::InputMisformat)?;
    debug!("Using inputs {}", inputs_str);

    Ok(inputs)
}

///Read every input file's bytes and attach display names
///
///This is the only place the estimator touches the filesystem; everything
///downstream works on the returned buffers.
pub fn load_files(inputs: Vec<InputFile>) -> Result<Vec<LoadedFile>, EstimatorErrors> {
    info!("Loading Input");

    inputs
        .into_iter()
        .map(|input| {
            debug!("Using input file: {:?}", input.file_path);

            let data = std::fs::read(&input.file_path).map_err(|_| {
                EstimatorErrors::FileNotFound {
                    filepath: input.file_path.clone(),
                }
            })?;

            let name = input
                .name
                .unwrap_or_else(|| display_name(&input.file_path));

            Ok(LoadedFile {
                name,
                units: input.units,
                data,
            })
        })
        .collect()
}

///Derive a display label from the final component of a path
pub fn display_name(filepath: &str) -> String {
    Path::new(filepath)
        .file_name()
        .map_or_else(|| filepath.to_string(), |name| name.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_input_takes_bare_paths() {
        let inputs = parse_inputs(
            vec!["a.stl".to_string(), "dir/b.stl".to_string()],
            true,
            "mm",
        )
        .expect("Bare paths always parse");

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].file_path, "a.stl");
        assert_eq!(inputs[0].units, "mm");
        assert_eq!(inputs[1].file_path, "dir/b.stl");
    }

    #[test]
    fn hjson_input_carries_per_file_units() {
        let inputs = parse_inputs(
            vec![
                "{\"file_path\": \"a.stl\", \"units\": \"in\"}".to_string(),
                "{file_path: \"b.stl\", units: \"mm\", name: \"part b\"}".to_string(),
            ],
            false,
            "in",
        )
        .expect("Specs are valid hjson");

        assert_eq!(inputs[0].units, "in");
        assert_eq!(inputs[0].name, None);
        assert_eq!(inputs[1].units, "mm");
        assert_eq!(inputs[1].name.as_deref(), Some("part b"));
    }

    #[test]
    fn bad_hjson_is_a_misformat() {
        assert_eq!(
            parse_inputs(vec!["{file_path:".to_string()], false, "in"),
            Err(EstimatorErrors::InputMisformat)
        );
    }

    #[test]
    fn display_name_is_the_final_path_component() {
        assert_eq!(display_name("/home/user/parts/bracket.stl"), "bracket.stl");
        assert_eq!(display_name("bracket.stl"), "bracket.stl");
    }

    #[test]
    fn missing_file_reports_its_path() {
        let inputs = vec![InputFile {
            file_path: "/definitely/not/here.stl".to_string(),
            units: "in".to_string(),
            name: None,
        }];

        assert_eq!(
            load_files(inputs),
            Err(EstimatorErrors::FileNotFound {
                filepath: "/definitely/not/here.stl".to_string()
            })
        );
    }
}
