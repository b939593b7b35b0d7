use serde::{Deserialize, Serialize};

///An error produced while decoding an STL byte buffer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeError {
    ///The buffer matches neither the binary nor the text STL grammar
    MalformedFile {
        ///Index of the facet being parsed when the mismatch was found,
        ///or 0 when the buffer matched neither format at all
        facet_index: usize,
    },
    ///A binary facet count that promises more bytes than the buffer holds
    TruncatedFile {
        ///Facet count declared at byte offset 80
        declared: u32,
        ///Bytes actually available in the buffer
        available: usize,
    },
}

impl DecodeError {
    ///Return the error code and user message for this error
    pub fn get_code_and_message(&self) -> (u32, String) {
        match self {
            DecodeError::MalformedFile { facet_index } => (
                0x2000,
                format!(
                    "The file does not match the binary or text STL format. Parsing failed at facet {facet_index}."
                ),
            ),
            DecodeError::TruncatedFile {
                declared,
                available,
            } => (
                0x2001,
                format!(
                    "The binary STL file declares {declared} facets but only {available} bytes are present. The file appears to be cut off."
                ),
            ),
        }
    }
}

///An error produced while computing a volume
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeError {
    ///A unit selector outside the supported set
    UnknownUnit {
        ///The unsupported unit string as received
        units: String,
    },
}

impl VolumeError {
    ///Return the error code and user message for this error
    pub fn get_code_and_message(&self) -> (u32, String) {
        match self {
            VolumeError::UnknownUnit { units } => (
                0x3000,
                format!("The unit \"{units}\" is not supported. Use \"in\" or \"mm\"."),
            ),
        }
    }
}

///A top level error from anywhere in the estimator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimatorErrors {
    ///An input file could not be found or read
    FileNotFound {
        ///The path that could not be opened
        filepath: String,
    },
    ///An input specification string could not be understood
    InputMisformat,
    ///Decoding an STL buffer failed
    Decode(DecodeError),
    ///Computing a volume failed
    Volume(VolumeError),
}

impl EstimatorErrors {
    ///Return the error code and user message for this error
    pub fn get_code_and_message(&self) -> (u32, String) {
        match self {
            EstimatorErrors::FileNotFound { filepath } => (
                0x1000,
                format!("The file {filepath} could not be found or read."),
            ),
            EstimatorErrors::InputMisformat => (
                0x1001,
                "The input specification is incorrectly formatted.".to_string(),
            ),
            EstimatorErrors::Decode(error) => error.get_code_and_message(),
            EstimatorErrors::Volume(error) => error.get_code_and_message(),
        }
    }
}

impl From<DecodeError> for EstimatorErrors {
    fn from(error: DecodeError) -> Self {
        EstimatorErrors::Decode(error)
    }
}

impl From<VolumeError> for EstimatorErrors {
    fn from(error: VolumeError) -> Self {
        EstimatorErrors::Volume(error)
    }
}
