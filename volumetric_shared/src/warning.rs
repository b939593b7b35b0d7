use serde::{Deserialize, Serialize};

///A warning the estimator wants surfaced to the user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EstimatorWarnings {
    ///A computed volume outside the expected print-size range,
    ///usually the sign of a wrong unit selection
    SuspectVolume {
        ///Display label of the affected file
        name: String,
        ///The rounded volume in cubic inches
        volume: f64,
    },
}

impl EstimatorWarnings {
    ///Return the warning code and user message for this warning
    pub fn get_code_and_message(&self) -> (u32, String) {
        match self {
            EstimatorWarnings::SuspectVolume { name, volume } => (
                0x8000,
                format!("{name} came out to {volume:.3} in^3. Your units may be wrong."),
            ),
        }
    }
}
