use crate::error::EstimatorErrors;
use crate::types::VolumeResult;
use crate::warning::EstimatorWarnings;
use serde::{Deserialize, Serialize};

///A message sent over stdout to a separate GUI process
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Message {
    ///Progress update while a batch is running
    StateUpdate(String),
    ///A fatal error report
    Error(EstimatorErrors),
    ///An advisory warning report
    Warning(EstimatorWarnings),
    ///Per-file outcomes, in submission order
    Volumes(Vec<Result<VolumeResult, EstimatorErrors>>),
}
