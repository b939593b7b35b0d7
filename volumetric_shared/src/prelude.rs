pub use crate::decoder::{decode, detect_format, StlFormat};
pub use crate::error::{DecodeError, EstimatorErrors, VolumeError};
pub use crate::messages::Message;
pub use crate::utils::*;
pub use crate::warning::EstimatorWarnings;
pub use crate::{input, input::InputFile, types::*};
