pub use crate::pipeline::{
    estimate_file, suspect_warnings, volume_pipeline, PipelineCallbacks, ProfilingCallbacks,
};
pub use crate::volume::{
    compute_request, compute_volume, signed_volume, MM3_TO_IN3, PLAUSIBLE_MAX_VOLUME,
    PLAUSIBLE_MIN_VOLUME,
};
