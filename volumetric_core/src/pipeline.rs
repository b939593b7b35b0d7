use std::time::SystemTime;

use log::*;
use rayon::prelude::*;
use volumetric_shared::prelude::*;

use crate::volume::compute_request;

pub trait PipelineCallbacks {
    fn handle_state_update(&mut self, state_message: &str);
    fn handle_volumes(&mut self, _results: &[Result<VolumeResult, EstimatorErrors>]) {}
}

pub struct ProfilingCallbacks {
    last_time: SystemTime,
}

impl ProfilingCallbacks {
    pub fn new() -> Self {
        ProfilingCallbacks {
            last_time: SystemTime::now(),
        }
    }
}

impl Default for ProfilingCallbacks {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineCallbacks for ProfilingCallbacks {
    fn handle_state_update(&mut self, state_message: &str) {
        let time = SystemTime::now();
        let elapsed = time
            .duration_since(self.last_time)
            .expect("Time can only go forward");
        self.last_time = time;
        info!("{}\t{}", state_message, elapsed.as_millis());
    }

    fn handle_volumes(&mut self, results: &[Result<VolumeResult, EstimatorErrors>]) {
        for result in results {
            match result {
                Ok(volume) => info!("{} - {:.3} in^3", volume.name, volume.volume),
                Err(error) => show_error_message(error),
            }
        }
        for warning in suspect_warnings(results) {
            show_warning_message(&warning);
        }
    }
}

/// Decode every file and compute its volume, one outcome per input, in
/// input order.
///
/// Failures stay per item. A file that fails to decode reports its own
/// error and never blocks its siblings. Items share no state, so the
/// batch runs on the rayon pool.
pub fn volume_pipeline(
    files: &[LoadedFile],
    callbacks: &mut impl PipelineCallbacks,
) -> Vec<Result<VolumeResult, EstimatorErrors>> {
    callbacks.handle_state_update("Computing Volumes");
    debug!("Estimating {} files", files.len());

    let results: Vec<Result<VolumeResult, EstimatorErrors>> =
        files.par_iter().map(estimate_file).collect();

    callbacks.handle_state_update("Reporting Volumes");
    callbacks.handle_volumes(&results);

    results
}

/// The units warning for every implausible volume in a batch, in batch
/// order. Failed items carry their own error and produce no warning.
pub fn suspect_warnings(
    results: &[Result<VolumeResult, EstimatorErrors>],
) -> Vec<EstimatorWarnings> {
    results
        .iter()
        .filter_map(|result| result.as_ref().ok())
        .filter(|volume| !volume.plausible)
        .map(|volume| EstimatorWarnings::SuspectVolume {
            name: volume.name.clone(),
            volume: volume.volume,
        })
        .collect()
}

/// Decode one loaded buffer and compute its volume
pub fn estimate_file(file: &LoadedFile) -> Result<VolumeResult, EstimatorErrors> {
    let mesh = decode(&file.data)?;

    let request = VolumeRequest {
        mesh,
        units: file.units.clone(),
        name: file.name.clone(),
    };

    Ok(compute_request(&request)?)
}
