#![deny(clippy::unwrap_used)]
#![warn(clippy::all, clippy::perf, clippy::missing_const_for_fn)]
#![deny(missing_docs)]
//!Crate for types shared between the volume estimator core and external applications like GUI front ends

/// Error types
pub mod error;

/// Decode STL byte buffers into meshes
pub mod decoder;

/// Common shared types
pub mod types;

/// Messages for IPC
pub mod messages;

/// Warning Types
pub mod warning;

/// Utilities Functions
pub mod utils;

/// Handles input
pub mod input;

/// the standard imports for the shared crate
pub mod prelude;
