//! # landolt
//!
//! Adaptive staircase core for Landolt-C visual acuity self-tests.
//!
//! A session presents a ring with a directional gap (a Landolt-C optotype)
//! at a size that adapts to the viewer's responses using a 3-down/1-up
//! staircase: three consecutive correct answers shrink the stimulus, one
//! incorrect answer grows it. At the end of a fixed trial budget the
//! reversal history is reduced to a single threshold estimate.
//!
//! This crate owns the trial sequencing, step logic, and threshold
//! estimation. Rendering the ring, collecting input, and screen navigation
//! belong to the driving application: it asks the controller for a size and
//! gap direction, presents the stimulus, and reports the viewer's answer
//! back.
//!
//! ## Quick Start
//!
//! ```
//! use landolt::{Progress, StaircaseConfig, StaircaseController};
//!
//! let mut session = StaircaseController::new(StaircaseConfig::standard()).unwrap();
//!
//! loop {
//!     let (size_norm, gap) = session.begin_trial().unwrap();
//!     // render the optotype at `size_norm`, collect the viewer's answer...
//!     let judged = gap; // stand-in for real input
//!     match session.record_response(judged).unwrap() {
//!         Progress::Continue => continue,
//!         Progress::Completed(result) => {
//!             println!("threshold: {:.4}", result.threshold_norm);
//!             break;
//!         }
//!     }
//! }
//! ```
//!
//! Not a medical device: estimates are informational only and carry no
//! clinical accuracy guarantees.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod types;

// Functional modules
pub mod direction;
pub mod estimator;
pub mod history;
pub mod optotype;
pub mod output;
pub mod staircase;

// Re-exports for public API
pub use config::StaircaseConfig;
pub use constants::{FALLBACK_WINDOW, MIN_REVERSALS_FOR_ESTIMATE, SIZE_FLOOR};
pub use direction::{DirectionSource, ScriptedDirections, UniformDirections};
pub use error::{ConfigError, SequencingError};
pub use estimator::ThresholdEstimator;
pub use history::{HistoryError, SessionHistory};
pub use optotype::ArcSpec;
pub use staircase::{StaircaseController, StepDirection};
pub use types::{GapDirection, Progress, SessionResult, TrialOutcome};
