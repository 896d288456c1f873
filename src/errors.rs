//! Error types for producers, playback and algorithm lookup
//!
//! Exhausting a producer is not an error: it is reported as `Ok(None)` by
//! [`StepProducer::next_step`]. Everything here is a genuine failure.
//!
//! [`StepProducer::next_step`]: crate::producer::StepProducer::next_step

use thiserror::Error;

/// A producer could not compute its next step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProducerError {
    /// A divide-and-conquer producer popped more sub-results than it pushed
    #[error("{algorithm}: no sub-result left while {context}")]
    FrameUnderflow {
        algorithm: &'static str,
        context: &'static str,
    },

    #[error("{algorithm}: {message}")]
    Failed {
        algorithm: &'static str,
        message: String,
    },
}

/// Errors surfaced by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The producer failed; the run is over and must be reloaded
    #[error("run aborted: {0}")]
    Producer(#[from] ProducerError),

    #[error("{algorithm} needs a target value")]
    MissingTarget { algorithm: &'static str },

    #[error("{algorithm} cannot be shown in the {visualizer} view")]
    UnsupportedView {
        algorithm: &'static str,
        visualizer: &'static str,
    },
}

/// Lookup failures in the algorithm registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("unknown visualizer '{0}' (expected bars, blocks or tree)")]
    UnknownVisualizer(String),
}
