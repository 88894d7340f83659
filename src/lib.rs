//! # tweenkit
//!
//! A frame-driven property tweening scheduler.
//!
//! Tweens describe a timed interpolation of named numeric properties on a
//! shared target object. A registry holds every active tween and advances
//! all of them once per call to [`TweenRegistry::tick`], which the host
//! application invokes once per rendered frame. Tweens support easing,
//! start delays, pause/resume, lifecycle callbacks, and chained follow-up
//! tweens that begin automatically when their predecessor completes.

pub mod easing;
pub mod interpolation;
pub mod registry;
pub mod snapshot;
pub mod target;
pub mod tween;

// Re-export public API
pub use easing::EasingFunction;
pub use interpolation::{Interpolatable, Interpolation};
pub use registry::{MemoryRegistry, SnapshotRegistry, TweenId, TweenRegistry};
pub use snapshot::{RegistrySnapshot, SnapshotFormat, TweenSnapshot};
pub use target::{shared, Accessors, Animatable, SharedTarget};
pub use tween::{Tween, TweenCallback, TweenState, TweenTick};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, TweenError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum TweenError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("binary encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("unknown target tag: {0}")]
    UnknownTarget(String),
}

/// Error type alias for convenience
pub type Error = TweenError;
