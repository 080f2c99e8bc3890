//! # Cinder Testkit
//!
//! Shared test infrastructure:
//!
//! - [`RecordingDispatcher`]: fake dispatch capability that records intents
//! - [`fixtures`]: canned paths, routes and states
//! - [`strategies`]: proptest strategies for paths and waiting sets

pub mod fixtures;
pub mod strategies;

mod recording;

pub use recording::RecordingDispatcher;
