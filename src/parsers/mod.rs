//! Pluggable scene deserialization.
//!
//! Subsystems (particles, animation, materials, ...) register parser
//! functions here so a single generic "load scene from serialized data"
//! entry point can fan out to all of them. The container never learns the
//! subsystems' types at compile time; the registry is the extension seam.

pub mod registry;

pub use registry::{IndividualParser, ParserRegistry, SceneParser};
