//! Scene aggregation module
//!
//! Holds everything a loaded scene is made of:
//! - `SceneContainer`: categorized entity collections + environment texture
//! - `Node`: polymorphic view over the spatial entity kinds
//! - `Entity`: polymorphic product of an individual parser
//! - `Scene`: the handle parsers receive for the live runtime scene
//! - Component shells: `Camera`, `Light`, `Skeleton`/`Bone`, `TransformNode`

pub mod camera;
pub mod container;
pub mod entity;
pub mod light;
pub mod node;
pub mod scene;
pub mod skeleton;
pub mod transform_node;

pub use camera::{Camera, ProjectionType};
pub use container::SceneContainer;
pub use entity::Entity;
pub use light::{Light, LightKind};
pub use node::Node;
pub use scene::Scene;
pub use skeleton::{Bone, Skeleton};
pub use transform_node::TransformNode;
