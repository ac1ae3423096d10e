#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod actions;
pub mod animation;
pub mod errors;
pub mod parsers;
pub mod particles;
pub mod resources;
pub mod scene;

pub use actions::ActionManager;
pub use animation::{Animation, AnimationGroup};
pub use errors::{Result, SceneError};
pub use parsers::{IndividualParser, ParserRegistry, SceneParser};
pub use particles::ParticleSystem;
pub use resources::{
    Geometry, Material, Mesh, MorphTargetManager, MultiMaterial, PostProcess, RenderTarget, Texture,
};
pub use scene::{
    Bone, Camera, Entity, Light, LightKind, Node, Scene, SceneContainer, Skeleton, TransformNode,
};
