use std::sync::Arc;

use uuid::Uuid;

use crate::actions::ActionManager;
use crate::animation::{Animation, AnimationGroup};
use crate::particles::ParticleSystem;
use crate::resources::geometry::Geometry;
use crate::resources::material::{Material, MultiMaterial};
use crate::resources::mesh::Mesh;
use crate::resources::morph::MorphTargetManager;
use crate::resources::post_process::PostProcess;
use crate::resources::texture::{RenderTarget, Texture};
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::skeleton::Skeleton;
use crate::scene::transform_node::TransformNode;

/// Polymorphic product of an individual parser: one newly constructed
/// entity, tagged with the container category it belongs to.
///
/// Individual parsers hand one of these back to their caller; nothing here
/// inserts into a container. Where the entity ends up is the caller's
/// decision.
#[derive(Debug, Clone)]
pub enum Entity {
    Camera(Arc<Camera>),
    Light(Arc<Light>),
    Mesh(Arc<Mesh>),
    Skeleton(Arc<Skeleton>),
    ParticleSystem(Arc<ParticleSystem>),
    Animation(Arc<Animation>),
    AnimationGroup(Arc<AnimationGroup>),
    MultiMaterial(Arc<MultiMaterial>),
    Material(Arc<Material>),
    MorphTargetManager(Arc<MorphTargetManager>),
    Geometry(Arc<Geometry>),
    TransformNode(Arc<TransformNode>),
    ActionManager(Arc<ActionManager>),
    Texture(Arc<Texture>),
    PostProcess(Arc<PostProcess>),
    RenderTarget(Arc<RenderTarget>),
}

impl Entity {
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        match self {
            Entity::Camera(e) => e.uuid,
            Entity::Light(e) => e.uuid,
            Entity::Mesh(e) => e.uuid,
            Entity::Skeleton(e) => e.uuid,
            Entity::ParticleSystem(e) => e.uuid,
            Entity::Animation(e) => e.uuid,
            Entity::AnimationGroup(e) => e.uuid,
            Entity::MultiMaterial(e) => e.uuid,
            Entity::Material(e) => e.uuid,
            Entity::MorphTargetManager(e) => e.uuid,
            Entity::Geometry(e) => e.uuid,
            Entity::TransformNode(e) => e.uuid,
            Entity::ActionManager(e) => e.uuid,
            Entity::Texture(e) => e.uuid,
            Entity::PostProcess(e) => e.uuid,
            Entity::RenderTarget(e) => e.uuid,
        }
    }

    /// Entity name, for the kinds that carry one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Entity::Camera(e) => Some(&e.name),
            Entity::Light(e) => Some(&e.name),
            Entity::Mesh(e) => Some(&e.name),
            Entity::Skeleton(e) => Some(&e.name),
            Entity::ParticleSystem(e) => Some(&e.name),
            Entity::Animation(e) => Some(&e.name),
            Entity::AnimationGroup(e) => Some(&e.name),
            Entity::MultiMaterial(e) => Some(&e.name),
            Entity::Material(e) => Some(&e.name),
            Entity::Geometry(e) => Some(&e.name),
            Entity::TransformNode(e) => Some(&e.name),
            Entity::Texture(e) => Some(&e.name),
            Entity::PostProcess(e) => Some(&e.name),
            Entity::RenderTarget(e) => Some(&e.name),
            Entity::MorphTargetManager(_) | Entity::ActionManager(_) => None,
        }
    }
}
