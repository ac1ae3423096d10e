use std::sync::Arc;

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
use crate::scene::node::Node;
use crate::scene::skeleton::Skeleton;
use crate::scene::transform_node::TransformNode;

/// Aggregate of everything a loaded scene is composed of.
///
/// The container is a non-owning index: each collection stores shared
/// references to entities whose lifecycle belongs to the broader runtime.
/// Entities enter and leave these lists through the owning scene's mutation
/// API; the fields are public in the same spirit as the rest of the engine's
/// scene state, but arbitrary code is not supposed to reorder them.
///
/// Every collection preserves insertion order, allows duplicates, and never
/// deduplicates. Cross-entity relationships (a mesh referencing its
/// skeleton, a skeleton referencing its bones) are established and
/// maintained entirely outside the container.
#[derive(Debug, Default)]
pub struct SceneContainer {
    pub root_nodes: Vec<Node>,
    pub cameras: Vec<Arc<Camera>>,
    pub lights: Vec<Arc<Light>>,
    pub meshes: Vec<Arc<Mesh>>,
    pub skeletons: Vec<Arc<Skeleton>>,
    pub particle_systems: Vec<Arc<ParticleSystem>>,
    pub animations: Vec<Arc<Animation>>,
    pub animation_groups: Vec<Arc<AnimationGroup>>,
    pub multi_materials: Vec<Arc<MultiMaterial>>,
    pub materials: Vec<Arc<Material>>,
    pub morph_target_managers: Vec<Arc<MorphTargetManager>>,
    pub geometries: Vec<Arc<Geometry>>,
    pub transform_nodes: Vec<Arc<TransformNode>>,
    /// Superseded by the newer input/behavior system; still populated when
    /// older scene data carries triggers.
    pub action_managers: Vec<Arc<ActionManager>>,
    pub textures: Vec<Arc<Texture>>,
    pub post_processes: Vec<Arc<PostProcess>>,
    pub pre_pass_render_targets: Vec<Arc<RenderTarget>>,

    environment_texture: Option<Arc<Texture>>,
}

impl SceneContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The scene-wide environment texture, the default reflection and
    /// ambient lighting source shared by materials. `None` until set.
    #[must_use]
    pub fn environment_texture(&self) -> Option<&Arc<Texture>> {
        self.environment_texture.as_ref()
    }

    /// Sets or clears the shared environment texture reference. The
    /// container indexes the texture, it does not own its lifetime.
    pub fn set_environment_texture(&mut self, texture: Option<Arc<Texture>>) {
        self.environment_texture = texture;
    }

    /// Flattened list of every spatial entity in the container: meshes,
    /// then lights, then cameras, then transform nodes, then each
    /// skeleton's bones in skeleton order.
    ///
    /// The result is a freshly allocated snapshot: mutating it never
    /// affects the container. No deduplication happens, so an entity
    /// present in a collection twice appears twice.
    #[must_use]
    pub fn get_nodes(&self) -> Vec<Node> {
        let bone_count: usize = self.skeletons.iter().map(|s| s.bones.len()).sum();
        let mut nodes = Vec::with_capacity(
            self.meshes.len()
                + self.lights.len()
                + self.cameras.len()
                + self.transform_nodes.len()
                + bone_count,
        );

        nodes.extend(self.meshes.iter().cloned().map(Node::Mesh));
        nodes.extend(self.lights.iter().cloned().map(Node::Light));
        nodes.extend(self.cameras.iter().cloned().map(Node::Camera));
        nodes.extend(self.transform_nodes.iter().cloned().map(Node::TransformNode));
        for skeleton in &self.skeletons {
            nodes.extend(skeleton.bones.iter().cloned().map(Node::Bone));
        }

        nodes
    }
}
