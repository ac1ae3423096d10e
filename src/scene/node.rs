use std::sync::Arc;

use uuid::Uuid;

use crate::resources::mesh::Mesh;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::skeleton::Bone;
use crate::scene::transform_node::TransformNode;

/// Polymorphic view over the entity kinds that occupy a position in the
/// scene's spatial hierarchy: meshes, lights, cameras, transform nodes and
/// bones. Everything else a container holds (materials, textures, particle
/// systems, ...) has no spatial identity and never appears as a node.
///
/// A `Node` is a shared reference, not a copy: cloning one clones the
/// `Arc`, and [`Node::ptr_eq`] compares the underlying entity identity.
#[derive(Debug, Clone)]
pub enum Node {
    Mesh(Arc<Mesh>),
    Light(Arc<Light>),
    Camera(Arc<Camera>),
    TransformNode(Arc<TransformNode>),
    Bone(Arc<Bone>),
}

impl Node {
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        match self {
            Node::Mesh(m) => m.uuid,
            Node::Light(l) => l.uuid,
            Node::Camera(c) => c.uuid,
            Node::TransformNode(t) => t.uuid,
            Node::Bone(b) => b.uuid,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Node::Mesh(m) => &m.name,
            Node::Light(l) => &l.name,
            Node::Camera(c) => &c.name,
            Node::TransformNode(t) => &t.name,
            Node::Bone(b) => &b.name,
        }
    }

    /// Returns true when both views point at the same entity instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Mesh(a), Node::Mesh(b)) => Arc::ptr_eq(a, b),
            (Node::Light(a), Node::Light(b)) => Arc::ptr_eq(a, b),
            (Node::Camera(a), Node::Camera(b)) => Arc::ptr_eq(a, b),
            (Node::TransformNode(a), Node::TransformNode(b)) => Arc::ptr_eq(a, b),
            (Node::Bone(a), Node::Bone(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
