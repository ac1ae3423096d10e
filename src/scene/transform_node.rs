use glam::{Quat, Vec3};
use uuid::Uuid;

/// A node with a spatial transform but nothing to render.
///
/// Used as a grouping / pivot entity in the scene hierarchy.
#[derive(Debug, Clone)]
pub struct TransformNode {
    pub uuid: Uuid,
    pub name: String,

    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl TransformNode {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}
