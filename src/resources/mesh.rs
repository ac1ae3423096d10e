use std::sync::Arc;

use uuid::Uuid;

use crate::scene::skeleton::Skeleton;

/// Renderable mesh shell.
///
/// Geometry and material construction happen in the asset pipeline; the
/// mesh entity records identity and, for skinned meshes, which skeleton
/// drives it. That back-reference is established by whoever built the mesh,
/// never by the container.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub uuid: Uuid,
    pub name: String,
    pub skeleton: Option<Arc<Skeleton>>,
}

impl Mesh {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            skeleton: None,
        }
    }

    #[must_use]
    pub fn with_skeleton(name: &str, skeleton: Arc<Skeleton>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            skeleton: Some(skeleton),
        }
    }
}
