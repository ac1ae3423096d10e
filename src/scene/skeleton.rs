use std::sync::Arc;

use glam::Affine3A;
use uuid::Uuid;

/// A single joint in a skeleton hierarchy.
///
/// Parent/child relationships between bones, and the binding of a skeleton
/// to the meshes it deforms, are maintained by the owning runtime. A bone
/// here is identity plus its rest transform.
#[derive(Debug, Clone)]
pub struct Bone {
    pub uuid: Uuid,
    pub name: String,
    /// Local rest-pose transform relative to the parent bone
    pub rest_matrix: Affine3A,
}

impl Bone {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            rest_matrix: Affine3A::IDENTITY,
        }
    }
}

/// Skeleton shell: an ordered list of bones driving mesh deformation.
///
/// Bone order is significant (`bones[i]` corresponds to joint `i` in the
/// skinning data) and is preserved exactly as the skeleton was built.
#[derive(Debug, Clone)]
pub struct Skeleton {
    pub uuid: Uuid,
    pub name: String,
    pub bones: Vec<Arc<Bone>>,
}

impl Skeleton {
    #[must_use]
    pub fn new(name: &str, bones: Vec<Arc<Bone>>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            bones,
        }
    }
}
