use std::sync::Arc;

use uuid::Uuid;

/// Material shell. Shading model and uniform data live in the material
/// subsystem that registered the parser producing this entity.
#[derive(Debug, Clone)]
pub struct Material {
    pub uuid: Uuid,
    pub name: String,
}

impl Material {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
        }
    }
}

/// A material that delegates to one sub-material per submesh slot.
///
/// Slot order is significant and preserved as built.
#[derive(Debug, Clone)]
pub struct MultiMaterial {
    pub uuid: Uuid,
    pub name: String,
    pub sub_materials: Vec<Arc<Material>>,
}

impl MultiMaterial {
    #[must_use]
    pub fn new(name: &str, sub_materials: Vec<Arc<Material>>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            sub_materials,
        }
    }
}
