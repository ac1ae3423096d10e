use uuid::Uuid;

/// Manager for a set of morph targets deforming one mesh.
#[derive(Debug, Clone)]
pub struct MorphTargetManager {
    pub uuid: Uuid,
    pub target_count: usize,
}

impl MorphTargetManager {
    #[must_use]
    pub fn new(target_count: usize) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            target_count,
        }
    }
}
