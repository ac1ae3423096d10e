use uuid::Uuid;

/// Action manager shell.
///
/// Superseded by the newer input/behavior system; kept so scenes serialized
/// by older tooling still deserialize with their triggers intact.
#[derive(Debug, Clone)]
pub struct ActionManager {
    pub uuid: Uuid,
}

impl ActionManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
        }
    }
}

impl Default for ActionManager {
    fn default() -> Self {
        Self::new()
    }
}
