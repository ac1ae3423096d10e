use uuid::Uuid;

/// Post-processing effect shell (bloom, tone mapping, ...). The effect
/// implementation belongs to the render graph.
#[derive(Debug, Clone)]
pub struct PostProcess {
    pub uuid: Uuid,
    pub name: String,
}

impl PostProcess {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
        }
    }
}
