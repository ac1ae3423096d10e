use uuid::Uuid;

/// Particle system shell. Emission and simulation belong to the particle
/// subsystem that parses and owns the full system state.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub uuid: Uuid,
    pub name: String,
    /// Maximum number of live particles
    pub capacity: u32,
}

impl ParticleSystem {
    #[must_use]
    pub fn new(name: &str, capacity: u32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            capacity,
        }
    }
}
