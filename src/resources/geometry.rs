use uuid::Uuid;

/// Geometry shell. Vertex buffers are built and owned elsewhere; the entity
/// records identity plus the vertex count for bookkeeping.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub uuid: Uuid,
    pub name: String,
    pub vertex_count: u32,
}

impl Geometry {
    #[must_use]
    pub fn new(name: &str, vertex_count: u32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            vertex_count,
        }
    }
}
