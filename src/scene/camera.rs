use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionType {
    Perspective,
    Orthographic,
}

/// Camera component shell.
///
/// Only the projection description lives here; view matrices and frustum
/// state are computed by the runtime that owns the live scene.
#[derive(Debug, Clone)]
pub struct Camera {
    pub uuid: Uuid,
    pub name: String,

    pub projection_type: ProjectionType,
    /// Vertical field of view in radians (perspective only)
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            projection_type: ProjectionType::Perspective,
            fov: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}
