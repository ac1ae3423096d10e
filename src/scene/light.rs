use glam::Vec3;
use uuid::Uuid;

/// Light component shell in the scene.
#[derive(Debug, Clone)]
pub enum LightKind {
    Directional,
    Point { range: f32 },
    Spot { range: f32, inner_cone: f32, outer_cone: f32 },
}

#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub name: String,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_directional(name: &str, color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            color,
            intensity,
            kind: LightKind::Directional,
        }
    }

    #[must_use]
    pub fn new_point(name: &str, color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            color,
            intensity,
            kind: LightKind::Point { range },
        }
    }

    #[must_use]
    pub fn new_spot(
        name: &str,
        color: Vec3,
        intensity: f32,
        range: f32,
        inner_cone: f32,
        outer_cone: f32,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            color,
            intensity,
            kind: LightKind::Spot {
                range,
                inner_cone,
                outer_cone,
            },
        }
    }
}
