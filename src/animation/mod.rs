//! Animation entity shells.
//!
//! Keyframe evaluation and playback live in the animation subsystem; the
//! scene container only indexes what a loaded scene brought with it.

use std::sync::Arc;

use uuid::Uuid;

/// A single animated property track.
#[derive(Debug, Clone)]
pub struct Animation {
    pub uuid: Uuid,
    pub name: String,
    /// Dotted path of the property this animation drives, e.g. `position.x`
    pub target_property: String,
    pub frames_per_second: f32,
}

impl Animation {
    #[must_use]
    pub fn new(name: &str, target_property: &str, frames_per_second: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            target_property: target_property.to_string(),
            frames_per_second,
        }
    }
}

/// A named set of animations started and stopped together.
#[derive(Debug, Clone)]
pub struct AnimationGroup {
    pub uuid: Uuid,
    pub name: String,
    pub animations: Vec<Arc<Animation>>,
}

impl AnimationGroup {
    #[must_use]
    pub fn new(name: &str, animations: Vec<Arc<Animation>>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            animations,
        }
    }
}
