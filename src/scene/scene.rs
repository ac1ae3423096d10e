use std::sync::atomic::{AtomicU32, Ordering};

use serde_json::Value;

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(1);

/// Handle for the live runtime scene.
///
/// The actual scene (render lists, transform hierarchy, per-frame state)
/// is owned by the engine runtime, not by this crate. Parsers receive this
/// handle so they can tag the scene they populated; the only state carried
/// here is a process-unique id and a free-form metadata slot that parsers
/// may fill from the serialized data.
#[derive(Debug)]
pub struct Scene {
    pub id: u32,

    /// Free-form data carried alongside the scene (tooling info, authoring
    /// timestamps, whatever the serialized blob included).
    pub metadata: Option<Value>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),
            metadata: None,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
