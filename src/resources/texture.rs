use uuid::Uuid;

/// Texture shell.
///
/// Pixel data and GPU upload are handled by the resource pipeline; the
/// container only passes shared references around, most notably as the
/// scene-wide environment texture.
#[derive(Debug, Clone)]
pub struct Texture {
    pub uuid: Uuid,
    pub name: String,
    /// Source location, when the texture came from an external file
    pub url: Option<String>,
}

impl Texture {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            url: None,
        }
    }

    #[must_use]
    pub fn from_url(name: &str, url: &str) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            url: Some(url.to_string()),
        }
    }
}

/// Render-target texture shell, used by the pre-pass list.
#[derive(Debug, Clone)]
pub struct RenderTarget {
    pub uuid: Uuid,
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl RenderTarget {
    #[must_use]
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            width,
            height,
        }
    }
}
