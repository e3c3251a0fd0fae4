//! Texture Registry
//!
//! Loads named PNG assets from a JSON manifest into a name → texture map and
//! exposes the region-blit primitive the widgets draw with. Loading is
//! all-or-nothing: the new map is built in full before it replaces the old
//! one, so the registry never holds a partially-loaded batch.

use crate::vec2d::Vec2d;
use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use serde::Deserialize;
use std::collections::HashMap;

/// Texture name → image path mapping, loaded from `assets/config/textures.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct TextureManifest {
    pub textures: HashMap<String, String>,
}

impl TextureManifest {
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read texture manifest {}: {}", path, e))?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse texture manifest: {}", e))
    }
}

/// Holds every loaded texture for the lifetime of the canvas.
///
/// Last-loaded value wins: `load` on an already-populated registry swaps the
/// whole map, and all readers see the replacement from the next frame on.
pub struct TextureRegistry<'a> {
    texture_creator: &'a TextureCreator<WindowContext>,
    textures: HashMap<String, Texture<'a>>,
}

impl<'a> TextureRegistry<'a> {
    pub fn new(texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        TextureRegistry {
            texture_creator,
            textures: HashMap::new(),
        }
    }

    /// Loads every manifest entry, failing the whole batch on the first
    /// error. The current contents are only replaced on success; a failed
    /// reload leaves the previous textures installed.
    pub fn load(&mut self, manifest: &TextureManifest) -> Result<(), String> {
        let mut loaded = HashMap::new();
        for (name, path) in &manifest.textures {
            let texture = self
                .texture_creator
                .load_texture(path)
                .map_err(|e| format!("Failed to load {}: {}", path, e))?;
            loaded.insert(name.clone(), texture);
        }
        self.textures = loaded;
        Ok(())
    }

    /// Looks up a texture by name. A miss means the name was never in the
    /// manifest or `load` has not run; callers treat it as a setup bug.
    pub fn get(&self, name: &str) -> Result<&Texture<'a>, String> {
        self.textures
            .get(name)
            .ok_or_else(|| format!("Texture '{}' is not loaded", name))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// Copies the `src_width` x `src_height` region of `texture` at `src_origin`
/// onto the canvas rectangle at `dest_origin` sized `dest_width` x
/// `dest_height`, scaling when the rectangles differ. The render
/// scale-quality hint is set to nearest at startup so scaling stays blocky.
pub fn blit(
    canvas: &mut Canvas<Window>,
    texture: &Texture,
    src_origin: Vec2d,
    dest_origin: Vec2d,
    dest_width: u32,
    dest_height: u32,
    src_width: u32,
    src_height: u32,
) -> Result<(), String> {
    let src = Rect::new(src_origin.x, src_origin.y, src_width, src_height);
    let dest = Rect::new(dest_origin.x, dest_origin.y, dest_width, dest_height);
    canvas.copy(texture, Some(src), Some(dest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_parses_shipped_shape() {
        let manifest = TextureManifest::from_json(
            r#"{ "textures": { "widgets": "assets/textures/widgets.png" } }"#,
        )
        .unwrap();

        assert_eq!(manifest.textures.len(), 1);
        assert_eq!(
            manifest.textures.get("widgets").map(String::as_str),
            Some("assets/textures/widgets.png")
        );
    }

    #[test]
    fn test_manifest_allows_empty_mapping() {
        let manifest = TextureManifest::from_json(r#"{ "textures": {} }"#).unwrap();
        assert!(manifest.textures.is_empty());
    }

    #[test]
    fn test_manifest_rejects_malformed_json() {
        assert!(TextureManifest::from_json("{ not json").is_err());
    }

    #[test]
    fn test_manifest_rejects_missing_textures_key() {
        assert!(TextureManifest::from_json(r#"{ "sprites": {} }"#).is_err());
    }
}
