//! Font registry for system font discovery and caching
//!
//! Uses fontdb to discover fonts by family name, falling back to the
//! generic sans-serif family and then to any available face.

use crate::font::{FontDescriptor, FontFace};
use crate::{Result, TextError};
use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;

/// Font registry that discovers and caches font faces
pub struct FontRegistry {
    /// fontdb database containing all known fonts
    db: Database,
    /// Resolved faces by descriptor key (None = nothing usable)
    faces: FxHashMap<String, Option<Arc<FontFace>>>,
}

impl FontRegistry {
    /// Create a registry populated with the system fonts
    pub fn new() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!("Font registry loaded {} system faces", db.len());

        Self {
            db,
            faces: FxHashMap::default(),
        }
    }

    /// Create a registry with no fonts at all
    pub fn empty() -> Self {
        Self {
            db: Database::new(),
            faces: FxHashMap::default(),
        }
    }

    /// Number of faces known to the registry
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Register font file bytes (TTF/OTF/TTC)
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
        self.faces.clear();
    }

    /// Register a font file from disk
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.db.load_font_file(path).map_err(|e| {
            TextError::FontLoadError(format!("Failed to read font file {:?}: {}", path, e))
        })?;
        self.faces.clear();
        Ok(())
    }

    /// Resolve a descriptor to a face
    ///
    /// Tries the named family with the requested weight and style (italic,
    /// then oblique), then the generic sans-serif family, then any face.
    pub fn resolve(&mut self, desc: &FontDescriptor) -> Result<Arc<FontFace>> {
        let cache_key = desc.face_key();

        if let Some(cached) = self.faces.get(&cache_key) {
            return cached.clone().ok_or(TextError::NoFonts);
        }

        let resolved = self.lookup(desc);
        self.faces.insert(cache_key, resolved.clone());
        resolved.ok_or(TextError::NoFonts)
    }

    fn lookup(&self, desc: &FontDescriptor) -> Option<Arc<FontFace>> {
        let weight = Weight(desc.weight.value());
        let styles: &[Style] = if desc.italic {
            &[Style::Italic, Style::Oblique]
        } else {
            &[Style::Normal]
        };

        let named = [Family::Name(desc.family.as_str())];
        let generic = [Family::SansSerif];

        for (families, is_fallback) in [(&named[..], false), (&generic[..], true)] {
            for &style in styles {
                let query = Query {
                    families,
                    weight,
                    style,
                    stretch: Stretch::Normal,
                };
                let Some(id) = self.db.query(&query) else {
                    continue;
                };
                if is_fallback {
                    tracing::warn!(
                        "Font '{}' not found, falling back to sans-serif",
                        desc.family
                    );
                }
                match self.load_face_by_id(id) {
                    Ok(face) => return Some(Arc::new(face)),
                    Err(e) => tracing::warn!("Skipping unusable font face: {}", e),
                }
            }
        }

        // Last resort: anything that parses
        let face = self
            .db
            .faces()
            .find_map(|info| self.load_face_by_id(info.id).ok());
        match &face {
            Some(face) => tracing::warn!(
                "Font '{}' not found, using '{}'",
                desc.family,
                face.family()
            ),
            None => tracing::warn!("No usable fonts; text will not be drawn"),
        }
        face.map(Arc::new)
    }

    /// Load a font face by fontdb ID
    fn load_face_by_id(&self, id: fontdb::ID) -> Result<FontFace> {
        let (src, face_index) = self
            .db
            .face_source(id)
            .ok_or_else(|| TextError::FontLoadError("Font source not found".to_string()))?;

        let data = match src {
            Source::File(path) => std::fs::read(&path).map_err(|e| {
                TextError::FontLoadError(format!("Failed to read font file {:?}: {}", path, e))
            })?,
            Source::Binary(arc) => arc.as_ref().as_ref().to_vec(),
            Source::SharedFile(_path, data) => data.as_ref().as_ref().to_vec(),
        };

        FontFace::from_data_with_index(data, face_index)
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_resolves_nothing() {
        let mut registry = FontRegistry::empty();
        assert_eq!(registry.face_count(), 0);
        assert!(matches!(
            registry.resolve(&FontDescriptor::default()),
            Err(TextError::NoFonts)
        ));
        // Negative result is cached and stays an error
        assert!(registry.resolve(&FontDescriptor::default()).is_err());
    }

    #[test]
    fn system_fonts_resolve_any_family_when_present() {
        let mut registry = FontRegistry::new();
        if registry.face_count() == 0 {
            return;
        }
        let desc = FontDescriptor::new("No Such Family 1234", 14.0);
        let face = registry.resolve(&desc).expect("fallback face");
        let px = desc.pixel_size();
        assert!(face.height(px) > 0.0);
        assert!(face.advance_width("Hello", px) > face.advance_width("H", px));
        assert_eq!(face.advance_width("", px), 0.0);
    }
}
