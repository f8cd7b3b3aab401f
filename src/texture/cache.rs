//! Memoized texture generation.

use crate::error::Result;
use crate::image::Raster;
use crate::texture::{Generate, Generator, TextureKind};

use std::collections::HashMap;
use std::rc::Rc;

/// Resolves texture names to bitmaps for the renderer.
pub trait TextureSource {
    fn texture(&mut self, name: &str, width: u32, height: u32) -> Result<Rc<Raster>>;
}

/// Caches generated textures by `(kind, width, height)`.
///
/// Names are resolved to a [`TextureKind`] before lookup, so aliases such as
/// `sand` and `sandstone` share one entry. Entries live until [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct TextureCache<G: Generate = Generator> {
    generator: G,
    entries: HashMap<(TextureKind, u32, u32), Rc<Raster>>,
}

impl TextureCache<Generator> {
    pub fn new() -> Self {
        Self::with_generator(Generator::new())
    }
}

impl<G: Generate> TextureCache<G> {
    pub fn with_generator(generator: G) -> Self {
        Self {
            generator,
            entries: HashMap::new(),
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn get(&mut self, name: &str, width: u32, height: u32) -> Result<Rc<Raster>> {
        let kind = name.parse::<TextureKind>()?;
        self.get_kind(kind, width, height)
    }

    pub fn get_kind(&mut self, kind: TextureKind, width: u32, height: u32) -> Result<Rc<Raster>> {
        let key = (kind, width, height);
        if let Some(raster) = self.entries.get(&key) {
            tracing::debug!(texture = %kind, width, height, "texture cache hit");
            return Ok(raster.clone());
        }
        let raster = Rc::new(self.generator.generate(kind, width, height)?);
        self.entries.insert(key, raster.clone());
        Ok(raster)
    }

    pub fn contains(&self, name: &str, width: u32, height: u32) -> bool {
        name.parse::<TextureKind>()
            .map(|kind| self.entries.contains_key(&(kind, width, height)))
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<G: Generate> TextureSource for TextureCache<G> {
    fn texture(&mut self, name: &str, width: u32, height: u32) -> Result<Rc<Raster>> {
        self.get(name, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    use std::cell::Cell;

    #[derive(Default)]
    struct Counting {
        calls: Cell<usize>,
    }

    impl Generate for Counting {
        fn generate(&self, kind: TextureKind, width: u32, height: u32) -> Result<Raster> {
            self.calls.set(self.calls.get() + 1);
            Generator::seeded(1).generate(kind, width, height)
        }
    }

    #[test]
    fn hit_returns_same_instance_without_generating() {
        let mut cache = TextureCache::with_generator(Counting::default());
        let first = cache.get("woodgrain", 16, 16).unwrap();
        let second = cache.get("woodgrain", 16, 16).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.generator().calls.get(), 1);

        cache.get("woodgrain", 16, 8).unwrap();
        assert_eq!(cache.generator().calls.get(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clear_forces_regeneration() {
        let mut cache = TextureCache::with_generator(Counting::default());
        let first = cache.get("marble", 8, 8).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        let second = cache.get("marble", 8, 8).unwrap();
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(cache.generator().calls.get(), 2);
    }

    #[test]
    fn aliases_share_an_entry() {
        let mut cache = TextureCache::with_generator(Counting::default());
        let sand = cache.get("sand", 8, 8).unwrap();
        let sandstone = cache.get("Sandstone", 8, 8).unwrap();
        assert!(Rc::ptr_eq(&sand, &sandstone));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("sandstone", 8, 8));
    }

    #[test]
    fn unknown_names_are_not_cached() {
        let mut cache = TextureCache::new();
        assert!(matches!(cache.get("plaid", 8, 8), Err(Error::UnknownTexture(_))));
        assert!(cache.is_empty());
    }
}
