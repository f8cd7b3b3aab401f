use crate::image::Raster;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Resolved images, keyed by the reference the card or template uses for them.
#[derive(Debug, Default)]
pub struct ImageMap {
    pub assets_folder: PathBuf,
    images: HashMap<String, Rc<Raster>>,
}

impl ImageMap {
    pub fn new(assets_folder: impl Into<PathBuf>) -> Self {
        Self {
            assets_folder: assets_folder.into(),
            images: HashMap::new(),
        }
    }

    /// Maps an asset reference such as `/textures/camo-green.svg` into the assets folder.
    pub fn asset_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        let path = path.strip_prefix("/").unwrap_or(path);
        let mut fp = self.assets_folder.clone();
        fp.push(path);
        fp
    }

    pub fn insert(&mut self, key: impl Into<String>, raster: Raster) -> Rc<Raster> {
        let raster = Rc::new(raster);
        self.images.insert(key.into(), raster.clone());
        raster
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<Rc<Raster>> {
        self.images.get(key.as_ref()).cloned()
    }

    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.images.contains_key(key.as_ref())
    }

    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Rc<Raster>> {
        self.images.remove(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_path_strips_leading_slash() {
        let map = ImageMap::new("/srv/assets");
        assert_eq!(
            map.asset_path("/textures/carbon-fiber.svg"),
            PathBuf::from("/srv/assets/textures/carbon-fiber.svg")
        );
        assert_eq!(
            map.asset_path("textures/camo-black.svg"),
            PathBuf::from("/srv/assets/textures/camo-black.svg")
        );
    }

    #[test]
    fn stores_shared_rasters() {
        let mut map = ImageMap::default();
        assert!(map.is_empty());
        let stored = map.insert("photo.png", Raster::new(2, 2).unwrap());
        let fetched = map.get("photo.png").unwrap();
        assert!(Rc::ptr_eq(&stored, &fetched));
        assert!(map.contains("photo.png"));
        assert!(map.get("logo.png").is_none());
        map.remove("photo.png");
        assert_eq!(map.len(), 0);
    }
}
