//! Background image loading.
//!
//! Files are read on worker threads; decoding stays on the caller's thread,
//! since rasters are backed by cairo surfaces that cannot cross threads.

use crate::image::{ImageMap, ImgBackend};

use std::collections::HashSet;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

struct Loaded {
    key: String,
    path: PathBuf,
    bytes: io::Result<Vec<u8>>,
}

pub struct ImageLoader {
    tx: Sender<Loaded>,
    rx: Receiver<Loaded>,
    pending: HashSet<String>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            pending: HashSet::new(),
        }
    }

    /// Starts reading `path` in the background. Repeated requests for a pending key are ignored.
    pub fn request(&mut self, key: impl Into<String>, path: impl Into<PathBuf>) {
        let key = key.into();
        if !self.pending.insert(key.clone()) {
            return;
        }
        let path = path.into();
        let tx = self.tx.clone();
        tracing::debug!(%key, path = %path.display(), "loading image");
        thread::spawn(move || {
            let bytes = std::fs::read(&path);
            // the receiver only goes away together with the loader
            let _ = tx.send(Loaded { key, path, bytes });
        });
    }

    pub fn is_pending(&self, key: impl AsRef<str>) -> bool {
        self.pending.contains(key.as_ref())
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Decodes every finished load into `images`, returning the keys that became available.
    pub fn poll(&mut self, ib: &ImgBackend, images: &mut ImageMap) -> Vec<String> {
        let mut ready = Vec::new();
        while let Ok(loaded) = self.rx.try_recv() {
            if let Some(key) = self.finish(loaded, ib, images) {
                ready.push(key);
            }
        }
        ready
    }

    /// Blocks until no load is pending.
    pub fn wait(&mut self, ib: &ImgBackend, images: &mut ImageMap) -> Vec<String> {
        let mut ready = Vec::new();
        while !self.pending.is_empty() {
            let Ok(loaded) = self.rx.recv() else {
                break;
            };
            if let Some(key) = self.finish(loaded, ib, images) {
                ready.push(key);
            }
        }
        ready
    }

    fn finish(&mut self, loaded: Loaded, ib: &ImgBackend, images: &mut ImageMap) -> Option<String> {
        let Loaded { key, path, bytes } = loaded;
        self.pending.remove(&key);
        let raster = match bytes {
            Ok(bytes) => ib.decode(&bytes),
            Err(e) => {
                tracing::warn!(%key, path = %path.display(), "failed to read image: {e}");
                return None;
            }
        };
        match raster {
            Ok(raster) => {
                images.insert(key.clone(), raster);
                Some(key)
            }
            Err(e) => {
                tracing::warn!(%key, path = %path.display(), "failed to decode image: {e}");
                None
            }
        }
    }
}
