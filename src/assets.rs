// Terrain tile images, loaded once as a single batch

use std::collections::HashMap;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::render::ImageSizes;
use crate::terrain::image_sources;
use crate::util::{clog, cwarn};

/// Decoded images keyed by source path. Failed loads are simply absent.
#[derive(Default, Clone)]
pub struct ImageCache {
    images: HashMap<&'static str, HtmlImageElement>,
}

impl ImageCache {
    pub fn get(&self, src: &str) -> Option<&HtmlImageElement> {
        self.images.get(src)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageSizes for ImageCache {
    fn size_of(&self, src: &str) -> Option<(f64, f64)> {
        self.images
            .get(src)
            .map(|img| (img.natural_width() as f64, img.natural_height() as f64))
    }
}

/// Starts every terrain image download, then hands the finished cache to
/// `on_done` exactly once after all of them have settled.
pub fn load_terrain_images(on_done: impl FnOnce(ImageCache) + 'static) {
    let pending: Vec<(&'static str, HtmlImageElement)> = image_sources()
        .into_iter()
        .filter_map(|src| {
            let img = HtmlImageElement::new().ok()?;
            img.set_src(src);
            Some((src, img))
        })
        .collect();
    wasm_bindgen_futures::spawn_local(async move {
        let total = pending.len();
        let mut cache = ImageCache::default();
        for (src, img) in pending {
            match JsFuture::from(img.decode()).await {
                Ok(_) => {
                    cache.images.insert(src, img);
                }
                Err(err) => cwarn(&format!("terrain image {src} failed to load: {err:?}")),
            }
        }
        clog(&format!("terrain images ready: {}/{}", cache.len(), total));
        on_done(cache);
    });
}
