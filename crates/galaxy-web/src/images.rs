//! Fire-and-forget photo loading with per-frame readiness polling.
//!
//! Loads are never awaited: a billboard whose image has not finished
//! decoding is simply skipped for that frame. Replacing the photo set
//! drops the old elements; any still-loading requests complete unobserved.

use web_sys as web;

#[derive(Default)]
pub struct ImageCache {
    images: Vec<web::HtmlImageElement>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Replace the whole set and start loading every URL.
    pub fn load(&mut self, urls: &[String]) {
        self.images.clear();
        for url in urls {
            match web::HtmlImageElement::new() {
                Ok(img) => {
                    img.set_cross_origin(Some("anonymous"));
                    img.set_src(url);
                    self.images.push(img);
                }
                Err(e) => log::warn!("image element creation failed: {:?}", e),
            }
        }
        log::info!("loading {} photos", self.images.len());
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    /// Synchronous readiness check; `natural_width == 0` after `complete`
    /// means the decode failed, which we treat the same as not-yet-ready.
    pub fn ready(&self, index: usize) -> bool {
        self.images
            .get(index)
            .map(|img| img.complete() && img.natural_width() > 0)
            .unwrap_or(false)
    }

    pub fn get(&self, index: usize) -> Option<&web::HtmlImageElement> {
        self.images.get(index)
    }
}
