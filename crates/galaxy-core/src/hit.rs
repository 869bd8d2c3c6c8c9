//! Ephemeral screen-space hit regions, rebuilt every frame.
//!
//! Regions are pushed in draw order (back-to-front), so scanning
//! last-to-first makes the nearest-drawn sprite win — that scan order is
//! the registry's invariant, not an accident of storage.

use smallvec::SmallVec;

use crate::constants::HEART_HIT_RADIUS_FACTOR;
use crate::sprites::Heart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitPayload {
    Heart(u32),
    Photo(usize),
}

#[derive(Clone, Copy, Debug)]
pub struct HitRegion {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub payload: HitPayload,
}

impl HitRegion {
    fn contains(&self, x: f32, y: f32) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

#[derive(Default)]
pub struct HitRegistry {
    /// Inline capacity 64 covers the photo slots; heart regions on top
    /// spill to the heap, which is fine for a per-frame buffer.
    pub regions: SmallVec<[HitRegion; 64]>,
}

impl HitRegistry {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register_heart(&mut self, h: &Heart) {
        self.regions.push(HitRegion {
            x: h.x,
            y: h.y,
            radius: h.size * HEART_HIT_RADIUS_FACTOR,
            payload: HitPayload::Heart(h.id),
        });
    }

    /// Registered by the painter for each billboard it actually draws;
    /// `radius` is half the drawn size.
    pub fn register_photo(&mut self, x: f32, y: f32, radius: f32, photo_index: usize) {
        self.regions.push(HitRegion {
            x,
            y,
            radius,
            payload: HitPayload::Photo(photo_index),
        });
    }

    pub fn find_heart(&self, x: f32, y: f32) -> Option<u32> {
        self.regions.iter().rev().find_map(|r| match r.payload {
            HitPayload::Heart(id) if r.contains(x, y) => Some(id),
            _ => None,
        })
    }

    pub fn find_photo(&self, x: f32, y: f32) -> Option<usize> {
        self.regions.iter().rev().find_map(|r| match r.payload {
            HitPayload::Photo(i) if r.contains(x, y) => Some(i),
            _ => None,
        })
    }
}
