//! The per-frame driver: one continuously rescheduled animation callback
//! that advances the simulation and repaints the full frame.

use std::cell::RefCell;
use std::rc::Rc;

use galaxy_core::Scene;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::draw;
use crate::images::ImageCache;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub images: Rc<RefCell<ImageCache>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut scene = self.scene.borrow_mut();

        // Track the canvas backing size; a change rebuilds the field while
        // keeping camera and sprite state.
        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        if (w - scene.width).abs() >= 1.0 || (h - scene.height).abs() >= 1.0 {
            scene.resize(w, h);
        }

        scene.tick();

        let images = self.images.borrow();
        draw::draw_background(&self.ctx, &scene);
        draw::draw_field(&self.ctx, &mut scene, &images);
        draw::draw_overlays(&self.ctx, &scene);
    }
}

/// Kick off the self-rescheduling requestAnimationFrame loop. It runs until
/// the page tears the window down.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
