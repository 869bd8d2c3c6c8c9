#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use galaxy_core::{Scene, Theme};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod draw;
mod events;
mod frame;
mod images;

use images::ImageCache;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("galaxy-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("galaxy-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #galaxy-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);
    dom::set_cursor(&canvas, "grab");

    // Keep the backing store in step with CSS size * devicePixelRatio; the
    // frame loop notices the change and rebuilds the field.
    {
        let canvas_resize = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            let _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let seed = js_sys::Date::now() as u64;
    let scene = Rc::new(RefCell::new(Scene::new(
        canvas.width() as f32,
        canvas.height() as f32,
        Theme::default(),
        seed,
    )));
    let images = Rc::new(RefCell::new(ImageCache::new()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        images: images.clone(),
    });
    events::wire_theme_keys(scene.clone());
    events::wire_host_channels(scene.clone(), images.clone());

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        scene,
        images,
        canvas,
        ctx,
    })));
    Ok(())
}
