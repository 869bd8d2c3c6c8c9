//! DOM event wiring. Each handler owns Rc clones of the shared simulation
//! context and only mutates it; all derived per-frame state is read back
//! through the hit registry inside `Scene::pointer_down`.

use std::cell::RefCell;
use std::rc::Rc;

use galaxy_core::{Interaction, PointerKind, Scene, Theme, THEMES};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::dom;
use crate::images::ImageCache;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub images: Rc<RefCell<ImageCache>>,
}

fn touch_canvas_px(canvas: &web::HtmlCanvasElement, touch: &web::Touch) -> glam::Vec2 {
    dom::client_to_canvas_px(canvas, touch.client_x() as f32, touch.client_y() as f32)
}

fn pinch_distance(touches: &web::TouchList) -> Option<f32> {
    let a = touches.get(0)?;
    let b = touches.get(1)?;
    let dx = (a.client_x() - b.client_x()) as f32;
    let dy = (a.client_y() - b.client_y()) as f32;
    Some(dx.hypot(dy))
}

fn resolve_pointer_down(
    scene: &Rc<RefCell<Scene>>,
    images: &Rc<RefCell<ImageCache>>,
    canvas: &web::HtmlCanvasElement,
    x: f32,
    y: f32,
) {
    match scene.borrow_mut().pointer_down(x, y) {
        Interaction::HeartPopped => {
            log::debug!("heart popped at ({x:.0},{y:.0})");
        }
        Interaction::PhotoFocused(index) => {
            if index < images.borrow().len() {
                dom::dispatch_custom_event("galaxy:photo-focus", &JsValue::from_f64(index as f64));
            }
        }
        Interaction::BeginDrag => dom::set_cursor(canvas, "grabbing"),
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    // mousedown: hit-test first, drag only on a miss
    {
        let scene = w.scene.clone();
        let images = w.images.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let pos = dom::client_to_canvas_px(&canvas, ev.client_x() as f32, ev.client_y() as f32);
            resolve_pointer_down(&scene, &images, &canvas, pos.x, pos.y);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // mousemove on window so drags survive leaving the canvas
    {
        let scene = w.scene.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let pos = dom::client_to_canvas_px(&canvas, ev.client_x() as f32, ev.client_y() as f32);
            scene
                .borrow_mut()
                .camera
                .pointer_move(pos.x, pos.y, PointerKind::Mouse);
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // mouseup
    {
        let scene = w.scene.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            scene.borrow_mut().camera.pointer_up();
            dom::set_cursor(&canvas, "grab");
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // wheel zoom
    {
        let scene = w.scene.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ev.prevent_default();
            scene.borrow_mut().camera.wheel(ev.delta_y() as f32);
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // double click resets the whole session back to the upload state
    {
        let scene = w.scene.clone();
        let images = w.images.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            images.borrow_mut().clear();
            scene.borrow_mut().set_photo_count(0);
            dom::dispatch_custom_event("galaxy:reset", &JsValue::NULL);
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchstart: one finger taps/drags, two fingers pinch
    {
        let scene = w.scene.clone();
        let images = w.images.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let touches = ev.touches();
            if touches.length() == 1 {
                if let Some(t) = touches.get(0) {
                    let pos = touch_canvas_px(&canvas, &t);
                    resolve_pointer_down(&scene, &images, &canvas, pos.x, pos.y);
                }
            } else if let Some(dist) = pinch_distance(&touches) {
                scene.borrow_mut().camera.begin_pinch(dist);
            }
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchmove
    {
        let scene = w.scene.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            ev.prevent_default();
            let touches = ev.touches();
            if touches.length() == 1 {
                if let Some(t) = touches.get(0) {
                    let pos = touch_canvas_px(&canvas, &t);
                    scene
                        .borrow_mut()
                        .camera
                        .pointer_move(pos.x, pos.y, PointerKind::Touch);
                }
            } else if let Some(dist) = pinch_distance(&touches) {
                scene.borrow_mut().camera.pinch_move(dist);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchend
    {
        let scene = w.scene.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            scene.borrow_mut().camera.pointer_up();
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

/// Digits 1-5 switch between the built-in palettes.
pub fn wire_theme_keys(scene: Rc<RefCell<Scene>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if let Some(theme) = key
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| THEMES.get(i))
        {
            log::info!("theme: {}", theme.name);
            scene.borrow_mut().set_theme(theme.clone());
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Inbound channels from the hosting page:
/// `galaxy:photos` with an array of image URLs replaces the photo set, and
/// `galaxy:theme` with a palette id or a seven-color list swaps the theme.
pub fn wire_host_channels(scene: Rc<RefCell<Scene>>, images: Rc<RefCell<ImageCache>>) {
    {
        let scene = scene.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::CustomEvent| {
            let urls: Vec<String> = js_sys::Array::from(&ev.detail())
                .iter()
                .filter_map(|v| v.as_string())
                .collect();
            images.borrow_mut().load(&urls);
            scene.borrow_mut().set_photo_count(urls.len());
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("galaxy:photos", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |ev: web::CustomEvent| {
            let Some(request) = ev.detail().as_string() else {
                return;
            };
            let theme = match Theme::by_id(&request) {
                Some(t) => t.clone(),
                None => match Theme::from_css_list(&request) {
                    Ok(t) => t,
                    Err(e) => {
                        log::warn!("ignoring theme {request:?}: {e}");
                        return;
                    }
                },
            };
            log::info!("theme: {}", theme.name);
            scene.borrow_mut().set_theme(theme);
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("galaxy:theme", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
