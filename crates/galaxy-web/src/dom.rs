use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep the canvas backing store sized to its CSS box times the device
/// pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Dispatch an outbound interaction event on `window` so the hosting page
/// can react (open the photo viewer, return to the upload screen).
pub fn dispatch_custom_event(name: &str, detail: &JsValue) {
    if let Some(w) = web::window() {
        let init = web::CustomEventInit::new();
        init.set_detail(detail);
        if let Ok(ev) = web::CustomEvent::new_with_event_init_dict(name, &init) {
            let _ = w.dispatch_event(&ev);
        }
    }
}

/// Pointer client coordinates mapped into canvas backing-store pixels.
pub fn client_to_canvas_px(canvas: &web::HtmlCanvasElement, client_x: f32, client_y: f32) -> glam::Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    glam::Vec2::new(sx, sy)
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    let _ = canvas.style().set_property("cursor", cursor);
}
