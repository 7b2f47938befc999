use crate::constants::*;
use crate::layout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// CSS size of the window's layout viewport.
pub fn viewport_css_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (read(w.inner_width()), read(w.inner_height()))
}

pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Create the spark canvas inside the layer element, or `body` when the page has no layer.
pub fn create_layer_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let host: web::Element = match document.query_selector(LAYER_SELECTOR) {
        Ok(Some(el)) => el,
        _ => {
            log::warn!("[dom] no {LAYER_SELECTOR}; attaching to body");
            document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no body"))?
                .into()
        }
    };
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    canvas
        .set_attribute("style", CANVAS_CSS)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas
        .set_attribute("aria-hidden", "true")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    host.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = layout::backing_size(rect.width(), rect.height(), device_pixel_ratio());
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}

pub fn set_opacity(el: &web::HtmlElement, opacity: f32) {
    _ = el
        .style()
        .set_property("opacity", &format!("{:.3}", opacity.clamp(0.0, 1.0)));
}

pub fn remove_element(el: &web::Element) {
    el.remove();
}

#[inline]
pub fn document_hidden() -> bool {
    window_document()
        .map(|d| d.visibility_state() == web::VisibilityState::Hidden)
        .unwrap_or(false)
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
