#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use sparkfield_core::constants::{DEFAULT_MAX_PARTICLES, DEFAULT_SPAWN_RATE};
use sparkfield_core::{AnimationRegistry, Easing, Sequence, SparkField, Tween};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod frame;
mod layout;
mod render;

type Registry = Rc<RefCell<AnimationRegistry>>;
type Debounce = Rc<RefCell<layout::ResizeDebounce>>;

fn wire_viewport_resize(window: &web::Window, resize: Debounce) {
    dom::add_listener(window, "resize", move || {
        let (w, h) = dom::viewport_css_size();
        resize.borrow_mut().note(w, h, dom::now_ms());
    });
}

fn wire_page_lifecycle(
    document: &web::Document,
    window: &web::Window,
    registry: Registry,
    resize: Debounce,
    frame_loop: Rc<frame::FrameLoop>,
) {
    let registry_vis = registry.clone();
    dom::add_listener(document, "visibilitychange", move || {
        let mut reg = registry_vis.borrow_mut();
        if dom::document_hidden() {
            log::info!("[page] hidden; pausing");
            reg.pause_all();
        } else {
            log::info!("[page] visible; resuming");
            reg.start_all();
        }
    });

    dom::add_listener(window, "pagehide", move || {
        resize.borrow_mut().cancel();
        registry.borrow_mut().stop_all();
        frame_loop.cancel();
    });
}

fn layer_fade_in(canvas: &web::HtmlCanvasElement) -> Sequence {
    let layer: web::HtmlElement = canvas.clone().into();
    let mut fade = Sequence::new()
        .wait(LAYER_FADE_IN_DELAY_SEC)
        .then(
            Tween::new(0.0, 1.0, LAYER_FADE_IN_SEC).with_easing(Easing::OutQuad),
            move |v| dom::set_opacity(&layer, v),
        )
        .on_complete(|| log::info!("[fade] spark layer visible"));
    fade.play();
    fade
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sparkfield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::create_layer_canvas(&document)?;
    dom::sync_canvas_backing_size(&canvas);

    let registry: Registry = Rc::new(RefCell::new(AnimationRegistry::new()));
    let resize: Debounce = Rc::new(RefCell::new(layout::ResizeDebounce::new(RESIZE_DEBOUNCE_MS)));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        registry.clone(),
        resize.clone(),
    )));
    let frame_loop = Rc::new(frame::FrameLoop::start(frame_ctx));

    wire_viewport_resize(&window, resize.clone());
    wire_page_lifecycle(&document, &window, registry.clone(), resize, frame_loop);

    // The page may be left while the texture is in flight; the registry then
    // discards the field, which releases the canvas.
    let texture = match assets::load_image(SPARK_TEXTURE_URL).await {
        Ok(img) => Some(img),
        Err(e) => {
            log::warn!("[assets] {:?}", e);
            None
        }
    };

    let (width, height) = dom::viewport_css_size();
    let surface = render::CanvasSurface::new(&canvas, texture);
    let field = SparkField::initialize(
        width,
        height,
        DEFAULT_MAX_PARTICLES,
        DEFAULT_SPAWN_RATE,
        surface,
    );
    if !field.is_active() {
        dom::remove_element(&canvas);
        return Ok(());
    }

    let mut reg = registry.borrow_mut();
    if reg.register(SPARKS_ANIMATION, Box::new(field)) {
        reg.register(FADE_IN_ANIMATION, Box::new(layer_fade_in(&canvas)));
        if dom::document_hidden() {
            reg.pause_all();
        }
    }
    Ok(())
}
