use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Load an image and resolve once it has decoded, or fail on a load error.
pub async fn load_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let target = img.clone();
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move || {
            _ = reject.call0(&JsValue::NULL);
        });
        target.set_onload(Some(onload.unchecked_ref()));
        target.set_onerror(Some(onerror.unchecked_ref()));
        target.set_src(url);
    });
    JsFuture::from(promise)
        .await
        .map_err(|_| anyhow::anyhow!("failed to load {url}"))?;
    img.set_onload(None);
    img.set_onerror(None);
    Ok(img)
}
