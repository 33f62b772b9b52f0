use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Create `<tag class="...">`, optionally with text content.
pub fn element(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> anyhow::Result<web::Element> {
    let el = document.create_element(tag).map_err(js_err)?;
    el.set_class_name(class);
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    Ok(el)
}

#[inline]
pub fn set_style(el: &web::Element, css: &str) {
    _ = el.set_attribute("style", css);
}
