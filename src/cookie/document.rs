use super::Jar;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// The page's own cookie jar, `document.cookie`.
///
/// Outside a window (a worker, say) reads come back empty and writes are
/// dropped, same as a browser with cookies disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentJar;

fn document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

impl Jar for DocumentJar {
    fn cookie(&self) -> String {
        document()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }
    fn set_cookie(&mut self, assignment: &str) {
        if let Some(doc) = document() {
            let _ = doc.set_cookie(assignment);
        }
    }
}
