pub mod html;
pub mod json;

pub use html::HtmlRenderer;
pub use json::render_json;
