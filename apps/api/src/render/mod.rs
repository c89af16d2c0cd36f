// Rendering
// Builders produce a typed Document tree; html/text serializers emit markup or
// export content. The evaluation engine never touches presentation.

pub mod cover_letter;
pub mod document;
pub mod feedback;
pub mod html;
pub mod resume;
pub mod text;

pub use html::to_html;
pub use text::to_text;
