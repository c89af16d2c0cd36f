//! Export — packages rendered plain text as a named download.
//!
//! No real PDF is produced: the body is the plain-text rendering, served as an
//! attachment under the `.pdf` name the widget expects.

use axum::{
    http::{header, HeaderName},
    response::{IntoResponse, Response},
};

use crate::notification::Notification;

/// Carries the JSON-encoded success toast alongside the attachment body.
pub const NOTIFICATION_HEADER: &str = "x-notification";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportKind {
    Resume,
    CoverLetter,
}

impl ExportKind {
    fn suffix(self) -> &'static str {
        match self {
            ExportKind::Resume => "resume",
            ExportKind::CoverLetter => "cover_letter",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            ExportKind::Resume => "Resume downloaded successfully!",
            ExportKind::CoverLetter => "Cover letter downloaded!",
        }
    }
}

/// `<name with whitespace runs as underscores>_<kind>.pdf`.
/// Surrounding whitespace is dropped, as are control characters and `"`
/// (both invalid inside the quoted header value). A blank name uses the kind
/// itself as the stem.
pub fn export_filename(name: &str, kind: ExportKind) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_whitespace() || (!c.is_control() && *c != '"'))
        .collect();
    let stem = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    let stem = if stem.is_empty() { kind.suffix() } else { stem.as_str() };
    format!("{stem}_{}.pdf", kind.suffix())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
    pub notification: Notification,
}

impl ExportedDocument {
    pub fn new(name: &str, kind: ExportKind, body: String) -> Self {
        Self {
            filename: export_filename(name, kind),
            content_type: "text/plain; charset=utf-8",
            body,
            notification: Notification::success(kind.success_message()),
        }
    }
}

impl IntoResponse for ExportedDocument {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.filename);
        // Serializing a struct of strings and integers cannot fail
        let notification = serde_json::to_string(&self.notification).unwrap_or_default();
        (
            [
                (header::CONTENT_TYPE, self.content_type.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
                (HeaderName::from_static(NOTIFICATION_HEADER), notification),
            ],
            self.body,
        )
            .into_response()
    }
}
