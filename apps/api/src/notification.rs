use serde::{Deserialize, Serialize};

/// Delay before the toast fades in.
pub const SHOW_AFTER_MS: u64 = 100;
/// How long the toast stays fully visible.
pub const VISIBLE_MS: u64 = 3000;
/// Fade-out time before removal.
pub const FADE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient status message for the widget to show as a toast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub show_after_ms: u64,
    pub visible_ms: u64,
    pub fade_ms: u64,
}

impl Notification {
    fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            show_after_ms: SHOW_AFTER_MS,
            visible_ms: VISIBLE_MS,
            fade_ms: FADE_MS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_timings() {
        let n = Notification::error("Failed to export.");
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.visible_ms, 3000);
        assert_eq!(n.fade_ms, 300);
    }

    #[test]
    fn test_notification_wire_format() {
        let value = serde_json::to_value(Notification::success("Saved")).unwrap();
        assert_eq!(value["kind"], "success");
        assert_eq!(value["visibleMs"], 3000);
        assert_eq!(value["showAfterMs"], 100);
    }
}
