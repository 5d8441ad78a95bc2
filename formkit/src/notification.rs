use std::time::Duration;

/// Style tag of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Remind,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Remind => "remind",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub message: String,
    pub kind: NotificationKind,
    /// `None` keeps the notification open until the user closes it.
    pub dismiss_after: Option<Duration>,
    pub show_actions: bool,
}

impl NotificationRequest {
    /// Short-lived message without a close button.
    pub fn transient(message: impl Into<String>, kind: NotificationKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            dismiss_after: Some(duration),
            show_actions: false,
        }
    }

    /// Modal message that stays until the user closes it.
    pub fn modal(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            dismiss_after: None,
            show_actions: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyState {
    Busy,
    Idle,
}

/// Presentation side of a submission.
pub trait Presenter {
    fn set_busy(&self, state: BusyState);

    fn notify(&self, request: NotificationRequest);

    /// Blocking alert.
    fn alert(&self, message: &str);

    fn navigate_after(&self, url: &str, delay: Duration);
}
