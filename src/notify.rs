//! User-facing notifications
//!
//! Forms report the outcome of every mutation through a [`NotificationSink`].
//! The binary prints them with [`ConsoleNotifier`]; tests collect them in a
//! [`NotificationQueue`].

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    /// A failed operation
    Error,
}

impl NotificationType {
    /// Prefix shown before the title
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

/// A titled message with a severity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        notification_type: NotificationType,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            notification_type,
        }
    }

    /// Create a success notification
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationType::Success)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationType::Info)
    }

    /// Create a warning notification
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationType::Warning)
    }

    /// Create an error notification
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationType::Error)
    }

    pub fn is_error(&self) -> bool {
        self.notification_type == NotificationType::Error
    }
}

/// Receives notifications emitted by forms
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Prints notifications to the terminal
///
/// Errors and warnings go to stderr, everything else to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        let line = format!(
            "[{}] {}: {}",
            notification.notification_type.icon(),
            notification.title,
            notification.message
        );

        tracing::debug!(
            kind = ?notification.notification_type,
            title = %notification.title,
            "notification"
        );

        match notification.notification_type {
            NotificationType::Error | NotificationType::Warning => eprintln!("{}", line),
            NotificationType::Info | NotificationType::Success => println!("{}", line),
        }
    }
}

/// Collects notifications in arrival order
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent notification, if any
    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl NotificationSink for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
