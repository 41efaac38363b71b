//! User-facing notices shown after a submission.

/// Tone of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast-style message for the lead. Never carries error internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
    /// Alternate contact channel offered on failure.
    pub contact_link: Option<String>,
}

impl Notice {
    pub fn submitted() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Order Submitted!".to_string(),
            description:
                "Your project inquiry has been sent successfully. We will get back to you soon!"
                    .to_string(),
            contact_link: None,
        }
    }

    pub fn failed(contact_link: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            description:
                "Failed to send your inquiry. Please try again or contact us via WhatsApp."
                    .to_string(),
            contact_link: Some(contact_link.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
