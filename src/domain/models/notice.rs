#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line status surfaced under the input box. Transport failures and
/// rollback availability land here; per-step verification failures are
/// rendered on the steps themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: &str) -> Notice {
        return Notice {
            kind: NoticeKind::Info,
            text: text.to_string(),
        };
    }

    pub fn error(text: &str) -> Notice {
        return Notice {
            kind: NoticeKind::Error,
            text: text.to_string(),
        };
    }
}
