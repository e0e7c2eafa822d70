use serde::Serialize;

use magazyn_core::DomainError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// One-shot notification shown in the response to the action that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn added(product: &str) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: format!("Added: {product}"),
        }
    }

    pub fn removed(product: &str) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: format!("Removed: {product}"),
        }
    }

    /// User-facing rendering of a failed action.
    pub fn for_error(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(_) => Self {
                level: NoticeLevel::Warning,
                message: "Product name cannot be empty.".to_string(),
            },
            DomainError::NotFound(product) => Self {
                level: NoticeLevel::Error,
                message: format!("Error: product '{product}' not found."),
            },
            DomainError::InvalidId(msg) => Self {
                level: NoticeLevel::Error,
                message: format!("Error: {msg}"),
            },
        }
    }
}
