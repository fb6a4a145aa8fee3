/// Transient notification shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    pub fn required_fields() -> Self {
        Self::error("Please fill in all required fields")
    }

    pub fn created() -> Self {
        Self::success("Submission created successfully!")
    }

    pub fn updated() -> Self {
        Self::success("Submission updated successfully!")
    }

    pub fn save_failed() -> Self {
        Self::error("Failed to save submission")
    }

    pub fn fetch_failed() -> Self {
        Self::error("Failed to fetch submissions")
    }

    pub fn deleted() -> Self {
        Self::success("Submission deleted successfully!")
    }

    pub fn delete_failed() -> Self {
        Self::error("Failed to delete submission")
    }

    pub fn not_found() -> Self {
        Self::error("Submission not found")
    }

    /// Short code carried across a redirect (`?notice=updated`).
    pub fn code(&self) -> Option<&'static str> {
        match self.message.as_str() {
            "Submission created successfully!" => Some("created"),
            "Submission updated successfully!" => Some("updated"),
            "Submission deleted successfully!" => Some("deleted"),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "created" => Some(Self::created()),
            "updated" => Some(Self::updated()),
            "deleted" => Some(Self::deleted()),
            _ => None,
        }
    }
}
