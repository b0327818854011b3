/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Review verdict for a homework submission.
///
/// Closed set: the API documents exactly these three codes, and anything else
/// is treated as a contract violation rather than silently skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Fixed human-readable verdict sentence (original product text).
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_statuses() {
        assert_eq!(ReviewStatus::from_code("approved"), Some(ReviewStatus::Approved));
        assert_eq!(ReviewStatus::from_code("reviewing"), Some(ReviewStatus::Reviewing));
        assert_eq!(ReviewStatus::from_code("rejected"), Some(ReviewStatus::Rejected));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(ReviewStatus::from_code("APPROVED"), None);
        assert_eq!(ReviewStatus::from_code("pending"), None);
        assert_eq!(ReviewStatus::from_code(""), None);
    }
}
