// src/report/level.rs

/// Three-level impact rating shared by event severity and scenario risk,
/// plus a catch-all for anything the service sends that is not one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl Level {
    /// Case-insensitive and total: every string maps to exactly one level.
    pub fn classify(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => Level::Low,
            "medium" => Level::Medium,
            "high" => Level::High,
            _ => Level::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
            Level::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_ignores_case() {
        for value in ["HIGH", "High", "high", "hIgH"] {
            assert_eq!(Level::classify(value), Level::High, "{value}");
        }
        assert_eq!(Level::classify("Low"), Level::Low);
        assert_eq!(Level::classify("MEDIUM"), Level::Medium);
    }

    #[test]
    fn anything_else_is_unknown() {
        for value in ["critical", "", "   ", "med", "high!", "ниже", "\u{0}"] {
            assert_eq!(Level::classify(value), Level::Unknown, "{value:?}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(Level::classify(" medium\n"), Level::Medium);
    }

    #[test]
    fn classification_is_stable_under_its_own_label() {
        for level in [Level::Low, Level::Medium, Level::High, Level::Unknown] {
            assert_eq!(Level::classify(level.as_str()), level);
        }
    }
}
