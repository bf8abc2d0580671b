/// The three wp-config.php constants that control WordPress debugging.
///
/// `ALL` lists them in the order they are written by `enable`/`disable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugFlag {
    Debug,
    DebugLog,
    DebugDisplay,
}

impl DebugFlag {
    pub const ALL: [DebugFlag; 3] = [DebugFlag::Debug, DebugFlag::DebugLog, DebugFlag::DebugDisplay];

    /// Constant name as it appears in wp-config.php
    pub fn as_str(&self) -> &'static str {
        match self {
            DebugFlag::Debug => "WP_DEBUG",
            DebugFlag::DebugLog => "WP_DEBUG_LOG",
            DebugFlag::DebugDisplay => "WP_DEBUG_DISPLAY",
        }
    }
}

impl std::fmt::Display for DebugFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw literal written to the store for a boolean flag value.
pub fn raw_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// How a flag reads back from the configuration store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagState {
    Enabled,
    #[default]
    Disabled,
}

impl FlagState {
    /// Only the exact string "1" counts as enabled. A store that hands back
    /// the literal "true" reads as Disabled.
    pub fn from_store_value(value: Option<&str>) -> Self {
        match value {
            Some("1") => FlagState::Enabled,
            _ => FlagState::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, FlagState::Enabled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlagState::Enabled => "Enabled",
            FlagState::Disabled => "Disabled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_constant_name() {
        assert_eq!(DebugFlag::DebugLog.to_string(), "WP_DEBUG_LOG");
    }

    #[test]
    fn test_write_order() {
        let names: Vec<_> = DebugFlag::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["WP_DEBUG", "WP_DEBUG_LOG", "WP_DEBUG_DISPLAY"]);
    }

    #[test]
    fn test_only_one_is_enabled() {
        assert_eq!(FlagState::from_store_value(Some("1")), FlagState::Enabled);
        assert_eq!(FlagState::from_store_value(Some("true")), FlagState::Disabled);
        assert_eq!(FlagState::from_store_value(Some("")), FlagState::Disabled);
        assert_eq!(FlagState::from_store_value(Some(" 1")), FlagState::Disabled);
        assert_eq!(FlagState::from_store_value(None), FlagState::Disabled);
    }

    #[test]
    fn test_raw_bool() {
        assert_eq!(raw_bool(true), "true");
        assert_eq!(raw_bool(false), "false");
    }
}
