//! Alias record entity pairing the two short forms of one long URL.

/// The pair of aliases that both redirect to the same long URL.
///
/// `human` is a hyphen-joined word slug, `bot` a fixed-length hex token.
/// Exactly one record exists per long URL in the canonical namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    pub human: String,
    pub bot: String,
}

impl AliasRecord {
    /// Creates a new AliasRecord instance.
    pub fn new(human: impl Into<String>, bot: impl Into<String>) -> Self {
        Self {
            human: human.into(),
            bot: bot.into(),
        }
    }

    /// Both aliases, in the order they are written to the redirection namespace.
    pub fn aliases(&self) -> [&str; 2] {
        [&self.bot, &self.human]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_record_creation() {
        let record = AliasRecord::new("brave-quiet-otter", "1a2b3c4d");

        assert_eq!(record.human, "brave-quiet-otter");
        assert_eq!(record.bot, "1a2b3c4d");
    }

    #[test]
    fn test_aliases_lists_bot_then_human() {
        let record = AliasRecord::new("brave-quiet-otter", "1a2b3c4d");
        assert_eq!(record.aliases(), ["1a2b3c4d", "brave-quiet-otter"]);
    }
}
