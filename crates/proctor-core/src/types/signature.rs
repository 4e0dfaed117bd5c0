//! Known application signatures.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// A known application and the substrings that identify its processes.
///
/// Tokens are matched case-insensitively against both the process name and
/// its command line, so they are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSignature {
    /// Human-readable application label
    pub label: String,
    /// Lowercase substrings to look for
    pub tokens: Vec<String>,
    /// Only applies on this platform when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl AppSignature {
    /// Signature that applies on every platform.
    pub fn new<I, S>(label: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            label: label.into(),
            tokens: tokens
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
            platform: None,
        }
    }

    /// Restrict the signature to one platform.
    #[must_use]
    pub fn only_on(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Whether the signature is in effect on `platform`.
    #[must_use]
    pub fn applies_to(&self, platform: Platform) -> bool {
        self.platform.map_or(true, |p| p == platform)
    }

    /// Lowercase tokens in place; signatures read from config may be mixed case.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for token in &mut self.tokens {
            *token = token.to_lowercase();
        }
        self
    }

    /// Whether any token occurs in the given lowercase text.
    #[must_use]
    pub fn matches(&self, haystack: &str) -> bool {
        self.tokens.iter().any(|t| haystack.contains(t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_lowercased() {
        let sig = AppSignature::new("QuickTime", ["QuickTimePlayerX"]);
        assert_eq!(sig.tokens, vec!["quicktimeplayerx".to_string()]);
        assert!(sig.matches("/applications/quicktimeplayerx.app"));
    }

    #[test]
    fn restriction_gates_platform() {
        let sig = AppSignature::new("Loom", ["loom"]).only_on(Platform::MacOs);
        assert!(sig.applies_to(Platform::MacOs));
        assert!(!sig.applies_to(Platform::Linux));
        assert!(AppSignature::new("Zoom", ["zoom"]).applies_to(Platform::Windows));
    }
}
