//! Signature catalog of screen-sharing, remote-access and capture software.

use proctor_core::{AppSignature, Platform};
use tracing::debug;

/// Conferencing, remote-desktop, recording and messaging apps that can share
/// or capture the screen. Applies on every platform.
const SHARING_APPS: &[(&str, &[&str])] = &[
    ("Zoom", &["zoom", "zoomshare", "caphost"]),
    ("Microsoft Teams", &["teams", "teams.exe"]),
    ("Discord", &["discord", "discord.exe"]),
    ("Skype", &["skype", "skype.exe"]),
    ("Google Meet", &["meet.google.com"]),
    ("WebEx", &["webex", "webexmta", "webexhost"]),
    ("OBS Studio", &["obs", "obs-studio", "obs64", "obs.exe"]),
    ("TeamViewer", &["teamviewer", "teamviewer.exe"]),
    ("AnyDesk", &["anydesk", "anydesk.exe"]),
    ("Chrome Remote Desktop", &["chrome-remote-desktop", "remoting_host"]),
    ("VLC", &["vlc", "vlc.exe"]),
    ("QuickTime Player", &["quicktimeplayer"]),
    ("Slack", &["slack", "slack.exe"]),
];

/// Native screen capture utilities, macOS only.
const MACOS_CAPTURE_UTILS: &[(&str, &[&str])] = &[
    (
        "QuickTime Player Screen Recording",
        &["com.apple.screencapture", "QuickTimePlayerX"],
    ),
    ("Screenshot App", &["Screenshot", "screencaptureui"]),
    ("ScreenFlow", &["screenflow"]),
    ("Loom", &["loom"]),
    ("Snagit", &["snagit", "snagiteditor"]),
];

/// Browser process patterns. Not signatures: a browser alone never flags.
pub const BROWSER_PATTERNS: [&str; 4] = ["chrome", "firefox", "safari", "msedge"];

/// Label appended when a browser runs alongside a detected sharing app.
pub const BROWSER_SHARING_LABEL: &str = "Browser-based screen sharing (possible)";

/// Ordered set of application signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    signatures: Vec<AppSignature>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The built-in table: cross-platform entries first, then macOS ones.
    #[must_use]
    pub fn builtin() -> Self {
        let shared = SHARING_APPS
            .iter()
            .map(|(label, tokens)| AppSignature::new(*label, tokens.iter()));
        let macos = MACOS_CAPTURE_UTILS.iter().map(|(label, tokens)| {
            AppSignature::new(*label, tokens.iter()).only_on(Platform::MacOs)
        });

        Self {
            signatures: shared.chain(macos).collect(),
        }
    }

    /// Catalog with exactly these signatures.
    #[must_use]
    pub fn from_signatures(signatures: Vec<AppSignature>) -> Self {
        Self {
            signatures: signatures.into_iter().map(AppSignature::normalized).collect(),
        }
    }

    /// Append extra signatures after the existing ones.
    ///
    /// # Errors
    ///
    /// Rejects a signature with an empty label or no non-empty tokens; an
    /// empty token would match every process.
    pub fn extend(&mut self, extra: impl IntoIterator<Item = AppSignature>) -> Result<(), String> {
        for sig in extra {
            let sig = sig.normalized();
            if sig.label.trim().is_empty() {
                return Err("signature label must not be empty".to_string());
            }
            if sig.tokens.is_empty() || sig.tokens.iter().any(|t| t.trim().is_empty()) {
                return Err(format!("signature {:?} needs non-empty tokens", sig.label));
            }
            debug!(label = %sig.label, "adding custom signature");
            self.signatures.push(sig);
        }
        Ok(())
    }

    /// All signatures, catalog order.
    #[must_use]
    pub fn signatures(&self) -> &[AppSignature] {
        &self.signatures
    }

    /// Signatures in effect on `platform`, catalog order.
    pub fn applicable(&self, platform: Platform) -> impl Iterator<Item = &AppSignature> {
        self.signatures
            .iter()
            .filter(move |s| s.applies_to(platform))
    }

    /// Number of signatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_partitions() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.applicable(Platform::Linux).count(), 13);
        assert_eq!(catalog.applicable(Platform::Windows).count(), 13);
        assert_eq!(catalog.applicable(Platform::MacOs).count(), 18);
    }

    #[test]
    fn builtin_tokens_are_lowercase() {
        for sig in Catalog::builtin().signatures() {
            for token in &sig.tokens {
                assert_eq!(token, &token.to_lowercase(), "{}", sig.label);
            }
        }
    }

    #[test]
    fn order_is_preserved() {
        let catalog = Catalog::builtin();
        let labels: Vec<_> = catalog
            .applicable(Platform::Linux)
            .map(|s| s.label.as_str())
            .take(3)
            .collect();
        assert_eq!(labels, ["Zoom", "Microsoft Teams", "Discord"]);
    }

    #[test]
    fn extend_appends_and_validates() {
        let mut catalog = Catalog::builtin();
        catalog
            .extend([AppSignature::new("Parsec", ["ParsecD"])])
            .unwrap();
        let last = catalog.signatures().last().unwrap();
        assert_eq!(last.label, "Parsec");
        assert_eq!(last.tokens, ["parsecd"]);

        assert!(catalog.extend([AppSignature::new("", ["x"])]).is_err());
        assert!(catalog
            .extend([AppSignature::new("Blank", Vec::<String>::new())])
            .is_err());
        assert!(catalog.extend([AppSignature::new("Space", [" "])]).is_err());
    }
}
