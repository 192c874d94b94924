//! Decoder configuration

/// What the decoder does with a name that matches no declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnknownPolicy {
    /// Skip it silently
    #[default]
    Ignore,
    /// Fail with a syntax error on its line
    Reject,
}

/// Decoder configuration
///
/// The default is lenient: an unknown section header clears the current
/// section (so the next item fails with
/// [`NoActiveSection`](crate::SyntaxErrorKind::NoActiveSection)), and
/// unknown item keys are dropped. Item keys only match tagged fields unless
/// [`match_untagged_items`](Self::match_untagged_items) is set.
///
/// # Example
///
/// ```
/// use iniconfig::{DecodeOptions, UnknownPolicy};
///
/// // Reject typos in section names but keep unknown keys forward compatible
/// let options = DecodeOptions::default().with_unknown_sections(UnknownPolicy::Reject);
/// assert_eq!(options.unknown_keys, UnknownPolicy::Ignore);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    /// Handling of `[name]` headers with no matching section field
    ///
    /// With [`UnknownPolicy::Reject`] the header line itself fails with
    /// [`UnknownSection`](crate::SyntaxErrorKind::UnknownSection).
    #[cfg_attr(feature = "serde", serde(default))]
    pub unknown_sections: UnknownPolicy,

    /// Handling of item keys with no matching field in the current section
    #[cfg_attr(feature = "serde", serde(default))]
    pub unknown_keys: UnknownPolicy,

    /// Also match item keys against the Rust names of untagged item fields
    ///
    /// Off by default. Turn it on to read back what [`encode`](crate::encode)
    /// writes for untagged items.
    #[cfg_attr(feature = "serde", serde(default))]
    pub match_untagged_items: bool,
}

impl DecodeOptions {
    /// Create options with explicit policies
    pub fn new(unknown_sections: UnknownPolicy, unknown_keys: UnknownPolicy) -> Self {
        Self {
            unknown_sections,
            unknown_keys,
            match_untagged_items: false,
        }
    }

    /// Reject both unknown sections and unknown keys
    pub fn strict() -> Self {
        Self::new(UnknownPolicy::Reject, UnknownPolicy::Reject)
    }

    /// Set the unknown-section policy
    pub fn with_unknown_sections(mut self, policy: UnknownPolicy) -> Self {
        self.unknown_sections = policy;
        self
    }

    /// Set the unknown-key policy
    pub fn with_unknown_keys(mut self, policy: UnknownPolicy) -> Self {
        self.unknown_keys = policy;
        self
    }

    /// Set whether untagged item fields match by their Rust name
    pub fn with_untagged_items(mut self, enabled: bool) -> Self {
        self.match_untagged_items = enabled;
        self
    }
}
