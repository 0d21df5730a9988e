//! Variation preset keys and settings resolution.
//!
//! Settings arrive as optional strings (stored defaults, per-call
//! overrides). Each key type resolves with a documented fallback, so an
//! unknown or absent key is never an error.

use serde::{Deserialize, Serialize};

/// Voice of the summary.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum ToneKey {
    /// Sharp, clever, a little playful
    #[default]
    #[display("witty")]
    Witty,
    /// Neutral business register
    #[display("professional")]
    Professional,
    /// Conversational, like texting a friend
    #[display("casual")]
    Casual,
    /// Scholarly and precise
    #[display("academic")]
    Academic,
}

/// Target length of the summary.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum LengthKey {
    /// One punchy sentence
    #[display("one-liner")]
    OneLiner,
    /// One to two sentences
    #[default]
    #[display("brief")]
    Brief,
    /// Three to four sentences with context
    #[display("detailed")]
    Detailed,
}

/// What the summary concentrates on.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum FocusKey {
    /// Concrete facts and takeaways
    #[default]
    #[display("key-facts")]
    KeyFacts,
    /// The author's stance and arguments
    #[display("opinions")]
    Opinions,
    /// What the article means going forward
    #[display("implications")]
    Implications,
}

/// Sampling temperature preset.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum CreativityKey {
    /// Low temperature, stable phrasing
    #[display("consistent")]
    Consistent,
    /// Middle ground
    #[default]
    #[display("balanced")]
    Balanced,
    /// High temperature, more surprising phrasing
    #[display("creative")]
    Creative,
}

macro_rules! key_impls {
    ($ty:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        impl $ty {
            /// String form of this key, as used in stored settings.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $key,)+
                }
            }

            /// Resolve an optional key string, falling back to the default
            /// when the string is absent or unknown.
            pub fn resolve(key: Option<&str>) -> Self {
                key.and_then(|s| s.parse().ok()).unwrap_or_default()
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($ty::$variant),)+
                    _ => Err(format!("Unknown {} key: {}", stringify!($ty), s)),
                }
            }
        }
    };
}

key_impls!(ToneKey {
    Witty => "witty",
    Professional => "professional",
    Casual => "casual",
    Academic => "academic",
});

key_impls!(LengthKey {
    OneLiner => "one-liner",
    Brief => "brief",
    Detailed => "detailed",
});

key_impls!(FocusKey {
    KeyFacts => "key-facts",
    Opinions => "opinions",
    Implications => "implications",
});

key_impls!(CreativityKey {
    Consistent => "consistent",
    Balanced => "balanced",
    Creative => "creative",
});

/// Optional settings fields as they arrive from storage or a caller.
///
/// The same shape serves as stored user defaults and as per-call
/// overrides; [`VariationSettings::resolve`] merges the two layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch {
    /// Tone preset key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    /// Length preset key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    /// Focus preset key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    /// Creativity preset key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creativity: Option<String>,
}

/// Fully resolved variation settings for one summarization request.
///
/// Immutable once constructed; built fresh per request by merging stored
/// defaults with per-call overrides.
///
/// # Examples
///
/// ```
/// use gist_core::{SettingsPatch, ToneKey, VariationSettings};
///
/// let stored = SettingsPatch {
///     tone: Some("professional".to_string()),
///     ..Default::default()
/// };
/// let overrides = SettingsPatch {
///     tone: Some("casual".to_string()),
///     ..Default::default()
/// };
///
/// let settings = VariationSettings::resolve(&stored, &overrides);
/// assert_eq!(settings.tone, ToneKey::Casual);
///
/// // Unknown keys fall back rather than erroring.
/// let bogus = SettingsPatch {
///     tone: Some("sarcastic".to_string()),
///     ..Default::default()
/// };
/// let settings = VariationSettings::from_patch(&bogus);
/// assert_eq!(settings.tone, ToneKey::Witty);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VariationSettings {
    /// Voice of the summary
    pub tone: ToneKey,
    /// Target length
    pub length: LengthKey,
    /// Content emphasis
    pub focus: FocusKey,
    /// Sampling temperature preset
    pub creativity: CreativityKey,
}

impl VariationSettings {
    /// Resolve settings from stored defaults plus per-call overrides.
    ///
    /// Each field is merged independently: override wins over stored,
    /// stored wins over the built-in default, unknown strings fall back.
    pub fn resolve(stored: &SettingsPatch, overrides: &SettingsPatch) -> Self {
        Self {
            tone: ToneKey::resolve(overrides.tone.as_deref().or(stored.tone.as_deref())),
            length: LengthKey::resolve(overrides.length.as_deref().or(stored.length.as_deref())),
            focus: FocusKey::resolve(overrides.focus.as_deref().or(stored.focus.as_deref())),
            creativity: CreativityKey::resolve(
                overrides.creativity.as_deref().or(stored.creativity.as_deref()),
            ),
        }
    }

    /// Resolve settings from a single patch layer.
    pub fn from_patch(patch: &SettingsPatch) -> Self {
        Self::resolve(patch, &SettingsPatch::default())
    }
}
