//! Static preset tables behind the prompt engine.
//!
//! One descriptor per preset key. Lookups are total matches over the key
//! enums in `gist_core`, so every key has an entry by construction;
//! unknown wire strings are handled upstream by key resolution.

use gist_core::{CreativityKey, FocusKey, LengthKey, ToneKey};

/// Writing-voice descriptor for a tone preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonePreset {
    /// Human-readable preset name.
    pub name: &'static str,
    /// Style instruction interpolated into the system prompt.
    pub instruction: &'static str,
    /// Example summaries shown to the model as good output.
    pub examples: &'static [&'static str],
}

/// Target-length descriptor for a length preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPreset {
    /// Human-readable preset name.
    pub name: &'static str,
    /// Length instruction interpolated into the system prompt.
    pub instruction: &'static str,
    /// Output token budget sent with the request.
    pub max_output_tokens: u32,
}

/// Content-emphasis descriptor for a focus preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusPreset {
    /// Human-readable preset name.
    pub name: &'static str,
    /// Focus instruction interpolated into the system prompt.
    pub instruction: &'static str,
}

/// Sampling descriptor for a creativity preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreativityPreset {
    /// Human-readable preset name.
    pub name: &'static str,
    /// Sampling temperature sent with the request.
    pub temperature: f32,
}

static WITTY: TonePreset = TonePreset {
    name: "Witty",
    instruction: "Be clever and witty. Use wordplay, irony, or unexpected angles. \
                  Make the reader smile.",
    examples: &[
        "Scientists confirmed what cat owners always suspected: yes, your cat is \
         ignoring you on purpose.",
        "Another tech startup learned that \"move fast and break things\" works \
         better as a motto than a legal defense.",
    ],
};

static PROFESSIONAL: TonePreset = TonePreset {
    name: "Professional",
    instruction: "Be clear, authoritative, and precise. Suitable for business contexts.",
    examples: &[
        "New research demonstrates a 47% improvement in battery efficiency using \
         solid-state technology.",
        "Market analysis indicates sustained growth in the renewable energy sector \
         through 2030.",
    ],
};

static CASUAL: TonePreset = TonePreset {
    name: "Casual",
    instruction: "Be friendly and conversational. Write like you're telling a friend \
                  about something interesting.",
    examples: &[
        "So basically, they figured out how to make batteries last way longer - \
         pretty cool stuff.",
        "Turns out, getting enough sleep is even more important than we thought. \
         Who knew?",
    ],
};

static ACADEMIC: TonePreset = TonePreset {
    name: "Academic",
    instruction: "Be scholarly and nuanced. Acknowledge complexity and cite key findings.",
    examples: &[
        "The study presents compelling evidence for neuroplasticity in adult \
         subjects, challenging previous assumptions.",
        "This analysis contributes to our understanding of market dynamics under \
         conditions of asymmetric information.",
    ],
};

static ONE_LINER: LengthPreset = LengthPreset {
    name: "One-liner",
    instruction: "Summarize in exactly ONE punchy sentence. Maximum 20 words.",
    max_output_tokens: 100,
};

static BRIEF: LengthPreset = LengthPreset {
    name: "Brief",
    instruction: "Summarize in 1-2 sentences. Keep it under 40 words total.",
    max_output_tokens: 200,
};

static DETAILED: LengthPreset = LengthPreset {
    name: "Detailed",
    instruction: "Provide a thorough summary in 3-4 sentences. Include context and nuance.",
    max_output_tokens: 400,
};

static KEY_FACTS: FocusPreset = FocusPreset {
    name: "Key Facts",
    instruction: "Focus on the most important factual information. What are the \
                  concrete takeaways?",
};

static OPINIONS: FocusPreset = FocusPreset {
    name: "Opinions",
    instruction: "Focus on the author's perspective and arguments. What is their stance?",
};

static IMPLICATIONS: FocusPreset = FocusPreset {
    name: "Implications",
    instruction: "Focus on what this means for the reader. Why should they care?",
};

static CONSISTENT: CreativityPreset = CreativityPreset {
    name: "Consistent",
    temperature: 0.3,
};

static BALANCED: CreativityPreset = CreativityPreset {
    name: "Balanced",
    temperature: 0.7,
};

static CREATIVE: CreativityPreset = CreativityPreset {
    name: "Creative",
    temperature: 1.0,
};

/// Tone descriptor for `key`.
pub fn tone(key: ToneKey) -> &'static TonePreset {
    match key {
        ToneKey::Witty => &WITTY,
        ToneKey::Professional => &PROFESSIONAL,
        ToneKey::Casual => &CASUAL,
        ToneKey::Academic => &ACADEMIC,
    }
}

/// Length descriptor for `key`.
pub fn length(key: LengthKey) -> &'static LengthPreset {
    match key {
        LengthKey::OneLiner => &ONE_LINER,
        LengthKey::Brief => &BRIEF,
        LengthKey::Detailed => &DETAILED,
    }
}

/// Focus descriptor for `key`.
pub fn focus(key: FocusKey) -> &'static FocusPreset {
    match key {
        FocusKey::KeyFacts => &KEY_FACTS,
        FocusKey::Opinions => &OPINIONS,
        FocusKey::Implications => &IMPLICATIONS,
    }
}

/// Creativity descriptor for `key`.
pub fn creativity(key: CreativityKey) -> &'static CreativityPreset {
    match key {
        CreativityKey::Consistent => &CONSISTENT,
        CreativityKey::Balanced => &BALANCED,
        CreativityKey::Creative => &CREATIVE,
    }
}
