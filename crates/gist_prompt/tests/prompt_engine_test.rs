//! Tests for the prompt configuration engine.

use gist_core::{
    Article, CreativityKey, FocusKey, LengthKey, ToneKey, VariationSettings,
};
use gist_prompt::{
    MAX_CONTENT_CHARS, TRUNCATION_MARKER, build_system_prompt, build_user_prompt,
    max_output_tokens_for, presets, request_spec, temperature_for,
};
use strum::IntoEnumIterator;

fn all_settings() -> impl Iterator<Item = VariationSettings> {
    ToneKey::iter().flat_map(|tone| {
        LengthKey::iter().flat_map(move |length| {
            FocusKey::iter().flat_map(move |focus| {
                CreativityKey::iter().map(move |creativity| VariationSettings {
                    tone,
                    length,
                    focus,
                    creativity,
                })
            })
        })
    })
}

#[test]
fn test_system_prompt_is_pure() {
    for settings in all_settings() {
        let first = build_system_prompt(&settings);
        let second = build_system_prompt(&settings);
        assert_eq!(first, second, "prompt differs for {:?}", settings);
    }
}

#[test]
fn test_system_prompt_varies_by_tone() {
    let mut prompts = Vec::new();
    for tone in ToneKey::iter() {
        let settings = VariationSettings {
            tone,
            ..Default::default()
        };
        let prompt = build_system_prompt(&settings);
        assert!(prompt.contains(presets::tone(tone).instruction));
        for example in presets::tone(tone).examples {
            assert!(prompt.contains(example), "{} example missing", tone);
        }
        prompts.push(prompt);
    }
    prompts.sort();
    prompts.dedup();
    assert_eq!(prompts.len(), 4, "each tone should render a distinct prompt");
}

#[test]
fn test_system_prompt_pins_output_contract() {
    for settings in all_settings() {
        let prompt = build_system_prompt(&settings);
        assert!(prompt.contains("valid JSON"));
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("\"keyPoints\""));
        assert!(prompt.contains("\"tone\""));
        assert!(prompt.contains("informative, opinion, news, technical, entertainment, analysis"));
        assert!(prompt.contains("This article discusses"));
        assert!(prompt.contains("In this piece, the author"));
        assert!(prompt.contains("The key takeaways are"));
    }
}

#[test]
fn test_unknown_keys_render_default_prompt() {
    let fallback = VariationSettings {
        tone: ToneKey::resolve(Some("sarcastic")),
        length: LengthKey::resolve(Some("novel")),
        focus: FocusKey::resolve(Some("gossip")),
        creativity: CreativityKey::resolve(Some("chaotic")),
    };
    let default = VariationSettings::default();

    assert_eq!(build_system_prompt(&fallback), build_system_prompt(&default));
    assert_eq!(request_spec(&fallback), request_spec(&default));
}

#[test]
fn test_user_prompt_truncates_at_exactly_the_ceiling() {
    let content = "x".repeat(MAX_CONTENT_CHARS + 500);
    let article = Article::new("Long read", content.clone());
    let prompt = build_user_prompt(&article);

    let expected_tail = format!("{}{}", &content[..MAX_CONTENT_CHARS], TRUNCATION_MARKER);
    assert!(prompt.ends_with(&expected_tail));
    assert!(!prompt.contains(&content[..MAX_CONTENT_CHARS + 1]));
}

#[test]
fn test_user_prompt_keeps_exact_ceiling_content_unmarked() {
    let content = "y".repeat(MAX_CONTENT_CHARS);
    let article = Article::new("Edge read", content.clone());
    let prompt = build_user_prompt(&article);

    assert!(prompt.ends_with(&content));
    assert!(!prompt.contains(TRUNCATION_MARKER));
}

#[test]
fn test_user_prompt_counts_characters_not_bytes() {
    let content = "é".repeat(MAX_CONTENT_CHARS + 1);
    let article = Article::new("Accents", content);
    let prompt = build_user_prompt(&article);

    assert!(prompt.contains(TRUNCATION_MARKER));
    let body = prompt
        .split("CONTENT:\n")
        .nth(1)
        .expect("prompt has a content section");
    let kept = body.strip_suffix(TRUNCATION_MARKER).expect("marker at end");
    assert_eq!(kept.chars().count(), MAX_CONTENT_CHARS);
}

#[test]
fn test_temperature_table() {
    assert_eq!(temperature_for(Some("consistent")), 0.3);
    assert_eq!(temperature_for(Some("balanced")), 0.7);
    assert_eq!(temperature_for(Some("creative")), 1.0);
    assert_eq!(temperature_for(None), 0.7);
    assert_eq!(temperature_for(Some("unhinged")), 0.7);
}

#[test]
fn test_max_output_tokens_table() {
    assert_eq!(max_output_tokens_for(Some("one-liner")), 100);
    assert_eq!(max_output_tokens_for(Some("brief")), 200);
    assert_eq!(max_output_tokens_for(Some("detailed")), 400);
    assert_eq!(max_output_tokens_for(None), 200);
    assert_eq!(max_output_tokens_for(Some("saga")), 200);
}

#[test]
fn test_request_spec_matches_tables_for_every_combination() {
    for settings in all_settings() {
        let spec = request_spec(&settings);
        assert_eq!(spec.temperature, presets::creativity(settings.creativity).temperature);
        assert_eq!(
            spec.max_output_tokens,
            presets::length(settings.length).max_output_tokens
        );
        assert!(spec.temperature >= 0.0 && spec.temperature <= 2.0);
        assert!(spec.max_output_tokens > 0);
    }
}
