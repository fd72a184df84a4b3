//! Intent classifier tests over the reference query set.

use scholar_core::models::Query;
use scholar_core::{IntentKind, SectionLabel};
use scholar_retrieval::IntentClassifier;

fn classify(text: &str) -> scholar_core::models::IntentResult {
    IntentClassifier::new().classify(&Query::new(text))
}

#[test]
fn limitations_question_maps_to_limitations() {
    let result = classify("What are the limitations of LoRA?");
    assert_eq!(result.label, IntentKind::Limitations);
    assert!(result.allowed_sections.contains(&SectionLabel::Limitations));
    assert!(result.allowed_sections.contains(&SectionLabel::Discussion));
}

#[test]
fn how_does_question_maps_to_methodology() {
    let result = classify("How does QLoRA work?");
    assert_eq!(result.label, IntentKind::Methodology);
    // "how does" is a phrase match with no higher-priority conflict.
    assert_eq!(result.confidence.value(), 1.0);
}

#[test]
fn comparison_query_maps_to_comparison() {
    let result = classify("Compare LoRA to full fine-tuning");
    // "fine-tun" also matches experiments, which outranks comparison.
    assert_eq!(result.label, IntentKind::Experiments);

    let result = classify("Is LoRA better than adapters?");
    assert_eq!(result.label, IntentKind::Comparison);
}

#[test]
fn summarize_maps_to_summary() {
    let result = classify("Summarize the paper");
    assert_eq!(result.label, IntentKind::Summary);
    assert_eq!(
        result.allowed_sections,
        IntentKind::Summary.allowed_sections()
    );
}

#[test]
fn citation_outranks_everything() {
    let result = classify("What references does the paper cite for its method?");
    assert_eq!(result.label, IntentKind::Citation);
    assert!(result.allowed_sections.contains(&SectionLabel::References));
}

#[test]
fn priority_resolves_multi_intent_queries() {
    // Matches both limitations ("limitation") and results ("result");
    // limitations has the higher priority.
    let result = classify("What limitations affect the results?");
    assert_eq!(result.label, IntentKind::Limitations);
}

#[test]
fn conflict_deducts_confidence() {
    let clean = classify("What are the drawbacks?");
    let conflicted = classify("What limitations affect the results?");
    assert_eq!(clean.label, IntentKind::Limitations);
    assert_eq!(conflicted.label, IntentKind::Limitations);
    assert!(conflicted.confidence.value() < clean.confidence.value());
}

#[test]
fn phrase_match_beats_keyword_match_confidence() {
    let phrase = classify("Any problem with the training setup?");
    let keyword = classify("Any drawback?");
    assert_eq!(phrase.label, IntentKind::Limitations);
    assert_eq!(keyword.label, IntentKind::Limitations);
    assert!(phrase.confidence.value() >= keyword.confidence.value());
}

#[test]
fn no_match_falls_back_to_general_with_low_confidence() {
    let result = classify("Random question about nothing specific");
    assert_eq!(result.label, IntentKind::General);
    assert_eq!(result.confidence.value(), 0.5);
    assert_eq!(
        result.allowed_sections,
        IntentKind::General.allowed_sections()
    );
}

#[test]
fn classification_is_deterministic() {
    let a = classify("What are the limitations of LoRA?");
    let b = classify("What are the limitations of LoRA?");
    assert_eq!(a.label, b.label);
    assert_eq!(a.confidence.value(), b.confidence.value());
    assert_eq!(a.allowed_sections, b.allowed_sections);
}
