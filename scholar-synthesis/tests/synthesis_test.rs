//! Synthesis stage tests with a canned generator.

use std::sync::Mutex;

use scholar_core::config::SynthesisConfig;
use scholar_core::errors::ScholarResult;
use scholar_core::models::{EvidenceChunk, Query};
use scholar_core::traits::{DraftCitation, GeneratedDraft, GenerationRequest, IGenerator};
use scholar_core::SectionLabel;
use scholar_synthesis::prompt::{answer_form, build_context, AnswerForm};
use scholar_synthesis::SynthesisEngine;
use scholar_retrieval::IntentClassifier;

struct StubGenerator {
    draft: GeneratedDraft,
    seen: Mutex<Vec<GenerationRequest>>,
}

impl StubGenerator {
    fn new(draft: GeneratedDraft) -> Self {
        Self {
            draft,
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl IGenerator for StubGenerator {
    async fn generate(&self, request: &GenerationRequest) -> ScholarResult<GeneratedDraft> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(self.draft.clone())
    }
}

fn chunk(doc: &str, section: SectionLabel, text: &str) -> EvidenceChunk {
    EvidenceChunk {
        text: text.to_string(),
        source_document: doc.to_string(),
        section_label: section,
        fused_score: 0.016,
        page_range: (4, 6),
    }
}

fn draft(text: &str) -> GeneratedDraft {
    GeneratedDraft {
        text: text.to_string(),
        citations: vec![DraftCitation {
            source_document: "paper-a".to_string(),
            page_start: 4,
            page_end: 6,
        }],
        confidence: Some(0.85),
    }
}

fn intent_for(text: &str) -> scholar_core::models::IntentResult {
    IntentClassifier::new().classify(&Query::new(text))
}

#[test]
fn intents_route_to_answer_forms() {
    assert_eq!(
        answer_form(scholar_core::IntentKind::Comparison, "compare A and B"),
        AnswerForm::Comparison
    );
    assert_eq!(
        answer_form(scholar_core::IntentKind::Limitations, "what are the limitations"),
        AnswerForm::Enumeration
    );
    assert_eq!(
        answer_form(scholar_core::IntentKind::ResearchGaps, "what is unexplored"),
        AnswerForm::Enumeration
    );
    assert_eq!(
        answer_form(scholar_core::IntentKind::Summary, "explain the paper"),
        AnswerForm::Factual { brief: false }
    );
    assert_eq!(
        answer_form(scholar_core::IntentKind::Summary, "give me a brief overview"),
        AnswerForm::Factual { brief: true }
    );
}

#[test]
fn context_numbers_chunks_with_provenance() {
    let chunks = vec![
        chunk("paper-a", SectionLabel::Limitations, "Quantization hurts accuracy."),
        chunk("paper-b", SectionLabel::Discussion, "Memory overhead remains high."),
    ];
    let context = build_context(&chunks);
    assert!(context.contains("[1] From 'paper-a' (Section: Limitations, Pages 4-6):"));
    assert!(context.contains("Quantization hurts accuracy."));
    assert!(context.contains("[2] From 'paper-b'"));
}

#[tokio::test]
async fn only_retrieved_chunk_text_enters_the_context() {
    let generator = StubGenerator::new(draft("answer"));
    let engine = SynthesisEngine::new(&generator, SynthesisConfig::default());
    let query = Query::new("What are the limitations of LoRA?");
    let intent = intent_for(&query.text);
    let chunks = vec![chunk("paper-a", SectionLabel::Limitations, "Rank choice is delicate.")];

    engine.synthesize(&query, &intent, &chunks, &[]).await.unwrap();

    let seen = generator.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].context.contains("Rank choice is delicate."));
    // The question lives in the prompt, never in the evidence context.
    assert!(!seen[0].context.contains("What are the limitations"));
    assert!(seen[0].prompt.contains("What are the limitations of LoRA?"));
    assert!(seen[0].prompt.contains("Enumerate items ONLY from explicit statements"));
}

#[tokio::test]
async fn generator_confidence_is_kept_when_supplied() {
    let generator = StubGenerator::new(draft("answer"));
    let engine = SynthesisEngine::new(&generator, SynthesisConfig::default());
    let query = Query::new("What are the limitations?");
    let intent = intent_for(&query.text);

    let candidate = engine
        .synthesize(&query, &intent, &[], &[])
        .await
        .unwrap();
    assert_eq!(candidate.self_reported_confidence.value(), 0.85);
    assert_eq!(candidate.citations.len(), 1);
    assert_eq!(candidate.citations[0].source_document, "paper-a");
}

#[tokio::test]
async fn missing_generator_confidence_takes_the_default() {
    let mut d = draft("answer");
    d.confidence = None;
    let generator = StubGenerator::new(d);
    let engine = SynthesisEngine::new(&generator, SynthesisConfig::default());
    let query = Query::new("What are the limitations?");
    let intent = intent_for(&query.text);

    let candidate = engine.synthesize(&query, &intent, &[], &[]).await.unwrap();
    assert_eq!(candidate.self_reported_confidence.value(), 0.7);
}

#[tokio::test]
async fn brief_queries_request_short_form() {
    let generator = StubGenerator::new(draft("answer"));
    let engine = SynthesisEngine::new(&generator, SynthesisConfig::default());
    let query = Query::new("Give me a brief summary of the paper");
    let intent = intent_for(&query.text);
    assert_eq!(intent.label, scholar_core::IntentKind::Summary);

    engine.synthesize(&query, &intent, &[], &[]).await.unwrap();
    let seen = generator.seen.lock().unwrap();
    assert!(seen[0].prompt.contains("at most three sentences"));
}
