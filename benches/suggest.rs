//! Benchmarks for the per-keystroke autocomplete path
//!
//! Run with: cargo bench suggest

use column_suggest::suggest::{CandidateGenerator, TriggerDetector};
use column_suggest::{CustomFields, Document, FixedVocabulary, Position};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Document with the fence at the top and the cursor line `line_count` lines below
fn document_with_gap(line_count: usize) -> Document {
    let mut text = String::from("```jira-search\nquery: project = ABC\n");
    text.push_str(&"some unrelated note text\n".repeat(line_count));
    text.push_str("columns: KEY, SUMMARY, st\n```\n");
    Document::with_text(&text)
}

fn custom_fields(count: usize) -> CustomFields {
    CustomFields::from_pairs(
        (0..count).map(|i| (format!("{}", 10_000 + i), format!("Field {}", i))),
    )
}

// ============================================================================
// Trigger detection
// ============================================================================

#[divan::bench(args = [10, 1_000, 100_000])]
fn trigger_fence_scan(bencher: divan::Bencher, line_count: usize) {
    let doc = document_with_gap(line_count);
    let detector = TriggerDetector::new("columns", "jira-search");
    let cursor = Position::new(line_count + 2, 25);
    bencher.bench_local(|| divan::black_box(detector.detect(cursor, &doc)));
}

// ============================================================================
// Candidate generation
// ============================================================================

#[divan::bench(args = [0, 100, 10_000])]
fn generate_by_name(bencher: divan::Bencher, field_count: usize) {
    let vocab = FixedVocabulary::search_columns();
    let fields = custom_fields(field_count);
    let generator = CandidateGenerator::new(&vocab, &fields, '-');
    bencher.bench_local(|| divan::black_box(generator.suggestions(" -fie", 100)));
}

#[divan::bench(args = [0, 100, 10_000])]
fn generate_by_id(bencher: divan::Bencher, field_count: usize) {
    let vocab = FixedVocabulary::search_columns();
    let fields = custom_fields(field_count);
    let generator = CandidateGenerator::new(&vocab, &fields, '-');
    bencher.bench_local(|| divan::black_box(generator.suggestions("$100", 100)));
}
