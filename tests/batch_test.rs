//! Integration tests for the batch surface and JSON sources/sinks.

use std::fs;

use strata::{
    batch::{process_document, run_batch, BatchJob, JsonFileSink, MemorySink},
    Error, FeatureExtractor, FragmentSource, InferConfig, JsonFormat, JsonFragmentSource, Result,
    TextFragment,
};

const SIMPLE_DUMP: &str = r#"[
    {"page": 1, "text": "Field Guide", "font": "Sans", "size": 22.0,
     "bold": true, "relative_y": 0.03},
    {"page": 1, "text": "This body paragraph provides the baseline style for the whole document corpus.",
     "font": "Serif", "size": 10.0, "relative_y": 0.3},
    {"page": 2, "text": "Habitats", "font": "Sans", "size": 16.0,
     "bold": true, "relative_y": 0.1, "leading_space": 14.0},
    {"page": 2, "text": "Another body paragraph with the dominant font keeps the baseline where it belongs.",
     "font": "Serif", "size": 10.0, "relative_y": 0.4}
]"#;

struct FailingSource;

impl FragmentSource for FailingSource {
    fn document_id(&self) -> &str {
        "flaky-extractor"
    }

    fn fragments(&self) -> Result<Vec<TextFragment>> {
        Err(Error::Source("upstream parser gave up".to_string()))
    }
}

fn json_source(id: &str, dump: &str) -> JsonFragmentSource {
    let extractor = FeatureExtractor::new(&InferConfig::default());
    JsonFragmentSource::from_json(id, dump, &extractor).unwrap()
}

#[test]
fn process_document_end_to_end() {
    let source = json_source("field-guide", SIMPLE_DUMP);
    let sink = MemorySink::new();

    let outline = process_document(&source, &sink, &InferConfig::default()).unwrap();
    assert_eq!(outline.title, "Field Guide");
    assert_eq!(outline.outline.len(), 1);
    assert_eq!(outline.outline[0].text, "Habitats");
    assert_eq!(outline.outline[0].page, 2);

    // The sink saw the same record.
    assert_eq!(sink.take().unwrap(), outline);
}

#[test]
fn batch_writes_one_file_per_document() {
    let dir = tempfile::tempdir().unwrap();
    let out_a = dir.path().join("a.outline.json");
    let out_b = dir.path().join("b.outline.json");

    let jobs = vec![
        BatchJob::new(
            Box::new(json_source("a", SIMPLE_DUMP)),
            Box::new(JsonFileSink::new(&out_a, JsonFormat::Pretty)),
        ),
        BatchJob::new(
            Box::new(json_source("b", "[]")),
            Box::new(JsonFileSink::new(&out_b, JsonFormat::Compact)),
        ),
    ];

    let summary = run_batch(&jobs, &InferConfig::default());
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.failed, 0);

    let a = fs::read_to_string(&out_a).unwrap();
    assert!(a.contains("\"title\": \"Field Guide\""));

    // Empty dump falls back to the placeholder record.
    let b = fs::read_to_string(&out_b).unwrap();
    assert_eq!(b, "{\"title\":\"Untitled Document\",\"outline\":[]}\n");
}

#[test]
fn one_failing_document_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let out_ok = dir.path().join("ok.outline.json");

    let jobs = vec![
        BatchJob::new(Box::new(FailingSource), Box::new(MemorySink::new())),
        BatchJob::new(
            Box::new(json_source("ok", SIMPLE_DUMP)),
            Box::new(JsonFileSink::new(&out_ok, JsonFormat::Pretty)),
        ),
    ];

    let summary = run_batch(&jobs, &InferConfig::default());
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.failed, 1);
    assert!(out_ok.exists());
}

#[test]
fn malformed_dump_is_an_invalid_fragment_error() {
    let extractor = FeatureExtractor::new(&InferConfig::default());
    let result = JsonFragmentSource::from_json("broken", "[{\"page\": 1}]", &extractor);
    assert!(matches!(result, Err(Error::InvalidFragment(_))));
}
