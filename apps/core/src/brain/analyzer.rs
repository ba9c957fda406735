//! Prompt Analyzer - runs the shared front half of the pipeline.
//!
//! Segmentation, classification, persona inference and clarity analysis are
//! computed once into a `PromptAnalysis`, which both the assembler and the
//! realtime suggestion generator consume.

use serde::Serialize;
use std::time::Instant;
use tracing::debug;

use super::categories::Categories;
use super::clarity::analyze_clarity;
use super::classifier::classify;
use super::persona::infer_role;
use super::segmenter::segment;

/// Everything the pipeline knows about one input
#[derive(Debug, Clone, Serialize)]
pub struct PromptAnalysis {
    /// Cleaned sentences in source order
    pub sentences: Vec<String>,
    /// Sentences grouped by role
    pub categories: Categories,
    /// Inferred expert role
    pub role: &'static str,
    /// Deduplicated clarity suggestions, never empty
    pub clarity: Vec<String>,
}

impl PromptAnalysis {
    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Sentences: {}, Role: {}, Clarity: {}, Buckets: [{}]",
            self.sentences.len(),
            self.role,
            self.clarity.len(),
            self.categories.summary()
        )
    }
}

/// Analyze `raw_text`. Pure function of its input.
pub fn analyze(raw_text: &str) -> PromptAnalysis {
    let start = Instant::now();

    let sentences = segment(raw_text);
    let categories = classify(&sentences);
    let role = infer_role(raw_text);
    let clarity = analyze_clarity(raw_text, &sentences);

    let analysis = PromptAnalysis {
        sentences,
        categories,
        role,
        clarity,
    };

    debug!(
        elapsed_us = start.elapsed().as_micros() as u64,
        "{}",
        analysis.summary()
    );

    analysis
}
