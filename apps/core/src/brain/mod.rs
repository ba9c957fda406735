//! # Brain Module
//!
//! Fast, non-LLM prompt rewriting pipeline for Prompty.
//! Every operation is a pure function of its input string.
//!
//! ## Components
//! - `segmenter`: Raw text to cleaned sentences
//! - `classifier`: Sentence bucketing using an ordered regex rule table
//! - `categories`: Output data structure of the classifier
//! - `clarity`: Vague phrasing detection
//! - `persona`: Expert role inference
//! - `objective`: Objective sentence polishing
//! - `analyzer`: Shared front half of the pipeline
//! - `assembler`: Structured prompt document
//! - `suggestions`: Realtime insertable snippets

pub mod analyzer;
pub mod assembler;
pub mod categories;
pub mod clarity;
pub mod classifier;
pub mod objective;
pub mod persona;
pub mod segmenter;
pub mod suggestions;

// Re-export main types for convenience
pub use analyzer::{analyze, PromptAnalysis};
pub use assembler::{assemble, improve, Rewrite, RewriteOutcome};
pub use categories::{Bucket, Categories};
pub use clarity::analyze_clarity;
pub use classifier::classify;
pub use objective::polish_objective;
pub use persona::infer_role;
pub use segmenter::segment;
pub use suggestions::{generate_suggestions, SuggestionItem, MAX_SUGGESTIONS};
