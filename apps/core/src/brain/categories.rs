//! Categories - Output structure for sentence classification.
//!
//! Holds the objective sentence plus one ordered list per semantic bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic bucket a non-objective sentence can land in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Background, audience, motivation
    Context,
    /// Hard limits (must, avoid, deadline, within...)
    Constraints,
    /// Generic deliverables (provide, write, draft...)
    Outputs,
    /// Ordering of work (first, then, next...)
    Steps,
    /// Requested role for the responder (act as, pretend to be...)
    Persona,
    /// Voice, mood, brand
    Tone,
    /// Explicit delivery format (checklist, table, deliver as...)
    Format,
    /// Nothing matched
    Other,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Bucket {
    /// Returns the stable label of the bucket
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Context => "context",
            Bucket::Constraints => "constraints",
            Bucket::Outputs => "outputs",
            Bucket::Steps => "steps",
            Bucket::Persona => "persona",
            Bucket::Tone => "tone",
            Bucket::Format => "format",
            Bucket::Other => "other",
        }
    }
}

/// Sentences grouped by role. `objective` is always the first sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    pub objective: String,
    pub context: Vec<String>,
    pub constraints: Vec<String>,
    pub outputs: Vec<String>,
    pub steps: Vec<String>,
    pub persona: Vec<String>,
    pub tone: Vec<String>,
    pub format: Vec<String>,
    pub other: Vec<String>,
}

impl Categories {
    /// Appends a sentence to the list of the given bucket
    pub fn push(&mut self, bucket: Bucket, sentence: String) {
        self.list_mut(bucket).push(sentence);
    }

    /// Sentences classified into `bucket`, in input order
    pub fn bucket(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Context => &self.context,
            Bucket::Constraints => &self.constraints,
            Bucket::Outputs => &self.outputs,
            Bucket::Steps => &self.steps,
            Bucket::Persona => &self.persona,
            Bucket::Tone => &self.tone,
            Bucket::Format => &self.format,
            Bucket::Other => &self.other,
        }
    }

    pub fn is_empty(&self, bucket: Bucket) -> bool {
        self.bucket(bucket).is_empty()
    }

    /// Number of classified sentences, objective excluded
    pub fn classified_len(&self) -> usize {
        self.context.len()
            + self.constraints.len()
            + self.outputs.len()
            + self.steps.len()
            + self.persona.len()
            + self.tone.len()
            + self.format.len()
            + self.other.len()
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "context: {}, constraints: {}, outputs: {}, steps: {}, persona: {}, tone: {}, format: {}, other: {}",
            self.context.len(),
            self.constraints.len(),
            self.outputs.len(),
            self.steps.len(),
            self.persona.len(),
            self.tone.len(),
            self.format.len(),
            self.other.len()
        )
    }

    fn list_mut(&mut self, bucket: Bucket) -> &mut Vec<String> {
        match bucket {
            Bucket::Context => &mut self.context,
            Bucket::Constraints => &mut self.constraints,
            Bucket::Outputs => &mut self.outputs,
            Bucket::Steps => &mut self.steps,
            Bucket::Persona => &mut self.persona,
            Bucket::Tone => &mut self.tone,
            Bucket::Format => &mut self.format,
            Bucket::Other => &mut self.other,
        }
    }
}
