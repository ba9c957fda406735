//! Sentence classification using regex patterns.
//!
//! The first sentence is always the objective. Every other sentence goes into
//! the bucket of the first rule it matches; rules are tried from the rarest,
//! most specific signal (persona) to the broadest (context).

use regex::Regex;
use std::sync::LazyLock;

use super::categories::{Bucket, Categories};

/// One row of the rule table
pub struct BucketRule {
    pub bucket: Bucket,
    pub pattern: Regex,
}

impl BucketRule {
    fn new(bucket: Bucket, pattern: &str) -> Self {
        Self {
            bucket,
            pattern: Regex::new(pattern).unwrap_or_else(|e| {
                panic!("Invalid regex for {} bucket: {}", bucket.label(), e)
            }),
        }
    }
}

// Compile patterns once at startup. Order is precedence.
static BUCKET_RULES: LazyLock<Vec<BucketRule>> = LazyLock::new(|| {
    vec![
        BucketRule::new(
            Bucket::Persona,
            r"(?i)\b(act(ing)? as|pretend (to be|you are|you're)|role[- ]?play|you are an?\b|take on the role|assume the role|imagine (you are|you're))",
        ),
        BucketRule::new(
            Bucket::Tone,
            r"(?i)\b(tone|voice|style|aesthetic|brand|mood|vibe|formal|informal|casual|friendly|playful|professional|conversational|witty|humorous|fun|serious|upbeat|warm|empathetic|persuasive|authoritative|enthusiastic)\b",
        ),
        BucketRule::new(
            Bucket::Constraints,
            r"(?i)\b(must|should|needs? to|require[sd]?|requirements?|limit(s|ed)?|avoid|never|do not|don't|cannot|can't|deadline|within|under|no more than|at most|at least|maximum|minimum|keep it|only use|exactly|budget)",
        ),
        BucketRule::new(
            Bucket::Format,
            r"(?i)\b(deliver (it |this |them )?as|output (it |this )?as|format(ted)? as|in the form of|final format|checklist|table|bullet points|bulleted list|numbered list|markdown|json|csv|report)",
        ),
        BucketRule::new(
            Bucket::Outputs,
            r"(?i)\b(provide|return|output|deliver|list|summari[sz]|write|generate|give me|produce|draft|create|include)",
        ),
        BucketRule::new(
            Bucket::Steps,
            r"(?i)\b(first|then|next|after|afterwards|before|steps?|process|finally|lastly|followed by)",
        ),
        BucketRule::new(
            Bucket::Context,
            r"(?i)\b(because|so that|for (my|our)|i am|i'm|we are|we're|audience|background|current(ly)?|existing|using|working on|project|goal|objective|purpose|context|readers?)",
        ),
    ]
});

/// Bucket of the first rule `sentence` matches, `Other` when none does
pub fn bucket_for(sentence: &str) -> Bucket {
    BUCKET_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(sentence))
        .map(|rule| rule.bucket)
        .unwrap_or(Bucket::Other)
}

/// The rule table in precedence order
pub fn rules() -> &'static [BucketRule] {
    &BUCKET_RULES
}

/// Classify an ordered list of sentences into `Categories`.
pub fn classify(sentences: &[String]) -> Categories {
    let mut categories = Categories::default();

    let Some((objective, rest)) = sentences.split_first() else {
        return categories;
    };
    categories.objective = objective.clone();

    for sentence in rest {
        categories.push(bucket_for(sentence), sentence.clone());
    }

    categories
}
