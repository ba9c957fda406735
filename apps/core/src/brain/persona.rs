//! Expert persona inference from raw text keywords.

use regex::Regex;
use std::sync::LazyLock;

/// Label used when no keyword group matches
pub const FALLBACK_ROLE: &str = "multidisciplinary problem-solving assistant";

/// Keyword group → role label, first match wins
static ROLE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (
            r"\b(website|landing page|homepage|ui|ux|hero copy)\b",
            "web designer and conversion-focused copywriter",
        ),
        (r"\b(email|newsletter|subject line)\b", "email marketing strategist"),
        (
            r"\b(article|blog|write|copy|slogan|tagline|script|story)\b",
            "senior content strategist and writer",
        ),
        (r"\b(pitch deck|presentation|slides)\b", "presentation design specialist"),
        (
            r"\b(api|function|debug|code|javascript|python|typescript|sql|algorithm)\b",
            "senior software engineer",
        ),
        (r"\b(data|analysis|analytics|chart|visualization|insight)\b", "data analyst"),
        (r"\b(marketing plan|campaign|go-to-market|brand)\b", "marketing strategist"),
        (r"\b(research|report|summary|brief|whitepaper)\b", "research analyst"),
    ]
    .into_iter()
    .map(|(pattern, label)| {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Invalid regex for role '{}': {}", label, e));
        (regex, label)
    })
    .collect()
});

/// Pick the expert role that best fits `raw_text`. Always returns a label.
pub fn infer_role(raw_text: &str) -> &'static str {
    let lower = raw_text.to_lowercase();

    ROLE_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&lower))
        .map(|(_, label)| *label)
        .unwrap_or(FALLBACK_ROLE)
}
