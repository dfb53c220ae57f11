use regex::Regex;
use std::sync::OnceLock;

/// Compiled cleanup patterns for raw model output
struct CleanPatterns {
    /// Leading "Here is ... summary:" preamble, used only when the text
    /// carries no bullet at all
    preamble: Regex,
    /// Trailing "(Translation) ..." block
    translation: Regex,
    /// "(Note: ...)" annotation
    note: Regex,
    /// Trailing "Let me know if you ... help ..." sign-off
    signoff: Regex,
    /// Bullet marker followed by stray punctuation, e.g. `- ):` or `- :`
    bullet_artifact: Regex,
}

fn patterns() -> &'static CleanPatterns {
    static PATTERNS: OnceLock<CleanPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| CleanPatterns {
        preamble: Regex::new(r"(?is)^Here is.*?summary:\s*").expect("valid pattern"),
        translation: Regex::new(r"(?is)\(Translation\).*").expect("valid pattern"),
        note: Regex::new(r"(?is)\(Note:.*?\)").expect("valid pattern"),
        signoff: Regex::new(r"(?is)Let me know if you.*?help.*?").expect("valid pattern"),
        bullet_artifact: Regex::new(r"-\s*[\s:\)]+").expect("valid pattern"),
    })
}

/// Normalize a raw summary string into plain `- ` bullet lines.
///
/// Models routinely wrap the requested bullet list in a preamble, translation
/// notes and an offer to help further; these rules strip that apparatus, in
/// order:
///
/// 1. Everything before the first `-` is discarded; when no bullet exists at
///    all, a leading "Here is ... summary:" preamble is stripped instead.
/// 2. The first `(Translation) ...`, `(Note: ...)` and
///    "Let me know if you ... help" occurrences are removed.
/// 3. Bullet-marker artifacts (`- ):`, `- :`, `- • `) collapse to `- `.
/// 4. Surrounding whitespace is trimmed.
/// 5. A non-empty result that does not already start with `-` gets a `- `
///    prefix.
pub fn clean_summary(raw: &str) -> String {
    let p = patterns();

    let mut cleaned = match raw.find('-') {
        Some(idx) => raw[idx..].to_string(),
        None => p.preamble.replace(raw, "").into_owned(),
    };

    cleaned = p.translation.replace(&cleaned, "").into_owned();
    cleaned = p.note.replace(&cleaned, "").into_owned();
    cleaned = p.signoff.replace(&cleaned, "").into_owned();

    cleaned = p.bullet_artifact.replace_all(&cleaned, "- ").into_owned();
    if let Some(rest) = cleaned.strip_prefix("- • ") {
        cleaned = format!("- {rest}");
    }

    let cleaned = cleaned.trim();
    if !cleaned.is_empty() && !cleaned.starts_with('-') {
        format!("- {cleaned}")
    } else {
        cleaned.to_string()
    }
}
