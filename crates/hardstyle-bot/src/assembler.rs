//! Content assembly: turn raw generated text into a publish-ready document.
//!
//! The generation model returns a markdown blob with, at best, a leading H1
//! title. Assembly extracts that title (or synthesizes a timestamped one),
//! strips the closing signatures and placeholder-link notes the prompt
//! forbids (models still emit them now and then), and guarantees exactly one
//! artist embed near the top plus one playlist embed at the end. Malformed
//! input degrades to a smaller document; this module never fails.

use chrono::{DateTime, Local};
use regex::Regex;

/// Spotify embed for the XCEED artist profile, inserted once near the top of
/// every article.
pub const ARTIST_EMBED: &str = r#"<iframe style="border-radius:12px" src="https://open.spotify.com/embed/artist/3ePRFfLVCU6xndbky57GYA?utm_source=generator&theme=0" width="100%" height="152" frameBorder="0" allowfullscreen="" allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture" loading="lazy"></iframe>"#;

/// Spotify embed for the SUMMER HARDSTYLE 2025 playlist, appended once at the
/// end of every article.
pub const PLAYLIST_EMBED: &str = r#"<iframe style="border-radius:12px" src="https://open.spotify.com/embed/playlist/4I4YDBrjYtiujcnuCkay9H?utm_source=generator" width="100%" height="352" frameBorder="0" allowfullscreen="" allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture" loading="lazy"></iframe>"#;

/// Artist name the embed insertion heuristic scans for.
pub const FEATURED_ARTIST: &str = "XCEED";

/// A mention line must be longer than this to host the artist embed; shorter
/// mentions are usually headings or list items.
const MENTION_MIN_CHARS: usize = 50;

/// Fallback insertion index when no qualifying mention line exists.
const TOP_INSERT_INDEX: usize = 3;

/// Timestamp layout of synthesized fallback titles.
const FALLBACK_TITLE_FORMAT: &str = "%d %B %Y - %H:%M";

/// One ordered cleanup step: whatever `pattern` matches becomes `replacement`.
#[derive(Debug)]
pub struct CleanupRule {
    /// Stable identifier so tests can exercise rules one at a time.
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl CleanupRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid cleanup pattern"),
            replacement,
        }
    }

    /// Apply only this rule to `text`.
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).to_string()
    }
}

/// The ordered cleanup pass of the assembler.
///
/// The rule list is plain data: application order is explicit, and each rule
/// can be run on its own in tests. Running the whole pass twice yields the
/// same text as running it once.
#[derive(Debug)]
pub struct CleanupRules {
    rules: Vec<CleanupRule>,
}

impl CleanupRules {
    /// Standard rule list, in application order: both signature variants,
    /// placeholder-link notes, then collapsing of leftover blank lines.
    pub fn standard() -> Self {
        let rules = vec![
            CleanupRule::new("signature_fr", r"\*{0,2}Par Nathan Remacle\.?\*{0,2}", ""),
            CleanupRule::new("signature_en", r"\*{0,2}By Nathan Remacle\.?\*{0,2}", ""),
            // Meta-notes about example links ("Note : ceci est un lien
            // d'exemple ..."), removed up to the end of their paragraph.
            CleanupRule::new(
                "placeholder_note",
                r"(?ims)^[ \t]*\(?\*{0,2}(?:note|remarque)\b\s*\*{0,2}\s*:[^\n]*(?:placeholder|lien|link|exemple|example).*?(?:\n[ \t]*\n|\z)",
                "",
            ),
            CleanupRule::new("blank_lines", r"\n{3,}", "\n\n"),
        ];
        Self { rules }
    }

    /// All rules, in application order.
    pub fn rules(&self) -> &[CleanupRule] {
        &self.rules
    }

    /// Run every rule in order and trim the result.
    pub fn apply(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for rule in &self.rules {
            cleaned = rule.apply(&cleaned);
        }
        cleaned.trim().to_string()
    }
}

impl Default for CleanupRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Per-profile assembly knobs: the fallback-title prefix and the caption
/// shown above the playlist embed.
#[derive(Debug, Clone, Copy)]
pub struct AssembleOptions<'a> {
    pub fallback_title_prefix: &'a str,
    pub playlist_caption: &'a str,
}

/// A publish-ready article: extracted title plus cleaned markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub body: String,
}

/// Turns raw generated text into a [`Document`].
///
/// Steps run in a fixed order: title extraction, cleanup rules, artist embed
/// insertion, playlist embed append, then one more cleanup pass to normalize
/// the spacing insertion leaves around blank lines (the rules are idempotent,
/// so already-clean text is unaffected). The assembler is pure; the caller
/// passes the timestamp used by fallback titles.
#[derive(Debug, Default)]
pub struct ContentAssembler {
    rules: CleanupRules,
}

impl ContentAssembler {
    pub fn new() -> Self {
        Self {
            rules: CleanupRules::standard(),
        }
    }

    /// Assemble a document out of `raw` generated text.
    pub fn assemble(&self, raw: &str, opts: &AssembleOptions<'_>, now: DateTime<Local>) -> Document {
        let (title, body) = extract_title(raw, opts.fallback_title_prefix, now);
        let body = self.rules.apply(&body);
        let body = insert_artist_embed(body);
        let body = append_playlist_embed(body, opts.playlist_caption);
        Document {
            title,
            body: self.rules.apply(&body),
        }
    }
}

/// Split the leading H1 off `raw`. Returns the title with the marker removed
/// and the remaining body, or a timestamped fallback title and the whole
/// text when no usable H1 is present.
fn extract_title(raw: &str, fallback_prefix: &str, now: DateTime<Local>) -> (String, String) {
    let trimmed = raw.trim();
    let first_line = trimmed.lines().next().unwrap_or("");
    if let Some(heading) = first_line.strip_prefix("# ") {
        let title = heading.trim();
        if !title.is_empty() {
            let body = trimmed
                .split_once('\n')
                .map(|(_, rest)| rest)
                .unwrap_or("")
                .trim()
                .to_string();
            return (title.to_string(), body);
        }
    }
    let fallback = format!("{} du {}", fallback_prefix, now.format(FALLBACK_TITLE_FORMAT));
    (fallback, trimmed.to_string())
}

/// Insert the artist embed exactly once. The first line that mentions the
/// featured artist and is long enough to be prose hosts the embed right after
/// it; otherwise the embed lands at a bounded index near the top. Bodies that
/// already carry the embed are returned untouched.
fn insert_artist_embed(body: String) -> String {
    if body.contains(ARTIST_EMBED) {
        return body;
    }
    let mut lines: Vec<String> = body.lines().map(str::to_string).collect();
    let insert_at = lines
        .iter()
        .position(|line| {
            line.contains(FEATURED_ARTIST) && line.chars().count() > MENTION_MIN_CHARS
        })
        .map(|index| index + 1)
        .unwrap_or_else(|| TOP_INSERT_INDEX.min(lines.len()));
    lines.insert(insert_at, format!("\n{ARTIST_EMBED}\n"));
    lines.join("\n")
}

/// Append the playlist embed with its bolded caption, unless already present.
fn append_playlist_embed(body: String, caption: &str) -> String {
    if body.contains(PLAYLIST_EMBED) {
        return body;
    }
    format!("{}\n\n**{}**\n{}", body.trim_end(), caption, PLAYLIST_EMBED)
}
