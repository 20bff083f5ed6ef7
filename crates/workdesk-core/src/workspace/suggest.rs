//! Local suggestion and highlight matching.
//!
//! The backend does the real searching; these helpers cover the purely
//! client-side text work: ranking candidate titles against a partial query,
//! splitting text into highlighted spans, and trimming content previews.
//! Matching is case-insensitive on the lowercased forms.

/// Relevance of `text` for `query`. `None` when the query does not occur.
///
/// Exact match outranks prefix match outranks substring match, and earlier
/// occurrences outrank later ones.
pub fn match_score(text: &str, query: &str) -> Option<u32> {
    if query.is_empty() {
        return None;
    }
    let text_lc = text.to_lowercase();
    let query_lc = query.to_lowercase();
    let position = text_lc.find(&query_lc)?;
    if text_lc == query_lc {
        return Some(300);
    }
    if position == 0 {
        return Some(200);
    }
    // Substring hit, earlier is better.
    Some(100u32.saturating_sub(position.min(100) as u32))
}

/// Rank `candidates` against `query`, best first, at most `limit` results.
pub fn suggest<'a, I>(query: &str, candidates: I, limit: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(u32, &str)> = candidates
        .into_iter()
        .filter_map(|c| match_score(c, query).map(|s| (s, c)))
        .collect();
    // Stable sort keeps the caller's order among equal scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, c)| c).collect()
}

/// A run of text that either matched the query or did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub hit: bool,
}

/// Split `text` into spans, marking case-insensitive occurrences of `query`.
pub fn highlight_spans(text: &str, query: &str) -> Vec<Span> {
    if query.is_empty() || text.is_empty() {
        return vec![Span {
            text: text.to_string(),
            hit: false,
        }];
    }
    let text_lc = text.to_lowercase();
    let query_lc = query.to_lowercase();
    // Lowercasing can change byte lengths for some scripts; fall back to a
    // single unhighlighted span rather than splitting on wrong boundaries.
    if text_lc.len() != text.len() {
        return vec![Span {
            text: text.to_string(),
            hit: false,
        }];
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    while let Some(found) = text_lc[cursor..].find(&query_lc) {
        let start = cursor + found;
        let end = start + query_lc.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        if start > cursor {
            spans.push(Span {
                text: text[cursor..start].to_string(),
                hit: false,
            });
        }
        spans.push(Span {
            text: text[start..end].to_string(),
            hit: true,
        });
        cursor = end;
    }
    if cursor < text.len() {
        spans.push(Span {
            text: text[cursor..].to_string(),
            hit: false,
        });
    }
    spans
}

/// First `max_chars` characters of `content`, with an ellipsis when trimmed.
pub fn content_preview(content: &str, max_chars: usize) -> String {
    let mut chars = content.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_beats_prefix_beats_substring() {
        let exact = match_score("notes", "notes").unwrap();
        let prefix = match_score("notes app", "notes").unwrap();
        let inner = match_score("my notes", "notes").unwrap();
        assert!(exact > prefix);
        assert!(prefix > inner);
        assert!(match_score("todos", "notes").is_none());
        assert!(match_score("anything", "").is_none());
    }

    #[test]
    fn earlier_occurrences_rank_higher() {
        let early = match_score("a notes file", "notes").unwrap();
        let late = match_score("archive of old notes", "notes").unwrap();
        assert!(early > late);
    }

    #[test]
    fn suggest_ranks_and_limits() {
        let candidates = ["Shopping list", "Meeting notes", "notes", "Notes app"];
        let got = suggest("notes", candidates, 2);
        assert_eq!(got, vec!["notes", "Notes app"]);
    }

    #[test]
    fn highlight_marks_case_insensitive_hits() {
        let spans = highlight_spans("Note: more notes", "note");
        assert_eq!(
            spans,
            vec![
                Span {
                    text: "Note".into(),
                    hit: true
                },
                Span {
                    text: ": more ".into(),
                    hit: false
                },
                Span {
                    text: "note".into(),
                    hit: true
                },
                Span {
                    text: "s".into(),
                    hit: false
                },
            ]
        );
    }

    #[test]
    fn highlight_without_hits_is_one_span() {
        let spans = highlight_spans("hello", "xyz");
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].hit);
    }

    #[test]
    fn preview_respects_char_boundaries() {
        assert_eq!(content_preview("héllo wörld", 5), "héllo...");
        assert_eq!(content_preview("short", 10), "short");
        assert_eq!(content_preview("exact", 5), "exact");
    }
}
