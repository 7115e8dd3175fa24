use regex::{Regex, RegexBuilder};

/// A run of display text, either plain or matching the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            matched: false,
        }
    }

    pub fn matched(text: &'a str) -> Self {
        Self {
            text,
            matched: true,
        }
    }
}

/// Compiled case-insensitive substring matcher for one query.
/// Build once per render and reuse for every row.
pub struct Emphasizer {
    pattern: Option<Regex>,
}

impl Emphasizer {
    pub fn new(query: &str) -> Self {
        if query.is_empty() {
            return Self { pattern: None };
        }
        // Literal match: regex metacharacters in the query carry no meaning
        let pattern = match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::debug!("Cannot emphasize query '{}': {}", query, e);
                None
            }
        };
        Self { pattern }
    }

    /// Split `text` around every match. Segments alternate plain / matched,
    /// and always start and end with a plain one (possibly empty).
    pub fn split<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let Some(pattern) = &self.pattern else {
            return vec![Segment::plain(text)];
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for found in pattern.find_iter(text) {
            segments.push(Segment::plain(&text[last..found.start()]));
            segments.push(Segment::matched(found.as_str()));
            last = found.end();
        }
        segments.push(Segment::plain(&text[last..]));
        segments
    }
}

/// One-shot form of [`Emphasizer::split`]
pub fn emphasize<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    Emphasizer::new(query).split(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_is_case_insensitive_and_keeps_original_case() {
        assert_eq!(
            emphasize("American Robin", "ame"),
            vec![
                Segment::plain(""),
                Segment::matched("Ame"),
                Segment::plain("rican Robin"),
            ]
        );
    }

    #[test]
    fn empty_query_is_one_plain_segment() {
        assert_eq!(
            emphasize("American Robin", ""),
            vec![Segment::plain("American Robin")]
        );
    }

    #[test]
    fn every_occurrence_is_marked() {
        let segments = emphasize("Robin robin ROBIN", "robin");
        let matched: Vec<&str> = segments
            .iter()
            .filter(|s| s.matched)
            .map(|s| s.text)
            .collect();
        assert_eq!(matched, vec!["Robin", "robin", "ROBIN"]);
        assert_eq!(segments.len(), 7);
        assert_eq!(segments.last(), Some(&Segment::plain("")));
    }

    #[test]
    fn adjacent_matches_are_separated_by_empty_plain_segments() {
        assert_eq!(
            emphasize("aaaa", "aa"),
            vec![
                Segment::plain(""),
                Segment::matched("aa"),
                Segment::plain(""),
                Segment::matched("aa"),
                Segment::plain(""),
            ]
        );
    }

    #[test]
    fn metacharacters_match_literally() {
        assert_eq!(
            emphasize("Owl (Great Horned)", "(gr"),
            vec![
                Segment::plain("Owl "),
                Segment::matched("(Gr"),
                Segment::plain("eat Horned)"),
            ]
        );
        assert_eq!(emphasize("Wren", ".*"), vec![Segment::plain("Wren")]);
    }

    #[test]
    fn segments_reassemble_to_the_original_text() {
        let text = "Great Crested Flycatcher";
        let joined: String = emphasize(text, "cre").iter().map(|s| s.text).collect();
        assert_eq!(joined, text);
    }
}
