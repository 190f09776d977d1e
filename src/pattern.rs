// src/pattern.rs
// THE TEMPLATE MATCHER
// Word-by-word matching of a query against a question template, with `%`
// wildcards that capture one or more contiguous words.

use std::fmt;

/// Reserved marker for a wildcard when templates are written as text.
pub const WILDCARD: &str = "%";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the query word at this position, ignoring case.
    Literal(String),
    /// Captures a run of contiguous query words.
    Wildcard,
}

/// A fixed question shape, e.g. `when was % born`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

/// Words captured by a successful match, one group per wildcard in template order.
///
/// An empty group is possible only for a trailing wildcard. A match of a
/// template without wildcards yields a binding with no groups, which is still
/// distinct from "no match" (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    groups: Vec<Vec<String>>,
}

impl Template {
    pub fn new(segments: Vec<Segment>) -> Self {
        let segments = segments
            .into_iter()
            .map(|s| match s {
                Segment::Literal(word) => Segment::Literal(word.to_lowercase()),
                wildcard => wildcard,
            })
            .collect();
        Self { segments }
    }

    /// Builds a template from space-separated words, `%` marking a wildcard.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.split_whitespace()
                .map(|word| {
                    if word == WILDCARD {
                        Segment::Wildcard
                    } else {
                        Segment::Literal(word.to_string())
                    }
                })
                .collect(),
        )
    }

    /// Matches the whole query against this template.
    ///
    /// A wildcard followed by more segments tries bindings from one word
    /// upward and keeps the first length that lets the rest of the template
    /// match, so it binds the shortest run consistent with what follows. A
    /// wildcard that ends the template takes every remaining word, possibly
    /// none. With several wildcards this means earlier ones bind as little as
    /// possible: `% and %` against `a and b and c` binds `[a]` then `[b, and, c]`.
    ///
    /// Backtracking is exponential for pathological multi-wildcard templates;
    /// registry templates are short and use at most one wildcard.
    pub fn matches(&self, query: &[String]) -> Option<Binding> {
        let mut groups = match_segments(&self.segments, query)?;
        groups.reverse();
        Some(Binding { groups })
    }
}

// Groups are collected innermost-first and reversed once by the caller.
fn match_segments(segments: &[Segment], query: &[String]) -> Option<Vec<Vec<String>>> {
    match segments.split_first() {
        None => query.is_empty().then(Vec::new),
        Some((Segment::Wildcard, [])) => Some(vec![query.to_vec()]),
        Some((Segment::Wildcard, rest)) => (1..=query.len()).find_map(|taken| {
            let mut groups = match_segments(rest, &query[taken..])?;
            groups.push(query[..taken].to_vec());
            Some(groups)
        }),
        Some((Segment::Literal(word), rest)) => {
            let (first, remaining) = query.split_first()?;
            if first.to_lowercase() != *word {
                return None;
            }
            match_segments(rest, remaining)
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<&str> = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Literal(word) => word.as_str(),
                Segment::Wildcard => WILDCARD,
            })
            .collect();
        write!(f, "{}", words.join(" "))
    }
}

impl Binding {
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// All captured words in order, across every wildcard.
    pub fn words(&self) -> Vec<String> {
        self.groups.iter().flatten().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }
}
