//! Gap tokenizer: locates standalone occurrences of the target word inside
//! the target sentence.

use regex::Regex;

/// One segment of a tokenized target sentence, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  /// Literal run of text, kept as-is in quiz bodies
  Text(String),
  /// A standalone occurrence of the target word
  Gap(String),
}

impl Segment {
  pub fn is_gap(&self) -> bool {
    matches!(self, Self::Gap(_))
  }
}

/// Split `text` into text and gap segments around the target word.
///
/// The word only counts as standalone when followed by end-of-string or one of
/// a fixed punctuation set, so "target" never matches inside "targeting". The
/// trailing delimiter survives as its own text segment; empty and
/// whitespace-only pieces are dropped.
///
/// A sentence without a standalone occurrence yields a gap-free sequence.
/// Callers pass that through unchanged rather than repairing it.
pub fn tokenize(text: &str, word: &str) -> Vec<Segment> {
  // The word is escaped, so the pattern compiles for any corpus entry.
  let pattern = Regex::new(&format!(r#"({})($|[,.;:"'%?!])"#, regex::escape(word)))
    .expect("escaped gap pattern is always valid");

  let mut segments = Vec::new();
  let mut rest = 0;
  for caps in pattern.captures_iter(text) {
    let matched = caps.get(1).expect("word group always participates");
    let delimiter = caps.get(2).expect("delimiter group always participates");

    push_segment(&mut segments, &text[rest..matched.start()], word);
    push_segment(&mut segments, matched.as_str(), word);
    push_segment(&mut segments, delimiter.as_str(), word);
    rest = delimiter.end();
  }
  push_segment(&mut segments, &text[rest..], word);

  segments
}

fn push_segment(segments: &mut Vec<Segment>, piece: &str, word: &str) {
  if piece.trim().is_empty() {
    return;
  }
  if piece == word {
    segments.push(Segment::Gap(piece.to_string()));
  } else {
    segments.push(Segment::Text(piece.to_string()));
  }
}
