//! Core taskpool domain types shared by the repository and the bitmark compiler.

use serde::{Deserialize, Serialize};

/// A language the taskpool has sentences for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  Uk,
  De,
  En,
}

impl Language {
  /// Lower-case tag used in API payloads
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Uk => "uk",
      Self::De => "de",
      Self::En => "en",
    }
  }

  /// Upper-case tag as stored in the sentences table
  pub fn as_db_tag(&self) -> &'static str {
    match self {
      Self::Uk => "UK",
      Self::De => "DE",
      Self::En => "EN",
    }
  }

  /// Parse a stored language tag, case-insensitively
  pub fn from_db_tag(tag: &str) -> Option<Self> {
    match tag.to_ascii_uppercase().as_str() {
      "UK" => Some(Self::Uk),
      "DE" => Some(Self::De),
      "EN" => Some(Self::En),
      _ => None,
    }
  }
}

/// A supported (source language, target language) combination, as exposed in
/// the API. The left side is the source language, the right side the language
/// to be learned: `uk->de` is German for Ukrainians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationPair {
  #[serde(rename = "uk->de")]
  UkDe,
  #[serde(rename = "de->en")]
  DeEn,
}

impl TranslationPair {
  /// Resolve the API tag into the internal language pair.
  ///
  /// Closed match: adding a pair without a mapping here is a compile error.
  pub fn languages(&self) -> LanguagePair {
    match self {
      Self::UkDe => LanguagePair {
        source: Language::Uk,
        target: Language::De,
      },
      Self::DeEn => LanguagePair {
        source: Language::De,
        target: Language::En,
      },
    }
  }
}

/// Internal language pair used for corpus queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
  pub source: Language,
  pub target: Language,
}

/// Which bitmark representation(s) a client asked for.
///
/// `All` is an aggregate filter and only valid at the request boundary; the
/// instruction selector rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseType {
  #[serde(rename = "bitmark.essay")]
  Essay,
  #[serde(rename = "bitmark.cloze")]
  Cloze,
  #[serde(rename = "bitmark.multiple-choice-text")]
  MultipleChoiceText,
  #[serde(rename = "all")]
  All,
}

impl ExerciseType {
  /// Whether this filter includes the given concrete type
  pub fn includes(&self, other: ExerciseType) -> bool {
    *self == Self::All || *self == other
  }
}

impl Default for ExerciseType {
  fn default() -> Self {
    Self::Essay
  }
}

/// Raw exercise row joined with both sentence sides, as read from the corpus.
///
/// Immutable input to the bitmark compiler; every payload field is derived
/// from it at request time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
  /// Stable identifier derived from the sentence-pair identity at import time
  pub id: String,
  pub translation_id: i64,
  pub target_word: String,
  /// Distractors for multiple-choice bits, may be empty
  pub similar_words: Vec<String>,
  pub source_sentence_id: i64,
  pub target_sentence_id: i64,
  pub source_sentence_text: String,
  pub source_sentence_language: Language,
  pub target_sentence_text: String,
  pub target_sentence_language: Language,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_language_tags_roundtrip() {
    for lang in [Language::Uk, Language::De, Language::En] {
      assert_eq!(Language::from_db_tag(lang.as_db_tag()), Some(lang));
      assert_eq!(Language::from_db_tag(lang.as_str()), Some(lang));
    }
  }

  #[test]
  fn test_language_from_db_tag_unknown() {
    assert_eq!(Language::from_db_tag("fr"), None);
    assert_eq!(Language::from_db_tag(""), None);
  }

  #[test]
  fn test_language_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Language::De).unwrap(), "\"de\"");
    assert_eq!(serde_json::to_string(&Language::Uk).unwrap(), "\"uk\"");
  }

  #[test]
  fn test_translation_pair_api_tags() {
    assert_eq!(
      serde_json::to_string(&TranslationPair::UkDe).unwrap(),
      "\"uk->de\""
    );
    let parsed: TranslationPair = serde_json::from_str("\"de->en\"").unwrap();
    assert_eq!(parsed, TranslationPair::DeEn);
  }

  #[test]
  fn test_translation_pair_unknown_tag_rejected() {
    assert!(serde_json::from_str::<TranslationPair>("\"uk->fr\"").is_err());
  }

  #[test]
  fn test_translation_pair_languages() {
    let pair = TranslationPair::UkDe.languages();
    assert_eq!(pair.source, Language::Uk);
    assert_eq!(pair.target, Language::De);

    let pair = TranslationPair::DeEn.languages();
    assert_eq!(pair.source, Language::De);
    assert_eq!(pair.target, Language::En);
  }

  #[test]
  fn test_exercise_type_tags() {
    let parsed: ExerciseType = serde_json::from_str("\"bitmark.multiple-choice-text\"").unwrap();
    assert_eq!(parsed, ExerciseType::MultipleChoiceText);
    let parsed: ExerciseType = serde_json::from_str("\"all\"").unwrap();
    assert_eq!(parsed, ExerciseType::All);
  }

  #[test]
  fn test_exercise_type_default_is_essay() {
    assert_eq!(ExerciseType::default(), ExerciseType::Essay);
  }

  #[test]
  fn test_exercise_type_includes() {
    assert!(ExerciseType::All.includes(ExerciseType::Essay));
    assert!(ExerciseType::All.includes(ExerciseType::Cloze));
    assert!(ExerciseType::All.includes(ExerciseType::MultipleChoiceText));
    assert!(ExerciseType::Cloze.includes(ExerciseType::Cloze));
    assert!(!ExerciseType::Cloze.includes(ExerciseType::Essay));
    assert!(!ExerciseType::Essay.includes(ExerciseType::MultipleChoiceText));
  }
}
