//! The exercise compiler: turns a corpus [`ExerciseRecord`] into the bitmark
//! quiz payload served over HTTP.
//!
//! Everything here is derived at request time; no type in this module has a
//! lifecycle beyond a single response. Serialized field names are camelCase
//! and form a compatibility contract with API clients.

pub mod builders;
pub mod tokenizer;

use rand::Rng;
use serde::Serialize;

use crate::domain::{ExerciseRecord, ExerciseType, Language};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSentence {
  pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSentence {
  pub word: String,
  pub similar_words: Vec<String>,
  pub text: String,
}

/// Meta information shared by all bit types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
  /// Language the bit is written in, i.e. the source language
  pub language: Language,
  /// Language to be learned
  pub learning_language: Language,
  /// Title of the exercise: the target word
  pub subject: String,
}

impl Meta {
  fn for_record(record: &ExerciseRecord) -> Self {
    Self {
      language: record.source_sentence_language,
      learning_language: record.target_sentence_language,
      subject: record.target_word.clone(),
    }
  }
}

/// Feedback-engine routing data. `user_id` is intentionally empty; clients
/// overwrite it with their own anonymous learner identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEngine {
  pub feedback_id: String,
  pub user_id: String,
  pub time_on_task: i64,
}

impl FeedbackEngine {
  fn new(exercise_id: &str, bit_suffix: &str) -> Self {
    Self {
      feedback_id: format!("{exercise_id}-{bit_suffix}"),
      user_id: String::new(),
      time_on_task: 0,
    }
  }
}

/// Placeholder for the learner's input, always served empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Answer {
  pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Audio {
  pub format: &'static str,
  pub src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
  #[serde(rename = "type")]
  pub kind: &'static str,
  pub audio: Audio,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EssayBit {
  pub format: &'static str,
  pub meta: Meta,
  pub feedback_engine: FeedbackEngine,
  pub instruction: String,
  #[serde(rename = "type")]
  pub kind: &'static str,
  pub sample_solution: String,
  pub answer: Answer,
  pub resource: Resource,
}

/// Body element of a cloze bit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClozeElement {
  Text { text: String },
  // One solution per gap today; the list shape leaves room for more.
  Gap { solutions: Vec<String>, answer: Answer },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClozeBit {
  pub format: &'static str,
  pub meta: Meta,
  pub feedback_engine: FeedbackEngine,
  pub instruction: String,
  #[serde(rename = "type")]
  pub kind: &'static str,
  pub body: Vec<ClozeElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
  pub choice: String,
  pub is_correct: bool,
  pub is_selected: bool,
}

/// Body element of a multiple-choice bit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MultipleChoiceElement {
  Text { text: String },
  Choices { choices: Vec<Choice> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceTextBit {
  pub format: &'static str,
  pub meta: Meta,
  pub feedback_engine: FeedbackEngine,
  pub instruction: String,
  #[serde(rename = "type")]
  pub kind: &'static str,
  pub body: Vec<MultipleChoiceElement>,
}

/// Container for the requested bit slots. Unrequested slots serialize as
/// explicit `null`, never as empty objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bitmark {
  pub essay: Option<EssayBit>,
  pub cloze: Option<ClozeBit>,
  pub multiple_choice_text: Option<MultipleChoiceTextBit>,
}

/// One exercise as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
  pub source_sentence: SourceSentence,
  pub target_sentence: TargetSentence,
  pub bitmark: Bitmark,
}

/// Compile one corpus record into its quiz payload.
///
/// Pure function of the record, the requested type filter and the caller's
/// base URL. The rng is request-scoped and only consumed by the
/// multiple-choice shuffle; production passes `rand::rng()`, tests a seeded
/// [`rand::rngs::StdRng`].
pub fn compile<R: Rng>(
  record: &ExerciseRecord,
  exercise_type: ExerciseType,
  base_url: &str,
  rng: &mut R,
) -> Exercise {
  Exercise {
    source_sentence: SourceSentence {
      text: record.source_sentence_text.clone(),
    },
    target_sentence: TargetSentence {
      word: record.target_word.clone(),
      similar_words: record.similar_words.clone(),
      text: record.target_sentence_text.clone(),
    },
    bitmark: Bitmark {
      essay: exercise_type
        .includes(ExerciseType::Essay)
        .then(|| builders::essay_bit(record, base_url)),
      cloze: exercise_type
        .includes(ExerciseType::Cloze)
        .then(|| builders::cloze_bit(record)),
      multiple_choice_text: exercise_type
        .includes(ExerciseType::MultipleChoiceText)
        .then(|| builders::multiple_choice_bit(record, rng)),
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Language;
  use rand::SeedableRng;
  use rand::rngs::StdRng;

  pub(crate) fn stark_record() -> ExerciseRecord {
    ExerciseRecord {
      id: "feedback-id".to_string(),
      translation_id: 1,
      target_word: "stark".to_string(),
      similar_words: vec![
        "scharf".to_string(),
        "krank".to_string(),
        "hart".to_string(),
      ],
      source_sentence_id: 1,
      target_sentence_id: 2,
      source_sentence_text: "дуже сильний дощ.".to_string(),
      source_sentence_language: Language::Uk,
      target_sentence_text: "Es regnet sehr stark.".to_string(),
      target_sentence_language: Language::De,
    }
  }

  #[test]
  fn test_compile_all_fills_every_slot() {
    let mut rng = StdRng::seed_from_u64(1);
    let exercise = compile(
      &stark_record(),
      ExerciseType::All,
      "http://testserver/",
      &mut rng,
    );

    assert!(exercise.bitmark.essay.is_some());
    assert!(exercise.bitmark.cloze.is_some());
    assert!(exercise.bitmark.multiple_choice_text.is_some());
  }

  #[test]
  fn test_compile_single_type_fills_only_that_slot() {
    let mut rng = StdRng::seed_from_u64(1);

    let essay_only = compile(
      &stark_record(),
      ExerciseType::Essay,
      "http://testserver/",
      &mut rng,
    );
    assert!(essay_only.bitmark.essay.is_some());
    assert!(essay_only.bitmark.cloze.is_none());
    assert!(essay_only.bitmark.multiple_choice_text.is_none());

    let cloze_only = compile(
      &stark_record(),
      ExerciseType::Cloze,
      "http://testserver/",
      &mut rng,
    );
    assert!(cloze_only.bitmark.essay.is_none());
    assert!(cloze_only.bitmark.cloze.is_some());
    assert!(cloze_only.bitmark.multiple_choice_text.is_none());

    let choice_only = compile(
      &stark_record(),
      ExerciseType::MultipleChoiceText,
      "http://testserver/",
      &mut rng,
    );
    assert!(choice_only.bitmark.essay.is_none());
    assert!(choice_only.bitmark.cloze.is_none());
    assert!(choice_only.bitmark.multiple_choice_text.is_some());
  }

  #[test]
  fn test_compile_carries_sentence_pair() {
    let mut rng = StdRng::seed_from_u64(1);
    let exercise = compile(
      &stark_record(),
      ExerciseType::Essay,
      "http://testserver/",
      &mut rng,
    );

    assert_eq!(exercise.source_sentence.text, "дуже сильний дощ.");
    assert_eq!(exercise.target_sentence.word, "stark");
    assert_eq!(
      exercise.target_sentence.similar_words,
      vec!["scharf", "krank", "hart"]
    );
    assert_eq!(exercise.target_sentence.text, "Es regnet sehr stark.");
  }

  #[test]
  fn test_unrequested_slots_serialize_as_null() {
    let mut rng = StdRng::seed_from_u64(1);
    let exercise = compile(
      &stark_record(),
      ExerciseType::Essay,
      "http://testserver/",
      &mut rng,
    );

    let json = serde_json::to_value(&exercise).unwrap();
    assert!(json["bitmark"]["essay"].is_object());
    assert!(json["bitmark"]["cloze"].is_null());
    assert!(json["bitmark"]["multipleChoiceText"].is_null());
  }

  #[test]
  fn test_camel_case_field_names() {
    let mut rng = StdRng::seed_from_u64(1);
    let exercise = compile(
      &stark_record(),
      ExerciseType::All,
      "http://testserver/",
      &mut rng,
    );

    let json = serde_json::to_value(&exercise).unwrap();
    assert!(json["targetSentence"]["similarWords"].is_array());
    assert!(json["bitmark"]["essay"]["feedbackEngine"]["feedbackId"].is_string());
    assert!(json["bitmark"]["essay"]["sampleSolution"].is_string());
    let choices = &json["bitmark"]["multipleChoiceText"]["body"][1]["choices"];
    assert!(choices[0]["isCorrect"].is_boolean());
    assert!(choices[0]["isSelected"].is_boolean());
  }
}
