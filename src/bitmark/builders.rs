//! Builders for the three bit types, plus the instruction selector.

use rand::Rng;
use rand::seq::SliceRandom;

use super::tokenizer::{self, Segment};
use super::{
  Answer, Audio, Choice, ClozeBit, ClozeElement, EssayBit, FeedbackEngine, Meta,
  MultipleChoiceElement, MultipleChoiceTextBit, Resource,
};
use crate::domain::{ExerciseRecord, ExerciseType};

/// Build the learner-facing instruction for a concrete exercise type.
///
/// The Ukrainian phrasing is part of the external contract and must not be
/// reworded without a product decision.
///
/// # Panics
///
/// Panics when called with the aggregate [`ExerciseType::All`] filter, which
/// has no template. That is a bug in the caller, not a recoverable state.
pub fn instruction(exercise_type: ExerciseType, source_sentence_text: &str) -> String {
  match exercise_type {
    ExerciseType::Essay => {
      format!("Перекладіть речення: \"{source_sentence_text}\"")
    }
    ExerciseType::Cloze => {
      format!("Дано: \"{source_sentence_text}\", запишіть пропущене слово")
    }
    ExerciseType::MultipleChoiceText => {
      format!("Дано: \"{source_sentence_text}\", виберіть пропущене слово")
    }
    ExerciseType::All => {
      panic!("ExerciseType::All has no instruction template; pass a concrete type")
    }
  }
}

/// Build the essay bit. Needs no tokenization: the sample solution is the
/// target sentence verbatim and the learner translates freely.
pub fn essay_bit(record: &ExerciseRecord, base_url: &str) -> EssayBit {
  EssayBit {
    format: "text",
    meta: Meta::for_record(record),
    feedback_engine: FeedbackEngine::new(&record.id, "essay"),
    instruction: instruction(ExerciseType::Essay, &record.source_sentence_text),
    kind: "essay",
    sample_solution: record.target_sentence_text.clone(),
    answer: Answer::default(),
    resource: Resource {
      kind: "audio",
      audio: Audio {
        format: "mp3",
        // Concatenated onto the caller's root URL, never re-parsed.
        src: format!(
          "{}audio/{}-{}.mp3",
          base_url,
          record.target_sentence_language.as_db_tag(),
          record.target_sentence_id
        ),
      },
    },
  }
}

/// Build the cloze bit: every gap found by the tokenizer becomes a fill-in
/// element with the target word as its single solution.
pub fn cloze_bit(record: &ExerciseRecord) -> ClozeBit {
  let body = tokenizer::tokenize(&record.target_sentence_text, &record.target_word)
    .into_iter()
    .map(|segment| match segment {
      Segment::Text(text) => ClozeElement::Text { text },
      Segment::Gap(word) => ClozeElement::Gap {
        solutions: vec![word],
        answer: Answer::default(),
      },
    })
    .collect();

  ClozeBit {
    format: "text",
    meta: Meta::for_record(record),
    feedback_engine: FeedbackEngine::new(&record.id, "cloze"),
    instruction: instruction(ExerciseType::Cloze, &record.source_sentence_text),
    kind: "cloze",
    body,
  }
}

/// Build the multiple-choice bit.
///
/// The choice set holds the target word plus one entry per distractor and is
/// shuffled once per bit; when the tokenizer finds several gap positions they
/// all show the same shuffled list. The order is presentation randomization
/// only, clients must not depend on it.
pub fn multiple_choice_bit<R: Rng>(record: &ExerciseRecord, rng: &mut R) -> MultipleChoiceTextBit {
  let mut choices: Vec<Choice> = record
    .similar_words
    .iter()
    .map(|word| Choice {
      choice: word.clone(),
      is_correct: false,
      is_selected: false,
    })
    .collect();
  choices.push(Choice {
    choice: record.target_word.clone(),
    is_correct: true,
    is_selected: false,
  });
  choices.shuffle(rng);

  let body = tokenizer::tokenize(&record.target_sentence_text, &record.target_word)
    .into_iter()
    .map(|segment| match segment {
      Segment::Text(text) => MultipleChoiceElement::Text { text },
      Segment::Gap(_) => MultipleChoiceElement::Choices {
        choices: choices.clone(),
      },
    })
    .collect();

  MultipleChoiceTextBit {
    format: "text",
    meta: Meta::for_record(record),
    feedback_engine: FeedbackEngine::new(&record.id, "multiple-choice-text"),
    instruction: instruction(
      ExerciseType::MultipleChoiceText,
      &record.source_sentence_text,
    ),
    kind: "multiple-choice-text",
    body,
  }
}
