//! Corpus lookup: exercises and learnable words for a language pair.

use rusqlite::{Connection, Result, Row, params};

use crate::domain::{ExerciseRecord, Language, LanguagePair};

/// Fetch all exercise records for a language pair and target word.
///
/// Word matching is exact; language matching happens on the upper-case stored
/// tags. An unknown word is an empty result, not an error.
pub fn exercises_by_pair_and_word(
  conn: &Connection,
  pair: &LanguagePair,
  word: &str,
) -> Result<Vec<ExerciseRecord>> {
  let mut stmt = conn.prepare(
    "SELECT
        e.id,
        e.translation_id,
        e.target_word,
        e.similar_words,
        e.source_sentence_id,
        e.target_sentence_id,
        s1.text,
        s1.language,
        s2.text,
        s2.language
      FROM exercise e
      JOIN sentences s1 ON s1.id = e.source_sentence_id
      JOIN sentences s2 ON s2.id = e.target_sentence_id
      WHERE s1.language = ?1 AND s2.language = ?2 AND e.target_word = ?3",
  )?;

  let rows = stmt.query_map(
    params![pair.source.as_db_tag(), pair.target.as_db_tag(), word],
    row_to_record,
  )?;
  rows.collect()
}

/// Fetch the distinct learnable target words for a language pair.
pub fn distinct_words(conn: &Connection, pair: &LanguagePair) -> Result<Vec<String>> {
  let mut stmt = conn.prepare(
    "SELECT DISTINCT e.target_word
      FROM exercise e
      JOIN sentences s1 ON s1.id = e.source_sentence_id
      JOIN sentences s2 ON s2.id = e.target_sentence_id
      WHERE s1.language = ?1 AND s2.language = ?2",
  )?;

  let rows = stmt.query_map(
    params![pair.source.as_db_tag(), pair.target.as_db_tag()],
    |row| row.get(0),
  )?;
  rows.collect()
}

fn row_to_record(row: &Row<'_>) -> Result<ExerciseRecord> {
  let similar_raw: String = row.get(3)?;
  Ok(ExerciseRecord {
    id: row.get(0)?,
    translation_id: row.get(1)?,
    target_word: row.get(2)?,
    similar_words: parse_similar_words(&similar_raw),
    source_sentence_id: row.get(4)?,
    target_sentence_id: row.get(5)?,
    source_sentence_text: row.get(6)?,
    source_sentence_language: parse_language(row, 7)?,
    target_sentence_text: row.get(8)?,
    target_sentence_language: parse_language(row, 9)?,
  })
}

/// A row with unparsable distractor JSON degrades to no distractors.
fn parse_similar_words(raw: &str) -> Vec<String> {
  serde_json::from_str(raw).unwrap_or_else(|e| {
    tracing::warn!("dropping unparsable similar_words {:?}: {}", raw, e);
    Vec::new()
  })
}

fn parse_language(row: &Row<'_>, idx: usize) -> Result<Language> {
  let tag: String = row.get(idx)?;
  Language::from_db_tag(&tag).ok_or_else(|| {
    rusqlite::Error::FromSqlConversionFailure(
      idx,
      rusqlite::types::Type::Text,
      format!("unknown language tag {tag:?}").into(),
    )
  })
}
