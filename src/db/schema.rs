//! Corpus schema migrations.
//!
//! The importer that populates these tables lives outside this service; the
//! schema here is the authoritative shape both sides agree on.

use rusqlite::{Connection, Result};

/// Create the corpus tables if they do not exist yet.
///
/// Sentence languages are stored as upper-case tags (`UK`, `DE`, `EN`);
/// `similar_words` is a JSON array of distractor strings.
pub fn run_migrations(conn: &Connection) -> Result<()> {
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS sentences (
      id INTEGER PRIMARY KEY,
      text TEXT NOT NULL,
      language TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS exercise (
      id TEXT PRIMARY KEY,
      translation_id INTEGER NOT NULL,
      target_word TEXT NOT NULL,
      similar_words TEXT NOT NULL DEFAULT '[]',
      source_sentence_id INTEGER NOT NULL REFERENCES sentences(id),
      target_sentence_id INTEGER NOT NULL REFERENCES sentences(id)
    );

    CREATE INDEX IF NOT EXISTS idx_exercise_target_word ON exercise(target_word);
    CREATE INDEX IF NOT EXISTS idx_sentences_language ON sentences(language);
    "#,
  )
}
