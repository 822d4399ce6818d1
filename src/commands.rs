//! Invocation modes and their terminal output.


use crate::lookup::Lookup;
use dearbabla_core::record::join_translations;
use std::io::Write;
use std::time::Duration;
use tracing::info;

/// What a single invocation does.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    /// Print translations for each word, one line per word.
    Lookup { words: Vec<String>, store: bool },
    /// Forget each word.
    Delete { words: Vec<String> },
    /// Print how many words were collected.
    Count,
    /// Show one random learned word, optionally pausing before the answer.
    Quiz { delay: Option<Duration> },
}

impl Mode {
    /// Pick the mode from parsed flags.
    ///
    /// Words win over `--count`, and `--count` over the quiz.
    pub fn select(
        words: Vec<String>,
        count: bool,
        delete: bool,
        nostore: bool,
        delay: Option<Duration>,
    ) -> Self {
        if !words.is_empty() {
            if delete {
                Self::Delete { words }
            } else {
                Self::Lookup {
                    words,
                    store: !nostore,
                }
            }
        } else if count {
            Self::Count
        } else {
            Self::Quiz { delay }
        }
    }
}

/// Run `mode`, writing results to `out`.
pub async fn run<W: Write>(lookup: &Lookup, mode: Mode, out: &mut W) -> anyhow::Result<()> {
    match mode {
        Mode::Lookup { words, store } => {
            for word in &words {
                let translations = lookup.resolve(word, store).await?;
                writeln!(out, "{}", join_translations(&translations))?;
            }
        }
        Mode::Delete { words } => {
            for word in &words {
                lookup.delete(word).await?;
                info!("deleted {word:?}");
            }
        }
        Mode::Count => {
            let count = lookup.count().await?;
            writeln!(out, "Collected {count} words")?;
        }
        Mode::Quiz { delay } => match lookup.random_entry().await? {
            Some(record) => {
                write!(out, "{}: ", record.word)?;
                out.flush()?;
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                writeln!(out, "{}", join_translations(&record.translations))?;
            }
            None => writeln!(out, "No words collected yet")?,
        },
    }
    out.flush()?;
    Ok(())
}
