// veda-ingest/src/commands/text.rs

use veda_ingest_core::domain::text::{sanitize_filename, truncate_words};

pub fn sanitize(name: &str) -> anyhow::Result<()> {
    println!("{}", sanitize_filename(name));
    Ok(())
}

pub fn truncate(text: &str, max_words: usize) -> anyhow::Result<()> {
    println!("{}", truncate_words(Some(text), Some(max_words)));
    Ok(())
}
