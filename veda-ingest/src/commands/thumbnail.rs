// veda-ingest/src/commands/thumbnail.rs
//
// USE CASE: Where a thumbnail upload lands in the bucket.

use serde_json::json;
use std::path::Path;

use veda_ingest_core::domain::thumbnail::thumbnail_key;
use veda_ingest_core::domain::{EnvConfig, Profile};

pub fn execute(config: Option<&Path>, filename: &str, env: Option<String>) -> anyhow::Result<()> {
    let profile = match env {
        Some(raw) => Profile::resolve(Some(&raw)),
        None => super::settings(config)?.profile(),
    };
    let cfg = EnvConfig::for_profile(profile);

    let key = thumbnail_key(filename)?;
    let out = json!({
        "bucket": &cfg.thumbnail_bucket,
        "key": key,
        "url": cfg.thumbnail_url(&key),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
