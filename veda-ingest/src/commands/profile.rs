// veda-ingest/src/commands/profile.rs
//
// USE CASE: Show which deployment coordinates are active.

use comfy_table::Table;
use serde_json::json;
use std::path::Path;

use veda_ingest_core::domain::{EnvConfig, Profile};

pub fn execute(config: Option<&Path>, env: Option<String>) -> anyhow::Result<()> {
    let profile = match env {
        Some(raw) => Profile::resolve(Some(&raw)),
        None => super::settings(config)?.profile(),
    };

    let out = json!({
        "profile": profile,
        "config": EnvConfig::for_profile(profile),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

pub fn list() -> anyhow::Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Profile", "Owner", "Repo", "Branch", "Region", "Bucket"]);

    for profile in Profile::ALL {
        let cfg = EnvConfig::for_profile(profile);
        table.add_row(vec![
            profile.to_string(),
            cfg.owner,
            cfg.repo,
            cfg.target_branch,
            cfg.aws_region,
            cfg.thumbnail_bucket,
        ]);
    }

    println!("{table}");
    Ok(())
}
