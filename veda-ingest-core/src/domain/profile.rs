// veda-ingest-core/src/domain/profile.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::domain::error::DomainError;

/// Environment variable selecting the deployment profile.
pub const PROFILE_ENV_VAR: &str = "VEDA_INGEST_ENV";

const OWNER: &str = "nasa-impact";
const TARGET_BRANCH: &str = "main";
const AWS_REGION: &str = "us-west-2";
const THUMBNAIL_BUCKET: &str = "veda-thumbnails";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Local,
    Veda,
    Disasters,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Local, Profile::Veda, Profile::Disasters];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Veda => "veda",
            Self::Disasters => "disasters",
        }
    }

    /// Forgiving resolution: anything unrecognized (or absent) falls back to `Local`.
    pub fn resolve(env_value: Option<&str>) -> Self {
        env_value
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    /// Reads [`PROFILE_ENV_VAR`] from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(PROFILE_ENV_VAR).ok().as_deref())
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Profile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "veda" => Ok(Self::Veda),
            "disasters" => Ok(Self::Disasters),
            _ => Err(DomainError::UnknownProfile(s.to_string())),
        }
    }
}

/// Repository and storage coordinates for one deployment profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvConfig {
    pub owner: String,
    pub repo: String,
    pub target_branch: String,
    pub aws_region: String,
    pub thumbnail_bucket: String,
}

impl EnvConfig {
    pub fn for_profile(profile: Profile) -> Self {
        let repo = match profile {
            Profile::Local => "veda-ingest-ui-testing",
            Profile::Veda => "veda-ingest-ui",
            Profile::Disasters => "disaster-data",
        };

        Self {
            owner: OWNER.to_string(),
            repo: repo.to_string(),
            target_branch: TARGET_BRANCH.to_string(),
            aws_region: AWS_REGION.to_string(),
            thumbnail_bucket: THUMBNAIL_BUCKET.to_string(),
        }
    }

    /// Public URL of an object stored in the thumbnail bucket.
    pub fn thumbnail_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.thumbnail_bucket, self.aws_region, key
        )
    }
}

/// The process-wide configuration, resolved from the environment on first read.
pub fn active_config() -> &'static EnvConfig {
    static ACTIVE: OnceLock<EnvConfig> = OnceLock::new();
    ACTIVE.get_or_init(|| {
        let profile = Profile::from_env();
        tracing::debug!(%profile, "Resolved active environment profile");
        EnvConfig::for_profile(profile)
    })
}
