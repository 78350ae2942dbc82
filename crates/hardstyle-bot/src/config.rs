//! Bot configuration resolved from the process environment at startup.
//!
//! Two credentials are required: `MISTRAL_API_KEY` and `HASHNODE_API_KEY`.
//! `GITHUB_REPOSITORY` and `GITHUB_REF` are optional, normally injected by
//! GitHub Actions, and only drive the raw-content URL under which the cover
//! images are served. Everything is captured once into [`BotConfig`]; no
//! other module reads the environment afterwards.

use crate::error::{BotError, BotResult};

/// Mistral chat-completions endpoint.
pub const MISTRAL_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";

/// Generation model. "mistral-medium" or "mistral-large" trade cost for more detail.
pub const MISTRAL_MODEL: &str = "mistral-tiny";

/// Hashnode GraphQL endpoint.
pub const HASHNODE_API_URL: &str = "https://gql.hashnode.com/";

/// The Hashnode publication every article is published to.
pub const PUBLICATION_ID: &str = "6859c2f970cff8e4319738f3";

/// Placeholder coordinates used when the bot runs outside GitHub Actions.
const FALLBACK_OWNER: &str = "votre_utilisateur";
const FALLBACK_REPO: &str = "votre_repo";
const FALLBACK_BRANCH: &str = "main";

/// Everything a run needs, resolved once at process entry.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub mistral_api_key: String,
    pub hashnode_api_key: String,
    pub mistral_model: String,
    pub mistral_api_url: String,
    pub hashnode_api_url: String,
    pub publication_id: String,
    /// GitHub coordinates of the repository hosting the cover images.
    pub repo_owner: String,
    pub repo_name: String,
    pub repo_branch: String,
}

impl BotConfig {
    /// Load the configuration, failing fast when a credential is missing.
    pub fn from_env() -> BotResult<Self> {
        let mistral_api_key = required_env("MISTRAL_API_KEY")?;
        let hashnode_api_key = required_env("HASHNODE_API_KEY")?;
        let (repo_owner, repo_name) = repo_coordinates(std::env::var("GITHUB_REPOSITORY").ok());
        let repo_branch = branch_from_ref(std::env::var("GITHUB_REF").ok());

        Ok(Self {
            mistral_api_key,
            hashnode_api_key,
            mistral_model: MISTRAL_MODEL.to_string(),
            mistral_api_url: MISTRAL_API_URL.to_string(),
            hashnode_api_url: HASHNODE_API_URL.to_string(),
            publication_id: PUBLICATION_ID.to_string(),
            repo_owner,
            repo_name,
            repo_branch,
        })
    }

    /// Base URL for raw files of the repository hosting the cover images.
    pub fn raw_content_base_url(&self) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}",
            self.repo_owner, self.repo_name, self.repo_branch
        )
    }

    /// Public URL of a cover image stored at the repository root.
    pub fn cover_image_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.raw_content_base_url(), file_name)
    }
}

fn required_env(name: &str) -> BotResult<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| BotError::Config(format!("{name} is not set")))
}

/// Parse `owner/name` out of `GITHUB_REPOSITORY`. Outside GitHub Actions the
/// variable is absent and the placeholder coordinates are used instead, with
/// a warning so broken cover URLs are easy to diagnose.
fn repo_coordinates(repository: Option<String>) -> (String, String) {
    match repository.as_deref().and_then(|repo| repo.split_once('/')) {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
            (owner.to_string(), name.to_string())
        }
        _ => {
            tracing::warn!(
                "GITHUB_REPOSITORY missing or malformed; cover URLs will use placeholder coordinates"
            );
            (FALLBACK_OWNER.to_string(), FALLBACK_REPO.to_string())
        }
    }
}

/// Branch name out of `GITHUB_REF` (`refs/heads/<branch>`); any other ref
/// shape falls back to `main`.
fn branch_from_ref(git_ref: Option<String>) -> String {
    git_ref
        .as_deref()
        .and_then(|r| r.strip_prefix("refs/heads/"))
        .filter(|branch| !branch.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_BRANCH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_repo(owner: &str, name: &str, branch: &str) -> BotConfig {
        BotConfig {
            mistral_api_key: "test-mistral-key".to_string(),
            hashnode_api_key: "test-hashnode-key".to_string(),
            mistral_model: MISTRAL_MODEL.to_string(),
            mistral_api_url: MISTRAL_API_URL.to_string(),
            hashnode_api_url: HASHNODE_API_URL.to_string(),
            publication_id: PUBLICATION_ID.to_string(),
            repo_owner: owner.to_string(),
            repo_name: name.to_string(),
            repo_branch: branch.to_string(),
        }
    }

    #[test]
    fn repo_coordinates_parses_owner_and_name() {
        let (owner, name) = repo_coordinates(Some("nathan/hardstyle-blog".to_string()));
        assert_eq!(owner, "nathan");
        assert_eq!(name, "hardstyle-blog");
    }

    #[test]
    fn repo_coordinates_falls_back_without_variable() {
        let (owner, name) = repo_coordinates(None);
        assert_eq!(owner, FALLBACK_OWNER);
        assert_eq!(name, FALLBACK_REPO);
    }

    #[test]
    fn repo_coordinates_rejects_malformed_value() {
        let (owner, name) = repo_coordinates(Some("no-slash-here".to_string()));
        assert_eq!(owner, FALLBACK_OWNER);
        assert_eq!(name, FALLBACK_REPO);
    }

    #[test]
    fn branch_ref_is_stripped_to_branch_name() {
        assert_eq!(branch_from_ref(Some("refs/heads/main".to_string())), "main");
        assert_eq!(
            branch_from_ref(Some("refs/heads/feature/covers".to_string())),
            "feature/covers"
        );
    }

    #[test]
    fn non_branch_refs_fall_back_to_main() {
        assert_eq!(branch_from_ref(Some("refs/tags/v1.0".to_string())), "main");
        assert_eq!(branch_from_ref(None), "main");
    }

    #[test]
    fn cover_image_url_points_at_raw_content() {
        let config = config_with_repo("nathan", "hardstyle-blog", "main");
        assert_eq!(
            config.cover_image_url("daily.png"),
            "https://raw.githubusercontent.com/nathan/hardstyle-blog/main/daily.png"
        );
    }
}
