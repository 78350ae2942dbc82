//! Hashnode publish client: one `publishPost` GraphQL mutation per run.
//!
//! Hashnode reports business failures through a top-level `errors` array on
//! an otherwise successful HTTP response, so both the status and that array
//! are checked before a run counts as published.

use crate::error::{BotError, BotResult};
use serde::{Deserialize, Serialize};

/// GraphQL mutation wrapping the assembled article.
const PUBLISH_POST_MUTATION: &str = r#"
mutation PublishPost($input: PublishPostInput!) {
  publishPost(input: $input) {
    post {
      id
      title
      slug
      url
    }
  }
}
"#;

/// One tag attached to the published article.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tag {
    pub name: &'static str,
    pub slug: &'static str,
}

/// Everything the publish call needs, built from the assembled document and
/// the run profile.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub title: String,
    pub body_markdown: String,
    pub publication_id: String,
    pub tags: &'static [Tag],
    pub cover_image_url: Option<String>,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    errors: Vec<GraphqlError>,
    data: Option<PublishData>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Deserialize)]
struct PublishData {
    #[serde(rename = "publishPost")]
    publish_post: Option<PublishPostPayload>,
}

#[derive(Deserialize)]
struct PublishPostPayload {
    post: Option<PublishedPost>,
}

#[derive(Deserialize)]
struct PublishedPost {
    url: Option<String>,
}

/// Hashnode GraphQL client bound to one API key and endpoint.
pub struct HashnodeClient {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
}

impl HashnodeClient {
    pub fn new(api_key: &str, api_url: &str) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            api_url: api_url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Publish the article. Returns the public post URL when Hashnode reports
    /// one. A non-empty GraphQL `errors` array fails the run even on HTTP 200.
    pub async fn publish(&self, request: &PublishRequest) -> BotResult<Option<String>> {
        let body = serde_json::json!({
            "query": PUBLISH_POST_MUTATION,
            "variables": { "input": build_input(request) },
        });

        tracing::info!(title = %request.title, "Publishing article to Hashnode");
        let res = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::Publish(format!("publish request failed: {e}")))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(BotError::Publish(format!(
                "Hashnode API error {status}: {body}"
            )));
        }

        let parsed: GraphqlResponse = res
            .json()
            .await
            .map_err(|e| BotError::Publish(format!("response parse failed: {e}")))?;

        if !parsed.errors.is_empty() {
            let messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();
            return Err(BotError::PublishGraphql(messages.join("; ")));
        }

        Ok(parsed
            .data
            .and_then(|data| data.publish_post)
            .and_then(|payload| payload.post)
            .and_then(|post| post.url))
    }
}

/// Build the `PublishPostInput` variables object. The cover image block is
/// only attached when a cover URL is configured.
fn build_input(request: &PublishRequest) -> serde_json::Value {
    let mut input = serde_json::json!({
        "title": request.title,
        "contentMarkdown": request.body_markdown,
        "publicationId": request.publication_id,
        "tags": request.tags,
    });
    if let Some(cover_url) = &request.cover_image_url {
        input["coverImageOptions"] = serde_json::json!({
            "coverImageURL": cover_url,
            "isCoverAttributionHidden": true,
        });
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TAGS: &[Tag] = &[
        Tag { name: "Hardstyle", slug: "hardstyle" },
        Tag { name: "Music", slug: "music" },
    ];

    fn request_with_cover(cover: Option<&str>) -> PublishRequest {
        PublishRequest {
            title: "Le Top Hardstyle".to_string(),
            body_markdown: "Corps de l'article.".to_string(),
            publication_id: "pub-123".to_string(),
            tags: TEST_TAGS,
            cover_image_url: cover.map(str::to_string),
        }
    }

    #[test]
    fn input_carries_article_fields_and_tags() {
        let input = build_input(&request_with_cover(None));
        assert_eq!(input["title"], "Le Top Hardstyle");
        assert_eq!(input["contentMarkdown"], "Corps de l'article.");
        assert_eq!(input["publicationId"], "pub-123");
        assert_eq!(input["tags"][0]["name"], "Hardstyle");
        assert_eq!(input["tags"][1]["slug"], "music");
        assert!(input.get("coverImageOptions").is_none());
    }

    #[test]
    fn cover_image_block_is_attached_when_configured() {
        let input = build_input(&request_with_cover(Some(
            "https://raw.githubusercontent.com/nathan/blog/main/daily.png",
        )));
        assert_eq!(
            input["coverImageOptions"]["coverImageURL"],
            "https://raw.githubusercontent.com/nathan/blog/main/daily.png"
        );
        assert_eq!(input["coverImageOptions"]["isCoverAttributionHidden"], true);
    }

    #[test]
    fn graphql_errors_are_collected() {
        let raw = r#"{"errors":[{"message":"Unauthorized"},{"message":"Invalid publication"}],"data":null}"#;
        let parsed: GraphqlResponse = serde_json::from_str(raw).unwrap();
        let messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();
        assert_eq!(messages.join("; "), "Unauthorized; Invalid publication");
    }

    #[test]
    fn successful_response_yields_post_url() {
        let raw = r#"{"data":{"publishPost":{"post":{"id":"1","title":"T","slug":"t","url":"https://blog.example/t"}}}}"#;
        let parsed: GraphqlResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.errors.is_empty());
        let url = parsed
            .data
            .and_then(|data| data.publish_post)
            .and_then(|payload| payload.post)
            .and_then(|post| post.url);
        assert_eq!(url.as_deref(), Some("https://blog.example/t"));
    }

    #[test]
    fn missing_post_url_is_tolerated() {
        let raw = r#"{"data":{"publishPost":{"post":{"id":"1","title":"T","slug":"t","url":null}}}}"#;
        let parsed: GraphqlResponse = serde_json::from_str(raw).unwrap();
        let url = parsed
            .data
            .and_then(|data| data.publish_post)
            .and_then(|payload| payload.post)
            .and_then(|post| post.url);
        assert!(url.is_none());
    }
}
