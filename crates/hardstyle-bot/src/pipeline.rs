//! The single-run pipeline both binaries share: prompt, generation, assembly,
//! publish. Stages run strictly in sequence with one attempt each; any stage
//! error aborts the run and there is no partial-success state.

use crate::assembler::ContentAssembler;
use crate::config::BotConfig;
use crate::error::BotResult;
use crate::hashnode::{HashnodeClient, PublishRequest};
use crate::mistral::MistralClient;
use crate::profile::RunProfile;
use tracing::info;

/// Run one generate-and-publish cycle for `profile`.
pub async fn run(config: &BotConfig, profile: &RunProfile) -> BotResult<()> {
    info!(profile = profile.label, "Starting Hardstyle bot run");

    let mistral = MistralClient::new(
        &config.mistral_api_key,
        &config.mistral_model,
        &config.mistral_api_url,
    );
    mistral.check_auth().await?;

    let prompt = {
        let mut rng = rand::thread_rng();
        profile.build_prompt(&mut rng)
    };
    let raw = mistral.generate_article(&prompt).await?;

    let assembler = ContentAssembler::new();
    let document = assembler.assemble(&raw, &profile.assemble_options(), chrono::Local::now());
    info!(title = %document.title, "Assembled document");

    let cover_url = config.cover_image_url(profile.cover_file);
    info!(cover = %cover_url, "Resolved cover image");

    let request = PublishRequest {
        title: document.title,
        body_markdown: document.body,
        publication_id: config.publication_id.clone(),
        tags: profile.tags,
        cover_image_url: Some(cover_url),
    };

    let hashnode = HashnodeClient::new(&config.hashnode_api_key, &config.hashnode_api_url);
    match hashnode.publish(&request).await? {
        Some(url) => info!(title = %request.title, url = %url, "Article published 🎉"),
        None => info!(title = %request.title, "Article published (no URL returned)"),
    }
    Ok(())
}
