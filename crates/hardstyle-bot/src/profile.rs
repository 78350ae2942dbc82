//! Run profiles: the fixed data telling the daily article and the weekly
//! ranking apart (tags, cover file, fallback title, playlist caption, and
//! which prompt gets rendered).

use crate::assembler::AssembleOptions;
use crate::hashnode::Tag;
use crate::prompts;
use rand::Rng;

/// Which of the two bots is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Daily,
    Weekly,
}

/// Per-variant data driving the shared pipeline.
#[derive(Debug, Clone, Copy)]
pub struct RunProfile {
    pub kind: RunKind,
    /// Short label for log lines.
    pub label: &'static str,
    /// Prefix of the synthesized fallback title ("<prefix> du <timestamp>").
    pub fallback_title_prefix: &'static str,
    /// Cover image file stored at the blog repository root.
    pub cover_file: &'static str,
    /// Caption shown in bold above the playlist embed.
    pub playlist_caption: &'static str,
    /// Hashnode tags attached to the article.
    pub tags: &'static [Tag],
}

const DAILY_TAGS: &[Tag] = &[
    Tag { name: "Hardstyle", slug: "hardstyle" },
    Tag { name: "Music", slug: "music" },
    Tag { name: "Electronic Music", slug: "electronic-music" },
];

const WEEKLY_TAGS: &[Tag] = &[
    Tag { name: "Hardstyle", slug: "hardstyle" },
    Tag { name: "Ranking", slug: "ranking" },
    Tag { name: "Music", slug: "music" },
    Tag { name: "XCEED", slug: "xceed" },
    Tag { name: "Spotify", slug: "spotify" },
];

impl RunProfile {
    /// Profile of the daily article bot.
    pub fn daily() -> Self {
        Self {
            kind: RunKind::Daily,
            label: "daily article",
            fallback_title_prefix: "Article Hardstyle",
            cover_file: "daily.png",
            playlist_caption: "Écoutez le meilleur du Hardstyle :",
            tags: DAILY_TAGS,
        }
    }

    /// Profile of the weekly ranking bot.
    pub fn weekly() -> Self {
        Self {
            kind: RunKind::Weekly,
            label: "weekly ranking",
            fallback_title_prefix: "Classement Hardstyle",
            cover_file: "weekly.png",
            playlist_caption: "Ne manquez pas la playlist Hardstyle de la semaine :",
            tags: WEEKLY_TAGS,
        }
    }

    /// Render this profile's generation prompt.
    pub fn build_prompt<R: Rng>(&self, rng: &mut R) -> String {
        match self.kind {
            RunKind::Daily => prompts::daily_article_prompt(rng),
            RunKind::Weekly => prompts::weekly_ranking_prompt(rng),
        }
    }

    /// Assembly knobs derived from this profile.
    pub fn assemble_options(&self) -> AssembleOptions<'static> {
        AssembleOptions {
            fallback_title_prefix: self.fallback_title_prefix,
            playlist_caption: self.playlist_caption,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn daily_profile_carries_article_data() {
        let profile = RunProfile::daily();
        assert_eq!(profile.kind, RunKind::Daily);
        assert_eq!(profile.cover_file, "daily.png");
        assert_eq!(profile.tags.len(), 3);
        assert!(profile.playlist_caption.starts_with("Écoutez"));
    }

    #[test]
    fn weekly_profile_carries_ranking_data() {
        let profile = RunProfile::weekly();
        assert_eq!(profile.kind, RunKind::Weekly);
        assert_eq!(profile.cover_file, "weekly.png");
        assert_eq!(profile.tags.len(), 5);
        assert!(profile.tags.iter().any(|tag| tag.slug == "ranking"));
    }

    #[test]
    fn build_prompt_dispatches_per_kind() {
        let mut rng = StdRng::seed_from_u64(1);
        let daily = RunProfile::daily().build_prompt(&mut rng);
        let weekly = RunProfile::weekly().build_prompt(&mut rng);
        assert!(daily.contains("sur le thème suivant"));
        assert!(weekly.contains("Top 10 des artistes Hardstyle"));
    }

    #[test]
    fn assemble_options_mirror_the_profile() {
        let profile = RunProfile::weekly();
        let opts = profile.assemble_options();
        assert_eq!(opts.fallback_title_prefix, "Classement Hardstyle");
        assert_eq!(opts.playlist_caption, profile.playlist_caption);
    }
}
