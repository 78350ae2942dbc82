//! Prompt templates for the daily article and the weekly ranking.

pub mod daily_article;
pub mod weekly_ranking;

pub use daily_article::{daily_article_prompt, select_topic, DAILY_ARTICLE_TEMPLATE, DAILY_TOPICS};
pub use weekly_ranking::{
    select_artists, weekly_ranking_prompt, RANKING_ARTISTS, WEEKLY_RANKING_TEMPLATE,
};
