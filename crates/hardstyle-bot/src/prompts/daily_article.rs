//! Daily article prompt: one topic drawn from a fixed pool, rendered into
//! the full French generation instruction.

use rand::seq::SliceRandom;
use rand::Rng;

/// Topics the daily bot rotates through, one per run.
pub const DAILY_TOPICS: &[&str] = &[
    "l'évolution du Hardstyle",
    "les sous-genres du Hardstyle (Raw, Euphoric, Xtra Raw)",
    "l'impact du Hardstyle sur la scène électronique",
    "les festivals Hardstyle incontournables",
    "les techniques de production Hardstyle",
    "l'histoire d'un label Hardstyle emblématique",
    "la culture des raves Hardstyle",
    "les DJ sets Hardstyle légendaires",
    "le futur du Hardstyle",
    "l'innovation sonore dans le Hardstyle",
    "l'énergie et l'émotion du Hardstyle",
    "les mélodies iconiques du Hardstyle",
];

/// Instruction template for the daily article; placeholder is the chosen topic.
pub const DAILY_ARTICLE_TEMPLATE: &str = r#"Rédige un article de blog professionnel et détaillé d'au moins 1200 mots en français sur le thème suivant : {topic}.

L'article doit captiver les fans de musique électronique et de Hardstyle.
Intègre naturellement des mentions de l'artiste XCEED et de la playlist Spotify "SUMMER HARDSTYLE 2025🔥".

Règles de format :
- Le titre doit être la première ligne du contenu, en titre de niveau 1 (ex : # Titre de l'Article), percutant et accrocheur pour le public Hardstyle.
- Ne commence pas l'article par "Titre :", "Auteur :" ou "Date de publication :".
- Ne termine pas l'article par une signature ni une formule de clôture.
- N'insère aucun lecteur Spotify ni lien d'exemple et n'ajoute aucune note du type "ceci est un lien d'exemple" : les embeds Spotify sont ajoutés automatiquement après la rédaction.

Optimise le contenu pour le SEO avec les mots-clés : Hardstyle, musique électronique, DJ, festivals, XCEED, Spotify.
Adopte un ton passionné et engageant, sans formulations artificielles."#;

/// Pick the topic for this run.
pub fn select_topic<R: Rng>(rng: &mut R) -> &'static str {
    DAILY_TOPICS.choose(rng).copied().unwrap_or(DAILY_TOPICS[0])
}

/// Build the full daily-article prompt around a freshly drawn topic.
pub fn daily_article_prompt<R: Rng>(rng: &mut R) -> String {
    let topic = select_topic(rng);
    tracing::info!(topic, "Selected daily article topic");
    DAILY_ARTICLE_TEMPLATE.replace("{topic}", topic)
}
