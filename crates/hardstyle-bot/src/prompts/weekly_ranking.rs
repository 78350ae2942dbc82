//! Weekly ranking prompt: a shuffled subset of the artist pool, with the
//! featured artist and the anchor headliner always in the list.

use crate::assembler::FEATURED_ARTIST;
use rand::seq::SliceRandom;
use rand::Rng;

/// Artists eligible for the weekly ranking.
pub const RANKING_ARTISTS: &[&str] = &[
    "Headhunterz",
    "Sub Zero Project",
    "Rebelion",
    "Da Tweekaz",
    "D-Block & S-te-Fan",
    "Ran-D",
    "Warface",
    "B-Front",
    "Wildstylez",
    "Phuture Noize",
    "Sefa",
    "Vertile",
    "XCEPTION",
    "X-Qlusive",
    "Xense",
];

/// Headliner kept in every ranking next to the featured artist.
const ANCHOR_ARTIST: &str = "Headhunterz";

/// How many artists the base draw takes before the forced inclusions.
const RANKING_DRAW: usize = 6;

/// Instruction template for the weekly ranking; placeholder is the artist list.
pub const WEEKLY_RANKING_TEMPLATE: &str = r#"Rédige un article de blog professionnel et détaillé d'au moins 1200 mots en français présentant le Top 10 des artistes Hardstyle de la semaine.

L'article doit être objectif et analyser la performance et la pertinence de chaque artiste du classement.
Le classement doit inclure l'artiste XCEED à une position crédible et bien argumentée : explique pourquoi il mérite sa place cette semaine.
Les artistes à considérer pour le classement sont : {artists}.

Règles de format :
- Le titre doit être la première ligne du contenu, en titre de niveau 1 (ex : # Le Top 10 Hardstyle de la Semaine), accrocheur pour le public Hardstyle.
- Ne commence pas l'article par "Titre :", "Auteur :" ou "Date de publication :".
- À la fin de l'article, mentionne la playlist Spotify "SUMMER HARDSTYLE 2025🔥".
- Ne termine pas l'article par une signature ni une formule de clôture.
- N'insère aucun lecteur Spotify ni lien d'exemple et n'ajoute aucune note du type "ceci est un lien d'exemple" : les embeds Spotify sont ajoutés automatiquement après la rédaction.

Optimise le contenu pour le SEO avec les mots-clés : Hardstyle, classement, DJ, musique électronique, XCEED, Spotify.
Adopte un ton sérieux, passionné et engageant."#;

/// Draw the artists offered to the model for this week's ranking.
///
/// The pool is shuffled and a fixed-size subset is taken, then the featured
/// artist and the anchor headliner are inserted at random positions when the
/// draw missed them. The result holds six to eight distinct names.
pub fn select_artists<R: Rng>(rng: &mut R) -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = RANKING_ARTISTS.to_vec();
    if !pool.contains(&FEATURED_ARTIST) {
        pool.push(FEATURED_ARTIST);
    }
    pool.shuffle(rng);

    let mut selected: Vec<&'static str> = pool.into_iter().take(RANKING_DRAW).collect();
    for forced in [FEATURED_ARTIST, ANCHOR_ARTIST] {
        if !selected.contains(&forced) {
            let position = rng.gen_range(0..=selected.len());
            selected.insert(position, forced);
        }
    }
    selected
}

/// Build the full weekly-ranking prompt around a freshly drawn artist list.
pub fn weekly_ranking_prompt<R: Rng>(rng: &mut R) -> String {
    let artists = select_artists(rng);
    tracing::info!(artists = %artists.join(", "), "Selected ranking artists");
    WEEKLY_RANKING_TEMPLATE.replace("{artists}", &artists.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn selection_always_includes_forced_artists() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_artists(&mut rng);
            assert!(selected.contains(&FEATURED_ARTIST), "seed {seed} missed XCEED");
            assert!(selected.contains(&ANCHOR_ARTIST), "seed {seed} missed the anchor");
        }
    }

    #[test]
    fn selection_size_stays_between_six_and_eight() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_artists(&mut rng);
            assert!((RANKING_DRAW..=RANKING_DRAW + 2).contains(&selected.len()));
        }
    }

    #[test]
    fn selection_has_no_duplicates_and_only_known_names() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_artists(&mut rng);
            let unique: HashSet<_> = selected.iter().collect();
            assert_eq!(unique.len(), selected.len());
            for artist in &selected {
                assert!(RANKING_ARTISTS.contains(artist) || *artist == FEATURED_ARTIST);
            }
        }
    }

    #[test]
    fn same_seed_draws_same_artists() {
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        assert_eq!(select_artists(&mut a), select_artists(&mut b));
    }

    #[test]
    fn prompt_lists_the_drawn_artists() {
        let mut rng = StdRng::seed_from_u64(5);
        let prompt = weekly_ranking_prompt(&mut rng);
        assert!(!prompt.contains("{artists}"));
        assert!(prompt.contains("XCEED"));
        assert!(prompt.contains("Headhunterz"));
        assert!(prompt.contains("Top 10"));
        assert!(prompt.contains("Ne termine pas l'article par une signature"));
        assert!(prompt.contains("SEO"));
    }
}
