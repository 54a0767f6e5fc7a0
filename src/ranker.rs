//! Display ordering: standard rating descending, unrated entries sunk.

use std::cmp::Reverse;

use crate::types::PlayerRecord;

/// Stable two-key sort: rated-before-unrated, then standard descending.
/// Unrated players keep their input order relative to each other; rapid and
/// blitz never influence the order.
pub fn rank(mut players: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
    players.sort_by_key(|p| {
        (
            p.standard.is_unrated(),
            Reverse(p.standard.value().unwrap_or(0)),
        )
    });
    players
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn player(fide_id: &str, standard: Rating) -> PlayerRecord {
        PlayerRecord {
            fide_id: fide_id.to_string(),
            name: format!("Player {fide_id}"),
            standard,
            rapid: Rating::Unrated,
            blitz: Rating::Unrated,
        }
    }

    #[test]
    fn rated_players_sort_descending() {
        let ranked = rank(vec![
            player("a", Rating::Rated(2100)),
            player("b", Rating::Rated(2830)),
            player("c", Rating::Rated(2500)),
        ]);
        let values: Vec<_> = ranked.iter().map(|p| p.standard.value().unwrap()).collect();
        assert_eq!(values, vec![2830, 2500, 2100]);
    }

    #[test]
    fn unrated_sinks_below_any_rating() {
        let ranked = rank(vec![
            player("u", Rating::Unrated),
            player("low", Rating::Rated(1)),
            player("r", Rating::Rated(2500)),
        ]);
        assert_eq!(ranked[0].fide_id, "r");
        assert_eq!(ranked[1].fide_id, "low");
        assert_eq!(ranked[2].fide_id, "u");
    }

    #[test]
    fn unrated_players_keep_input_order() {
        let ranked = rank(vec![
            player("u1", Rating::Unrated),
            player("r", Rating::Rated(2000)),
            player("u2", Rating::Unrated),
            player("u3", Rating::Unrated),
        ]);
        let tail: Vec<_> = ranked[1..].iter().map(|p| p.fide_id.as_str()).collect();
        assert_eq!(tail, vec!["u1", "u2", "u3"]);
    }

    #[test]
    fn rank_is_idempotent() {
        let input = vec![
            player("u", Rating::Unrated),
            player("a", Rating::Rated(2100)),
            player("b", Rating::Rated(2830)),
        ];
        let once = rank(input);
        let twice = rank(once.clone());
        assert_eq!(twice, once);
    }

    #[test]
    fn rapid_and_blitz_never_influence_order() {
        let mut a = player("a", Rating::Rated(2400));
        a.rapid = Rating::Rated(1000);
        let mut b = player("b", Rating::Rated(2400));
        b.rapid = Rating::Rated(2900);
        // Equal standard ratings: stable sort keeps input order regardless
        // of the other fields.
        let ranked = rank(vec![a.clone(), b.clone()]);
        assert_eq!(ranked, vec![a, b]);
    }
}
