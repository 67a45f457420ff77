//! Score totals and rankings

use crate::tournament::Tournament;

/// One row of the ranked standings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    /// Roster index of the competitor
    pub index: usize,
    pub name: String,
    pub total: i64,
}

/// Total score per real competitor, indexed by roster position.
///
/// A competitor's total is the sum of the scores of every pairing containing
/// it, blank pairings contributing 0. Both members of a pairing are credited
/// the same score; the bye slot is never credited. Pure recompute, so calling
/// it twice without an intervening edit gives identical results.
pub fn totals(tournament: &Tournament) -> Vec<i64> {
    let roster = tournament.roster();
    let mut totals = vec![0i64; roster.real_count()];

    for round in tournament.rounds() {
        for pairing in round {
            let Some(score) = pairing.score else { continue };
            for &slot in &pairing.slots {
                if !roster.is_bye(slot) {
                    totals[slot] += score;
                }
            }
        }
    }

    totals
}

/// The real competitors whose totals an edit to the given pairing touches.
///
/// Lets a presentation layer refresh only the affected rows; empty when the
/// address is out of range or the pairing is all byes.
pub fn affected_competitors(
    tournament: &Tournament,
    round: usize,
    pairing: usize,
) -> Vec<usize> {
    let Some(pairing) = tournament.pairing(round, pairing) else {
        return Vec::new();
    };
    pairing
        .slots
        .iter()
        .copied()
        .filter(|&slot| !tournament.roster().is_bye(slot))
        .collect()
}

/// Standings sorted by total score, highest first.
///
/// The sort is stable: competitors on equal totals keep their roster order.
pub fn rankings(tournament: &Tournament) -> Vec<Ranking> {
    let mut rows: Vec<Ranking> = totals(tournament)
        .into_iter()
        .enumerate()
        .map(|(index, total)| Ranking {
            index,
            name: tournament
                .roster()
                .name(index)
                .unwrap_or_default()
                .to_string(),
            total,
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competitor::Roster;

    fn tournament(list: &[&str]) -> Tournament {
        let roster = Roster::new(list.iter().map(|s| s.to_string()).collect()).unwrap();
        Tournament::new(roster)
    }

    #[test]
    fn test_blank_scores_count_as_zero() {
        let t = tournament(&["A", "B", "C", "D"]);
        assert_eq!(totals(&t), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_both_members_credited() {
        let mut t = tournament(&["A", "B", "C", "D"]);
        // Round 1 pairs {A,D} and {B,C}.
        t.record_score(0, 0, Some(4)).unwrap();
        t.record_score(0, 1, Some(2)).unwrap();
        assert_eq!(totals(&t), vec![4, 2, 2, 4]);
    }

    #[test]
    fn test_totals_accumulate_across_rounds() {
        let mut t = tournament(&["A", "B", "C", "D"]);
        t.record_score(0, 0, Some(1)).unwrap(); // {A,D}
        t.record_score(1, 0, Some(10)).unwrap(); // {A,C}
        t.record_score(2, 0, Some(100)).unwrap(); // {A,B}
        assert_eq!(totals(&t), vec![111, 100, 10, 1]);
    }

    #[test]
    fn test_totals_idempotent() {
        let mut t = tournament(&["A", "B", "C"]);
        t.record_score(0, 1, Some(3)).unwrap();
        assert_eq!(totals(&t), totals(&t));
    }

    #[test]
    fn test_bye_pairing_credits_only_real_member() {
        let mut t = tournament(&["A", "B", "C"]);
        // Padded round 1: {A,bye}, {B,C}. A sits out; B and C play.
        t.record_score(0, 1, Some(3)).unwrap();
        t.record_score(1, 1, Some(2)).unwrap(); // {bye,B} -> credits B only
        assert_eq!(totals(&t)[1], 5);
        assert_eq!(totals(&t)[0], 0);

        // A score typed into A's bye pairing credits A alone.
        t.record_score(0, 0, Some(9)).unwrap();
        assert_eq!(totals(&t)[0], 9);
    }

    #[test]
    fn test_all_bye_pairing_credits_no_one() {
        use crate::schedule::Pairing;

        // A pairing whose slots are all byes is not something the generator
        // emits, but restored state can carry one.
        let roster = Roster::new(vec!["A".into(), "B".into(), "C".into()]).unwrap();
        let bye = roster.len() - 1;
        let mut t =
            Tournament::from_parts(roster, vec![vec![Pairing::new(bye, bye)]], 1);

        t.record_score(0, 0, Some(7)).unwrap();
        assert_eq!(totals(&t), vec![0, 0, 0]);
        assert!(affected_competitors(&t, 0, 0).is_empty());
    }

    #[test]
    fn test_affected_competitors() {
        let t = tournament(&["A", "B", "C"]);
        assert_eq!(affected_competitors(&t, 0, 1), vec![1, 2]);
        // Bye pairing touches only the real member.
        assert_eq!(affected_competitors(&t, 0, 0), vec![0]);
        assert!(affected_competitors(&t, 9, 0).is_empty());
    }

    #[test]
    fn test_ranking_orders_by_total_descending() {
        let mut t = tournament(&["A", "B", "C"]);
        t.record_score(0, 1, Some(3)).unwrap(); // B and C get 3
        t.record_score(1, 1, Some(2)).unwrap(); // B gets 2 more
        let rows = rankings(&t);
        let order: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_ranking_ties_keep_roster_order() {
        let mut t = tournament(&["A", "B", "C", "D"]);
        // {B,C} share a score; A and D share another via their pairing.
        t.record_score(0, 0, Some(1)).unwrap(); // {A,D}
        t.record_score(0, 1, Some(1)).unwrap(); // {B,C}
        let order: Vec<usize> = rankings(&t).iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }
}
