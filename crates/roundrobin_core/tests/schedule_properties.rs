//! End-to-end properties of the schedule and standings

use std::collections::HashSet;

use roundrobin_core::{generate_rounds, rankings, totals, Roster, Tournament};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn complete_round_robin_for_even_counts() {
    for n in (2..=16).step_by(2) {
        let rounds = generate_rounds(n);
        assert_eq!(rounds.len(), n - 1);

        let mut pairs = HashSet::new();
        for round in &rounds {
            assert_eq!(round.len(), n / 2);
            for pairing in round {
                let [a, b] = pairing.slots;
                pairs.insert((a.min(b), a.max(b)));
            }
        }
        assert_eq!(pairs.len(), n * (n - 1) / 2);
    }
}

#[test]
fn odd_roster_gives_everyone_one_bye() {
    for real in [1usize, 3, 5, 7, 9] {
        let list: Vec<String> = (0..real).map(|i| format!("P{}", i)).collect();
        let tournament = Tournament::new(Roster::new(list).unwrap());
        let bye_index = real; // bye pads the end of the roster

        let mut byes = vec![0usize; real];
        for round in tournament.rounds() {
            for pairing in round {
                if let Some(sitter) = pairing.opponent_of(bye_index) {
                    byes[sitter] += 1;
                }
            }
        }
        assert_eq!(byes, vec![1; real], "bye distribution for {} competitors", real);
    }
}

#[test]
fn four_competitor_walkthrough() {
    let tournament = Tournament::new(Roster::new(names(&["A", "B", "C", "D"])).unwrap());
    let label = |round: usize, pairing: usize| {
        tournament.pairing_label(tournament.pairing(round, pairing).unwrap())
    };

    assert_eq!(label(0, 0), "A and D");
    assert_eq!(label(0, 1), "B and C");
    assert_eq!(label(1, 0), "A and C");
    assert_eq!(label(1, 1), "D and B");
    assert_eq!(label(2, 0), "A and B");
    assert_eq!(label(2, 1), "C and D");
}

#[test]
fn three_competitor_walkthrough() {
    let mut tournament =
        Tournament::new(Roster::new(names(&["A", "B", "C"])).unwrap());

    // Padded to [A, B, C, bye]; round 1 is {A,bye}, {B,C} so A sits out.
    let sitter = tournament.pairing_label(tournament.pairing(0, 0).unwrap());
    assert_eq!(sitter, "A");
    assert_eq!(
        tournament.pairing_label(tournament.pairing(0, 1).unwrap()),
        "B and C"
    );

    // B totals 3 and C totals 5 once their bye rounds are scored.
    tournament.record_score(1, 1, Some(3)).unwrap(); // {bye,B}
    tournament.record_score(2, 1, Some(5)).unwrap(); // {C,bye}
    assert_eq!(totals(&tournament), vec![0, 3, 5]);

    let order: Vec<String> = rankings(&tournament)
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(order, vec!["C", "B", "A"]);
}
