// Ranking and pruning of candidate actions

use super::*;

#[test]
fn test_prune_cardinality() {
    for notation in POSITIONS {
        let mut b = board(notation);
        let color = b.turn_color();
        let n = generate_actions(&b, color).len();

        for width in [0, 1, 5, 15, n, n + 10] {
            let pruned = rank_and_prune(&mut b, color, width, &mut StdRng::seed_from_u64(1)).unwrap();
            assert_eq!(pruned.len(), width.min(n), "{} width {}", notation, width);
        }
    }
}

#[test]
fn test_pruned_actions_are_generated_actions() {
    for notation in POSITIONS {
        let mut b = board(notation);
        let color = b.turn_color();
        let all = generate_actions(&b, color);

        let pruned = rank_and_prune(&mut b, color, 10, &mut StdRng::seed_from_u64(3)).unwrap();
        for action in &pruned {
            assert!(all.contains(action), "{} not generated", action);
        }
        let mut unique = pruned.to_vec();
        unique.sort_by_key(|a| a.to_string());
        unique.dedup();
        assert_eq!(unique.len(), pruned.len());
    }
}

#[test]
fn test_ranked_descending() {
    for notation in POSITIONS {
        let mut b = board(notation);
        let color = b.turn_color();

        let ranked = rank_actions(&mut b, color, &mut StdRng::seed_from_u64(5)).unwrap();
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score), "{}", notation);
    }
}

#[test]
fn test_pruned_is_ranked_prefix() {
    let mut b = board(POSITIONS[1]);
    let color = b.turn_color();

    let ranked = rank_actions(&mut b, color, &mut StdRng::seed_from_u64(9)).unwrap();
    let pruned = rank_and_prune(&mut b, color, 7, &mut StdRng::seed_from_u64(9)).unwrap();

    let prefix: Vec<_> = ranked.iter().take(7).map(|s| s.action).collect();
    assert_eq!(pruned.to_vec(), prefix);
}

#[test]
fn test_ranking_restores_board() {
    for notation in POSITIONS {
        let mut b = board(notation);
        let before = b.clone();
        rank_actions(&mut b, before.turn_color(), &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(b, before);
    }
}
