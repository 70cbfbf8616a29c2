// Pruned search against plain minimax

use super::*;

#[test]
fn test_matches_minimax_as_max() {
    for notation in POSITIONS {
        let b = board(notation);
        let color = b.turn_color();
        for depth in 1..=3 {
            let expected = reference_minimax(&b, color, depth, Role::Max);
            let mut live = b.clone();
            let got = alpha_beta(&mut live, color, depth, MIN_SCORE, MAX_SCORE, Role::Max, &mut full_width_ctx(7)).unwrap();
            assert_eq!(got, expected, "{} at depth {}", notation, depth);
        }
    }
}

#[test]
fn test_matches_minimax_as_min() {
    for notation in POSITIONS {
        let b = board(notation);
        let color = b.turn_color();
        for depth in 1..=2 {
            let expected = reference_minimax(&b, color, depth, Role::Min);
            let mut live = b.clone();
            let got = alpha_beta(&mut live, color, depth, MIN_SCORE, MAX_SCORE, Role::Min, &mut full_width_ctx(8)).unwrap();
            assert_eq!(got, expected, "{} at depth {}", notation, depth);
        }
    }
}

#[test]
fn test_shuffle_seed_does_not_change_value() {
    let b = board(POSITIONS[0]);
    let values: Vec<Score> = (0..4)
        .map(|seed| {
            let mut live = b.clone();
            alpha_beta(&mut live, Color::Red, 3, MIN_SCORE, MAX_SCORE, Role::Max, &mut full_width_ctx(seed)).unwrap()
        })
        .collect();
    assert!(values.windows(2).all(|w| w[0] == w[1]), "{:?}", values);
}

#[test]
fn test_root_score_matches_minimax() {
    for notation in POSITIONS {
        let b = board(notation);
        let color = b.turn_color();
        let depth = 2;

        let expected = generate_actions(&b, color)
            .into_iter()
            .map(|action| {
                let mut child = b.clone();
                child.apply(action).unwrap();
                decided_score(&child, color)
                    .unwrap_or_else(|| reference_minimax(&child, color.opposite(), depth - 1, Role::Min))
            })
            .max()
            .unwrap();

        let config = SearchConfig::new(depth, usize::MAX).unwrap();
        let mut live = b.clone();
        let result = Searcher::with_seed(config, 11).search(&mut live, color).unwrap();
        assert_eq!(result.score, expected, "{}", notation);
        assert_eq!(live, b);
    }
}

#[test]
fn test_transposition_table_keeps_value() {
    for notation in POSITIONS {
        let b = board(notation);
        let color = b.turn_color();
        let plain = SearchConfig::new(2, usize::MAX).unwrap();
        let cached = plain.with_transposition_table(true);

        let without = Searcher::with_seed(plain, 4).search(&mut b.clone(), color).unwrap();
        let with = Searcher::with_seed(cached, 4).search(&mut b.clone(), color).unwrap();
        assert_eq!(without.score, with.score, "{}", notation);
    }
}

#[test]
fn test_narrow_search_counts_fewer_nodes() {
    let b = board(POSITIONS[0]);

    let mut wide = full_width_ctx(2);
    alpha_beta(&mut b.clone(), Color::Red, 3, MIN_SCORE, MAX_SCORE, Role::Max, &mut wide).unwrap();

    let mut narrow = SearchContext::new(3, StdRng::seed_from_u64(2));
    alpha_beta(&mut b.clone(), Color::Red, 3, MIN_SCORE, MAX_SCORE, Role::Max, &mut narrow).unwrap();

    assert!(narrow.nodes < wide.nodes);
    // 1 root + at most 3 children + at most 9 grandchildren + 27 leaves
    assert!(narrow.nodes <= 40);
}
