//! Engine invariants under arbitrary and randomized move sequences.
//!
//! Rejected moves are expected and ignored; the invariants must hold in
//! every reachable state regardless of how ill-formed the requests are.

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use territory::{Game, PlayerId};

/// Count empty cells by scanning the grid.
fn empty_cells(game: &Game) -> u64 {
    let grid = game.grid();
    let mut empty = 0;
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if grid.get(x, y).owner.is_none() {
                empty += 1;
            }
        }
    }
    empty
}

fn check_invariants(game: &Game) {
    let total = u64::from(game.board_width()) * u64::from(game.board_height());

    let placed: u64 = PlayerId::all(game.player_count() as usize)
        .map(|p| game.placed_cells(p))
        .sum();
    assert_eq!(placed + empty_cells(game), total, "cell conservation");

    for player in PlayerId::all(game.player_count() as usize) {
        let stats = game.stats(player).unwrap();
        assert!(
            stats.areas <= game.area_quota(),
            "{player} exceeds the area quota"
        );
        if stats.areas < game.area_quota() {
            assert_eq!(
                game.reachable_cells(player),
                total - placed,
                "below quota, every empty cell is reachable"
            );
        }
    }

    // Every claimed cell carries a tag in the per-player range.
    let grid = game.grid();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let cell = grid.get(x, y);
            if cell.owner.is_some() {
                assert!(cell.area.0 >= 1 && cell.area.0 <= game.area_quota());
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_any_move_sequence(
        width in 1u32..=9,
        height in 1u32..=9,
        players in 1u32..=4,
        quota in 1u32..=4,
        moves in prop::collection::vec((0u8..5, 0u32..10, 0u32..10), 0..120),
    ) {
        let mut game = Game::new(width, height, players, quota).unwrap();

        for (player, x, y) in moves {
            let _ = game.request_move(PlayerId::new(player), x, y);
            check_invariants(&game);
        }
    }

    #[test]
    fn prop_zero_arguments_never_construct(
        width in 0u32..=4,
        height in 0u32..=4,
        players in 0u32..=4,
        quota in 0u32..=4,
    ) {
        let game = Game::new(width, height, players, quota);
        let any_zero = width == 0 || height == 0 || players == 0 || quota == 0;
        prop_assert_eq!(game.is_err(), any_zero);
    }

    #[test]
    fn prop_placed_count_is_monotone(
        moves in prop::collection::vec((0u8..2, 0u32..6, 0u32..6), 0..60),
    ) {
        let mut game = Game::new(6, 6, 2, 3).unwrap();
        let mut last = [0u64; 2];

        for (player, x, y) in moves {
            let _ = game.request_move(PlayerId::new(player), x, y);
            for (i, prev) in last.iter_mut().enumerate() {
                let now = game.placed_cells(PlayerId::new(i as u8));
                prop_assert!(now >= *prev);
                *prev = now;
            }
        }
    }
}

#[test]
fn test_random_playout_preserves_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xA11CE);
    let mut game = Game::new(15, 10, 3, 4).unwrap();
    let mut accepted = 0u64;

    for attempt in 0..600 {
        let player = PlayerId::new(rng.gen_range(0..3));
        let x = rng.gen_range(0..15);
        let y = rng.gen_range(0..10);

        if game.request_move(player, x, y).is_ok() {
            accepted += 1;
        }
        if attempt % 25 == 0 {
            check_invariants(&game);
        }
    }

    check_invariants(&game);
    let placed: u64 = PlayerId::all(3).map(|p| game.placed_cells(p)).sum();
    assert_eq!(placed, accepted);
    assert!(accepted > 0);
}

#[test]
fn test_playout_is_deterministic() {
    let run = |seed: u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = Game::new(8, 8, 2, 3).unwrap();
        for _ in 0..200 {
            let player = PlayerId::new(rng.gen_range(0..2));
            let x = rng.gen_range(0..8);
            let y = rng.gen_range(0..8);
            let _ = game.request_move(player, x, y);
        }
        game.render()
    };

    assert_eq!(run(7), run(7));
    assert_ne!(run(7), run(8));
}
