//! Property tests over random move sequences.

use proptest::prelude::*;

use tictactoe_pro::core::{line_length_for, GameConfig, GameState, PlayerId};
use tictactoe_pro::rules::Outcome;

fn game_config() -> impl Strategy<Value = GameConfig> {
    (prop::sample::select(vec![3usize, 5, 7]), 2usize..=4)
        .prop_map(|(size, players)| GameConfig::new(size, players).unwrap())
}

/// Cell attempts, including occupied and off-board ones.
fn attempts() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..52, 0..120)
}

fn check_invariants(state: &GameState) {
    let n = state.config().grid_size();
    assert_eq!(state.board().len(), n * n);
    assert!(state.current_history_index() < state.history().len());

    match state.outcome() {
        Outcome::InProgress => {
            assert_eq!(state.winner(), None);
            assert!(state.winning_line().is_empty());
        }
        Outcome::Won { winner, line } => {
            assert_eq!(line.len(), line_length_for(n));
            for &cell in line.iter() {
                assert_eq!(state.board().get(cell), Some(Some(*winner)));
            }
        }
        Outcome::Drawn => {
            assert!(state.board().is_full());
            assert!(state.winning_line().is_empty());
        }
    }
}

proptest! {
    #[test]
    fn prop_moves_keep_invariants(config in game_config(), cells in attempts()) {
        let mut state = GameState::new(config);
        let mut accepted = 0;

        for cell in cells {
            let before = state.clone();
            match state.apply_move(cell) {
                Ok(_) => {
                    accepted += 1;
                    prop_assert_eq!(state.board().get(cell), Some(Some(before.current_player())));
                    prop_assert_eq!(state.board().marked_count(), before.board().marked_count() + 1);
                }
                Err(_) => prop_assert_eq!(&state, &before),
            }
            check_invariants(&state);
            prop_assert_eq!(state.current_history_index(), accepted);
            prop_assert_eq!(state.history().len(), accepted + 1);
        }
    }

    #[test]
    fn prop_turn_order_follows_move_count(config in game_config(), cells in attempts()) {
        let mut state = GameState::new(config);
        for cell in cells {
            let _ = state.apply_move(cell);
            if !state.is_terminal() {
                prop_assert_eq!(
                    state.current_player(),
                    PlayerId::for_turn(state.current_history_index(), config.player_count())
                );
            }
        }
    }

    #[test]
    fn prop_marks_never_overwritten(config in game_config(), cells in attempts()) {
        let mut state = GameState::new(config);
        for cell in cells {
            let before = state.board().clone();
            let _ = state.apply_move(cell);
            for (i, old) in before.iter().enumerate() {
                if old.is_some() {
                    prop_assert_eq!(state.board().get(i), Some(old));
                }
            }
        }
    }

    #[test]
    fn prop_jump_round_trip(config in game_config(), cells in attempts(), pick in any::<prop::sample::Index>()) {
        let mut state = GameState::new(config);
        for cell in cells {
            let _ = state.apply_move(cell);
        }
        let start = state.current_history_index();
        let board = state.board().clone();
        let outcome = state.outcome().clone();

        let target = pick.index(state.history().len());
        state.jump_to(target).unwrap();
        check_invariants(&state);
        prop_assert_eq!(state.board(), state.history().board_at(target).unwrap());

        state.jump_to(start).unwrap();
        prop_assert_eq!(state.board(), &board);
        prop_assert_eq!(state.outcome(), &outcome);
    }

    #[test]
    fn prop_winning_line_is_first_in_scan_order(config in game_config(), cells in attempts()) {
        let mut state = GameState::new(config);
        for cell in cells {
            let _ = state.apply_move(cell);
        }

        if let Outcome::Won { line, .. } = state.outcome() {
            let board = state.board();
            let first_complete = state.lines().iter().find(|candidate| {
                let owner = board.get(candidate[0]).flatten();
                owner.is_some() && candidate.iter().all(|&c| board.get(c).flatten() == owner)
            });
            prop_assert_eq!(first_complete, Some(line));
        }
    }
}
