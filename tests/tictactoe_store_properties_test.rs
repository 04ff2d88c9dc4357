//! Property tests for the game state store over random click sequences.

use proptest::prelude::*;
use tictactoe_timeline::{
    GameStateStore, InvariantSet, Outcome, Player, Square, StoreInvariants, compute_winner,
    rules::LINES,
};

/// A click on a cell, or a jump to a history entry (taken modulo its length).
#[derive(Debug, Clone)]
enum Action {
    Click(usize),
    Jump(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..9).prop_map(Action::Click),
        1 => (0usize..10).prop_map(Action::Jump),
    ]
}

fn board_strategy() -> impl Strategy<Value = [Square; 9]> {
    let square = prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ];
    prop::array::uniform9(square)
}

proptest! {
    #[test]
    fn history_len_is_legal_moves_plus_one(cells in prop::collection::vec(0usize..9, 0..20)) {
        let mut store = GameStateStore::new();
        let mut legal = 0;
        for cell in cells {
            if let Ok(next) = store.try_apply_move(cell) {
                store = next;
                legal += 1;
            }
        }
        prop_assert_eq!(store.history().len(), legal + 1);
    }

    #[test]
    fn players_alternate_by_parity(actions in prop::collection::vec(action(), 0..30)) {
        let mut store = GameStateStore::new();
        for action in actions {
            store = match action {
                Action::Click(cell) => store.apply_move(cell),
                Action::Jump(k) => store.jump_to_move(k % store.history().len()).unwrap(),
            };
        }
        for (i, snapshot) in store.history().iter().enumerate().skip(1) {
            let mov = snapshot.last_move().unwrap();
            prop_assert_eq!(mov.player, Player::for_move(i - 1));
        }
        prop_assert!(StoreInvariants::check_all(&store).is_ok());
    }

    #[test]
    fn illegal_clicks_change_nothing(
        actions in prop::collection::vec(action(), 0..30),
        clicked in 0usize..12
    ) {
        let mut store = GameStateStore::new();
        for action in actions {
            store = match action {
                Action::Click(cell) => store.apply_move(cell),
                Action::Jump(k) => store.jump_to_move(k % store.history().len()).unwrap(),
            };
        }
        let occupied = store
            .current_board()
            .get_index(clicked)
            .is_none_or(|sq| sq != Square::Empty);
        if occupied || store.winner().is_some() {
            prop_assert_eq!(store.apply_move(clicked), store.clone());
        }
    }

    #[test]
    fn jump_then_click_truncates(
        cells in prop::collection::vec(0usize..9, 1..9),
        k in 0usize..9,
        click in 0usize..9
    ) {
        let mut store = GameStateStore::new();
        for cell in cells {
            store = store.apply_move(cell);
        }
        let k = k % store.history().len();
        let jumped = store.jump_to_move(k).unwrap();
        prop_assert_eq!(jumped.history(), store.history());

        if let Ok(next) = jumped.try_apply_move(click) {
            prop_assert_eq!(next.history().len(), k + 2);
            prop_assert_eq!(&next.history()[..=k], &store.history()[..=k]);
            prop_assert_eq!(next.current_move(), k + 1);
        }
    }

    #[test]
    fn winner_matches_line_scan(squares in board_strategy()) {
        let mut board = tictactoe_timeline::Board::new();
        for (pos, sq) in tictactoe_timeline::Position::ALL.into_iter().zip(squares) {
            board.set(pos, sq);
        }

        let line_owner = LINES.iter().find_map(|line| {
            let marks: Vec<Square> = line.iter().map(|&p| board.get(p)).collect();
            match marks.as_slice() {
                [Square::Occupied(a), Square::Occupied(b), Square::Occupied(c)]
                    if a == b && b == c =>
                {
                    Some(*a)
                }
                _ => None,
            }
        });
        let full = squares.iter().all(|sq| *sq != Square::Empty);

        let expected = match (line_owner, full) {
            (Some(player), _) => Some(Outcome::Winner(player)),
            (None, true) => Some(Outcome::Draw),
            (None, false) => None,
        };
        prop_assert_eq!(compute_winner(&board), expected);
    }
}
