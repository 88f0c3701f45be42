//! End-to-end tests for turn orchestration.

use squares::{
    BoardError, Color, ConfigurationError, GameError, GameSession, Move, Outcome, PlacementError,
    Player,
};

const W: Color = Color::White;
const B: Color = Color::Black;

fn human_vs_human(size: usize) -> GameSession {
    GameSession::start(size, Player::Human(W), Player::Human(B)).expect("valid game")
}

#[test]
fn test_human_then_automated_reply() {
    let mut game = GameSession::start(4, Player::Human(W), Player::Automated(B)).unwrap();
    assert!(game.history().is_empty());
    assert_eq!(game.current_player(), Some(Player::Human(W)));

    // User typed MOVE 1, 1.
    let placed = game.submit_human_move(0, 0).unwrap();
    assert_eq!(placed, vec![Move::new(0, 0, W), Move::new(1, 0, B)]);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.current_player(), Some(Player::Human(W)));
    assert_eq!(game.turn_index(), 0);
    assert_eq!(game.board().serialize(), format!("wb{}", " ".repeat(14)));
}

#[test]
fn test_automated_first_player_moves_on_start() {
    let game = GameSession::start(4, Player::Automated(W), Player::Human(B)).unwrap();
    assert_eq!(game.history(), &[Move::new(0, 0, W)]);
    assert_eq!(game.current_player(), Some(Player::Human(B)));
}

#[test]
fn test_start_rejects_small_board() {
    let err = GameSession::start(2, Player::Human(W), Player::Automated(B)).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidConfiguration(ConfigurationError::BoardSize(BoardError::SizeTooSmall(2)))
    );
    assert!(GameSession::start(3, Player::Human(W), Player::Automated(B)).is_ok());
}

#[test]
fn test_start_rejects_duplicate_colors() {
    let err = GameSession::start(4, Player::Human(B), Player::Automated(B)).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidConfiguration(ConfigurationError::DuplicateColor(B))
    );
}

#[test]
fn test_illegal_moves_leave_state_unchanged() {
    let mut game = human_vs_human(4);
    game.submit_human_move(1, 1).unwrap();
    let board = game.board().clone();

    assert_eq!(
        game.submit_human_move(1, 1),
        Err(GameError::IllegalMove(PlacementError::Occupied { x: 1, y: 1 }))
    );
    assert_eq!(
        game.submit_human_move(4, 0),
        Err(GameError::IllegalMove(PlacementError::OutOfBounds { x: 4, y: 0 }))
    );
    assert_eq!(game.board(), &board);
    assert_eq!(game.current_player(), Some(Player::Human(B)));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_white_square_wins_and_freezes_game() {
    let mut game = human_vs_human(4);
    for (x, y) in [(0, 0), (1, 0), (2, 0), (3, 0), (0, 2), (1, 1)] {
        game.submit_human_move(x, y).unwrap();
        assert_eq!(game.outcome(), Outcome::InProgress);
    }
    game.submit_human_move(2, 2).unwrap();

    assert_eq!(game.outcome(), Outcome::Won(W));
    assert!(game.is_over());
    assert_eq!(game.current_player(), None);
    assert_eq!(game.turn_index(), 0);
    assert_eq!(game.submit_human_move(3, 3), Err(GameError::GameOver));
}

#[test]
fn test_full_board_without_square_is_draw() {
    // Final position:
    //   w w w w
    //   w b w b
    //   b b w b
    //   b w b b
    let whites = [0, 1, 2, 3, 4, 6, 10, 13];
    let blacks = [5, 7, 8, 9, 11, 12, 14, 15];

    let mut game = human_vs_human(4);
    for (w, b) in whites.iter().zip(blacks.iter()) {
        assert_eq!(game.outcome(), Outcome::InProgress);
        game.submit_human_move(w % 4, w / 4).unwrap();
        assert_eq!(game.outcome(), Outcome::InProgress);
        game.submit_human_move(b % 4, b / 4).unwrap();
    }

    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.board().serialize(), "wwwwwbwbbbwbbwbb");
    assert_eq!(game.submit_human_move(0, 0), Err(GameError::GameOver));
}

#[test]
fn test_automated_game_runs_to_completion_on_start() {
    let game = GameSession::start(4, Player::Automated(W), Player::Automated(B)).unwrap();
    assert_eq!(game.outcome(), Outcome::Won(W));
    assert_eq!(game.history().len(), 11);
    assert_eq!(game.board().serialize(), format!("wbwbwbwbwbw{}", " ".repeat(5)));

    let game = GameSession::start(3, Player::Automated(B), Player::Automated(W)).unwrap();
    assert_eq!(game.outcome(), Outcome::Won(W));
    assert_eq!(game.board().serialize(), "bwbwbwbw ");
}

#[test]
fn test_finished_automated_game_reports_game_over() {
    let mut game = GameSession::start(3, Player::Automated(W), Player::Automated(B)).unwrap();
    assert_eq!(game.outcome(), Outcome::Won(B));
    assert_eq!(game.submit_human_move(2, 2), Err(GameError::GameOver));
}

#[test]
fn test_human_vs_automated_always_terminates() {
    for size in 3..7 {
        let mut game = GameSession::start(size, Player::Human(B), Player::Automated(W)).unwrap();
        let mut calls = 0;
        while !game.is_over() {
            let (x, y, _) = game
                .board()
                .cells()
                .filter(|(x, y, _)| game.board().is_empty(*x, *y))
                .last()
                .expect("in-progress game has an empty cell");
            game.submit_human_move(x, y).unwrap();
            calls += 1;
            assert!(calls <= size * size);
        }
        assert!(game.outcome().is_terminal());
    }
}
