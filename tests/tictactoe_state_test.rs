//! Tests for the session state machine.

use strum::IntoEnumIterator;
use tictactoe_session::{
    Board, Cell, GameEvent, GameState, GameStatus, PlaceError, Player, Position, rules,
};

fn started() -> GameState {
    let mut game = GameState::new();
    game.start();
    game
}

fn play(game: &mut GameState, indices: &[usize]) -> GameStatus {
    let mut status = game.terminal_status();
    for &index in indices {
        status = game.place(index);
    }
    status
}

/// Builds a board from cells in row-major order.
fn board_from(cells: [Cell; 9]) -> Board {
    let mut board = Board::new();
    for (pos, cell) in Position::iter().zip(cells) {
        board.set(pos, cell);
    }
    board
}

#[test]
fn test_left_column_win() {
    let mut game = started();
    // X O O / X - - / X - -
    let status = play(&mut game, &[0, 1, 3, 2, 6]);

    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(game.terminal_status(), GameStatus::Won(Player::X));
    assert_eq!(game.board().display(), "X|O|O\n-+-+-\nX|-|-\n-+-+-\nX|-|-");
    assert_eq!(game.score_of(Player::X), 1);
    assert_eq!(game.score_of(Player::O), 0);
}

#[test]
fn test_full_board_without_line_is_draw() {
    use Cell::{O, X};
    let mut game = started();
    // Final board X O X / X O O / O X X
    let status = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.board(), &board_from([X, O, X, X, O, O, O, X, X]));
    assert_eq!(status, GameStatus::Draw);
    assert_eq!(game.score_of(Player::X), 0);
    assert_eq!(game.score_of(Player::O), 0);
}

#[test]
fn test_reset_after_win_keeps_score() {
    let mut game = started();
    play(&mut game, &[0, 1, 3, 2, 6]);

    game.reset_board();

    assert_eq!(game.score_of(Player::X), 1);
    assert_eq!(game.score_of(Player::O), 0);
    assert!((0..9).all(|i| game.cell_at(i) == Some(Cell::Empty)));
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.terminal_status(), GameStatus::InProgress);
    assert!(game.is_started());
}

#[test]
fn test_score_accumulates_across_games() {
    let mut game = started();
    play(&mut game, &[0, 1, 3, 2, 6]); // X wins
    game.dispatch(GameEvent::ResetRequested);
    play(&mut game, &[4, 0, 8, 1, 5, 2]); // O wins top row
    assert_eq!(game.terminal_status(), GameStatus::Won(Player::O));
    game.dispatch(GameEvent::ResetRequested);
    play(&mut game, &[0, 1, 3, 2, 6]); // X again

    assert_eq!(game.score_of(Player::X), 2);
    assert_eq!(game.score_of(Player::O), 1);
}

#[test]
fn test_place_before_start_is_noop() {
    let mut game = GameState::new();
    let before = game.clone();

    assert_eq!(game.place(4), GameStatus::InProgress);
    assert_eq!(game, before);
    assert_eq!(game.try_place(4), Err(PlaceError::NotStarted));
}

#[test]
fn test_place_on_occupied_cell_is_noop() {
    let mut game = started();
    game.place(4);
    let before = game.clone();

    game.place(4);

    assert_eq!(game, before);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_place_after_win_is_noop() {
    let mut game = started();
    play(&mut game, &[0, 1, 3, 2, 6]);
    let before = game.clone();

    assert_eq!(game.place(8), GameStatus::Won(Player::X));
    assert_eq!(game, before);
    assert_eq!(game.try_place(8), Err(PlaceError::GameOver));
}

#[test]
fn test_out_of_range_index_is_noop() {
    let mut game = started();
    let before = game.clone();
    game.place(9);
    game.place(usize::MAX);
    assert_eq!(game, before);
    assert_eq!(game.cell_at(9), None);
}

#[test]
fn test_start_does_not_clear_score_or_board() {
    let mut game = started();
    game.place(0);
    game.dispatch(GameEvent::StartRequested);
    assert_eq!(game.cell_at(0), Some(Cell::X));
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_winning_move_filling_board_is_win_not_draw() {
    let mut game = started();
    // X O X / O X O / O X X: X completes the main diagonal on the last cell
    let status = play(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(game.score_of(Player::X), 1);
}

#[test]
fn test_full_board_pattern_is_draw_by_rules() {
    // X O X / X O O / O X O has no line; evaluated directly since it is
    // not reachable with X moving first.
    use Cell::{O, X};
    let board = board_from([X, O, X, X, O, O, O, X, O]);
    assert!(rules::is_draw(&board));
    assert_eq!(rules::check_winner(&board), None);
}
