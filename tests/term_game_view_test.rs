use tui_blockfall::core::{Board, CyclicSource, Engine, GameSnapshot};
use tui_blockfall::term::{GameView, Viewport};
use tui_blockfall::types::{GameStatus, PieceKind};

fn screen_text(fb: &tui_blockfall::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Engine::new(1).snapshot();
    let view = GameView::default();

    // cell_w=2, cell_h=1: 20x20 board plus border => 22x22
    assert_eq!(view.frame_size(), (22, 22));
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = PieceKind::I.id();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_over_board() {
    let engine = Engine::with_source(CyclicSource::repeat(PieceKind::O));
    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(22, 22));

    // O at board columns 4-5, rows 0-1
    for (x, y) in [(9, 1), (10, 1), (11, 2), (12, 2)] {
        assert_eq!(fb.get(x, y).unwrap().ch, '█', "({}, {})", x, y);
    }
    assert_eq!(fb.get(7, 1).unwrap().ch, '·');
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut board = Board::new();
    board.set(4, 0, Some(PieceKind::T));
    let engine = Engine::from_parts(board, CyclicSource::repeat(PieceKind::O));
    let snap = engine.snapshot();
    assert_eq!(snap.status, GameStatus::GameOver);

    let fb = GameView::default().render(&snap, Viewport::new(40, 24));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("R to restart"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let snap = Engine::new(7).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
