//! Terminal condition detection.

use super::{LINES, is_full};
use crate::{Board, Cell, Status};
use tracing::instrument;

/// Checks the board for a terminal condition.
///
/// A completed line of this agent's marks wins over anything else; a
/// completed line of the opponent's marks is a loss; a full board with
/// neither is a tie.
#[instrument(skip(board))]
pub fn status<B: Board + ?Sized>(board: &B) -> Status {
    if completes_line(board, Cell::Mine) {
        Status::Win
    } else if completes_line(board, Cell::Theirs) {
        Status::Loss
    } else if is_full(board) {
        Status::Tie
    } else {
        Status::Ongoing
    }
}

fn completes_line<B: Board + ?Sized>(board: &B, cell: Cell) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.cell(pos) == cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridBoard, Mark, Position};

    fn place(board: &mut GridBoard, index: usize, mark: Mark) {
        board
            .place(Position::from_index(index).unwrap(), mark)
            .unwrap();
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(status(&GridBoard::new_empty()), Status::Ongoing);
    }

    #[test]
    fn test_every_line_of_mine_is_a_win() {
        for line in LINES {
            let mut board = GridBoard::new_empty();
            for pos in line {
                board.place(pos, Mark::Mine).unwrap();
            }
            assert_eq!(status(&board), Status::Win, "line {:?}", line);
        }
    }

    #[test]
    fn test_every_line_of_theirs_is_a_loss() {
        for line in LINES {
            let mut board = GridBoard::new_empty();
            for pos in line {
                board.place(pos, Mark::Theirs).unwrap();
            }
            assert_eq!(status(&board), Status::Loss, "line {:?}", line);
        }
    }

    #[test]
    fn test_incomplete_line_is_ongoing() {
        let mut board = GridBoard::new_empty();
        place(&mut board, 0, Mark::Mine);
        place(&mut board, 1, Mark::Mine);
        place(&mut board, 2, Mark::Theirs);
        assert_eq!(status(&board), Status::Ongoing);
    }
}
