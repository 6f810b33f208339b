use super::board::Board;
use super::player::Mark;
use super::state::Move;

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Ongoing,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Horizontal, vertical, and the two diagonals, as (row, col) steps.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Detects runs of `win_length` equal marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinDetector {
    win_length: usize,
}

impl WinDetector {
    pub fn new(win_length: usize) -> Self {
        WinDetector { win_length }
    }

    /// Evaluate the board after `last` was placed, looking only at the four
    /// lines through the new cell.
    pub fn evaluate(&self, board: &Board, last: &Move) -> Outcome {
        let won = DIRECTIONS.iter().any(|&(dr, dc)| {
            1 + self.run(board, last, dr, dc) + self.run(board, last, -dr, -dc)
                >= self.win_length
        });

        if won {
            Outcome::Win(last.mark)
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Scan the whole board. Agrees with [`WinDetector::evaluate`] on any
    /// board reached by legal play, since play stops at the first win.
    pub fn scan(&self, board: &Board) -> Outcome {
        for row in 0..board.height() {
            for col in 0..board.width() {
                let Some(mark) = board.get(row, col).and_then(|c| c.mark()) else {
                    continue;
                };
                let wins = DIRECTIONS.iter().any(|&(dr, dc)| {
                    (1..self.win_length).all(|i| {
                        step(row, col, dr * i as isize, dc * i as isize)
                            .and_then(|(r, c)| board.get(r, c))
                            .and_then(|cell| cell.mark())
                            == Some(mark)
                    })
                });
                if wins {
                    return Outcome::Win(mark);
                }
            }
        }
        if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Count consecutive cells holding `last.mark` stepping away from the
    /// move, not counting the move itself.
    fn run(&self, board: &Board, last: &Move, dr: isize, dc: isize) -> usize {
        let mut count = 0;
        let (mut row, mut col) = (last.row, last.column);
        while let Some((r, c)) = step(row, col, dr, dc) {
            if board.get(r, c).and_then(|cell| cell.mark()) != Some(last.mark) {
                break;
            }
            count += 1;
            row = r;
            col = c;
        }
        count
    }
}

impl Default for WinDetector {
    fn default() -> Self {
        Self::new(4)
    }
}

fn step(row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
    Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerId;

    /// Drop marks column by column and return the last move.
    fn build(board: &mut Board, drops: &[(usize, Mark)]) -> Move {
        let mut last = None;
        for &(column, mark) in drops {
            let row = board.landing_row(column).unwrap();
            board.place(row, column, mark).unwrap();
            last = Some(Move {
                column,
                row,
                player: PlayerId::new_v4(),
                mark,
                turn: 0,
            });
        }
        last.unwrap()
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        let last = build(
            &mut board,
            &[(0, Mark::X), (1, Mark::X), (3, Mark::X), (2, Mark::X)],
        );
        // Completed from the middle of the line
        assert_eq!(WinDetector::default().evaluate(&board, &last), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        let last = build(&mut board, &[(3, Mark::O); 4]);
        assert_eq!(WinDetector::default().evaluate(&board, &last), Outcome::Win(Mark::O));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        let last = build(
            &mut board,
            &[
                (0, Mark::X),
                (1, Mark::O),
                (1, Mark::X),
                (2, Mark::O),
                (2, Mark::O),
                (2, Mark::X),
                (3, Mark::O),
                (3, Mark::O),
                (3, Mark::O),
                (3, Mark::X),
            ],
        );
        assert_eq!(WinDetector::default().evaluate(&board, &last), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        let last = build(
            &mut board,
            &[
                (6, Mark::X),
                (5, Mark::O),
                (5, Mark::X),
                (4, Mark::O),
                (4, Mark::O),
                (4, Mark::X),
                (3, Mark::O),
                (3, Mark::O),
                (3, Mark::O),
                (3, Mark::X),
            ],
        );
        assert_eq!(WinDetector::default().evaluate(&board, &last), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        let last = build(&mut board, &[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert_eq!(WinDetector::default().evaluate(&board, &last), Outcome::Ongoing);
    }

    #[test]
    fn test_removing_any_mark_of_four_breaks_the_win() {
        let line = [(0, Mark::X), (1, Mark::X), (2, Mark::X), (3, Mark::X)];
        for skip in 0..line.len() {
            let mut board = Board::default();
            let drops: Vec<_> = line
                .iter()
                .enumerate()
                .map(|(i, &(col, mark))| if i == skip { (col, Mark::O) } else { (col, mark) })
                .collect();
            let detector = WinDetector::default();
            let last = build(&mut board, &drops);
            assert_eq!(detector.evaluate(&board, &last), Outcome::Ongoing);
            assert_eq!(detector.scan(&board), Outcome::Ongoing);
        }
    }

    #[test]
    fn test_interrupted_line_is_not_a_win() {
        let mut board = Board::default();
        let last = build(
            &mut board,
            &[(0, Mark::X), (1, Mark::X), (2, Mark::O), (3, Mark::X), (4, Mark::X)],
        );
        assert_eq!(WinDetector::default().evaluate(&board, &last), Outcome::Ongoing);
    }

    #[test]
    fn test_draw_on_full_board_without_line() {
        let mut board = Board::new(2, 2);
        let last = build(
            &mut board,
            &[(0, Mark::X), (0, Mark::O), (1, Mark::O), (1, Mark::X)],
        );
        let detector = WinDetector::new(3);
        assert_eq!(detector.evaluate(&board, &last), Outcome::Draw);
        assert_eq!(detector.scan(&board), Outcome::Draw);
    }

    #[test]
    fn test_configurable_win_length() {
        let mut board = Board::default();
        let last = build(&mut board, &[(0, Mark::O), (1, Mark::O), (2, Mark::O)]);
        assert_eq!(WinDetector::new(3).evaluate(&board, &last), Outcome::Win(Mark::O));
        assert_eq!(WinDetector::new(4).evaluate(&board, &last), Outcome::Ongoing);
    }

    #[test]
    fn test_scan_finds_vertical_line() {
        let mut board = Board::default();
        build(&mut board, &[(5, Mark::O); 4]);
        assert_eq!(WinDetector::default().scan(&board), Outcome::Win(Mark::O));
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::Ongoing.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Win(Mark::X).winner(), Some(Mark::X));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
