//! Game state module - the session state machine
//!
//! This module ties together the board, pieces, the bag queue and scoring.
//! A [`GameSession`] is driven from outside: a timer calls [`GameSession::tick`]
//! at a fixed cadence and an input source calls [`GameSession::apply_action`].
//!
//! ```text
//!            tick / move / rotate / drop
//!              +------+
//!              v      |
//!  start --> Running -+--- spawn blocked ---> GameOver
//!              ^  |                              |
//!        pause |  | pause                        | restart
//!              |  v                              v
//!             Paused                           Running
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::frame::{ActiveFrame, Frame};
use crate::pieces::{try_rotate, Piece};
use crate::rng::PieceQueue;
use crate::scoring::line_clear_score;
use crate::snapshot::{Snapshot, SnapshotError};
use crate::types::{GameAction, Shape, Status};

/// Result of the most recent lock, for observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    board: Board,
    current: Piece,
    next: Shape,
    queue: PieceQueue<R>,
    score: u32,
    status: Status,
    /// Last lock/line-clear event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameSession<StdRng> {
    /// Session whose shape sequence is fixed by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Session seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a new game on an empty board, drawing shapes with `rng`
    pub fn new(rng: R) -> Self {
        let mut queue = PieceQueue::new(rng);
        let current = Piece::spawn(queue.draw());
        let next = queue.draw();

        let mut session = Self {
            board: Board::new(),
            current,
            next,
            queue,
            score: 0,
            status: Status::Running,
            last_event: None,
        };
        session.check_spawn();
        session
    }

    /// Rebuild a running session from a snapshot
    ///
    /// The bag is not part of a snapshot, so shapes after `next` come from a
    /// fresh bag drawn with `rng`.
    pub fn from_snapshot(snapshot: &Snapshot, rng: R) -> Result<Self, SnapshotError> {
        let board = Board::from_code_rows(&snapshot.board)?;
        let current = Piece::try_from(snapshot.current)?;
        if !board.can_place(&current) {
            return Err(SnapshotError::PieceCollision);
        }

        log::info!("restored session with score {}", snapshot.score);
        Ok(Self {
            board,
            current,
            next: snapshot.next,
            queue: PieceQueue::new(rng),
            score: snapshot.score,
            status: Status::Running,
            last_event: None,
        })
    }

    /// Copy out everything needed to rebuild this session
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.code_rows(),
            current: self.current.into(),
            next: self.next,
            score: self.score,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next(&self) -> Shape {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// Take and clear the last lock/line-clear event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Fill `out` with the current state (no allocation)
    pub fn frame_into(&self, out: &mut Frame) {
        self.board.write_code_grid(&mut out.board);
        out.active = match self.status {
            Status::GameOver => None,
            _ => Some(ActiveFrame {
                shape: self.current.shape,
                cells: self.current.cells(),
            }),
        };
        out.next = self.next;
        out.score = self.score;
        out.status = self.status;
    }

    pub fn frame(&self) -> Frame {
        let mut frame = Frame::default();
        self.frame_into(&mut frame);
        frame
    }

    /// Advance one gravity step
    ///
    /// Moves the current piece down one row, or locks it when it cannot move.
    /// Returns true if the piece locked. Does nothing unless running.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.try_move(0, 1) {
            return false;
        }
        self.lock_current();
        true
    }

    /// Try to move the current piece
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_running() {
            return false;
        }
        let moved = self.current.moved(dx, dy);
        if self.board.can_place(&moved) {
            self.current = moved;
            true
        } else {
            false
        }
    }

    /// Move the current piece down one row, without scoring
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Try to rotate the current piece with the simple wall kick
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        if !self.is_running() {
            return false;
        }
        match try_rotate(self.current, clockwise, |p| self.board.can_place(p)) {
            Some(rotated) => {
                self.current = rotated;
                true
            }
            None => false,
        }
    }

    /// Drop the current piece as far as it goes and lock it
    ///
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        self.lock_current();
        distance
    }

    /// Switch between running and paused. Not allowed after game over.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            Status::Running => Status::Paused,
            Status::Paused => Status::Running,
            Status::GameOver => return false,
        };
        true
    }

    /// Throw the current game away and start over with the same random source
    pub fn restart(&mut self) {
        self.board.clear();
        self.queue.reset();
        self.current = Piece::spawn(self.queue.draw());
        self.next = self.queue.draw();
        self.score = 0;
        self.status = Status::Running;
        self.last_event = None;
        log::info!("new game started");
        self.check_spawn();
    }

    /// Apply an input command
    ///
    /// Gameplay commands are ignored unless running. Returns whether the
    /// command changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action.is_gameplay() && !self.is_running() {
            log::trace!("ignoring {} while {:?}", action.as_str(), self.status);
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Lock the current piece, clear rows, score and spawn the next piece
    fn lock_current(&mut self) {
        self.board.lock(&self.current);

        let lines_cleared = self.board.clear_lines();
        let score_delta = line_clear_score(lines_cleared);
        self.score = self.score.saturating_add(score_delta);
        if lines_cleared > 0 {
            log::debug!(
                "cleared {} line(s) for {} points, score {}",
                lines_cleared,
                score_delta,
                self.score
            );
        }

        self.last_event = Some(LockEvent {
            lines_cleared: lines_cleared as u32,
            score_delta,
        });

        self.current = Piece::spawn(self.next);
        self.next = self.queue.draw();
        self.check_spawn();
    }

    /// End the game if the freshly spawned piece does not fit
    fn check_spawn(&mut self) {
        if !self.board.can_place(&self.current) {
            self.status = Status::GameOver;
            log::info!("game over with score {}", self.score);
        }
    }
}
