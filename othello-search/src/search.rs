//! Internal search functions.
//!
//! Every node explores its children on the one shared board through
//! [`Board::scoped_move`], so each candidate is undone before the next one is
//! tried, including when a cutoff ends the scan early.

use crate::config::{LeafPerspective, SearchConfig};
use othello::{Board, Explore, Location, Player};
use std::time::{Duration, Instant};

/// The outcome of a search: the minimax score and the move that achieves it.
/// `location` is None when there was nothing to choose (no depth or no legal move).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub score: i32,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root included.
    pub nodes: u64,
    pub elapsed: Duration,
    /// Whether any node was cut short by the clock.
    pub timed_out: bool,
}

/// Minimax searcher: Black maximizes, White minimizes.
pub struct Searcher {
    config: SearchConfig,
    start: Instant,
    time_limit: Duration,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            start: Instant::now(),
            time_limit: config.time_limit(),
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Choose a move for `player` with the configured depth and time limit.
    pub fn decide(&mut self, board: &mut Board, player: Player) -> Decision {
        self.decide_with(board, player, self.config.depth, self.config.time_limit())
    }

    /// Choose a move for `player`, searching `depth` plies within roughly `time_limit`.
    ///
    /// The clock is only read when a node below the root is entered, so the root
    /// always gets to score each of its moves and a legal move comes back even
    /// when the limit is zero.
    pub fn decide_with(
        &mut self,
        board: &mut Board,
        player: Player,
        depth: u8,
        time_limit: Duration,
    ) -> Decision {
        self.start = Instant::now();
        self.time_limit = time_limit;
        self.stats = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };

        let decision = if depth == 0 || !board.has_valid_move(player) {
            Decision {
                score: self.leaf(board, player),
                location: None,
            }
        } else {
            self.expand(board, player, depth, i32::MIN, i32::MAX)
        };

        self.stats.elapsed = self.start.elapsed();
        tracing::debug!(
            %player,
            depth,
            location = ?decision.location,
            score = decision.score,
            nodes = self.stats.nodes,
            elapsed_ms = self.stats.elapsed.as_millis() as u64,
            timed_out = self.stats.timed_out,
            "search finished"
        );
        decision
    }

    fn out_of_time(&mut self) -> bool {
        if self.start.elapsed() >= self.time_limit {
            self.stats.timed_out = true;
            true
        } else {
            false
        }
    }

    /// Static score of a leaf where `mover` is to play.
    fn leaf(&self, board: &Board, mover: Player) -> i32 {
        let weights = &self.config.weights;
        match self.config.perspective {
            LeafPerspective::SideToMove => board.evaluate_with(mover, weights),
            LeafPerspective::Balance => {
                board.evaluate_with(Player::Black, weights)
                    - board.evaluate_with(Player::White, weights)
            }
        }
    }

    /// Value of a non-root node: a leaf once depth or time runs out, otherwise expanded.
    fn node(
        &mut self,
        board: &mut impl Explore,
        mover: Player,
        depth: u8,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || self.out_of_time() {
            return self.leaf(board.position(), mover);
        }

        self.expand(board, mover, depth, alpha, beta).score
    }

    /// Score every move of `mover` one ply deeper. Requires `depth > 0`.
    fn expand(
        &mut self,
        board: &mut impl Explore,
        mover: Player,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> Decision {
        let moves = board.position().valid_moves(mover);

        if moves.is_empty() {
            // Pass if the opponent can move; otherwise the game is over here.
            let score = if board.position().has_valid_move(mover.opponent()) {
                self.node(board, mover.opponent(), depth - 1, alpha, beta)
            } else {
                self.leaf(board.position(), mover)
            };
            return Decision {
                score,
                location: None,
            };
        }

        let maximizing = mover == Player::Black;
        let mut best = Decision {
            score: if maximizing { i32::MIN } else { i32::MAX },
            location: None,
        };

        for loc in moves {
            let score = match board.scoped_move(loc, mover) {
                Some(mut child) => self.node(&mut child, mover.opponent(), depth - 1, alpha, beta),
                None => continue,
            };

            // Strict comparisons keep the first of equally good moves.
            if maximizing {
                if score > best.score {
                    best = Decision {
                        score,
                        location: Some(loc),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = Decision {
                        score,
                        location: Some(loc),
                    };
                }
                beta = beta.min(best.score);
            }

            if alpha >= beta {
                break;
            }
        }

        best
    }
}
