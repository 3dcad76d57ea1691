//! Negamax alpha-beta search with quiescence and move ordering.
//!
//! A [`Searcher`] owns everything that lives across the recursion of one
//! search: killer moves per ply, the history table and the node counter.
//! The position is threaded through by `&mut` and restored from a copy after
//! every move, so it is bit-identical when each call returns.

use std::cmp::Reverse;
use std::time::Instant;

use arrayvec::ArrayVec;

use crate::board::Position;
use crate::config::SearchConfig;
use crate::eval::evaluate;
use crate::makemove::MoveMode;
use crate::movegen::generate_moves;
use crate::moves::{MAX_MOVES, Move, MoveList};
use crate::types::{Piece, PieceKind};

/// Deepest ply either recursion descends to.
pub const MAX_PLY: usize = 64;
/// Score of being checkmated at the root; a mate `n` plies away scores
/// `MATE_VALUE - n`.
pub const MATE_VALUE: i32 = 49000;
/// Bound of the root window; larger than any reachable score.
pub const INFINITY: i32 = 50000;

const CAPTURE_BONUS: i32 = 100;
const FIRST_KILLER_SCORE: i32 = 90;
const SECOND_KILLER_SCORE: i32 = 80;

/// Most valuable victim, least valuable attacker, indexed by
/// `[attacker][victim]` piece index.
const MVV_LVA: [[i32; 12]; 12] = {
    let mut table = [[0; 12]; 12];
    let mut attacker = 0;
    while attacker < 12 {
        let mut victim = 0;
        while victim < 12 {
            let victim_kind = (victim % 6) as i32;
            let attacker_kind = (attacker % 6) as i32;
            table[attacker][victim] = (victim_kind + 1) * 100 + (5 - attacker_kind);
            victim += 1;
        }
        attacker += 1;
    }
    table
};

/// Outcome of [`Searcher::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, `None` when the root has no legal move or the
    /// search went straight to quiescence.
    pub best_move: Option<Move>,
    /// Centipawns from the side to move's perspective.
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
}

impl SearchResult {
    /// Full moves until mate: positive when the side to move delivers it,
    /// negative when it is mated, `None` for ordinary scores.
    pub fn mate_in(&self) -> Option<i32> {
        let plies = MATE_VALUE - self.score.abs();
        if !(0..=MAX_PLY as i32).contains(&plies) {
            return None;
        }
        let moves = (plies + 1) / 2;
        Some(if self.score > 0 { moves } else { -moves })
    }
}

pub struct Searcher {
    config: SearchConfig,
    killers: [[Move; 2]; MAX_PLY],
    history: [[i32; 64]; Piece::COUNT],
    nodes: u64,
    best_move: Option<Move>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            killers: [[Move::NONE; 2]; MAX_PLY],
            history: [[0; 64]; Piece::COUNT],
            nodes: 0,
            best_move: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search `pos` to `depth` plies and report the best root move.
    pub fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        self.killers = [[Move::NONE; 2]; MAX_PLY];
        self.history = [[0; 64]; Piece::COUNT];
        self.nodes = 0;
        self.best_move = None;

        tracing::debug!(depth, fen = %pos.to_fen(), "search started");
        let start = Instant::now();

        let mut root = *pos;
        let score = self.negamax(&mut root, -INFINITY, INFINITY, depth, 0, 0);

        let result = SearchResult {
            best_move: self.best_move,
            score,
            depth,
            nodes: self.nodes,
        };
        tracing::debug!(
            depth,
            score,
            nodes = self.nodes,
            best_move = %result.best_move.unwrap_or(Move::NONE),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );
        result
    }

    fn negamax(
        &mut self,
        pos: &mut Position,
        mut alpha: i32,
        beta: i32,
        mut depth: u8,
        ply: usize,
        extensions: u8,
    ) -> i32 {
        if depth == 0 {
            return self.quiescence(pos, alpha, beta, ply);
        }
        if ply >= MAX_PLY {
            return evaluate(pos);
        }
        self.nodes += 1;

        let in_check = pos.in_check(pos.side_to_move);
        let mut extensions = extensions;
        if in_check && extensions < self.config.max_check_extensions {
            depth = depth.saturating_add(1);
            extensions += 1;
        }

        let mut moves = MoveList::new();
        generate_moves(pos, &mut moves);
        self.sort_moves(pos, &mut moves, ply);

        let mut legal = 0;
        for mv in moves {
            let saved = *pos;
            if !pos.make_move(mv, MoveMode::AllMoves) {
                continue;
            }
            legal += 1;
            let score = -self.negamax(pos, -beta, -alpha, depth - 1, ply + 1, extensions);
            *pos = saved;

            if score >= beta {
                if !mv.is_capture() {
                    self.killers[ply][1] = self.killers[ply][0];
                    self.killers[ply][0] = mv;
                }
                return beta;
            }
            if score > alpha {
                if !mv.is_capture() {
                    self.history[mv.piece_index()][mv.to() as usize] += depth as i32;
                }
                alpha = score;
                if ply == 0 {
                    self.best_move = Some(mv);
                }
            }
        }

        if legal == 0 {
            return if in_check {
                -MATE_VALUE + ply as i32
            } else {
                0
            };
        }
        alpha
    }

    /// Captures only, until the position is quiet.
    fn quiescence(&mut self, pos: &mut Position, mut alpha: i32, beta: i32, ply: usize) -> i32 {
        self.nodes += 1;

        let stand_pat = evaluate(pos);
        if ply >= MAX_PLY {
            return stand_pat;
        }
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut moves = MoveList::new();
        generate_moves(pos, &mut moves);
        self.sort_moves(pos, &mut moves, ply);

        for mv in moves {
            let saved = *pos;
            if !pos.make_move(mv, MoveMode::OnlyCaptures) {
                continue;
            }
            let score = -self.quiescence(pos, -beta, -alpha, ply + 1);
            *pos = saved;

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }

    fn score_move(&self, pos: &Position, mv: Move, ply: usize) -> i32 {
        if mv.is_capture() {
            let victim = if mv.is_en_passant() {
                Piece::new(mv.piece().color.other(), PieceKind::Pawn)
            } else {
                match pos.piece_at(mv.to()) {
                    Some(piece) => piece,
                    None => return CAPTURE_BONUS,
                }
            };
            return MVV_LVA[mv.piece_index()][victim.index()] + CAPTURE_BONUS;
        }

        if self.killers[ply][0] == mv {
            FIRST_KILLER_SCORE
        } else if self.killers[ply][1] == mv {
            SECOND_KILLER_SCORE
        } else {
            self.history[mv.piece_index()][mv.to() as usize]
        }
    }

    /// Sort best-first by [`Searcher::score_move`].
    fn sort_moves(&self, pos: &Position, moves: &mut MoveList, ply: usize) {
        let mut scored: ArrayVec<(i32, Move), MAX_MOVES> = moves
            .iter()
            .map(|&mv| (self.score_move(pos, mv, ply), mv))
            .collect();
        scored.sort_unstable_by_key(|&(score, _)| Reverse(score));
        for (slot, (_, mv)) in moves.iter_mut().zip(scored) {
            *slot = mv;
        }
    }
}

/// One-shot search with the default configuration. `None` when the side to
/// move has no legal move.
pub fn pick_best_move(pos: &Position, depth: u8) -> Option<(Move, i32)> {
    let result = Searcher::default().search(pos, depth.max(1));
    result.best_move.map(|mv| (mv, result.score))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
