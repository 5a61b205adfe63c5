//! Negamax search with alpha-beta pruning over whole turns.

use draughts_core::{turn_successors, Board, Move, Player, Rank, SearchLimits};
use rand::rngs::StdRng;
use rand::Rng;

use crate::difficulty::Difficulty;
use crate::eval::{evaluate, is_central};

/// Score of a side that has no legal turn left.
pub const WIN_SCORE: i32 = 100_000;

/// Root bonus for landing inside the central block.
const CENTRAL_DESTINATION_BONUS: i32 = 50;
/// Root bonus for parking a crowned piece on a defensive square.
const DEFENSIVE_KING_BONUS: i32 = 30;

/// Every root turn with its score, best first.
pub struct SearchOutcome {
    /// Ranked root turns. Empty if the side to move has no legal turn.
    pub ranked: Vec<(Move, i32)>,
    /// True if the stop signal or time budget cut the search short
    pub stopped: bool,
}

impl SearchOutcome {
    pub fn best(&self) -> Option<&(Move, i32)> {
        self.ranked.first()
    }
}

struct Searcher<'a> {
    limits: &'a SearchLimits,
    nodes: &'a mut u64,
    noise: i32,
    rng: &'a mut StdRng,
}

/// Searches `board` for `player` and ranks every root turn.
///
/// `depth` counts plies with the root turn included; a whole capture chain
/// is one ply. Root turns are scored with a full window so the ranking is
/// exact, which the second-best pick relies on. If the search is stopped
/// before any root turn finishes, all turns are returned in generation
/// order with a score of zero.
pub fn rank_moves(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    depth: u8,
    limits: &SearchLimits,
    nodes: &mut u64,
    rng: &mut StdRng,
) -> SearchOutcome {
    let successors = turn_successors(board, player);
    if successors.is_empty() {
        return SearchOutcome {
            ranked: Vec::new(),
            stopped: false,
        };
    }

    let mut searcher = Searcher {
        limits,
        nodes,
        noise: difficulty.eval_noise(),
        rng,
    };

    let mut ranked = Vec::with_capacity(successors.len());
    let mut unscored = Vec::new();
    let mut stopped = false;

    for (mv, next) in successors {
        if stopped {
            unscored.push(mv);
            continue;
        }
        *searcher.nodes += 1;
        match searcher.negamax(
            &next,
            player.other(),
            depth.saturating_sub(1),
            -WIN_SCORE * 2,
            WIN_SCORE * 2,
        ) {
            Some(score) => {
                let mut score = -score;
                if difficulty.root_heuristics() {
                    score += root_bonus(board, player, &mv);
                }
                ranked.push((mv, score));
            }
            None => {
                stopped = true;
                unscored.push(mv);
            }
        }
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    if ranked.is_empty() {
        ranked = unscored.into_iter().map(|mv| (mv, 0)).collect();
    }

    SearchOutcome { ranked, stopped }
}

impl Searcher<'_> {
    /// Score of `board` for `player`, or `None` if the search was stopped.
    fn negamax(
        &mut self,
        board: &Board,
        player: Player,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> Option<i32> {
        if self.limits.should_stop(*self.nodes) {
            return None;
        }

        let successors = turn_successors(board, player);
        if successors.is_empty() {
            // Faster wins and slower losses score better.
            return Some(-(WIN_SCORE + depth as i32));
        }

        if depth == 0 {
            return Some(self.leaf(board, player));
        }

        let mut best = -WIN_SCORE * 2;
        for (_, next) in successors {
            *self.nodes += 1;
            let score = -self.negamax(&next, player.other(), depth - 1, -beta, -alpha)?;
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break;
            }
        }
        Some(best)
    }

    fn leaf(&mut self, board: &Board, player: Player) -> i32 {
        let score = evaluate(board, player);
        if self.noise > 0 {
            score + self.rng.gen_range(-self.noise..=self.noise)
        } else {
            score
        }
    }
}

/// Extra root score for landing centrally and for tucking a crowned piece
/// onto a defensive square (own two back rows or an edge column).
pub(crate) fn root_bonus(board: &Board, player: Player, mv: &Move) -> i32 {
    let mut bonus = 0;
    if is_central(mv.to.row, mv.to.col) {
        bonus += CENTRAL_DESTINATION_BONUS;
    }

    let crowned = board
        .piece_at(mv.from)
        .is_some_and(|pc| pc.rank != Rank::Normal);
    let defensive =
        (mv.to.row - player.home_row()).abs() <= 1 || mv.to.col == 0 || mv.to.col == 7;
    if crowned && defensive {
        bonus += DEFENSIVE_KING_BONUS;
    }
    bonus
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
