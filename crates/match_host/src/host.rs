//! The match actor and its handle.
//!
//! One task owns the [`GameState`] and applies commands in arrival order.
//! AI turns are searched on the blocking pool; each search is tagged with
//! the move number and side it was started for and is dropped if the match
//! has moved on by the time it reports back.

use draughts_core::{
    Engine, GameState, Move, Player, Position, SearchLimits, SearchResult, Status, StopSignal,
};
use minimax_engine::{Difficulty, MinimaxEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info, warn};

use crate::config::{HostConfig, Seat};
use crate::error::{HostError, HostResult};

const COMMAND_BUFFER: usize = 32;

type Reply<T> = oneshot::Sender<T>;

enum Command {
    Start(Reply<GameState>),
    SubmitMove {
        player: Player,
        from: Position,
        to: Position,
        reply: Reply<HostResult<GameState>>,
    },
    SubmitTurn {
        player: Player,
        mv: Move,
        reply: Reply<HostResult<GameState>>,
    },
    Surrender {
        player: Player,
        reply: Reply<GameState>,
    },
    Shutdown,
}

/// A finished search, tagged with the position it was started for.
struct AiReport {
    move_number: u32,
    player: Player,
    result: SearchResult,
}

struct InFlight {
    move_number: u32,
    player: Player,
    stop: StopSignal,
}

/// Spawns match actors.
pub struct MatchHost;

impl MatchHost {
    /// Hosts a new match from the initial position. It waits in
    /// [`Status::Waiting`] until [`MatchHandle::start`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(config: HostConfig) -> MatchHandle {
        Self::spawn_from(config, GameState::new())
    }

    /// Hosts a match that resumes from `state`.
    pub fn spawn_from(config: HostConfig, state: GameState) -> MatchHandle {
        let (commands, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (state_tx, state_rx) = watch::channel(state.clone());
        let (ai_tx, ai_rx) = mpsc::unbounded_channel();

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let actor = MatchActor {
            state,
            config,
            state_tx,
            ai_tx,
            in_flight: None,
            rng,
        };
        tokio::spawn(actor.run(command_rx, ai_rx));

        MatchHandle {
            commands,
            state: state_rx,
        }
    }
}

/// Cheap, cloneable access to one hosted match.
#[derive(Clone)]
pub struct MatchHandle {
    commands: mpsc::Sender<Command>,
    state: watch::Receiver<GameState>,
}

impl MatchHandle {
    /// Moves a waiting match to `Playing`.
    pub async fn start(&self) -> HostResult<GameState> {
        self.request(Command::Start).await
    }

    /// Plays one step for a human seat.
    pub async fn submit_move(
        &self,
        player: Player,
        from: Position,
        to: Position,
    ) -> HostResult<GameState> {
        self.request(|reply| Command::SubmitMove {
            player,
            from,
            to,
            reply,
        })
        .await?
    }

    /// Plays a whole turn for a human seat.
    pub async fn submit_turn(&self, player: Player, mv: Move) -> HostResult<GameState> {
        self.request(|reply| Command::SubmitTurn { player, mv, reply })
            .await?
    }

    /// `player` resigns. Any search in flight is stopped and its result
    /// thrown away.
    pub async fn surrender(&self, player: Player) -> HostResult<GameState> {
        self.request(|reply| Command::Surrender { player, reply })
            .await
    }

    /// The latest published state.
    pub fn snapshot(&self) -> GameState {
        self.state.borrow().clone()
    }

    /// A receiver that sees every state the match publishes.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.state.clone()
    }

    /// Stops the actor. Later calls on any handle return [`HostError::Closed`].
    pub async fn shutdown(&self) {
        let _ = self.commands.send(Command::Shutdown).await;
    }

    async fn request<T>(&self, make: impl FnOnce(Reply<T>) -> Command) -> HostResult<T> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(make(reply))
            .await
            .map_err(|_| HostError::Closed)?;
        rx.await.map_err(|_| HostError::Closed)
    }
}

struct MatchActor {
    state: GameState,
    config: HostConfig,
    state_tx: watch::Sender<GameState>,
    ai_tx: mpsc::UnboundedSender<AiReport>,
    in_flight: Option<InFlight>,
    rng: StdRng,
}

impl MatchActor {
    async fn run(
        mut self,
        mut commands: mpsc::Receiver<Command>,
        mut ai_reports: mpsc::UnboundedReceiver<AiReport>,
    ) {
        self.dispatch_ai();
        loop {
            tokio::select! {
                cmd = commands.recv() => match cmd {
                    Some(Command::Shutdown) | None => break,
                    Some(cmd) => self.handle(cmd),
                },
                Some(report) = ai_reports.recv() => self.apply_ai(report),
            }
        }
        self.cancel_search();
        debug!("match actor stopped");
    }

    fn handle(&mut self, cmd: Command) {
        match cmd {
            Command::Start(reply) => {
                if self.state.status() == Status::Waiting {
                    let next = self.state.clone().start();
                    info!(red = ?self.config.red, black = ?self.config.black, "match started");
                    self.publish(next);
                }
                let _ = reply.send(self.state.clone());
            }
            Command::SubmitMove {
                player,
                from,
                to,
                reply,
            } => {
                let result = self
                    .human_seat(player)
                    .and_then(|()| self.state.submit_move(player, from, to).map_err(HostError::from));
                let _ = reply.send(self.accept(player, result));
            }
            Command::SubmitTurn { player, mv, reply } => {
                let result = self
                    .human_seat(player)
                    .and_then(|()| self.state.submit_turn(player, &mv).map_err(HostError::from));
                let _ = reply.send(self.accept(player, result));
            }
            Command::Surrender { player, reply } => {
                self.cancel_search();
                if !self.state.is_terminal() {
                    info!(%player, "player surrendered");
                    self.publish(self.state.surrender(player));
                }
                let _ = reply.send(self.state.clone());
            }
            Command::Shutdown => {}
        }
    }

    fn human_seat(&self, player: Player) -> HostResult<()> {
        match self.config.seat(player) {
            Seat::Human => Ok(()),
            Seat::Ai(_) => Err(HostError::AiSeat(player)),
        }
    }

    fn accept(&mut self, player: Player, result: HostResult<GameState>) -> HostResult<GameState> {
        match result {
            Ok(next) => {
                debug!(%player, move_number = next.move_number(), "move applied");
                self.publish(next.clone());
                Ok(next)
            }
            Err(e) => {
                debug!(%player, error = %e, "move rejected");
                Err(e)
            }
        }
    }

    fn publish(&mut self, next: GameState) {
        let finished = next.is_terminal() && !self.state.is_terminal();
        self.state = next;
        self.state_tx.send_replace(self.state.clone());
        if finished {
            info!(
                winner = ?self.state.winner(),
                moves = self.state.move_number(),
                "match finished"
            );
        }
        self.dispatch_ai();
    }

    /// Starts a search if an AI seat is to move and none is running.
    fn dispatch_ai(&mut self) {
        if self.state.status() != Status::Playing || self.in_flight.is_some() {
            return;
        }
        let player = self.state.current_player();
        let Seat::Ai(difficulty) = self.config.seat(player) else {
            return;
        };

        let stop = StopSignal::new();
        let limits = self.limits(difficulty).with_stop(stop.clone());
        let mut engine = MinimaxEngine::with_seed(difficulty, self.rng.gen());
        let board = self.state.board().clone();
        let move_number = self.state.move_number();
        let reports = self.ai_tx.clone();

        debug!(%player, %difficulty, move_number, "AI search started");
        self.in_flight = Some(InFlight {
            move_number,
            player,
            stop,
        });

        tokio::task::spawn_blocking(move || {
            let result = engine.search(&board, player, limits);
            let _ = reports.send(AiReport {
                move_number,
                player,
                result,
            });
        });
    }

    fn limits(&self, difficulty: Difficulty) -> SearchLimits {
        match self.config.move_time {
            Some(budget) => SearchLimits::depth_and_time(difficulty.depth(), budget),
            None => SearchLimits::depth(difficulty.depth()),
        }
    }

    fn cancel_search(&mut self) {
        if let Some(search) = self.in_flight.take() {
            search.stop.raise();
            debug!(player = %search.player, move_number = search.move_number, "AI search cancelled");
        }
    }

    fn apply_ai(&mut self, report: AiReport) {
        let AiReport {
            move_number,
            player,
            result,
        } = report;

        if self
            .in_flight
            .as_ref()
            .is_some_and(|s| s.move_number == move_number && s.player == player)
        {
            self.in_flight = None;
        }

        let current = self.state.status() == Status::Playing
            && self.state.move_number() == move_number
            && self.state.current_player() == player;
        if !current {
            warn!(%player, move_number, "discarding stale AI result");
            return;
        }

        let Some(mv) = result.best_move else {
            error!(%player, "AI found no legal turn in a live position");
            self.forfeit(player);
            return;
        };
        match self.state.submit_turn(player, &mv) {
            Ok(next) => {
                debug!(%player, %mv, score = result.score, nodes = result.nodes, "AI move applied");
                self.publish(next);
            }
            Err(e) => {
                error!(%player, %mv, error = %e, "AI move rejected");
                self.forfeit(player);
            }
        }
    }

    /// An AI seat that cannot produce a legal turn loses the match.
    fn forfeit(&mut self, player: Player) {
        info!(%player, "AI seat forfeits");
        self.publish(self.state.surrender(player));
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod host_tests;
