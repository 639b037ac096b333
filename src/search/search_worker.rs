//! Background search so a host can keep its own loop responsive.
//!
//! The worker owns a private copy of the position and reports one
//! [`SearchOutcome`] over a channel. Cancellation is cooperative: both
//! searches poll the stop flag once per node, and a stopped worker never
//! reports.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;
use crate::search::find_move::find_move;
use crate::search::search_types::{SearchConfig, SearchOutcome};

#[derive(Debug)]
pub enum SearchError {
    Spawn(io::Error),
    /// The search thread panicked before reporting.
    WorkerPanicked,
    /// The search thread exited without reporting.
    WorkerDisconnected,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Spawn(err) => write!(f, "failed to spawn search thread: {err}"),
            SearchError::WorkerPanicked => write!(f, "search thread panicked"),
            SearchError::WorkerDisconnected => write!(f, "search thread exited without a result"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Spawn(err) => Some(err),
            _ => None,
        }
    }
}

pub struct SearchWorker {
    receiver: Receiver<SearchOutcome>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Starts searching `legal_moves` of `game_state` on a new thread.
    pub fn spawn(
        mut game_state: GameState,
        legal_moves: Vec<ChessMove>,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        let (sender, receiver) = channel();
        let stop = Arc::new(AtomicBool::new(false));
        let worker_stop = Arc::clone(&stop);

        log::debug!(
            "spawning search worker: {:?} depth {} at ply {}",
            config.algorithm,
            config.depth,
            game_state.ply()
        );

        let handle = thread::Builder::new()
            .name("search-worker".to_owned())
            .spawn(move || {
                let outcome = find_move(&mut game_state, &legal_moves, &config, Some(&worker_stop));
                if worker_stop.load(Ordering::Relaxed) {
                    return;
                }
                // The host may already have dropped the receiver.
                let _ = sender.send(outcome);
            })
            .map_err(SearchError::Spawn)?;

        Ok(Self {
            receiver,
            stop,
            handle: Some(handle),
        })
    }

    /// Non-blocking poll. `Ok(None)` means the search is still running.
    pub fn try_result(&mut self) -> Result<Option<SearchOutcome>, SearchError> {
        match self.receiver.try_recv() {
            Ok(outcome) => Ok(Some(outcome)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(self.exit_reason()),
        }
    }

    /// Blocks until the search reports.
    pub fn wait(mut self) -> Result<SearchOutcome, SearchError> {
        match self.receiver.recv() {
            Ok(outcome) => Ok(outcome),
            Err(_) => Err(self.exit_reason()),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Raises the stop flag but keeps the handle, so the host can still poll
    /// [`is_finished`](Self::is_finished). Nothing is reported afterwards.
    pub fn request_stop(&self) {
        log::debug!("search worker asked to stop");
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Asks the search to stop and forgets it.
    pub fn cancel(self) {
        self.request_stop();
    }

    fn exit_reason(&mut self) -> SearchError {
        match self.handle.take().map(JoinHandle::join) {
            Some(Err(_)) => {
                log::warn!("search worker panicked");
                SearchError::WorkerPanicked
            }
            _ => SearchError::WorkerDisconnected,
        }
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::{Duration, Instant};

    use super::{SearchError, SearchWorker};
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::search::search_types::{SearchAlgorithm, SearchConfig};

    fn config(depth: u8) -> SearchConfig {
        SearchConfig {
            depth,
            algorithm: SearchAlgorithm::Negamax,
            shuffle_seed: Some(42),
        }
    }

    #[test]
    fn wait_returns_a_legal_move() {
        let mut game = GameState::new_game();
        let legal = generate_legal_moves(&mut game);
        let worker = SearchWorker::spawn(game, legal.clone(), config(2)).expect("spawn");
        let outcome = worker.wait().expect("worker should report");
        let best = outcome.best_move.expect("opening has moves");
        assert!(legal.contains(&best));
    }

    #[test]
    fn polling_eventually_yields_the_result() {
        let mut game = GameState::new_game();
        let legal = generate_legal_moves(&mut game);
        let mut worker = SearchWorker::spawn(game, legal, config(1)).expect("spawn");
        let outcome = loop {
            if let Some(outcome) = worker.try_result().expect("worker alive") {
                break outcome;
            }
            thread::sleep(Duration::from_millis(1));
        };
        assert!(outcome.best_move.is_some());
        assert!(outcome.nodes > 0);
    }

    #[test]
    fn same_seed_matches_inline_search() {
        let mut game = GameState::new_game();
        let legal = generate_legal_moves(&mut game);
        let inline = crate::search::find_move::find_move(&mut game, &legal, &config(2), None);
        let worker = SearchWorker::spawn(game, legal, config(2)).expect("spawn");
        assert_eq!(worker.wait().expect("worker should report"), inline);
    }

    fn config_with(algorithm: SearchAlgorithm, depth: u8) -> SearchConfig {
        SearchConfig {
            depth,
            algorithm,
            ..config(depth)
        }
    }

    #[test]
    fn stop_request_ends_a_deep_search_of_either_algorithm() {
        for algorithm in [SearchAlgorithm::Minimax, SearchAlgorithm::Negamax] {
            let mut game = GameState::new_game();
            let legal = generate_legal_moves(&mut game);
            // Far too deep to finish within the deadline unless the flag is honored.
            let mut worker =
                SearchWorker::spawn(game, legal, config_with(algorithm, 8)).expect("spawn");
            thread::sleep(Duration::from_millis(20));
            worker.request_stop();

            let deadline = Instant::now() + Duration::from_secs(10);
            while !worker.is_finished() {
                assert!(
                    Instant::now() < deadline,
                    "{algorithm:?} worker kept running after a stop request"
                );
                thread::sleep(Duration::from_millis(5));
            }
            assert!(
                matches!(worker.try_result(), Err(SearchError::WorkerDisconnected)),
                "{algorithm:?} worker reported after a stop request"
            );
        }
    }

    #[test]
    fn cancel_returns_immediately() {
        let mut game = GameState::new_game();
        let legal = generate_legal_moves(&mut game);
        let worker = SearchWorker::spawn(game, legal, config(8)).expect("spawn");
        let started = Instant::now();
        worker.cancel();
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
