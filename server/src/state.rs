//! Single-writer store task.
//!
//! # Overview
//! All collection traffic funnels through one task that owns the todo file.
//! Handlers talk to it through [`StoreHandle`], which sends a command over an
//! mpsc channel and awaits the reply on a oneshot.
//!
//! # Design
//! - The channel is the serialization point: the task processes one command
//!   at a time for the full reload → validate → mutate → rewrite span, so
//!   exclusive access to the file is enforced structurally rather than by a
//!   lock every caller must remember to take.
//! - The task runs on a blocking thread (`spawn_blocking`) since every
//!   command does blocking `std::fs` I/O.
//! - The list is reloaded from the file at the start of every command and
//!   discarded afterwards; the file is the only durable state. A failed save
//!   is not rolled back — the reply carries the error and the file keeps its
//!   last successfully written content.

use std::path::{Path, PathBuf};

use tokio::sync::{mpsc, oneshot};
use todo_store::{Item, List, StoreError};

use crate::error::ApiError;

const COMMAND_QUEUE_DEPTH: usize = 32;

enum Command {
    List {
        reply: oneshot::Sender<Result<Vec<Item>, StoreError>>,
    },
    Get {
        id: usize,
        reply: oneshot::Sender<Result<Item, StoreError>>,
    },
    Add {
        task: String,
        reply: oneshot::Sender<Result<(), StoreError>>,
    },
    Delete {
        id: usize,
        reply: oneshot::Sender<Result<(), StoreError>>,
    },
    Complete {
        id: usize,
        reply: oneshot::Sender<Result<(), StoreError>>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::List { .. } => "list",
            Command::Get { .. } => "get",
            Command::Add { .. } => "add",
            Command::Delete { .. } => "delete",
            Command::Complete { .. } => "complete",
        }
    }
}

/// Cheaply cloneable handle to the store task; the axum state.
#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::Sender<Command>,
}

impl StoreHandle {
    /// Spawns the store task owning `path` and returns a handle to it.
    ///
    /// The task exits when the last handle is dropped.
    pub fn spawn(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
        tokio::task::spawn_blocking(move || run_loop(&path, rx));
        Self { tx }
    }

    pub async fn list(&self) -> Result<Vec<Item>, ApiError> {
        self.send(|reply| Command::List { reply }).await
    }

    pub async fn get(&self, id: usize) -> Result<Item, ApiError> {
        self.send(move |reply| Command::Get { id, reply }).await
    }

    pub async fn add(&self, task: String) -> Result<(), ApiError> {
        self.send(move |reply| Command::Add { task, reply }).await
    }

    pub async fn delete(&self, id: usize) -> Result<(), ApiError> {
        self.send(move |reply| Command::Delete { id, reply }).await
    }

    pub async fn complete(&self, id: usize) -> Result<(), ApiError> {
        self.send(move |reply| Command::Complete { id, reply }).await
    }

    async fn send<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<Result<T, StoreError>>) -> Command,
    ) -> Result<T, ApiError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| ApiError::Internal("store task has shut down".to_string()))?;
        let result = rx
            .await
            .map_err(|_| ApiError::Internal("store task dropped the reply".to_string()))?;
        result.map_err(ApiError::from)
    }
}

/// Processes commands in arrival order until every sender is gone.
fn run_loop(path: &Path, mut rx: mpsc::Receiver<Command>) {
    tracing::debug!(todo_file = %path.display(), "store task started");
    while let Some(cmd) = rx.blocking_recv() {
        tracing::debug!(todo_file = %path.display(), "store command: {}", cmd.name());
        handle_command(path, cmd);
    }
    tracing::debug!(todo_file = %path.display(), "store task stopped");
}

fn handle_command(path: &Path, cmd: Command) {
    // Replies are best-effort: the requester may have hung up already.
    match cmd {
        Command::List { reply } => {
            let result = List::load(path).map(List::into_items);
            let _ = reply.send(result);
        }
        Command::Get { id, reply } => {
            let result = List::load(path).and_then(|list| {
                let len = list.len();
                list.get(id)
                    .cloned()
                    .ok_or(StoreError::OutOfRange { id, len })
            });
            let _ = reply.send(result);
        }
        Command::Add { task, reply } => {
            let result = List::load(path).and_then(|mut list| {
                list.add(task);
                list.save(path)
            });
            let _ = reply.send(result);
        }
        Command::Delete { id, reply } => {
            let result = List::load(path).and_then(|mut list| {
                if id > list.len() {
                    return Err(StoreError::OutOfRange {
                        id,
                        len: list.len(),
                    });
                }
                list.delete(id);
                list.save(path)
            });
            let _ = reply.send(result);
        }
        Command::Complete { id, reply } => {
            let result = List::load(path).and_then(|mut list| {
                list.complete(id)?;
                list.save(path)
            });
            let _ = reply.send(result);
        }
    }
}
