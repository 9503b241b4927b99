use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("row decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Produces raw result rows, one JSON value per entity.
///
/// `Ok(None)` marks the end of the result set.
#[async_trait]
pub trait RowSource: Send {
    async fn next_row(&mut self) -> Result<Option<Value>, SourceError>;
}

#[derive(Debug, Default)]
pub struct VecRowSource {
    rows: VecDeque<Value>,
}

impl VecRowSource {
    pub fn new(rows: Vec<Value>) -> Self {
        Self { rows: rows.into() }
    }

    /// One row per non-blank line.
    pub fn from_json_lines(input: &str) -> Result<Self, SourceError> {
        let rows = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str)
            .collect::<Result<VecDeque<Value>, _>>()?;
        Ok(Self { rows })
    }

    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

#[async_trait]
impl RowSource for VecRowSource {
    async fn next_row(&mut self) -> Result<Option<Value>, SourceError> {
        Ok(self.rows.pop_front())
    }
}

/// Rows pushed by a transport task. The result set ends when every sender is dropped.
pub struct ChannelRowSource {
    receiver: mpsc::Receiver<Result<Value, SourceError>>,
}

impl ChannelRowSource {
    pub fn new(receiver: mpsc::Receiver<Result<Value, SourceError>>) -> Self {
        Self { receiver }
    }

    pub fn channel(buffer: usize) -> (mpsc::Sender<Result<Value, SourceError>>, Self) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (tx, Self::new(rx))
    }
}

#[async_trait]
impl RowSource for ChannelRowSource {
    async fn next_row(&mut self) -> Result<Option<Value>, SourceError> {
        match self.receiver.recv().await {
            Some(row) => row.map(Some),
            None => Ok(None),
        }
    }
}
