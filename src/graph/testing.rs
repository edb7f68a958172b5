//! In-memory session source for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::AppError;
use crate::graph::row::{Params, Row};
use crate::graph::traits::{Session, SessionSource};

#[derive(Default)]
struct MockState {
    acquire_error: Option<String>,
    responses: VecDeque<Result<Vec<Row>, String>>,
    executed: Vec<(String, Params)>,
    acquired: usize,
    closed: usize,
}

/// Records every statement it is asked to run and replays canned responses.
///
/// Responses are consumed in order; once exhausted, queries return no rows.
#[derive(Clone, Default)]
pub struct MockSource {
    state: Arc<Mutex<MockState>>,
}

impl MockSource {
    pub fn with_rows(rows: Vec<Row>) -> Self {
        let source = Self::default();
        source.push_rows(rows);
        source
    }

    pub fn push_rows(&self, rows: Vec<Row>) {
        self.state.lock().unwrap().responses.push_back(Ok(rows));
    }

    pub fn push_failure(&self, message: &str) {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(Err(message.to_string()));
    }

    pub fn fail_acquire(&self, message: &str) {
        self.state.lock().unwrap().acquire_error = Some(message.to_string());
    }

    pub fn executed(&self) -> Vec<(String, Params)> {
        self.state.lock().unwrap().executed.clone()
    }

    pub fn acquired(&self) -> usize {
        self.state.lock().unwrap().acquired
    }

    pub fn closed(&self) -> usize {
        self.state.lock().unwrap().closed
    }
}

#[async_trait]
impl SessionSource for MockSource {
    async fn acquire(&self) -> Result<Box<dyn Session>, AppError> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.acquire_error {
            return Err(AppError::SessionUnavailable(message.clone()));
        }
        state.acquired += 1;
        Ok(Box::new(MockSession {
            state: self.state.clone(),
        }))
    }
}

struct MockSession {
    state: Arc<Mutex<MockState>>,
}

#[async_trait]
impl Session for MockSession {
    async fn fetch_all(&mut self, cypher: &str, params: Params) -> Result<Vec<Row>, AppError> {
        let mut state = self.state.lock().unwrap();
        state.executed.push((cypher.to_string(), params));
        match state.responses.pop_front() {
            Some(Ok(rows)) => Ok(rows),
            Some(Err(message)) => Err(AppError::ExecutionFailed {
                message,
                query: cypher.to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn close(self: Box<Self>) -> Result<(), AppError> {
        self.state.lock().unwrap().closed += 1;
        Ok(())
    }
}
