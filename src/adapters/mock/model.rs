//! Scripted model service for testing the orchestrator.
//!
//! Replies are chosen per call: first by prompt-fragment rules, then from a
//! FIFO queue, then from an optional default. Every prompt is recorded so
//! tests can assert on call counts and ordering.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::ServiceError;
use crate::traits::ModelService;

/// What a scripted call does.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Answer with this text
    Text(String),
    /// Succeed without usable text
    Empty,
    /// Fail the call
    Fail(ServiceError),
    /// Never complete
    Pending,
}

impl ScriptedReply {
    pub fn text(text: impl Into<String>) -> Self {
        ScriptedReply::Text(text.into())
    }
}

#[derive(Debug, Clone)]
struct Rule {
    fragment: String,
    delay: Option<Duration>,
    reply: ScriptedReply,
}

/// Mock [`ModelService`] with scripted replies.
///
/// Clones share script, prompt log and counters.
#[derive(Debug, Clone, Default)]
pub struct ScriptedModelService {
    rules: Arc<Mutex<Vec<Rule>>>,
    queue: Arc<Mutex<VecDeque<ScriptedReply>>>,
    default_reply: Arc<Mutex<Option<ScriptedReply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl ScriptedModelService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next call that matches no rule.
    pub fn push_reply(&self, reply: ScriptedReply) -> &Self {
        self.queue.lock().unwrap().push_back(reply);
        self
    }

    /// Reply to any prompt containing `fragment`. Earlier rules win.
    pub fn reply_when(&self, fragment: &str, reply: ScriptedReply) -> &Self {
        self.add_rule(fragment, None, reply)
    }

    /// Like [`reply_when`](Self::reply_when), but wait `delay` first.
    pub fn reply_when_after(&self, fragment: &str, delay: Duration, reply: ScriptedReply) -> &Self {
        self.add_rule(fragment, Some(delay), reply)
    }

    /// Reply used when no rule matches and the queue is empty.
    pub fn set_default_reply(&self, reply: ScriptedReply) -> &Self {
        *self.default_reply.lock().unwrap() = Some(reply);
        self
    }

    /// Every prompt received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Highest number of calls that were outstanding at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn add_rule(&self, fragment: &str, delay: Option<Duration>, reply: ScriptedReply) -> &Self {
        self.rules.lock().unwrap().push(Rule {
            fragment: fragment.to_string(),
            delay,
            reply,
        });
        self
    }

    fn next_reply(&self, prompt: &str) -> (Option<Duration>, Option<ScriptedReply>) {
        if let Some(rule) = self
            .rules
            .lock()
            .unwrap()
            .iter()
            .find(|rule| prompt.contains(&rule.fragment))
        {
            return (rule.delay, Some(rule.reply.clone()));
        }

        if let Some(reply) = self.queue.lock().unwrap().pop_front() {
            return (None, Some(reply));
        }

        (None, self.default_reply.lock().unwrap().clone())
    }
}

/// Decrements the in-flight counter when a call finishes or is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ModelService for ScriptedModelService {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ServiceError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);

        let (delay, reply) = self.next_reply(prompt);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Some(ScriptedReply::Text(text)) => Ok(Some(text)),
            Some(ScriptedReply::Empty) => Ok(None),
            Some(ScriptedReply::Fail(err)) => Err(err),
            Some(ScriptedReply::Pending) => std::future::pending().await,
            None => Err(ServiceError::InvalidResponse(format!(
                "no scripted reply for prompt: {}",
                prompt
            ))),
        }
    }
}
