// src/dispatcher.rs
// Routes a tokenized query to the first registry entry whose template matches.

use tracing::debug;

use crate::actions::{ActionRegistry, Reply};
use crate::error::LookupError;

pub const NO_ANSWERS: &str = "No answers";
pub const NOT_UNDERSTOOD: &str = "I don't understand";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Never empty; an empty action result is replaced by `NO_ANSWERS`.
    Answers(Vec<String>),
    Terminate,
}

pub struct Dispatcher {
    registry: ActionRegistry,
}

impl Dispatcher {
    pub fn new(registry: ActionRegistry) -> Self {
        Self { registry }
    }

    /// Runs the action of the first matching template only. Later entries are
    /// never consulted, even if they would also match.
    pub fn search(&self, query: &[String]) -> Result<Outcome, LookupError> {
        let Some((entry, binding)) = self
            .registry
            .entries()
            .iter()
            .find_map(|entry| entry.template.matches(query).map(|b| (entry, b)))
        else {
            debug!(?query, "no template matched");
            return Ok(Outcome::Answers(vec![NOT_UNDERSTOOD.to_string()]));
        };

        debug!(
            template = %entry.template,
            action = entry.action.name(),
            groups = ?binding.groups(),
            empty = binding.is_empty(),
            "template matched"
        );

        match entry.action.execute(&binding.words())? {
            Reply::Terminate => Ok(Outcome::Terminate),
            Reply::Answers(answers) if answers.is_empty() => {
                Ok(Outcome::Answers(vec![NO_ANSWERS.to_string()]))
            }
            Reply::Answers(answers) => Ok(Outcome::Answers(answers)),
        }
    }
}
