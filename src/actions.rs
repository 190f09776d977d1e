// src/actions.rs
// THE ACTION REGISTRY
// Pairs every recognised question template with the handler that answers it.
// Order is priority: the first template that matches wins.

use std::sync::Arc;

use crate::error::LookupError;
use crate::facts::{Fact, FactAction};
use crate::pattern::Template;
use crate::wiki::KnowledgeSource;

/// What an action hands back to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Answers(Vec<String>),
    /// Ask the query loop to stop.
    Terminate,
}

/// A handler bound to a template.
/// Receives the words captured by the template's wildcard(s), in order.
pub trait Action: Send + Sync {
    fn name(&self) -> &str;
    fn execute(&self, words: &[String]) -> Result<Reply, LookupError>;
}

pub struct RegistryEntry {
    pub template: Template,
    pub action: Box<dyn Action>,
}

/// Immutable once built; hand it to a `Dispatcher`.
pub struct ActionRegistry {
    entries: Vec<RegistryEntry>,
}

impl ActionRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            entries: Vec::new(),
        }
    }

    /// The question set the assistant understands, answered from `source`.
    pub fn standard(source: Arc<dyn KnowledgeSource>) -> Result<Self, LookupError> {
        let mut builder = Self::builder();
        for fact in Fact::ALL {
            builder = builder.register(
                fact.template(),
                Box::new(FactAction::new(fact, source.clone())?),
            );
        }
        Ok(builder.register("bye", Box::new(ByeAction)).build())
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub struct RegistryBuilder {
    entries: Vec<RegistryEntry>,
}

impl RegistryBuilder {
    /// Appends an entry; later registrations have lower priority.
    pub fn register(mut self, template: &str, action: Box<dyn Action>) -> Self {
        self.entries.push(RegistryEntry {
            template: Template::parse(template),
            action,
        });
        self
    }

    pub fn build(self) -> ActionRegistry {
        ActionRegistry {
            entries: self.entries,
        }
    }
}

/// Bound to `bye`. Ignores its input.
pub struct ByeAction;

impl Action for ByeAction {
    fn name(&self) -> &str {
        "bye"
    }

    fn execute(&self, _words: &[String]) -> Result<Reply, LookupError> {
        Ok(Reply::Terminate)
    }
}
