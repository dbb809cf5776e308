use super::security::SecuritySpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a source class.
///
/// `NotAComponent` is a sentinel and never appears in a generated model.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub enum Archetype {
    StatelessComponent,
    StatefulComponent,
    SingletonComponent,
    MessageTriggeredComponent,
    NotAComponent,
}

impl Archetype {
    pub fn is_component(self) -> bool {
        !matches!(self, Archetype::NotAComponent)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Archetype::StatelessComponent => "stateless",
            Archetype::StatefulComponent => "stateful",
            Archetype::SingletonComponent => "singleton",
            Archetype::MessageTriggeredComponent => "message-driven",
            Archetype::NotAComponent => "none",
        };
        f.write_str(label)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub enum InvocationMode {
    Synchronous,
    Asynchronous,
    MessageTriggered,
}

impl fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvocationMode::Synchronous => "sync",
            InvocationMode::Asynchronous => "async",
            InvocationMode::MessageTriggered => "message",
        };
        f.write_str(label)
    }
}

/// Identifies an operation. Currently just the declared method name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationSignature {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub signature: OperationSignature,
    pub invocation_mode: InvocationMode,
    pub security: SecuritySpec,
}

impl Operation {
    pub fn name(&self) -> &str {
        &self.signature.name
    }
}

/// A classified unit of business logic derived from one source class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub archetype: Archetype,
    pub security: SecuritySpec,
    /// Declaration order of the source methods.
    pub operations: Vec<Operation>,
}

impl Component {
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name() == name)
    }
}
