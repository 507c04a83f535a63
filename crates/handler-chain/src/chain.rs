//! Generic handler chain.

use serde::Serialize;

/// One link in a chain.
pub trait Handler<R>: Send + Sync {
    /// Display name used in outcomes and logs.
    fn name(&self) -> &str;

    /// Returns a resolution message if this handler accepts `request`,
    /// or `None` to pass it on.
    fn handle(&self, request: &R) -> Option<String>;
}

/// Terminal outcome of walking a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ChainOutcome {
    /// A handler accepted the request. `level` is 1-based.
    Handled {
        level: usize,
        handler: String,
        message: String,
        passed: Vec<String>,
    },
    /// Every handler declined.
    Unhandled { passed: Vec<String> },
}

impl ChainOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, ChainOutcome::Handled { .. })
    }

    /// 1-based position of the accepting handler.
    pub fn level(&self) -> Option<usize> {
        match self {
            ChainOutcome::Handled { level, .. } => Some(*level),
            ChainOutcome::Unhandled { .. } => None,
        }
    }

    /// Name of the accepting handler.
    pub fn handler(&self) -> Option<&str> {
        match self {
            ChainOutcome::Handled { handler, .. } => Some(handler),
            ChainOutcome::Unhandled { .. } => None,
        }
    }

    /// Resolution message of the accepting handler.
    pub fn message(&self) -> Option<&str> {
        match self {
            ChainOutcome::Handled { message, .. } => Some(message),
            ChainOutcome::Unhandled { .. } => None,
        }
    }

    /// Handlers that declined before the outcome was reached.
    pub fn passed(&self) -> &[String] {
        match self {
            ChainOutcome::Handled { passed, .. } | ChainOutcome::Unhandled { passed } => passed,
        }
    }
}

/// An ordered sequence of handlers; the first to accept wins.
pub struct Chain<R> {
    name: &'static str,
    links: Vec<Box<dyn Handler<R>>>,
}

impl<R> Chain<R> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            links: Vec::new(),
        }
    }

    /// Appends `handler` as the successor of the current last link.
    pub fn then<H: Handler<R> + 'static>(mut self, handler: H) -> Self {
        self.links.push(Box::new(handler));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Link names in chain order.
    pub fn link_names(&self) -> Vec<&str> {
        self.links.iter().map(|h| h.name()).collect()
    }

    /// Walks the chain until a handler accepts `request`.
    ///
    /// No handler after the accepting one is consulted.
    pub fn handle(&self, request: &R) -> ChainOutcome {
        let mut passed = Vec::new();

        for (index, link) in self.links.iter().enumerate() {
            if let Some(message) = link.handle(request) {
                tracing::debug!(
                    chain = self.name,
                    handler = link.name(),
                    level = index + 1,
                    "request handled"
                );
                metrics::counter!(
                    "chain_requests_total",
                    "chain" => self.name,
                    "outcome" => "handled"
                )
                .increment(1);
                return ChainOutcome::Handled {
                    level: index + 1,
                    handler: link.name().to_string(),
                    message,
                    passed,
                };
            }
            passed.push(link.name().to_string());
        }

        tracing::debug!(chain = self.name, links = self.links.len(), "request unhandled");
        metrics::counter!(
            "chain_requests_total",
            "chain" => self.name,
            "outcome" => "unhandled"
        )
        .increment(1);
        ChainOutcome::Unhandled { passed }
    }
}

impl<R> std::fmt::Debug for Chain<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("name", &self.name)
            .field("links", &self.link_names())
            .finish()
    }
}
