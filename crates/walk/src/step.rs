//! Query steps: path strings, callables and the combinators built from them.
use crate::error::WalkError;
use std::fmt;
use std::sync::Arc;

/// A user-supplied transform: one node in, zero or more nodes out.
pub type Callable<N> = Arc<dyn Fn(&N) -> Result<Vec<N>, WalkError> + Send + Sync>;

/// One unit of a query.
pub enum Step<N> {
    /// A delimited path such as `likes/1`, resolved through the registry.
    Path(String),
    /// A transform applied to every item of the stream.
    Callable(Callable<N>),
    /// Per-item drill-down: sub-steps chained against each item on its own.
    Sequence(Vec<Step<N>>),
    /// Per-item fan-out: every sub-step runs against each item and the outputs
    /// are concatenated.
    Branch(Vec<Step<N>>),
    /// Per-item gate: `(condition, consequence)` arms. An arm whose condition
    /// yields anything for the item contributes its consequence's output.
    Guard(Vec<(Step<N>, Step<N>)>),
}

impl<N> Step<N> {
    pub fn path(path: impl Into<String>) -> Self {
        Step::Path(path.into())
    }

    /// Wraps an infallible transform.
    pub fn call<F>(f: F) -> Self
    where
        F: Fn(&N) -> Vec<N> + Send + Sync + 'static,
    {
        Step::Callable(Arc::new(move |node: &N| -> Result<Vec<N>, WalkError> {
            Ok(f(node))
        }))
    }

    /// Wraps a transform that may fail; its errors abort the walk.
    pub fn try_call<F>(f: F) -> Self
    where
        F: Fn(&N) -> Result<Vec<N>, WalkError> + Send + Sync + 'static,
    {
        Step::Callable(Arc::new(f))
    }

    pub fn sequence(steps: impl IntoIterator<Item = Step<N>>) -> Self {
        Step::Sequence(steps.into_iter().collect())
    }

    pub fn branch(steps: impl IntoIterator<Item = Step<N>>) -> Self {
        Step::Branch(steps.into_iter().collect())
    }

    pub fn guard(arms: impl IntoIterator<Item = (Step<N>, Step<N>)>) -> Self {
        Step::Guard(arms.into_iter().collect())
    }
}

impl<N> From<&str> for Step<N> {
    fn from(path: &str) -> Self {
        Step::Path(path.to_string())
    }
}

impl<N> From<String> for Step<N> {
    fn from(path: String) -> Self {
        Step::Path(path)
    }
}

impl<N> Clone for Step<N> {
    fn clone(&self) -> Self {
        match self {
            Step::Path(path) => Step::Path(path.clone()),
            Step::Callable(f) => Step::Callable(Arc::clone(f)),
            Step::Sequence(steps) => Step::Sequence(steps.clone()),
            Step::Branch(steps) => Step::Branch(steps.clone()),
            Step::Guard(arms) => Step::Guard(arms.clone()),
        }
    }
}

impl<N> fmt::Debug for Step<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Step::Callable(_) => f.write_str("Callable(..)"),
            Step::Sequence(steps) => f.debug_tuple("Sequence").field(steps).finish(),
            Step::Branch(steps) => f.debug_tuple("Branch").field(steps).finish(),
            Step::Guard(arms) => f.debug_tuple("Guard").field(arms).finish(),
        }
    }
}
