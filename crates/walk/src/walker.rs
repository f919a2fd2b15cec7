//! The step evaluator.
//!
//! A walk threads a stream of nodes through its steps strictly left to right.
//! Each step consumes the whole stream and produces the next one. Within a
//! step, items are processed in stream order and depth-first, so the outputs
//! derived from one input item stay contiguous.
use crate::error::WalkError;
use crate::registry::Registry;
use crate::step::Step;
use crate::tokenizer::{FilterApplication, tokenize};
use amble_node::Node;

/// Options controlling how steps are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Separator between path tokens. Defaults to `/`.
    pub delimiter: String,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            delimiter: "/".to_string(),
        }
    }
}

impl WalkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

/// Evaluates steps against a registry.
#[derive(Debug, Clone)]
pub struct Walker<'r, N> {
    registry: &'r Registry<N>,
    options: WalkOptions,
}

impl<'r, N: Node> Walker<'r, N> {
    pub fn new(registry: &'r Registry<N>) -> Self {
        Self {
            registry,
            options: WalkOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    /// Walks `steps` starting from the single-item stream `[root]`.
    pub fn walk(&self, root: &N, steps: &[Step<N>]) -> Result<Vec<N>, WalkError> {
        self.walk_stream(vec![root.clone()], steps)
    }

    /// Walks `steps` starting from an arbitrary stream.
    pub fn walk_stream(&self, stream: Vec<N>, steps: &[Step<N>]) -> Result<Vec<N>, WalkError> {
        log::debug!(
            "Walking {} step(s) over {} item(s)",
            steps.len(),
            stream.len()
        );
        let result = self.run(stream, steps);
        match &result {
            Ok(out) => log::debug!("Walk produced {} item(s)", out.len()),
            Err(e) => log::debug!("Walk aborted: {}", e),
        }
        result
    }

    fn run(&self, mut stream: Vec<N>, steps: &[Step<N>]) -> Result<Vec<N>, WalkError> {
        for step in steps {
            stream = self.apply_step(step, stream)?;
            log::trace!("  {:?} -> {} item(s)", step, stream.len());
        }
        Ok(stream)
    }

    fn apply_step(&self, step: &Step<N>, stream: Vec<N>) -> Result<Vec<N>, WalkError> {
        let mut out = Vec::new();
        match step {
            Step::Path(path) => {
                let chain = tokenize(self.registry, path, &self.options.delimiter)?;
                if chain.is_empty() {
                    return Ok(stream);
                }
                for item in &stream {
                    apply_chain(item, &chain, &mut out)?;
                }
            }
            Step::Callable(f) => {
                for item in &stream {
                    out.extend(f(item)?);
                }
            }
            Step::Sequence(steps) => {
                for item in stream {
                    out.extend(self.run(vec![item], steps)?);
                }
            }
            Step::Branch(steps) => {
                for item in &stream {
                    for sub in steps {
                        out.extend(self.apply_step(sub, vec![item.clone()])?);
                    }
                }
            }
            Step::Guard(arms) => {
                for item in &stream {
                    for (condition, consequence) in arms {
                        if self.apply_step(condition, vec![item.clone()])?.is_empty() {
                            continue;
                        }
                        out.extend(self.apply_step(consequence, vec![item.clone()])?);
                    }
                }
            }
        }
        Ok(out)
    }
}

/// Pushes one item through the whole filter chain, depth-first.
fn apply_chain<N: Node>(
    item: &N,
    chain: &[FilterApplication<'_, N>],
    out: &mut Vec<N>,
) -> Result<(), WalkError> {
    match chain.split_first() {
        None => out.push(item.clone()),
        Some((head, rest)) => {
            for next in head.apply(item)? {
                apply_chain(&next, rest, out)?;
            }
        }
    }
    Ok(())
}

/// Walks `steps` from `root` with default options.
pub fn walk<N: Node>(
    registry: &Registry<N>,
    root: &N,
    steps: &[Step<N>],
) -> Result<Vec<N>, WalkError> {
    Walker::new(registry).walk(root, steps)
}
