//! The ordered filter registry and its first-match-wins dispatch rule.
use crate::error::WalkError;
use crate::filters;
use amble_node::Node;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// The signature of a filter implementation: one node and the raw path token
/// in, zero or more nodes out.
pub type Transform<N> = Arc<dyn Fn(&N, &str) -> Result<Vec<N>, WalkError> + Send + Sync>;

/// A (pattern, transform) pair.
///
/// Patterns are regular expressions anchored at the start of the token, so
/// `~` matches every token beginning with a tilde and `[0-9]+$` only fully
/// numeric tokens.
pub struct Filter<N> {
    pattern: String,
    matcher: Regex,
    transform: Transform<N>,
}

impl<N> Filter<N> {
    /// Compiles `pattern` and pairs it with `transform`.
    pub fn new(pattern: &str, transform: Transform<N>) -> Result<Self, WalkError> {
        let matcher = compile_prefix(pattern)?;
        Ok(Self::with_matcher(pattern, matcher, transform))
    }

    pub(crate) fn with_matcher(pattern: &str, matcher: Regex, transform: Transform<N>) -> Self {
        Self {
            pattern: pattern.to_string(),
            matcher,
            transform,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, token: &str) -> bool {
        self.matcher.is_match(token)
    }

    /// A pattern matching the empty token matches any token.
    pub fn is_catch_all(&self) -> bool {
        self.matches("")
    }

    pub fn apply(&self, node: &N, argument: &str) -> Result<Vec<N>, WalkError> {
        (self.transform)(node, argument)
    }
}

impl<N> Clone for Filter<N> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            matcher: self.matcher.clone(),
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<N> fmt::Debug for Filter<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Compiles a filter or key pattern with start-of-token anchoring.
pub(crate) fn compile_prefix(pattern: &str) -> Result<Regex, WalkError> {
    Regex::new(&format!("^(?:{})", pattern)).map_err(|e| WalkError::invalid_pattern(pattern, e))
}

/// An ordered list of filters. Insertion order is priority order.
///
/// The catch-all lives in its own slot and is consulted after every registered
/// filter, so filters added after the catch-all stay reachable.
///
/// The registry is built with `&mut self` calls and read through `&self`
/// during walks; a registry cannot change while a walk borrows it.
pub struct Registry<N> {
    filters: Vec<Filter<N>>,
    fallback: Option<Filter<N>>,
}

impl<N> Registry<N> {
    /// Creates a new, empty registry. Every token fails to resolve until
    /// filters are registered.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            fallback: None,
        }
    }

    /// Appends a filter with the given pattern.
    pub fn register<F>(&mut self, pattern: &str, transform: F) -> Result<(), WalkError>
    where
        F: Fn(&N, &str) -> Result<Vec<N>, WalkError> + Send + Sync + 'static,
    {
        let filter = Filter::new(pattern, Arc::new(transform))?;
        self.push(filter);
        Ok(())
    }

    pub(crate) fn push(&mut self, filter: Filter<N>) {
        if filter.is_catch_all() {
            log::warn!(
                "Filter '{}' matches every token; filters registered after it are unreachable. \
                 Use register_fallback for catch-all filters.",
                filter.pattern()
            );
        }
        log::debug!(
            "Registered filter '{}' at priority {}",
            filter.pattern(),
            self.filters.len()
        );
        self.filters.push(filter);
    }

    /// Installs the catch-all, replacing any previous one.
    pub fn register_fallback<F>(&mut self, transform: F)
    where
        F: Fn(&N, &str) -> Result<Vec<N>, WalkError> + Send + Sync + 'static,
    {
        self.set_fallback(Arc::new(transform));
    }

    pub(crate) fn set_fallback(&mut self, transform: Transform<N>) {
        if self.fallback.is_some() {
            log::debug!("Replacing registered fallback filter");
        }
        self.fallback = Some(Filter::with_matcher(
            ".*",
            filters::CATCH_ALL_RE.clone(),
            transform,
        ));
    }

    /// Finds the first filter matching `token`, falling back to the catch-all.
    pub fn resolve(&self, token: &str) -> Result<&Filter<N>, WalkError> {
        self.filters
            .iter()
            .find(|f| f.matches(token))
            .or(self.fallback.as_ref())
            .ok_or_else(|| WalkError::no_match(token))
    }

    /// Removes every filter, the catch-all included.
    pub fn reset(&mut self) {
        log::debug!(
            "Clearing registry ({} filters, fallback: {})",
            self.filters.len(),
            self.fallback.is_some()
        );
        self.filters.clear();
        self.fallback = None;
    }

    /// Number of filters, the catch-all included.
    pub fn len(&self) -> usize {
        self.filters.len() + usize::from(self.fallback.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Patterns in resolution order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.filters
            .iter()
            .chain(self.fallback.iter())
            .map(Filter::pattern)
    }
}

impl<N: Node + 'static> Registry<N> {
    /// Creates a registry populated with the built-in filters.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        filters::install(&mut registry);
        registry
    }
}

impl<N: Node + 'static> Default for Registry<N> {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl<N> Clone for Registry<N> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

impl<N> fmt::Debug for Registry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.patterns()).finish()
    }
}
