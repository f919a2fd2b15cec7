//! Splits a delimited path string into tokens and resolves each one.
use crate::error::WalkError;
use crate::registry::{Filter, Registry};

/// A path token paired with the filter it resolved to.
#[derive(Debug)]
pub struct FilterApplication<'a, N> {
    pub argument: &'a str,
    pub filter: &'a Filter<N>,
}

impl<N> FilterApplication<'_, N> {
    pub fn apply(&self, node: &N) -> Result<Vec<N>, WalkError> {
        self.filter.apply(node, self.argument)
    }
}

/// Tokenizes `path` on `delimiter`, discarding empty segments.
///
/// Resolution is all or nothing: the first token without a filter aborts
/// with [`WalkError::NoFilterMatch`].
pub fn tokenize<'a, N>(
    registry: &'a Registry<N>,
    path: &'a str,
    delimiter: &str,
) -> Result<Vec<FilterApplication<'a, N>>, WalkError> {
    if delimiter.is_empty() {
        return Err(WalkError::InvalidDelimiter);
    }
    path.split(delimiter)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let filter = registry.resolve(segment)?;
            log::trace!("Token '{}' -> filter '{}'", segment, filter.pattern());
            Ok(FilterApplication {
                argument: segment,
                filter,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_empty_segments_are_dropped() {
        let registry: Registry<Value> = Registry::default();
        let chain = tokenize(&registry, "//likes///1/", "/").unwrap();
        let tokens: Vec<_> = chain.iter().map(|a| a.argument).collect();
        assert_eq!(tokens, vec!["likes", "1"]);
        assert_eq!(chain[0].filter.pattern(), ".*");
        assert_eq!(chain[1].filter.pattern(), "[0-9]+$");
    }

    #[test]
    fn test_empty_path_yields_no_applications() {
        let registry: Registry<Value> = Registry::default();
        assert!(tokenize(&registry, "", "/").unwrap().is_empty());
        assert!(tokenize(&registry, "///", "/").unwrap().is_empty());
    }

    #[test]
    fn test_custom_delimiter() {
        let registry: Registry<Value> = Registry::default();
        let chain = tokenize(&registry, "clients.0.likes/x", ".").unwrap();
        let tokens: Vec<_> = chain.iter().map(|a| a.argument).collect();
        assert_eq!(tokens, vec!["clients", "0", "likes/x"]);
    }

    #[test]
    fn test_unresolved_token_aborts() {
        let mut registry: Registry<Value> = Registry::new();
        registry
            .register("[a-z]+$", |node: &Value, token: &str| {
                Ok(node.get(token).cloned().into_iter().collect())
            })
            .unwrap();
        assert!(tokenize(&registry, "likes", "/").is_ok());
        assert_eq!(
            tokenize(&registry, "likes/1", "/").unwrap_err(),
            WalkError::no_match("1")
        );
    }

    #[test]
    fn test_empty_delimiter_is_rejected() {
        let registry: Registry<Value> = Registry::default();
        assert_eq!(
            tokenize(&registry, "a/b", "").unwrap_err(),
            WalkError::InvalidDelimiter
        );
    }

    #[test]
    fn test_application_runs_filter_with_token() {
        let registry: Registry<Value> = Registry::default();
        let chain = tokenize(&registry, "name", "/").unwrap();
        let out = chain[0].apply(&json!({ "name": "Louis" })).unwrap();
        assert_eq!(out, vec![json!("Louis")]);
    }
}
