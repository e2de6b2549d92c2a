use std::fmt;

use tracing::{debug, info};

use super::filter::{EvenFilter, GreaterThanFilter, NumberFilter, OddFilter};
use crate::constants::{EVEN_FILTER, GREATER_THAN_FILTER, ODD_FILTER};
use crate::error::{PipelineError, Result};

/// Builds a filter from the part of the requested name that follows the prefix
pub type FilterConstructor = Box<dyn Fn(&str) -> Result<Box<dyn NumberFilter>> + Send + Sync>;

struct FilterEntry {
    prefix: String,
    constructor: FilterConstructor,
}

/// Prefix-keyed factory for filters.
///
/// A requested name such as `GT5` is resolved by finding the longest
/// registered prefix the name starts with (`GT`) and handing the remainder
/// (`5`) to that prefix's constructor. The registry is built once and then
/// only read, so it is passed around by shared reference.
pub struct FilterRegistry {
    entries: Vec<FilterEntry>,
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FilterRegistry {
            entries: Vec::new(),
        }
    }

    /// Registry with `EVEN`, `ODD` and `GT<n>` available
    pub fn with_builtin_filters() -> Self {
        let mut registry = Self::new();
        registry.register(EVEN_FILTER, |_| Ok(Box::new(EvenFilter)));
        registry.register(ODD_FILTER, |_| Ok(Box::new(OddFilter)));
        registry.register(GREATER_THAN_FILTER, |argument| {
            let threshold = argument.parse::<i64>().map_err(|_| {
                PipelineError::InvalidFilterArgument {
                    filter: GREATER_THAN_FILTER.to_string(),
                    argument: argument.to_string(),
                }
            })?;
            Ok(Box::new(GreaterThanFilter::new(threshold)))
        });
        registry
    }

    /// Register a constructor under `prefix`.
    ///
    /// Registering a prefix again replaces its constructor but keeps its
    /// original position in [`FilterRegistry::prefixes`].
    pub fn register<F>(&mut self, prefix: impl Into<String>, constructor: F)
    where
        F: Fn(&str) -> Result<Box<dyn NumberFilter>> + Send + Sync + 'static,
    {
        let prefix = prefix.into();
        info!("Registering filter prefix: {}", prefix);

        let constructor: FilterConstructor = Box::new(constructor);
        match self.entries.iter_mut().find(|entry| entry.prefix == prefix) {
            Some(entry) => entry.constructor = constructor,
            None => self.entries.push(FilterEntry {
                prefix,
                constructor,
            }),
        }
    }

    /// Resolve `name` to a filter using the longest matching prefix
    pub fn create(&self, name: &str) -> Result<Box<dyn NumberFilter>> {
        let entry = self
            .entries
            .iter()
            .filter(|entry| name.starts_with(entry.prefix.as_str()))
            .max_by_key(|entry| entry.prefix.len())
            .ok_or_else(|| PipelineError::UnknownFilter(name.to_string()))?;

        let argument = &name[entry.prefix.len()..];
        debug!(
            "Resolved filter {} via prefix {} with argument '{}'",
            name, entry.prefix, argument
        );
        (entry.constructor)(argument)
    }

    /// Registered prefixes in registration order
    pub fn prefixes(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.prefix.as_str()).collect()
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("prefixes", &self.prefixes())
            .finish()
    }
}
