// crates/diaglog-translator/src/catalog.rs
// ============================================================================
// Module: Catalog Registry
// Description: Assembly of per-module message catalogs into one lookup table.
// Purpose: Resolve (module, tag) pairs to message templates.
// Dependencies: serde, thiserror, crate::system
// ============================================================================

//! ## Overview
//! Each evaluation module supplies its own tag to template mapping through
//! [`TranslationCatalog`]. The [`CatalogRegistry`] merges the built-in
//! `SYSTEM` catalog, the base module, and every module reported by a
//! [`ModuleRegistry`] into a single [`Catalog`] keyed by uppercased module name.
//! Invariants:
//! - The catalog is built on first use, exactly once, and is read-only thereafter.
//! - Module keys are uppercased at build time; lookups are exact.
//! - When two modules share an uppercased name, the later one wins.
//! - Each registered catalog source is queried at most once per build.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::iter;
use std::sync::Arc;
use std::sync::OnceLock;

use serde::Serialize;
use thiserror::Error;

use crate::system::SYSTEM_MODULE;
use crate::system::SystemCatalog;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Name of the module whose catalog is always loaded after `SYSTEM`.
pub const DEFAULT_BASE_MODULE: &str = "Basic";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while assembling the catalog.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - A missing tag or module at lookup time is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A catalog source could not produce its mapping.
    #[error("catalog source failed: {0}")]
    Source(String),
    /// The registry reported a module without a catalog source.
    #[error("no catalog source registered for module {0}")]
    UnknownModule(String),
    /// A named module's catalog source failed.
    #[error("catalog for module {module} failed: {reason}")]
    ModuleFailed {
        /// Module name as reported by the registry.
        module: String,
        /// Failure reported by the source.
        reason: String,
    },
}

// ============================================================================
// SECTION: Catalog Sources
// ============================================================================

/// A module that can describe its own messages.
pub trait TranslationCatalog: Send + Sync {
    /// Returns the module's tag to template mapping.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the mapping cannot be produced.
    fn catalog(&self) -> Result<BTreeMap<String, String>, CatalogError>;

    /// Returns descriptions of the module's test cases, keyed by test case name.
    fn test_case_descriptions(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }
}

/// One active module as reported by a [`ModuleRegistry`].
#[derive(Clone, Copy)]
pub struct RegisteredModule<'a> {
    /// Module name as registered.
    pub name: &'a str,
    /// The module's catalog source.
    pub source: &'a dyn TranslationCatalog,
}

/// Enumerates the active evaluation modules and their catalog sources.
pub trait ModuleRegistry: Send + Sync {
    /// Returns active modules in registration order, duplicates included.
    fn modules(&self) -> Vec<RegisteredModule<'_>>;
}

/// Ordered in-memory module registry.
///
/// # Invariants
/// - `modules()` reports every registration in order, duplicates included.
#[derive(Default, Clone)]
pub struct ModuleList {
    /// Registered modules in order.
    entries: Vec<(String, Arc<dyn TranslationCatalog>)>,
}

impl ModuleList {
    /// Creates an empty module list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module catalog source.
    pub fn register(
        &mut self,
        module: impl Into<String>,
        source: impl TranslationCatalog + 'static,
    ) {
        self.entries.push((module.into(), Arc::new(source)));
    }

    /// Registers a module catalog source, builder style.
    #[must_use]
    pub fn with_module(
        mut self,
        module: impl Into<String>,
        source: impl TranslationCatalog + 'static,
    ) -> Self {
        self.register(module, source);
        self
    }

    /// Number of registered modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no modules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ModuleRegistry for ModuleList {
    fn modules(&self) -> Vec<RegisteredModule<'_>> {
        self.entries
            .iter()
            .map(|(name, source)| RegisteredModule {
                name,
                source: source.as_ref(),
            })
            .collect()
    }
}

/// Plain mapping used as a module's catalog source.
impl TranslationCatalog for BTreeMap<String, String> {
    fn catalog(&self) -> Result<BTreeMap<String, String>, CatalogError> {
        Ok(self.clone())
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Merged message catalog keyed by uppercased module name, then tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    /// Tag tables per module.
    modules: BTreeMap<String, BTreeMap<String, String>>,
}

impl Catalog {
    /// Installs a module's tags under its uppercased name, replacing any previous table.
    pub fn install(&mut self, module: &str, tags: BTreeMap<String, String>) {
        self.modules.insert(module.to_uppercase(), tags);
    }

    /// Returns the template for `module` and `tag`.
    #[must_use]
    pub fn lookup(&self, module: &str, tag: &str) -> Option<&str> {
        self.modules.get(module).and_then(|tags| tags.get(tag)).map(String::as_str)
    }

    /// Returns the tag table of one module.
    #[must_use]
    pub fn module(&self, module: &str) -> Option<&BTreeMap<String, String>> {
        self.modules.get(module)
    }

    /// Iterates over module keys in sorted order.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Number of modules in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the catalog has no modules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Total number of templates across all modules.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.modules.values().map(BTreeMap::len).sum()
    }
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Lazily built, cached catalog over a module registry.
///
/// # Invariants
/// - Each catalog source is queried at most once per registry instance.
/// - A failed build caches nothing; the next call retries.
pub struct CatalogRegistry {
    /// Module loaded immediately after `SYSTEM`.
    base_module: String,
    /// External module enumeration.
    modules: Arc<dyn ModuleRegistry>,
    /// Catalog built on first use.
    catalog: OnceLock<Catalog>,
}

impl CatalogRegistry {
    /// Creates a registry that loads `base_module` before the registry's modules.
    #[must_use]
    pub fn new(base_module: impl Into<String>, modules: Arc<dyn ModuleRegistry>) -> Self {
        Self {
            base_module: base_module.into(),
            modules,
            catalog: OnceLock::new(),
        }
    }

    /// Returns the base module name.
    #[must_use]
    pub fn base_module(&self) -> &str {
        &self.base_module
    }

    /// Returns the underlying module registry.
    #[must_use]
    pub fn module_registry(&self) -> &dyn ModuleRegistry {
        self.modules.as_ref()
    }

    /// Whether the catalog has been built.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// Returns the catalog, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when a module has no source or its source fails.
    pub fn load(&self) -> Result<&Catalog, CatalogError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }
        let built = self.build()?;
        Ok(self.catalog.get_or_init(|| built))
    }

    /// Returns the template for `module` and `tag`, building the catalog if needed.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the catalog cannot be built.
    pub fn lookup(&self, module: &str, tag: &str) -> Result<Option<&str>, CatalogError> {
        Ok(self.load()?.lookup(module, tag))
    }

    /// Returns registrations in load order, each paired with its registration index.
    ///
    /// The first registration named exactly like the base module leads, followed
    /// by every registration in order. The base registration therefore appears twice.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownModule`] when no registration carries the base name.
    pub(crate) fn load_order<'r, 'a>(
        &self,
        registered: &'r [RegisteredModule<'a>],
    ) -> Result<Vec<(usize, &'r RegisteredModule<'a>)>, CatalogError> {
        let base = registered
            .iter()
            .enumerate()
            .find(|(_, module)| module.name == self.base_module)
            .ok_or_else(|| CatalogError::UnknownModule(self.base_module.clone()))?;
        Ok(iter::once(base).chain(registered.iter().enumerate()).collect())
    }

    /// Assembles the merged catalog, querying each registration once.
    fn build(&self) -> Result<Catalog, CatalogError> {
        let registered = self.modules.modules();
        let order = self.load_order(&registered)?;
        let mut catalog = Catalog::default();
        catalog.install(SYSTEM_MODULE, SystemCatalog.catalog()?);
        let mut fetched: BTreeMap<usize, BTreeMap<String, String>> = BTreeMap::new();
        for (index, module) in order {
            let tags = match fetched.entry(index) {
                Entry::Occupied(entry) => entry.get().clone(),
                Entry::Vacant(entry) => entry.insert(fetch_tags(module)?).clone(),
            };
            catalog.install(module.name, tags);
        }
        Ok(catalog)
    }
}

/// Queries one module's catalog source, naming the module on failure.
fn fetch_tags(module: &RegisteredModule<'_>) -> Result<BTreeMap<String, String>, CatalogError> {
    module.source.catalog().map_err(|err| CatalogError::ModuleFailed {
        module: module.name.to_string(),
        reason: err.to_string(),
    })
}
