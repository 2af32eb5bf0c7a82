//! Name-keyed builder registry and its process-wide instance.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError, Weak};

use tracing::{debug, instrument, trace};

use super::shared::{lock, SharedBuilder};
use crate::domain::Sandwich;
use crate::error::BuilderError;
use crate::traits::SandwichBuilder;

type WeakBuilder = Weak<Mutex<dyn SandwichBuilder>>;

static GLOBAL: LazyLock<BuilderRegistry> = LazyLock::new(BuilderRegistry::new);

/// Maps builder descriptions to the builders that reported them.
///
/// # Ownership
///
/// Entries are `Weak`: registering a builder never extends its lifetime.
/// Once every [`SharedBuilder`] for a builder is dropped, lookups under
/// its description return `None` and [`prune`](Self::prune) removes the
/// entry.
///
/// # Overwrites
///
/// A description maps to at most one builder.  Registering another
/// builder under a taken description replaces the old entry; the last
/// registration wins and [`register`](Self::register) reports that a
/// replacement happened.
///
/// # Locking
///
/// One mutex guards the map.  `register` performs its check and write
/// under a single acquisition; `lookup` takes its own.  The registry lock
/// is never held while a builder is locked.
///
/// # Examples
///
/// ```
/// use sandwich_builder::builders::{
///     BbqSaucePolicy, ChickenPattyPolicy, OreganoBreadPolicy, PolicySandwichBuilder,
/// };
/// use sandwich_builder::registry::{share, BuilderRegistry};
///
/// type OreganoChickenBbq =
///     PolicySandwichBuilder<OreganoBreadPolicy, ChickenPattyPolicy, BbqSaucePolicy>;
///
/// let registry = BuilderRegistry::new();
/// let first = share(OreganoChickenBbq::new());
/// let second = share(OreganoChickenBbq::new());
///
/// assert!(!registry.register(&first));
/// assert!(registry.register(&second));
///
/// let found = registry
///     .lookup("Policy::OreganoBread::ChickenPatty::BBQSauce")
///     .expect("registered");
/// assert!(std::sync::Arc::ptr_eq(&found, &second));
/// assert!(registry.lookup("garbage").is_none());
/// ```
#[derive(Debug, Default)]
pub struct BuilderRegistry {
    builders: Mutex<HashMap<String, WeakBuilder>>,
}

impl BuilderRegistry {
    /// Creates an empty registry.
    ///
    /// Prefer passing an explicit registry around; use
    /// [`global`](Self::global) only when callers outside your control
    /// need to reach the same instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry.
    ///
    /// The instance is created on first access and lives until the process
    /// exits.  Every call returns the same instance.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registers `builder` under its own description.
    ///
    /// Returns `true` if a live builder was already registered under the
    /// description and has been replaced, `false` if the slot was vacant
    /// or held only a dropped builder.
    ///
    /// The builder is locked briefly to read its description.  A caller
    /// that already holds that lock must use
    /// [`register_as`](Self::register_as) instead.
    pub fn register(&self, builder: &SharedBuilder) -> bool {
        let description = lock(builder).description().to_owned();
        self.register_as(description, builder)
    }

    /// Registers `builder` under `description` without locking it.
    ///
    /// `description` should be the builder's own
    /// [`description`](SandwichBuilder::description).  Returns the same
    /// replacement flag as [`register`](Self::register).
    #[instrument(level = "debug", skip(self, builder))]
    pub fn register_as(&self, description: String, builder: &SharedBuilder) -> bool {
        let replaced = self
            .entries()
            .insert(description, Arc::downgrade(builder))
            .is_some_and(|previous| previous.strong_count() > 0);
        if replaced {
            debug!("replaced existing builder");
        } else {
            debug!("registered new builder");
        }
        replaced
    }

    /// Returns the builder registered under exactly `description`.
    ///
    /// Matching is exact and case-sensitive.  Returns `None` if nothing
    /// is registered under that name or the builder has been dropped.
    #[must_use]
    pub fn lookup(&self, description: &str) -> Option<SharedBuilder> {
        let found = self.entries().get(description).and_then(Weak::upgrade);
        trace!(description, hit = found.is_some(), "builder lookup");
        found
    }

    /// Returns `true` if a live builder is registered under `description`.
    #[must_use]
    pub fn contains(&self, description: &str) -> bool {
        self.lookup(description).is_some()
    }

    /// Removes the entry for `description`.
    ///
    /// Returns `true` if an entry was present.
    pub fn unregister(&self, description: &str) -> bool {
        let removed = self.entries().remove(description).is_some();
        if removed {
            debug!(description, "unregistered builder");
        }
        removed
    }

    /// Drops entries whose builder no longer exists.
    ///
    /// Returns the number of entries removed.
    pub fn prune(&self) -> usize {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|_, builder| builder.strong_count() > 0);
        let pruned = before - entries.len();
        if pruned > 0 {
            debug!(pruned, "pruned dropped builders");
        }
        pruned
    }

    /// Returns the number of live builders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries()
            .values()
            .filter(|builder| builder.strong_count() > 0)
            .count()
    }

    /// Returns `true` if no live builder is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the descriptions of all live builders, sorted.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .entries()
            .iter()
            .filter(|(_, builder)| builder.strong_count() > 0)
            .map(|(description, _)| description.clone())
            .collect();
        out.sort_unstable();
        out
    }

    /// Looks up a builder, runs one orchestration and hands out the
    /// result.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::UnknownBuilder`] if no live builder is registered
    ///   under `description`.
    /// - Any error from the builder's
    ///   [`get_sandwich`](SandwichBuilder::get_sandwich).
    pub fn build(&self, description: &str) -> Result<Sandwich, BuilderError> {
        let builder = self
            .lookup(description)
            .ok_or_else(|| BuilderError::UnknownBuilder(description.to_string()))?;
        let sandwich = lock(&builder).build()?;
        Ok(sandwich)
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, WeakBuilder>> {
        self.builders.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::registry::share;

    /// Minimal builder with a caller-chosen description.
    #[derive(Debug)]
    struct Named {
        description: &'static str,
        sandwich: Option<Sandwich>,
    }

    impl Named {
        fn new(description: &'static str) -> Self {
            Self {
                description,
                sandwich: None,
            }
        }
    }

    impl SandwichBuilder for Named {
        fn create_sandwich(&mut self) {
            let mut s = Sandwich::new();
            s.add_bread(self.description);
            s.add_patty("p");
            s.add_sauce("s");
            self.sandwich = Some(s);
        }

        fn get_sandwich(&mut self) -> Result<Sandwich, BuilderError> {
            self.sandwich.take().ok_or(BuilderError::EmptyRetrieval)
        }

        fn has_sandwich(&self) -> bool {
            self.sandwich.is_some()
        }

        fn description(&self) -> &str {
            self.description
        }
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = BuilderRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.descriptions().is_empty());
    }

    #[test]
    fn first_registration_is_not_a_replacement() {
        let registry = BuilderRegistry::new();
        let a = share(Named::new("a"));
        assert!(!registry.register(&a));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn same_description_replaces() {
        let registry = BuilderRegistry::new();
        let first = share(Named::new("dup"));
        let second = share(Named::new("dup"));
        assert!(!registry.register(&first));
        assert!(registry.register(&second));
        assert_eq!(registry.len(), 1);

        let Some(found) = registry.lookup("dup") else {
            panic!("expected builder");
        };
        assert!(Arc::ptr_eq(&found, &second));
        assert!(!Arc::ptr_eq(&found, &first));
    }

    #[test]
    fn re_registering_same_instance_reports_replacement() {
        let registry = BuilderRegistry::new();
        let a = share(Named::new("a"));
        assert!(!registry.register(&a));
        assert!(registry.register(&a));
    }

    #[test]
    fn distinct_descriptions_coexist() {
        let registry = BuilderRegistry::new();
        let a = share(Named::new("a"));
        let b = share(Named::new("b"));
        assert!(!registry.register(&a));
        assert!(!registry.register(&b));
        assert_eq!(registry.descriptions(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn lookup_miss_is_none() {
        let registry = BuilderRegistry::new();
        let a = share(Named::new("a"));
        registry.register(&a);
        assert!(registry.lookup("garbage").is_none());
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let registry = BuilderRegistry::new();
        let a = share(Named::new("Policy::X"));
        registry.register(&a);
        assert!(registry.lookup("policy::x").is_none());
        assert!(registry.lookup("Policy::").is_none());
        assert!(registry.lookup("Policy::X ").is_none());
        assert!(registry.contains("Policy::X"));
    }

    #[test]
    fn registry_does_not_keep_builders_alive() {
        let registry = BuilderRegistry::new();
        let a = share(Named::new("a"));
        registry.register(&a);
        assert_eq!(Arc::strong_count(&a), 1);

        drop(a);
        assert!(registry.lookup("a").is_none());
        assert!(!registry.contains("a"));
        assert!(registry.is_empty());
    }

    #[test]
    fn prune_removes_dropped_entries() {
        let registry = BuilderRegistry::new();
        let keep = share(Named::new("keep"));
        let gone = share(Named::new("gone"));
        registry.register(&keep);
        registry.register(&gone);
        drop(gone);

        assert_eq!(registry.prune(), 1);
        assert_eq!(registry.prune(), 0);
        assert_eq!(registry.descriptions(), vec!["keep".to_string()]);
    }

    #[test]
    fn registering_over_a_dropped_entry_is_not_a_replacement() {
        let registry = BuilderRegistry::new();
        let old = share(Named::new("x"));
        assert!(!registry.register(&old));
        drop(old);
        assert!(!registry.contains("x"));
        assert_eq!(registry.len(), 0);

        let new = share(Named::new("x"));
        assert!(!registry.register(&new));
        assert!(registry.contains("x"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_as_while_builder_is_locked() {
        let registry = BuilderRegistry::new();
        let a = share(Named::new("a"));
        let guard = lock(&a);
        assert!(!registry.register_as(guard.description().to_owned(), &a));
        drop(guard);

        let Some(found) = registry.lookup("a") else {
            panic!("expected registered builder");
        };
        assert!(Arc::ptr_eq(&found, &a));
        assert!(registry.register(&a));
    }

    #[test]
    fn unregister() {
        let registry = BuilderRegistry::new();
        let a = share(Named::new("a"));
        registry.register(&a);
        assert!(registry.unregister("a"));
        assert!(!registry.unregister("a"));
        assert!(registry.lookup("a").is_none());
    }

    #[test]
    fn build_through_registry() {
        let registry = BuilderRegistry::new();
        let a = share(Named::new("a"));
        registry.register(&a);
        let Ok(s) = registry.build("a") else {
            panic!("expected sandwich");
        };
        assert_eq!(s.describe(), "a with p and s");
        assert!(!lock(&a).has_sandwich());
    }

    #[test]
    fn build_unknown_is_an_error() {
        let registry = BuilderRegistry::new();
        assert_eq!(
            registry.build("garbage"),
            Err(BuilderError::UnknownBuilder("garbage".to_string()))
        );
    }

    #[test]
    fn global_is_a_singleton() {
        assert!(core::ptr::eq(BuilderRegistry::global(), BuilderRegistry::global()));
    }

    #[test]
    fn concurrent_registration_keeps_one_entry_per_key() {
        let registry = Arc::new(BuilderRegistry::new());
        let builders: Vec<SharedBuilder> = (0..8).map(|_| share(Named::new("race"))).collect();
        let handles: Vec<_> = builders
            .iter()
            .cloned()
            .map(|builder| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.register(&builder))
            })
            .collect();
        let replaced = handles
            .into_iter()
            .filter_map(|h| h.join().ok())
            .filter(|replaced| *replaced)
            .count();
        // Exactly one registration found the key vacant.
        assert_eq!(replaced, 7);
        assert_eq!(registry.len(), 1);
    }
}
