//! store.rs - The ordered rule collection.
//!
//! `RuleStore` owns the rule list and the id counter. Insertion order is
//! application order. Every mutation is followed by a save through the
//! store's persistence adapter; a failed save is logged and otherwise ignored.
//!
//! License: MIT OR Apache-2.0

use log::{debug, warn};
use std::collections::HashSet;
use std::fmt;

use crate::config::{RedactionRule, RuleDefinition, RuleUpdate};
use crate::persistence::{NullPersistence, RulePersistence};

/// What happened to a bulk replacement that needed the caller's go-ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Replaced { count: usize },
    Cancelled,
}

pub struct RuleStore {
    rules: Vec<RedactionRule>,
    next_id: u64,
    persistence: Box<dyn RulePersistence>,
}

impl fmt::Debug for RuleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleStore")
            .field("rules", &self.rules)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleStore {
    /// An empty, memory-only store.
    pub fn new() -> Self {
        Self::with_persistence(Box::new(NullPersistence))
    }

    /// An empty store that saves through `persistence`. Nothing is loaded.
    pub fn with_persistence(persistence: Box<dyn RulePersistence>) -> Self {
        Self { rules: Vec::new(), next_id: 0, persistence }
    }

    /// A store initialized from whatever `persistence` holds.
    ///
    /// A load failure is logged and leaves the store empty.
    pub fn open(persistence: Box<dyn RulePersistence>) -> Self {
        let mut store = Self::with_persistence(persistence);
        match store.persistence.load() {
            Ok(rules) => {
                debug!("Loaded {} rule(s) from storage.", rules.len());
                store.install(rules);
            }
            Err(e) => warn!("Failed to load rules from storage: {}", e),
        }
        store
    }

    pub fn rules(&self) -> &[RedactionRule] {
        &self.rules
    }

    pub fn get(&self, id: u64) -> Option<&RedactionRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The id the next `add` will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Appends a new rule and returns it.
    pub fn add(&mut self, definition: RuleDefinition) -> RedactionRule {
        if self.next_id == u64::MAX {
            self.compact_ids();
        }
        let rule = RedactionRule::from_definition(self.next_id, definition);
        self.next_id += 1;
        self.rules.push(rule.clone());
        debug!("Added rule {}.", rule.id);
        self.persist();
        rule
    }

    /// Deletes the rule with `id`. Returns false if there was none.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.rules.len();
        self.rules.retain(|r| r.id != id);
        let removed = self.rules.len() != before;
        if removed {
            debug!("Removed rule {}.", id);
        } else {
            debug!("Remove requested for unknown rule {}.", id);
        }
        self.persist();
        removed
    }

    /// Edits the rule with `id`. Returns false (and logs) if there was none.
    pub fn update(&mut self, id: u64, update: RuleUpdate) -> bool {
        let updated = match self.rules.iter_mut().find(|r| r.id == id) {
            Some(rule) => {
                update.apply_to(rule);
                debug!("Updated rule {}.", id);
                true
            }
            None => {
                warn!("Cannot update rule {}: no such rule.", id);
                false
            }
        };
        self.persist();
        updated
    }

    /// Empties the store and resets the id counter.
    pub fn clear(&mut self) {
        self.rules.clear();
        self.next_id = 0;
        debug!("Cleared all rules.");
        self.persist();
    }

    /// Replaces the whole rule list. Used by every bulk-load path.
    pub fn replace_all(&mut self, rules: Vec<RedactionRule>) {
        self.install(rules);
        debug!("Replaced rule list; {} rule(s), next id {}.", self.rules.len(), self.next_id);
        self.persist();
    }

    /// Applies the confirm-if-non-empty policy for bulk replacements.
    ///
    /// `confirm` receives the number of rules that would be discarded and is
    /// not called at all when the store is empty.
    pub fn confirm_replace<F>(&self, confirm: F) -> bool
    where
        F: FnOnce(usize) -> bool,
    {
        self.is_empty() || confirm(self.len())
    }

    fn install(&mut self, mut rules: Vec<RedactionRule>) {
        self.next_id = reconcile_ids(&mut rules);
        self.rules = rules;
    }

    /// Renumbers the rules `0..n` once the counter has no room left.
    fn compact_ids(&mut self) {
        warn!("Rule id space exhausted; renumbering {} rule(s) from 0.", self.rules.len());
        self.next_id = renumber(&mut self.rules);
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.rules) {
            warn!("Failed to save rules to storage: {}", e);
        }
    }
}

/// Repairs duplicate ids and returns the counter value for the next `add`.
///
/// The first rule holding a given id keeps it; later duplicates get fresh ids
/// above the current maximum, in list order. The counter is the maximum id
/// plus one, or 0 for an empty list. If those fresh ids or the counter would
/// not fit in a `u64`, the whole list is renumbered `0..n` instead.
pub fn reconcile_ids(rules: &mut [RedactionRule]) -> u64 {
    let Some(max) = rules.iter().map(|r| r.id).max() else {
        return 0;
    };

    let mut seen = HashSet::with_capacity(rules.len());
    let duplicates = rules.iter().filter(|r| !seen.insert(r.id)).count() as u64;
    let Some(counter) = max.checked_add(1).and_then(|next| next.checked_add(duplicates)) else {
        warn!("Rule ids near the u64 limit; renumbering {} rule(s) from 0.", rules.len());
        return renumber(rules);
    };

    seen.clear();
    let mut next = max + 1;
    for rule in rules.iter_mut() {
        if !seen.insert(rule.id) {
            debug!("Duplicate rule id {} reassigned to {}.", rule.id, next);
            rule.id = next;
            seen.insert(next);
            next += 1;
        }
    }
    counter
}

fn renumber(rules: &mut [RedactionRule]) -> u64 {
    for (index, rule) in rules.iter_mut().enumerate() {
        rule.id = index as u64;
    }
    rules.len() as u64
}
