// rulemask-core/src/lib.rs
//! # rulemask Core Library
//!
//! `rulemask-core` provides the platform-independent logic of rulemask: an ordered list of
//! literal find/replace rules, the compiler that turns each rule into a matcher, and the
//! engine that applies the rules one after another to a block of text.
//!
//! The library knows nothing about terminals, clipboards or where rules are stored on
//! disk. Front-ends hand it text and rules, and receive the redacted text plus a report
//! of which rules matched and how often.
//!
//! ## Modules
//!
//! * `config`: `RedactionRule`, `RuleDefinition`, `RuleUpdate`, `EngineOptions` and the settings file.
//! * `store`: `RuleStore`, the ordered rule collection with id assignment.
//! * `matchers`: compiles a rule's literal text and flags into a regular expression.
//! * `engine`: the `RedactionEngine` trait.
//! * `engines`: the `SequentialEngine` implementation.
//! * `redaction_match`: `MatchReport` and `RedactionOutcome`.
//! * `presets`: built-in and user-defined rule bundles.
//! * `persistence`: adapters the store saves itself through.
//! * `transfer`: export to and import from rules files.
//! * `headless`: a one-shot convenience wrapper.
//!
//! ## Usage Example
//!
//! ```rust
//! use rulemask_core::{RedactionEngine, RuleDefinition, RuleStore, SequentialEngine};
//!
//! let mut store = RuleStore::new();
//! store.add(RuleDefinition::new("MiscellaneousCorp", "AnonymousCorp"));
//! store.add(RuleDefinition::new("Q4", "Period Four"));
//!
//! let engine = SequentialEngine::new();
//! let outcome = engine
//!     .apply("MiscellaneousCorp missed its Q4 target.", store.rules())
//!     .unwrap();
//!
//! assert_eq!(outcome.output, "AnonymousCorp missed its Period Four target.");
//! assert_eq!(outcome.mappings.len(), 2);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`RulemaskError`]. `EmptyInput`, `NoRules` and `NoMatches`
//! describe the user's input rather than a fault and are meant to be shown as-is.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod matchers;
pub mod persistence;
pub mod presets;
pub mod redaction_match;
pub mod store;
pub mod transfer;

/// Re-exports the rule and option types.
pub use config::{
    EmptyReplacement,
    EngineOptions,
    RedactionRule,
    RuleDefinition,
    RuleUpdate,
    RulemaskConfig,
    DEFAULT_REDACTION_TOKEN,
};

pub use errors::RulemaskError;

pub use engine::RedactionEngine;
pub use engines::sequential::SequentialEngine;

pub use matchers::compiler::{build_pattern, compile_matcher, CompiledMatcher};

pub use redaction_match::{redact_sensitive, MatchReport, RedactionOutcome};

pub use store::{reconcile_ids, LoadOutcome, RuleStore};

pub use persistence::{JsonFilePersistence, MemoryPersistence, NullPersistence, RulePersistence};

pub use presets::{
    list_available_presets,
    load_preset,
    load_preset_by_name,
    load_preset_file,
    preset_candidate_paths,
    Preset,
    PresetCatalogue,
    PresetSummary,
};

pub use transfer::{export_file_name, export_rules, import_rules, parse_rules, RuleFileFormat};

pub use headless::headless_redact_string;
