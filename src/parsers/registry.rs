use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::errors::Result;
use crate::scene::container::SceneContainer;
use crate::scene::entity::Entity;
use crate::scene::scene::Scene;

/// A whole-scene parser: scans an entire serialized blob for the section(s)
/// it knows about and mutates the scene/container accordingly. A parser
/// whose section is absent from the blob is expected to no-op.
pub type SceneParser =
    Arc<dyn Fn(&Value, &mut Scene, &mut SceneContainer, &str) -> Result<()> + Send + Sync>;

/// An individual parser: converts one serialized fragment into exactly one
/// newly constructed [`Entity`], without touching a container.
pub type IndividualParser = Arc<dyn Fn(&Value, &mut Scene, &str) -> Result<Entity> + Send + Sync>;

/// Name-keyed store of scene parsers.
///
/// Each subsystem registers its parsers once during its own startup, before
/// any [`parse`](Self::parse) call that should include them. There is no
/// unregistration. Where the registry value lives, and for how long, is the
/// embedder's decision; there is no process-wide instance.
///
/// Dispatch order is registration order: [`parse`](Self::parse) invokes
/// parsers in the order their names were first registered, and re-registering
/// a name keeps its original position. Compositions that rely on relative
/// ordering (geometry-defining parsers before mesh-defining ones) should
/// simply register in that order.
///
/// The registry performs no internal locking. Concurrent registration or
/// dispatch is unsupported and must be serialized by the caller; the parser
/// values themselves are `Send + Sync` so an externally synchronized
/// registry can be shared across threads.
#[derive(Default)]
pub struct ParserRegistry {
    scene_parsers: IndexMap<String, SceneParser>,
    individual_parsers: IndexMap<String, IndividualParser>,
}

impl ParserRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a whole-scene parser under `name`, replacing any parser
    /// already stored there. Neither argument is validated.
    pub fn add_parser<F>(&mut self, name: impl Into<String>, parser: F)
    where
        F: Fn(&Value, &mut Scene, &mut SceneContainer, &str) -> Result<()> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.scene_parsers.contains_key(&name) {
            log::warn!("Scene parser '{name}' already registered, replacing it");
        }
        self.scene_parsers.insert(name, Arc::new(parser));
    }

    /// The whole-scene parser registered under `name`, or `None`.
    #[must_use]
    pub fn get_parser(&self, name: &str) -> Option<SceneParser> {
        self.scene_parsers.get(name).cloned()
    }

    /// Registers an individual parser under `name`, replacing any parser
    /// already stored there.
    pub fn add_individual_parser<F>(&mut self, name: impl Into<String>, parser: F)
    where
        F: Fn(&Value, &mut Scene, &str) -> Result<Entity> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.individual_parsers.contains_key(&name) {
            log::warn!("Individual parser '{name}' already registered, replacing it");
        }
        self.individual_parsers.insert(name, Arc::new(parser));
    }

    /// The individual parser registered under `name`, or `None`.
    #[must_use]
    pub fn get_individual_parser(&self, name: &str) -> Option<IndividualParser> {
        self.individual_parsers.get(name).cloned()
    }

    /// Invokes every registered whole-scene parser, in registration order,
    /// each with the same four arguments. The registry does no filtering on
    /// `data`: each parser detects whether the blob contains a section
    /// relevant to it and no-ops otherwise. `root_url` is forwarded
    /// unmodified for resolving relative resource references.
    ///
    /// Dispatch is fail-fast: the first parser to return an error aborts
    /// the loop, parsers ordered after it are never invoked, and the error
    /// propagates to the caller. Effects already applied to `scene` and
    /// `container` by earlier parsers remain, so callers must accept a
    /// partially populated scene after a failed `parse`.
    pub fn parse(
        &self,
        data: &Value,
        scene: &mut Scene,
        container: &mut SceneContainer,
        root_url: &str,
    ) -> Result<()> {
        for (name, parser) in &self.scene_parsers {
            log::debug!("Dispatching scene parser '{name}'");
            parser(data, scene, container, root_url)?;
        }
        Ok(())
    }

    /// Registered whole-scene parser names, in registration order.
    pub fn parser_names(&self) -> impl Iterator<Item = &str> {
        self.scene_parsers.keys().map(String::as_str)
    }

    /// Registered individual parser names, in registration order.
    pub fn individual_parser_names(&self) -> impl Iterator<Item = &str> {
        self.individual_parsers.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scene_parsers.is_empty() && self.individual_parsers.is_empty()
    }
}
