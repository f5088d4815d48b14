//! Outcome of a generation run.

use crate::routes::RouteDescriptor;

/// What happened to one selected model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Route files rendered (and written unless dry run).
    Generated,
    /// Route files existed and skip-existing was requested.
    Skipped,
    /// Route files existed and neither force nor skip-existing was requested.
    Conflicted,
    /// Documentation carries `@rest-skip`.
    Excluded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityOutcome {
    pub entity: String,
    pub outcome: Outcome,
}

/// Per-model outcomes in processing order, plus what was produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub entities: Vec<EntityOutcome>,
    /// Routes of generated models.
    pub routes: Vec<RouteDescriptor>,
    /// Route files produced, relative to the output root.
    pub files: Vec<String>,
    /// Files were rendered but not written.
    pub dry_run: bool,
}

impl GenerateReport {
    pub(crate) fn record(&mut self, entity: &str, outcome: Outcome) {
        self.entities.push(EntityOutcome {
            entity: entity.to_string(),
            outcome,
        });
    }

    fn with_outcome(&self, outcome: Outcome) -> impl Iterator<Item = &str> {
        self.entities
            .iter()
            .filter(move |e| e.outcome == outcome)
            .map(|e| e.entity.as_str())
    }

    pub fn generated_count(&self) -> usize {
        self.with_outcome(Outcome::Generated).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.with_outcome(Outcome::Skipped).count()
    }

    /// Models left untouched because their files already existed.
    pub fn conflicted(&self) -> Vec<&str> {
        self.with_outcome(Outcome::Conflicted).collect()
    }

    /// Models excluded by a documentation directive.
    pub fn excluded(&self) -> Vec<&str> {
        self.with_outcome(Outcome::Excluded).collect()
    }

    pub fn has_conflicts(&self) -> bool {
        self.with_outcome(Outcome::Conflicted).next().is_some()
    }
}
