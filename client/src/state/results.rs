//! Last evaluation and last idea batch, shared between the page that
//! requested them and the page that renders them.
//!
//! DESIGN
//! ======
//! The producing page writes the response into the `RwSignal<ResultsState>`
//! context and into `localStorage`, then navigates to `/.../{id}`. The
//! results page prefers the context value and falls back to the cache, so a
//! reload of the results URL still renders. Either source is only used when
//! its id matches the URL.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use crate::net::types::{EvaluationResponse, IdeaResponse};
use crate::util::storage;

pub const EVALUATION_CACHE_KEY: &str = "last_evaluation";
pub const IDEAS_CACHE_KEY: &str = "last_ideas";

/// Anything addressable by a results-page `:id`.
pub trait ResultId {
    fn result_id(&self) -> &str;
}

impl ResultId for EvaluationResponse {
    fn result_id(&self) -> &str {
        &self.id
    }
}

impl ResultId for IdeaResponse {
    fn result_id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default)]
pub struct ResultsState {
    pub evaluation: Option<EvaluationResponse>,
    pub ideas: Option<IdeaResponse>,
}

/// Pick the value to render for `requested` (the route `:id`, if any).
pub fn resolve<T: ResultId + Clone>(in_memory: Option<&T>, cached: Option<T>, requested: Option<&str>) -> Option<T> {
    let matches = |value: &T| requested.is_none_or(|id| value.result_id() == id);
    in_memory.filter(|v| matches(v)).cloned().or_else(|| cached.filter(|v| matches(v)))
}

/// With nothing to show and no id to look up, the page sends the user back
/// to the form that produces results.
pub fn should_return_to_form<T>(resolved: Option<&T>, requested: Option<&str>) -> bool {
    resolved.is_none() && requested.is_none_or(str::is_empty)
}

impl ResultsState {
    pub fn remember_evaluation(&mut self, evaluation: EvaluationResponse) {
        storage::save_json(EVALUATION_CACHE_KEY, &evaluation);
        self.evaluation = Some(evaluation);
    }

    pub fn remember_ideas(&mut self, ideas: IdeaResponse) {
        storage::save_json(IDEAS_CACHE_KEY, &ideas);
        self.ideas = Some(ideas);
    }

    #[must_use]
    pub fn evaluation_for(&self, requested: Option<&str>) -> Option<EvaluationResponse> {
        resolve(self.evaluation.as_ref(), storage::load_json(EVALUATION_CACHE_KEY), requested)
    }

    #[must_use]
    pub fn ideas_for(&self, requested: Option<&str>) -> Option<IdeaResponse> {
        resolve(self.ideas.as_ref(), storage::load_json(IDEAS_CACHE_KEY), requested)
    }
}
