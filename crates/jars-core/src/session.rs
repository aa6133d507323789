//! Single owner of the engine state for one interactive session.

use jars_domain::{Configuration, JarsState, Summary, DEFAULT_STATE};

use crate::{apply, apply_all, CoreError, Intent, RawIntent, Validator};

/// Holds the one [`JarsState`] of a session and is its only writer.
///
/// Collaborators read through [`JarsSession::state`] and change it through
/// intents. The stored state is replaced only by a successful transition, so
/// readers never observe a half-applied intent.
#[derive(Debug, Clone)]
pub struct JarsSession {
    state: JarsState,
    applied: usize,
}

impl Default for JarsSession {
    fn default() -> Self {
        Self::new()
    }
}

impl JarsSession {
    pub fn new() -> Self {
        Self::with_state(DEFAULT_STATE)
    }

    pub fn with_state(state: JarsState) -> Self {
        Self { state, applied: 0 }
    }

    pub fn state(&self) -> &JarsState {
        &self.state
    }

    pub fn config(&self) -> &Configuration {
        &self.state.config
    }

    pub fn summary(&self) -> &Summary {
        &self.state.summary
    }

    /// Number of intents applied successfully since the session started.
    pub fn applied_count(&self) -> usize {
        self.applied
    }

    /// Applies one intent. On failure the stored state is left untouched.
    pub fn dispatch(&mut self, intent: Intent) -> Result<&JarsState, CoreError> {
        match apply(&self.state, intent) {
            Ok(next) => {
                tracing::debug!(intent = %intent, "applied intent");
                self.commit(next, 1);
                Ok(&self.state)
            }
            Err(err) => {
                tracing::warn!(intent = %intent, error = %err, "rejected intent");
                Err(err)
            }
        }
    }

    /// Decodes a tagged intent and applies it.
    pub fn dispatch_raw(&mut self, raw: RawIntent) -> Result<&JarsState, CoreError> {
        let intent = Intent::try_from(raw).map_err(|err| {
            tracing::warn!(error = %err, "could not decode intent");
            err
        })?;
        self.dispatch(intent)
    }

    /// Applies `intent` followed by a recompute as one logical step: either
    /// both land or neither does.
    pub fn set_and_recompute(&mut self, intent: Intent) -> Result<&JarsState, CoreError> {
        let changed = apply(&self.state, intent).map_err(|err| {
            tracing::warn!(intent = %intent, error = %err, "rejected intent");
            err
        })?;
        let derived = apply(&changed, Intent::Recompute)?;
        tracing::debug!(
            intent = %intent,
            total = derived.summary.total,
            "applied intent and recomputed"
        );
        self.commit(derived, 2);
        Ok(&self.state)
    }

    /// Runs `intent` through the validator and, when it passes, applies it
    /// together with a recompute.
    pub fn submit(
        &mut self,
        validator: &Validator,
        intent: Intent,
    ) -> Result<&JarsState, CoreError> {
        if let Err(failed) = validator.check_intent(&self.state.config, &intent) {
            tracing::warn!(intent = %intent, error = %failed, "intent failed validation");
            return Err(failed.into());
        }
        self.set_and_recompute(intent)
    }

    /// Applies several intents and one trailing recompute atomically.
    pub fn submit_all(&mut self, intents: &[Intent]) -> Result<&JarsState, CoreError> {
        let trailing = std::iter::once(Intent::Recompute);
        let next = apply_all(&self.state, intents.iter().copied().chain(trailing))?;
        self.commit(next, intents.len() + 1);
        Ok(&self.state)
    }

    pub fn recompute(&mut self) -> Result<&Summary, CoreError> {
        self.dispatch(Intent::Recompute).map(|state| &state.summary)
    }

    pub fn reset(&mut self) -> Result<&JarsState, CoreError> {
        self.dispatch(Intent::Reset)
    }

    fn commit(&mut self, next: JarsState, intents: usize) {
        self.state = next;
        self.applied += intents;
    }
}
