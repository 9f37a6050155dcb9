use super::model::{PresentationVars, ResolvedPresentation};
use crate::shared::selection::StyleSelection;

/// Applied selection and its render values.
#[derive(Debug)]
pub(crate) struct PreviewState {
    applied: StyleSelection,
    vars: PresentationVars,
    resolved: ResolvedPresentation,
}

impl Default for PreviewState {
    fn default() -> Self {
        let applied = StyleSelection::default();
        let vars = PresentationVars::from_selection(&applied);
        Self {
            applied,
            vars,
            resolved: resolve(&vars),
        }
    }
}

impl PreviewState {
    pub(crate) fn applied(&self) -> StyleSelection {
        self.applied
    }

    pub(crate) fn vars(&self) -> &PresentationVars {
        &self.vars
    }

    pub(crate) fn resolved(&self) -> &ResolvedPresentation {
        &self.resolved
    }

    /// Replace the applied selection and recompute render values.
    pub(crate) fn apply(&mut self, selection: StyleSelection) {
        self.applied = selection;
        self.vars = PresentationVars::from_selection(&selection);
        self.resolved = resolve(&self.vars);
    }
}

fn resolve(vars: &PresentationVars) -> ResolvedPresentation {
    match ResolvedPresentation::try_from(vars) {
        Ok(resolved) => resolved,
        Err(err) => {
            log::warn!("presentation fallback to defaults: {err}");
            ResolvedPresentation::default()
        },
    }
}
