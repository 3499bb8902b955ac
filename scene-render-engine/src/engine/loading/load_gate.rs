use crate::error::{SceneError, SceneResult};

#[derive(Debug, Clone, PartialEq)]
pub enum AssetStatus {
    Pending,
    Loaded,
    Failed(String),
}

/// Result of reporting a loaded asset to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateProgress {
    Waiting { loaded: usize, total: usize },
    /// Returned once, by the report that completed the set.
    Completed,
    AlreadyCompleted,
}

/// Joins a fixed set of named asset loads. Completion is reported exactly once,
/// whatever order the loads finish in; a single failure closes the gate for good.
#[derive(Debug, Default, Clone)]
pub struct LoadGate {
    assets: Vec<(String, AssetStatus)>,
    fired: bool,
}

impl LoadGate {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            assets: names
                .into_iter()
                .map(|name| (name.into(), AssetStatus::Pending))
                .collect(),
            fired: false,
        }
    }

    pub fn total(&self) -> usize {
        self.assets.len()
    }

    pub fn loaded(&self) -> usize {
        self.assets
            .iter()
            .filter(|(_, status)| *status == AssetStatus::Loaded)
            .count()
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// First recorded failure, if any.
    pub fn failure(&self) -> Option<SceneError> {
        self.assets.iter().find_map(|(name, status)| match status {
            AssetStatus::Failed(reason) => Some(SceneError::asset_load(name.clone(), reason)),
            _ => None,
        })
    }

    pub fn mark_loaded(&mut self, name: &str) -> SceneResult<GateProgress> {
        if let Some(error) = self.failure() {
            return Err(error);
        }

        let status = self.status_mut(name)?;
        *status = AssetStatus::Loaded;

        let loaded = self.loaded();
        let total = self.total();
        if loaded < total {
            return Ok(GateProgress::Waiting { loaded, total });
        }

        if self.fired {
            Ok(GateProgress::AlreadyCompleted)
        } else {
            self.fired = true;
            Ok(GateProgress::Completed)
        }
    }

    /// Record a failed load and return the error to surface.
    pub fn mark_failed(&mut self, name: &str, reason: impl ToString) -> SceneError {
        let reason = reason.to_string();
        match self.status_mut(name) {
            Ok(status) => {
                *status = AssetStatus::Failed(reason.clone());
                SceneError::asset_load(name, reason)
            }
            Err(error) => error,
        }
    }

    /// Per-asset progress as (name, 0/1) pairs for the frontend.
    pub fn progress_states(&self) -> Vec<(String, i32)> {
        self.assets
            .iter()
            .map(|(name, status)| (name.clone(), i32::from(*status == AssetStatus::Loaded)))
            .collect()
    }

    fn status_mut(&mut self, name: &str) -> SceneResult<&mut AssetStatus> {
        self.assets
            .iter_mut()
            .find(|(asset, _)| asset == name)
            .map(|(_, status)| status)
            .ok_or_else(|| SceneError::UnknownAsset(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions(gate: &mut LoadGate, order: &[&str]) -> usize {
        order
            .iter()
            .map(|name| gate.mark_loaded(name).unwrap())
            .filter(|progress| *progress == GateProgress::Completed)
            .count()
    }

    #[test]
    fn test_fires_once_in_either_order() {
        for order in [["tree", "rocket"], ["rocket", "tree"]] {
            let mut gate = LoadGate::new(["tree", "rocket"]);
            assert_eq!(completions(&mut gate, &order), 1);
            assert!(gate.has_fired());
        }
    }

    #[test]
    fn test_waits_until_every_asset_loaded() {
        let mut gate = LoadGate::new(["tree", "rocket"]);
        assert_eq!(
            gate.mark_loaded("tree").unwrap(),
            GateProgress::Waiting {
                loaded: 1,
                total: 2
            }
        );
        assert!(!gate.has_fired());

        // Reporting the same asset again does not advance the gate.
        assert_eq!(
            gate.mark_loaded("tree").unwrap(),
            GateProgress::Waiting {
                loaded: 1,
                total: 2
            }
        );
    }

    #[test]
    fn test_repeated_reports_after_completion_do_not_refire() {
        let mut gate = LoadGate::new(["tree", "rocket"]);
        assert_eq!(completions(&mut gate, &["tree", "rocket"]), 1);
        assert_eq!(
            gate.mark_loaded("rocket").unwrap(),
            GateProgress::AlreadyCompleted
        );
        assert_eq!(completions(&mut gate, &["tree", "rocket"]), 0);
    }

    #[test]
    fn test_failure_closes_gate() {
        let mut gate = LoadGate::new(["tree", "rocket"]);
        gate.mark_loaded("tree").unwrap();

        let error = gate.mark_failed("rocket", "404");
        assert_eq!(
            error,
            SceneError::AssetLoad {
                asset: "rocket".to_string(),
                reason: "404".to_string()
            }
        );
        assert!(gate.mark_loaded("tree").is_err());
        assert!(!gate.has_fired());
        assert_eq!(gate.failure(), Some(error));
    }

    #[test]
    fn test_unknown_asset_is_rejected() {
        let mut gate = LoadGate::new(["tree"]);
        assert_eq!(
            gate.mark_loaded("house"),
            Err(SceneError::UnknownAsset("house".to_string()))
        );
        assert!(matches!(
            gate.mark_failed("house", "missing"),
            SceneError::UnknownAsset(_)
        ));
    }

    #[test]
    fn test_progress_states_follow_loads() {
        let mut gate = LoadGate::new(["tree", "rocket"]);
        gate.mark_loaded("rocket").unwrap();
        assert_eq!(
            gate.progress_states(),
            vec![("tree".to_string(), 0), ("rocket".to_string(), 1)]
        );
    }
}
