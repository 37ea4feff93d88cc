use serde::{Deserialize, Serialize};

/// Simulation state available at the instant a step is evaluated.
///
/// Every field is optional: the backend fills in what it has and each rule
/// reports the fields it cannot do without. Histories are ordered oldest
/// first, so the last element belongs to the current step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateSnapshot {
    pub agent_name: Option<String>,
    pub collided: Option<bool>,
    pub collision_agent: Option<String>,
    pub all_wheels_off_track: Option<bool>,
    pub position: Option<(f64, f64)>,
    pub heading: Option<f64>,
    pub position_history: Option<Vec<(f64, f64)>>,
    // (agent heading, track heading at the closest waypoint), in radians
    pub heading_history: Option<Vec<(f64, f64)>>,
    pub is_paused: Option<bool>,
    pub progress: Option<f64>,
    pub trial: Option<u32>,
    pub elapsed_secs: Option<f64>,
}

impl StateSnapshot {
    pub fn with_agent_name(mut self, agent_name: impl Into<String>) -> Self {
        self.agent_name = Some(agent_name.into());
        self
    }
    pub fn with_collision(mut self, collided: bool, collision_agent: Option<&str>) -> Self {
        self.collided = Some(collided);
        self.collision_agent = collision_agent.map(str::to_owned);
        self
    }
    pub fn with_all_wheels_off_track(mut self, off_track: bool) -> Self {
        self.all_wheels_off_track = Some(off_track);
        self
    }
    pub fn with_pose(mut self, position: (f64, f64), heading: f64) -> Self {
        self.position = Some(position);
        self.heading = Some(heading);
        self
    }
    pub fn with_position_history(mut self, history: Vec<(f64, f64)>) -> Self {
        self.position_history = Some(history);
        self
    }
    pub fn with_heading_history(mut self, history: Vec<(f64, f64)>) -> Self {
        self.heading_history = Some(history);
        self
    }
    pub fn with_paused(mut self, is_paused: bool) -> Self {
        self.is_paused = Some(is_paused);
        self
    }
    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = Some(progress);
        self
    }
    pub fn with_trial(mut self, trial: u32) -> Self {
        self.trial = Some(trial);
        self
    }
    pub fn with_elapsed_secs(mut self, elapsed_secs: f64) -> Self {
        self.elapsed_secs = Some(elapsed_secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_json_fields_stay_absent() {
        let snapshot: StateSnapshot =
            serde_json::from_str(r#"{"progress": 42.5, "trial": 2}"#).unwrap();
        assert_eq!(
            snapshot,
            StateSnapshot::default().with_progress(42.5).with_trial(2)
        );
        assert_eq!(snapshot.collided, None);
        assert_eq!(snapshot.position_history, None);
    }

    #[test]
    fn histories_parse_as_pairs() {
        let snapshot: StateSnapshot = serde_json::from_str(
            r#"{"position_history": [[0.0, 1.0], [0.5, 1.0]], "heading_history": [[3.1, 0.0]]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.position_history, Some(vec![(0.0, 1.0), (0.5, 1.0)]));
        assert_eq!(snapshot.heading_history, Some(vec![(3.1, 0.0)]));
    }
}
