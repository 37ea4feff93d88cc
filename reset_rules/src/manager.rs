use crate::{EpisodeStatus, ResetError, ResetRule, Rule, StateSnapshot};
use tracing::debug;

/// Evaluates an ordered list of reset rules and settles on one status per
/// step.
///
/// Registration order is precedence order: when several rules hold at the
/// same step, the one added first wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleManager {
    rules: Vec<Rule>,
}

impl RuleManager {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }
    pub fn add(&mut self, rule: impl Into<Rule>) {
        self.rules.push(rule.into());
    }
    pub fn len(&self) -> usize {
        self.rules.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
    pub fn statuses(&self) -> impl Iterator<Item = EpisodeStatus> + '_ {
        self.rules.iter().map(Rule::status)
    }
    pub fn evaluate(&self, snapshot: &StateSnapshot) -> Result<EpisodeStatus, ResetError> {
        // every rule runs, even after one holds, so that a missing field
        // surfaces on the step it goes missing
        let outcomes = self
            .rules
            .iter()
            .map(|rule| rule.evaluate(snapshot).map(|holds| (rule, holds)))
            .collect::<Result<Vec<_>, ResetError>>()?;
        let mut holding = outcomes
            .into_iter()
            .filter_map(|(rule, holds)| holds.then_some(rule));
        let Some(winner) = holding.next() else {
            return Ok(EpisodeStatus::InProgress);
        };
        let suppressed: Vec<&'static str> = holding.map(Rule::name).collect();
        if !suppressed.is_empty() {
            debug!(
                winner = winner.name(),
                ?suppressed,
                "several reset rules hold, keeping the first registered"
            );
        }
        Ok(winner.status())
    }
}
