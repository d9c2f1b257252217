//! Ethics scenario session: multiple-choice questions whose choices are
//! reshuffled every time a scenario loads.

use std::sync::Arc;

use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::{EthicsChoice, EthicsScenario};
use crate::error::GameError;
use crate::session::StepProgress;
use crate::shuffle::{shuffled_indexed, Indexed};

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
  Great,
  ThinkDeeper,
  NotQuite,
}

impl Verdict {
  pub fn for_points(points: u32) -> Self {
    if points >= 75 {
      Verdict::Great
    } else if points == 0 {
      Verdict::NotQuite
    } else {
      Verdict::ThinkDeeper
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      Verdict::Great => "🎉 Great thinking!",
      Verdict::ThinkDeeper => "🤔 Think deeper...",
      Verdict::NotQuite => "❌ Not quite...",
    }
  }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceView {
  pub display_index: usize,
  pub text: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ScenarioView {
  #[serde(rename_all = "camelCase")]
  Completed { completed: bool, total_scenarios: usize },
  Scenario {
    title: String,
    description: String,
    question: String,
    choices: Vec<ChoiceView>,
    progress: StepProgress,
  },
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOutcome {
  pub scenario_index: usize,
  pub original_index: usize,
  pub points: u32,
  pub feedback: String,
  pub verdict: Verdict,
  pub title: String,
}

struct ActiveScenario {
  index: usize,
  choices: Vec<Indexed<EthicsChoice>>,
  answered: bool,
}

pub struct EthicsSession {
  scenarios: Arc<Vec<EthicsScenario>>,
  rng: StdRng,
  active: Option<ActiveScenario>,
}

impl EthicsSession {
  pub fn new(scenarios: Arc<Vec<EthicsScenario>>, rng: StdRng) -> Self {
    Self { scenarios, rng, active: None }
  }

  pub fn reset(&mut self) {
    self.active = None;
  }

  /// Load scenario `index` with a fresh choice order.
  #[instrument(level = "debug", skip(self))]
  pub fn load_scenario(&mut self, index: usize) -> ScenarioView {
    let Some(scenario) = self.scenarios.get(index) else {
      self.active = None;
      return ScenarioView::Completed { completed: true, total_scenarios: self.scenarios.len() };
    };

    let choices = shuffled_indexed(&scenario.choices, &mut self.rng);
    let views = choices
      .iter()
      .enumerate()
      .map(|(display_index, c)| ChoiceView { display_index, text: c.item.text.clone() })
      .collect();
    debug!(target: "session", scenario = index, order = ?choices.iter().map(|c| c.original_index).collect::<Vec<_>>(), "Scenario loaded");

    let view = ScenarioView::Scenario {
      title: scenario.title.clone(),
      description: scenario.description.clone(),
      question: scenario.question.clone(),
      choices: views,
      progress: StepProgress { current: index + 1, total: self.scenarios.len() },
    };
    self.active = Some(ActiveScenario { index, choices, answered: false });
    view
  }

  /// Resolve a displayed choice back to its canonical choice. One answer per load.
  pub fn select_choice(&mut self, display_index: usize) -> Result<ChoiceOutcome, GameError> {
    let active = self.active.as_mut().ok_or(GameError::NoActiveScenario)?;
    if active.answered {
      return Err(GameError::AlreadyAnswered);
    }
    let picked = active.choices.get(display_index).ok_or(GameError::UnknownChoice(display_index))?;
    active.answered = true;

    let verdict = Verdict::for_points(picked.item.points);
    Ok(ChoiceOutcome {
      scenario_index: active.index,
      original_index: picked.original_index,
      points: picked.item.points,
      feedback: picked.item.feedback.clone(),
      verdict,
      title: verdict.title().to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seeds::seed_scenarios;
  use rand::SeedableRng;

  fn session(seed: u64) -> EthicsSession {
    EthicsSession::new(Arc::new(seed_scenarios()), StdRng::seed_from_u64(seed))
  }

  fn displayed(view: &ScenarioView) -> Vec<String> {
    match view {
      ScenarioView::Scenario { choices, .. } => choices.iter().map(|c| c.text.clone()).collect(),
      ScenarioView::Completed { .. } => panic!("expected a scenario"),
    }
  }

  #[test]
  fn every_displayed_choice_resolves_to_its_canonical_feedback() {
    let canonical = seed_scenarios();
    for display_index in 0..4 {
      let mut s = session(display_index as u64);
      let view = s.load_scenario(1);
      let text = displayed(&view)[display_index].clone();
      let outcome = s.select_choice(display_index).unwrap();
      let expected = &canonical[1].choices[outcome.original_index];
      assert_eq!(expected.text, text);
      assert_eq!(expected.points, outcome.points);
      assert_eq!(expected.feedback, outcome.feedback);
    }
  }

  #[test]
  fn choice_order_varies_across_loads() {
    let mut s = session(21);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..30 {
      seen.insert(displayed(&s.load_scenario(0)));
    }
    assert!(seen.len() >= 2);
  }

  #[test]
  fn displayed_choices_are_a_permutation() {
    let mut s = session(4);
    let mut shown = displayed(&s.load_scenario(3));
    let mut canonical: Vec<String> = seed_scenarios()[3].choices.iter().map(|c| c.text.clone()).collect();
    shown.sort();
    canonical.sort();
    assert_eq!(shown, canonical);
  }

  #[test]
  fn verdict_tiers() {
    assert_eq!(Verdict::for_points(100), Verdict::Great);
    assert_eq!(Verdict::for_points(75), Verdict::Great);
    assert_eq!(Verdict::for_points(50), Verdict::ThinkDeeper);
    assert_eq!(Verdict::for_points(10), Verdict::ThinkDeeper);
    assert_eq!(Verdict::for_points(0), Verdict::NotQuite);
  }

  #[test]
  fn one_answer_per_load() {
    let mut s = session(2);
    assert_eq!(s.select_choice(0), Err(GameError::NoActiveScenario));
    s.load_scenario(0);
    assert_eq!(s.select_choice(7), Err(GameError::UnknownChoice(7)));
    assert!(s.select_choice(0).is_ok());
    assert_eq!(s.select_choice(1), Err(GameError::AlreadyAnswered));
    s.load_scenario(0);
    assert!(s.select_choice(1).is_ok());
  }

  #[test]
  fn past_the_end_completes() {
    let mut s = session(0);
    assert_eq!(s.load_scenario(5), ScenarioView::Completed { completed: true, total_scenarios: 5 });
    assert_eq!(s.select_choice(0), Err(GameError::NoActiveScenario));
  }
}
