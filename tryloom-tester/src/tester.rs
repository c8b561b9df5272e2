use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tryloom_core::{Catalog, Session};

use crate::scenarios::{ExpectationError, Scenario, check_invariants};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub steps: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

pub struct LogicTester<'a> {
    catalog: &'a Catalog,
    verbose: bool,
}

impl<'a> LogicTester<'a> {
    pub const fn new(catalog: &'a Catalog, verbose: bool) -> Self {
        Self { catalog, verbose }
    }

    pub fn run_scenario(&self, scenario: &Scenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.name.bright_white());
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::with_capacity(iterations);
        let mut first_outcome: Option<Session> = None;
        let mut steps = 0;

        for i in 0..iterations {
            let start_time = Instant::now();
            let outcome = self.replay(scenario).and_then(|(session, count)| {
                steps = count;
                match &first_outcome {
                    Some(first) if *first != session => {
                        Err(ExpectationError::Diverged { iteration: i + 1 })
                    }
                    Some(_) => Ok(()),
                    None => {
                        first_outcome = Some(session);
                        Ok(())
                    }
                }
            });
            performance_data.push(start_time.elapsed());

            match outcome {
                Ok(()) => successes += 1,
                Err(err) => {
                    log::debug!("{} iteration {} failed: {err:?}", scenario.name, i + 1);
                    if self.verbose {
                        println!(
                            "  ❌ Iteration {}/{} failed: {}",
                            i + 1,
                            iterations,
                            err.to_string().red()
                        );
                    }
                    failures.push(format!("Iteration {}: {err}", i + 1));
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            steps,
            failures,
            average_duration,
            performance_data,
        }
    }

    /// Replay the scenario from a fresh session, checking invariants after every step.
    fn replay(&self, scenario: &Scenario) -> Result<(Session, usize), ExpectationError> {
        let actions = (scenario.steps)(self.catalog)?;
        let count = actions.len();
        let mut session = Session::default();
        for (step, action) in actions.into_iter().enumerate() {
            let label = format!("{action:?}");
            session = session.reduce(self.catalog, action);
            check_invariants(&session, self.catalog).map_err(|detail| {
                ExpectationError::Invariant {
                    step: step + 1,
                    action: label,
                    detail,
                }
            })?;
        }
        (scenario.expect)(&session, self.catalog)?;
        Ok((session, count))
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(u64::MAX)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let micros: Vec<u128> = durations.iter().map(Duration::as_micros).collect();
        micros.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = Vec::<u128>::deserialize(deserializer)?;
        Ok(micros
            .into_iter()
            .map(|m| Duration::from_micros(u64::try_from(m).unwrap_or(u64::MAX)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::{Check, Steps, get_scenario};
    use tryloom_core::Action;

    #[test]
    fn smoke_scenario_passes_every_iteration() {
        let catalog = Catalog::load_from_static();
        let tester = LogicTester::new(&catalog, false);
        let scenario = get_scenario("smoke").expect("smoke exists");
        let result = tester.run_scenario(scenario, 3);
        assert!(result.passed, "{:?}", result.failures);
        assert_eq!(result.successful_iterations, 3);
        assert_eq!(result.performance_data.len(), 3);
        assert_eq!(result.steps, 1);
    }

    #[test]
    fn failing_expectation_is_reported_per_iteration() {
        fn steps(_: &Catalog) -> Steps {
            Ok(vec![Action::StartCamera])
        }
        fn expect(_: &Session, _: &Catalog) -> Check {
            Err(ExpectationError::Mismatch("always wrong".to_string()))
        }
        let scenario = Scenario {
            name: "broken",
            description: "never passes",
            steps,
            expect,
        };
        let catalog = Catalog::load_from_static();
        let result = LogicTester::new(&catalog, false).run_scenario(&scenario, 2);
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures.len(), 2);
        assert!(result.failures[0].contains("always wrong"));
    }

    #[test]
    fn zero_iterations_yield_zero_average() {
        let catalog = Catalog::load_from_static();
        let scenario = get_scenario("home-reset").expect("home-reset exists");
        let result = LogicTester::new(&catalog, false).run_scenario(scenario, 0);
        assert!(result.passed);
        assert_eq!(result.average_duration, Duration::ZERO);
    }

    #[test]
    fn result_serializes_durations_as_micros() {
        let result = ScenarioResult {
            scenario_name: "smoke".to_string(),
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            steps: 1,
            failures: Vec::new(),
            average_duration: Duration::from_micros(42),
            performance_data: vec![Duration::from_micros(42)],
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["average_duration"], 42);
        let back: ScenarioResult = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.performance_data, vec![Duration::from_micros(42)]);
    }
}
