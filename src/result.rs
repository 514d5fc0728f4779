use crate::annotate::{annotate, AnnotatedStep};
use crate::config::Config;
use crate::error::CzResult;
use crate::sequence::generate_with;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SequenceResult {
    pub steps: Vec<AnnotatedStep>,
    pub start: u64,
    pub max: u64,
    pub spread: u64,
}

/// Plot-ready series: x is the step index, y the value, text the hover label.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub x: Vec<usize>,
    pub y: Vec<u64>,
    pub text: Vec<String>,
    pub mode: &'static str,
}

impl SequenceResult {
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.steps.iter().map(|s| s.value)
    }

    pub fn summary(&self) -> [(&'static str, u64); 3] {
        [
            ("Starting", self.start),
            ("Max", self.max),
            ("Difference", self.spread),
        ]
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            x: self.steps.iter().map(|s| s.iteration).collect(),
            y: self.values().collect(),
            text: self.steps.iter().map(|s| s.display_text.clone()).collect(),
            mode: "lines+markers",
        }
    }
}

/// Generates, annotates and summarises the trajectory of `start`.
pub fn compute(start: u64, config: &Config) -> CzResult<SequenceResult> {
    let trajectory = generate_with(start, &config.generator)?;
    let steps = annotate(&trajectory.values, &config.display);

    let result = SequenceResult {
        steps,
        start: trajectory.start(),
        max: trajectory.max,
        spread: trajectory.max - trajectory.start(),
    };
    debug!(
        start = result.start,
        max = result.max,
        spread = result.spread,
        steps = result.steps.len(),
        "computed sequence result"
    );
    Ok(result)
}
