use crate::config::GeneratorParams;
use crate::error::{CollatzError, CzResult};
use crate::sequence::generate_with;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VerifyFailure {
    pub start: u64,
    pub reason: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub from: u64,
    pub to: u64,
    pub reached_one: u64,
    pub failures: Vec<VerifyFailure>,
}

impl VerifyReport {
    pub fn checked(&self) -> u64 {
        self.to - self.from + 1
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Checks that every start in `from..=to` reaches 1 under `params`.
pub fn verify_range(from: u64, to: u64, params: &GeneratorParams) -> CzResult<VerifyReport> {
    if from == 0 || from > to {
        return Err(CollatzError::Config(format!(
            "verify range must satisfy 1 <= from <= to (got {}..={})",
            from, to
        )));
    }

    info!("Verifying starts {}..={}", from, to);

    let mut failures: Vec<VerifyFailure> = (from..=to)
        .into_par_iter()
        .filter_map(|start| match generate_with(start, params) {
            Ok(t) if t.last() == 1 => None,
            Ok(t) => Some(VerifyFailure {
                start,
                reason: format!("terminated at {}", t.last()),
            }),
            Err(e) => Some(VerifyFailure {
                start,
                reason: e.to_string(),
            }),
        })
        .collect();
    failures.sort_by_key(|f| f.start);

    if !failures.is_empty() {
        warn!("{} starts failed verification", failures.len());
    }

    Ok(VerifyReport {
        from,
        to,
        reached_one: (to - from + 1) - failures.len() as u64,
        failures,
    })
}
