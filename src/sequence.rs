use crate::config::GeneratorParams;
use crate::error::{CollatzError, CzResult};
use serde::Serialize;
use tracing::debug;

/// The raw trajectory visited from `start` down to 1 (or 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trajectory {
    pub values: Vec<u64>,
    pub max: u64,
}

impl Trajectory {
    pub fn start(&self) -> u64 {
        self.values[0]
    }

    pub fn last(&self) -> u64 {
        self.values[self.values.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of transitions applied.
    pub fn steps(&self) -> usize {
        self.values.len() - 1
    }
}

/// One Collatz transition. `None` when 3n+1 does not fit in a u64.
#[inline]
pub fn next_value(n: u64) -> Option<u64> {
    if n % 2 == 0 {
        Some(n / 2)
    } else {
        n.checked_mul(3)?.checked_add(1)
    }
}

/// Generates the full trajectory with no step bound.
pub fn generate(start: u64) -> CzResult<Trajectory> {
    generate_with(start, &GeneratorParams::default())
}

pub fn generate_with(start: u64, params: &GeneratorParams) -> CzResult<Trajectory> {
    let mut values = vec![start];
    let mut max = start;
    let mut n = start;

    while n != 0 && n != 1 {
        let step = values.len() - 1;
        if let Some(limit) = params.max_steps {
            if step >= limit {
                return Err(CollatzError::StepLimit { start, limit });
            }
        }

        n = next_value(n).ok_or(CollatzError::Overflow { value: n, step })?;
        values.push(n);

        if n > max {
            max = n;
        }
    }

    debug!(start, len = values.len(), max, "generated trajectory");
    Ok(Trajectory { values, max })
}
