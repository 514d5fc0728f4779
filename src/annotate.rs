use crate::config::DisplayParams;
use crate::format::group_thousands;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Serialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(n: u64) -> Self {
        if n % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

/// A trajectory value annotated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedStep {
    pub iteration: usize,
    pub value: u64,
    pub previous_value: Option<u64>,
    pub is_even: bool,
    pub transition_description: String,
    pub display_text: String,
}

impl AnnotatedStep {
    pub fn parity(&self) -> Parity {
        Parity::of(self.value)
    }
}

/// Describes the rule that maps `n` to its successor.
pub fn describe_transition(n: u64, display: &DisplayParams) -> String {
    let sep = display.thousands_separator.as_str();
    let wide = n as u128;
    match Parity::of(n) {
        Parity::Even => format!(
            "Next Value = {} / 2 = {}",
            group_thousands(wide, sep),
            group_thousands(wide / 2, sep)
        ),
        Parity::Odd => format!(
            "Next Value = 3({}) + 1 = {}",
            group_thousands(wide, sep),
            group_thousands(3 * wide + 1, sep)
        ),
    }
}

fn render_display_text(
    iteration: usize,
    value: u64,
    previous: Option<u64>,
    parity: Parity,
    transition: &str,
    display: &DisplayParams,
) -> String {
    let sep = display.thousands_separator.as_str();
    let previous = previous
        .map(|p| group_thousands(p as u128, sep))
        .unwrap_or_else(|| "N/A".to_string());

    [
        format!("Iteration: {}", iteration),
        format!("Value: {}", group_thousands(value as u128, sep)),
        format!("Previous Value: {}", previous),
        format!("Number is: {}", parity),
        transition.to_string(),
    ]
    .join(display.line_break.as_str())
}

pub fn annotate(raw: &[u64], display: &DisplayParams) -> Vec<AnnotatedStep> {
    raw.iter()
        .enumerate()
        .map(|(i, &value)| {
            let previous_value = if i == 0 { None } else { Some(raw[i - 1]) };
            let parity = Parity::of(value);
            let transition_description = describe_transition(value, display);
            let display_text = render_display_text(
                i,
                value,
                previous_value,
                parity,
                &transition_description,
                display,
            );

            AnnotatedStep {
                iteration: i,
                value,
                previous_value,
                is_even: parity == Parity::Even,
                transition_description,
                display_text,
            }
        })
        .collect()
}
