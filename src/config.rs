use crate::format::LineBreak;
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub generator: GeneratorParams,
    #[command(flatten)]
    pub display: DisplayParams,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GeneratorParams {
    /// Abort a trajectory after this many transitions. Unbounded when omitted.
    #[arg(long)]
    pub max_steps: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct DisplayParams {
    /// Digit group separator for rendered numbers ("" disables grouping).
    #[arg(long, default_value = ",")]
    pub thousands_separator: String,

    #[arg(long, default_value_t = LineBreak::Newline)]
    pub line_break: LineBreak,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            thousands_separator: ",".to_string(),
            line_break: LineBreak::Newline,
        }
    }
}

impl DisplayParams {
    pub fn html() -> Self {
        Self {
            line_break: LineBreak::Html,
            ..Default::default()
        }
    }
}
