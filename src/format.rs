use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum LineBreak {
    #[default]
    Newline,
    Html,
}

impl LineBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newline => "\n",
            Self::Html => "<br>",
        }
    }
}

/// Renders `n` with `sep` between every group of three digits.
pub fn group_thousands(n: u128, sep: &str) -> String {
    let digits = n.to_string();
    if sep.is_empty() || digits.len() <= 3 {
        return digits;
    }

    let head = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + (digits.len() / 3) * sep.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - head) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(ch);
    }
    out
}
