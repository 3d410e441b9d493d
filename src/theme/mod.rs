// src/theme/mod.rs — Theme rewriting over utility-class tokens
//
// Pattern substitution, not parsing. Generated source uses a small closed
// vocabulary of utility tokens (the generator is instructed to), so the
// rewriter holds per-role token tables and swaps whole tokens. All role
// substitutions for a theme run as ONE combined-alternation pass computed
// against the original text; together with the table invariants in tokens.rs
// this makes role order irrelevant and named-theme application idempotent.

pub mod palette;
pub mod tokens;

use regex::{Captures, Regex};
use std::sync::OnceLock;

pub use palette::CustomPalette;
use tokens::{custom_targets, Rule, CUSTOM_PATTERNS, DARK_RULES, LIGHT_RULES};

/// Theme modes. Unknown names are not an error — they leave input unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    Custom,
}

impl Theme {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

static LIGHT_REGEX: OnceLock<Regex> = OnceLock::new();
static DARK_REGEX: OnceLock<Regex> = OnceLock::new();
static CUSTOM_REGEX: OnceLock<Regex> = OnceLock::new();

/// Join rule patterns into one alternation, each alternative in its own
/// capture group so the replacement closure can tell which rule fired.
fn combine(patterns: &[&str]) -> Regex {
    let joined = patterns
        .iter()
        .map(|p| format!("({p})"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&joined).expect("theme token alternation")
}

fn named_regex(rules: &'static [Rule], cell: &'static OnceLock<Regex>) -> &'static Regex {
    cell.get_or_init(|| combine(&rules.iter().map(|r| r.pattern).collect::<Vec<_>>()))
}

fn custom_regex() -> &'static Regex {
    CUSTOM_REGEX
        .get_or_init(|| combine(&CUSTOM_PATTERNS.iter().map(|(_, p)| *p).collect::<Vec<_>>()))
}

/// Single-pass substitution: every match resolves to the target of the rule
/// whose group matched. Targets are indexed in rule order.
fn rewrite(source: &str, regex: &Regex, targets: &[&str]) -> String {
    regex
        .replace_all(source, |caps: &Captures| {
            (1..=targets.len())
                .find(|&i| caps.get(i).is_some())
                .map(|i| targets[i - 1].to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Rewrite utility-class tokens in `source` to match the requested theme.
///
/// Failure semantics: unknown theme name returns the input unchanged, as
/// does `custom` without a palette; empty source returns the empty string.
/// Never fails.
pub fn apply_theme(source: &str, theme_name: &str, palette: Option<&CustomPalette>) -> String {
    if source.is_empty() {
        return String::new();
    }

    match Theme::parse(theme_name) {
        Some(Theme::Light) => {
            let targets: Vec<&str> = LIGHT_RULES.iter().map(|r| r.target).collect();
            rewrite(source, named_regex(LIGHT_RULES, &LIGHT_REGEX), &targets)
        }
        Some(Theme::Dark) => {
            let targets: Vec<&str> = DARK_RULES.iter().map(|r| r.target).collect();
            rewrite(source, named_regex(DARK_RULES, &DARK_REGEX), &targets)
        }
        Some(Theme::Custom) => match palette {
            Some(p) => {
                let owned = custom_targets(p);
                let targets: Vec<&str> = owned.iter().map(String::as_str).collect();
                rewrite(source, custom_regex(), &targets)
            }
            None => source.to_string(),
        },
        None => source.to_string(),
    }
}
