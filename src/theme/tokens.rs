// src/theme/tokens.rs — Role token tables for the named and custom themes
//
// Each table row is (role, source pattern, target token). Invariants the
// tables must keep, per theme:
//   - no two roles match the same source token (shade bands are disjoint);
//   - no target token is matched by any role's source pattern, so
//     re-applying a named theme is a no-op;
//   - prefixed tokens (hover:/focus:) are listed as whole tokens so a bare
//     background rule never re-matches their suffix within the pass.
// The named themes are each other's inverse: light's targets are dark's
// sources role-for-role, and vice versa.

use super::palette::{quantize, CustomPalette};

/// One substitution rule: every source token the pattern matches collapses
/// to the single target token.
pub struct Rule {
    pub role: &'static str,
    pub pattern: &'static str,
    pub target: &'static str,
}

/// Dark-vocabulary sources → light targets.
pub const LIGHT_RULES: &[Rule] = &[
    Rule {
        role: "hover-background",
        pattern: "hover:bg-(?:gray|slate|zinc|neutral|stone)-800",
        target: "hover:bg-gray-100",
    },
    Rule {
        role: "background",
        pattern: "bg-(?:gray|slate|zinc|neutral|stone)-900",
        target: "bg-white",
    },
    Rule {
        role: "card-background",
        pattern: "bg-(?:gray|slate|zinc|neutral|stone)-800",
        target: "bg-gray-50",
    },
    Rule {
        role: "input-background",
        pattern: "bg-(?:gray|slate|zinc|neutral|stone)-700",
        target: "bg-gray-100",
    },
    Rule {
        role: "text",
        pattern: "text-(?:gray|slate|zinc|neutral|stone)-100",
        target: "text-gray-900",
    },
    Rule {
        role: "border",
        pattern: "border-(?:gray|slate|zinc|neutral|stone)-700",
        target: "border-gray-200",
    },
    Rule {
        role: "primary-button-background",
        pattern: "bg-(?:violet|indigo|purple)-600",
        target: "bg-blue-600",
    },
    Rule {
        role: "heading-accent",
        pattern: "text-(?:violet|indigo|purple)-400",
        target: "text-blue-600",
    },
];

/// Light-vocabulary sources → dark targets.
pub const DARK_RULES: &[Rule] = &[
    Rule {
        role: "hover-background",
        pattern: "hover:bg-(?:gray|slate|zinc|neutral|stone)-100",
        target: "hover:bg-gray-800",
    },
    Rule {
        role: "background",
        pattern: "bg-white",
        target: "bg-gray-900",
    },
    Rule {
        role: "card-background",
        pattern: "bg-(?:gray|slate|zinc|neutral|stone)-50",
        target: "bg-gray-800",
    },
    Rule {
        role: "input-background",
        pattern: "bg-(?:gray|slate|zinc|neutral|stone)-100",
        target: "bg-gray-700",
    },
    Rule {
        role: "text",
        pattern: "text-(?:gray|slate|zinc|neutral|stone)-900",
        target: "text-gray-100",
    },
    Rule {
        role: "border",
        pattern: "border-(?:gray|slate|zinc|neutral|stone)-200",
        target: "border-gray-700",
    },
    Rule {
        role: "primary-button-background",
        pattern: "bg-(?:blue|indigo|sky)-600",
        target: "bg-violet-600",
    },
    Rule {
        role: "heading-accent",
        pattern: "text-(?:blue|indigo|sky)-600",
        target: "text-violet-400",
    },
];

/// Custom-theme source patterns, matching both named vocabularies. Targets
/// depend on the palette, so only the patterns are static; pattern order
/// here must line up with the targets from [`custom_targets`].
pub const CUSTOM_PATTERNS: &[(&str, &str)] = &[
    (
        "focus-ring-accent",
        "focus:ring-(?:blue|violet|indigo|purple|sky|cyan)-[0-9]+",
    ),
    (
        "focus-border-accent",
        "focus:border-(?:blue|violet|indigo|purple|sky|cyan)-[0-9]+",
    ),
    (
        "hover-secondary",
        "hover:bg-(?:blue|violet|indigo|purple|sky|cyan)-[0-9]+",
    ),
    (
        "hover-text",
        "hover:text-(?:blue|violet|indigo|purple|sky|cyan)-[0-9]+",
    ),
    (
        "hover-background",
        "hover:bg-(?:gray|slate|zinc|neutral|stone)-(?:100|800)",
    ),
    ("background", "bg-white|bg-(?:gray|slate|zinc|neutral|stone)-900"),
    ("card-background", "bg-(?:gray|slate|zinc|neutral|stone)-(?:50|800)"),
    ("input-background", "bg-(?:gray|slate|zinc|neutral|stone)-(?:100|700)"),
    ("text", "text-(?:gray|slate|zinc|neutral|stone)-(?:100|900)"),
    ("border", "border-(?:gray|slate|zinc|neutral|stone)-(?:200|700)"),
    ("primary-button-background", "bg-(?:blue|violet|indigo|purple|sky)-600"),
    ("heading-accent", "text-(?:blue|violet|indigo|purple|sky)-(?:400|600)"),
];

/// Target tokens for [`CUSTOM_PATTERNS`], one per pattern, in order.
/// Hover variants carry an opacity suffix on the mapped background token.
pub fn custom_targets(palette: &CustomPalette) -> Vec<String> {
    let background = quantize(&palette.background);
    let text = quantize(&palette.text);
    let border = quantize(&palette.border);
    let primary = quantize(&palette.primary);
    let secondary = quantize(&palette.secondary);
    let accent = quantize(&palette.accent);

    vec![
        format!("focus:ring-{accent}"),
        format!("focus:border-{accent}"),
        format!("hover:bg-{secondary}"),
        format!("hover:text-{primary}"),
        format!("hover:bg-{background}/80"),
        format!("bg-{background}"),
        format!("bg-{background}"),
        format!("bg-{background}"),
        format!("text-{text}"),
        format!("border-{border}"),
        format!("bg-{primary}"),
        format!("text-{primary}"),
    ]
}
