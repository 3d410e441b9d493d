// src/theme/palette.rs — Custom palette slots and color quantization

use serde::{Deserialize, Serialize};

/// User-chosen colors for the six custom-theme slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPalette {
    pub background: String,
    pub text: String,
    pub border: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Fallback token for colors outside the quantization table.
pub const FALLBACK_TOKEN: &str = "gray-500";

// Exact-match table from hex color to utility token. Surface slots are
// weighted to the slate ramp; accents cover violet/indigo/cyan.
const QUANTIZE_TABLE: &[(&str, &str)] = &[
    ("#0f172a", "slate-900"),
    ("#1e293b", "slate-800"),
    ("#334155", "slate-700"),
    ("#475569", "slate-600"),
    ("#64748b", "slate-500"),
    ("#94a3b8", "slate-400"),
    ("#cbd5e1", "slate-300"),
    ("#e2e8f0", "slate-200"),
    ("#f1f5f9", "slate-100"),
    ("#f8fafc", "slate-50"),
    ("#7c3aed", "violet-600"),
    ("#6d28d9", "violet-700"),
    ("#4f46e5", "indigo-600"),
    ("#4338ca", "indigo-700"),
    ("#06b6d4", "cyan-500"),
    ("#0891b2", "cyan-600"),
];

/// Map a color value to the nearest palette token.
///
/// Exact match only: unknown colors quantize to the generic neutral
/// fallback, never to an interpolated neighbor.
pub fn quantize(color: &str) -> &'static str {
    let needle = color.trim().to_lowercase();
    QUANTIZE_TABLE
        .iter()
        .find(|(hex, _)| *hex == needle)
        .map(|(_, token)| *token)
        .unwrap_or(FALLBACK_TOKEN)
}
