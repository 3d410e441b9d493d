// src/codegen/assemble.rs — Assemble the output file set for a framework mode

use super::{FileMap, Framework};

/// Path of the primary file in plain-markup mode.
pub const PLAIN_ENTRY: &str = "index.html";

/// Path the primary component lands at in component modes.
pub const COMPONENT_ENTRY: &str = "src/App.jsx";

/// Bootstrap file the bundler uses as its build entry point.
pub const BOOTSTRAP_ENTRY: &str = "src/main.jsx";

// Fixed auxiliary files for component modes. Static templates pinned to
// known-good versions; regenerated on every assembly, never themed.
const MAIN_JSX: &str = include_str!("scaffold/main.jsx");
const INDEX_CSS: &str = include_str!("scaffold/index.css");
const INDEX_HTML: &str = include_str!("scaffold/index.html");
const VITE_CONFIG: &str = include_str!("scaffold/vite.config.js");
const TAILWIND_CONFIG: &str = include_str!("scaffold/tailwind.config.js");
const PACKAGE_JSON: &str = include_str!("scaffold/package.json");

/// Auxiliary paths present in every component-mode file set, in the order
/// they are inserted after the primary entry.
pub const AUXILIARY_FILES: &[(&str, &str)] = &[
    (BOOTSTRAP_ENTRY, MAIN_JSX),
    ("src/index.css", INDEX_CSS),
    ("tailwind.config.js", TAILWIND_CONFIG),
    ("index.html", INDEX_HTML),
    ("vite.config.js", VITE_CONFIG),
    ("package.json", PACKAGE_JSON),
];

/// Produce the full file set for the chosen output mode.
///
/// Pure function over its inputs; no filesystem access. Plain-markup mode is
/// exactly the primary file. Component modes place the primary content at the
/// component entry and add the fixed scaffold.
pub fn assemble(primary: &str, mode: Framework) -> FileMap {
    let mut files = FileMap::new();

    match mode {
        Framework::Tailwind => {
            files.insert(PLAIN_ENTRY.into(), primary.into());
        }
        Framework::React | Framework::Both => {
            files.insert(COMPONENT_ENTRY.into(), primary.into());
            for (path, content) in AUXILIARY_FILES {
                files.insert((*path).into(), (*content).into());
            }
        }
    }

    files
}
