// src/provider/mod.rs — Generative model layer

pub mod gemini;

use async_trait::async_trait;

use crate::codegen::Framework;
use crate::infra::errors::FusionError;

pub use gemini::GeminiClient;

/// Opaque generative call: prompt in, text out, fallible.
///
/// Single external round trip, no retries — the caller decides whether to
/// re-submit. Implementations carry their own request timeout so a stuck
/// upstream call cannot block other requests.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, FusionError>;
}

/// Shape a plain generation prompt: validate it and append the framework
/// vocabulary instruction so the model emits the expected token set.
pub fn shape_prompt(prompt: &str, framework: Framework) -> Result<String, FusionError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(FusionError::validation("a prompt is required"));
    }
    Ok(format!("{prompt} using {}", framework.prompt_vocabulary()))
}

/// Build the composite prompt for correction/modification operations.
///
/// The instruction is validated non-empty; the code is passed through
/// untouched, with no size limit enforced at this layer.
pub fn derived_prompt(instruction: &str, code: &str) -> Result<String, FusionError> {
    let instruction = instruction.trim();
    if instruction.is_empty() {
        return Err(FusionError::validation("instructions are required"));
    }
    Ok(format!(
        "{instruction} based on the following code:\n\n{code}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_prompt_appends_vocabulary() {
        let p = shape_prompt("design a login page", Framework::Both).unwrap();
        assert_eq!(p, "design a login page using React and Tailwind CSS");

        let p = shape_prompt("a navbar", Framework::Tailwind).unwrap();
        assert_eq!(p, "a navbar using Tailwind CSS");
    }

    #[test]
    fn test_shape_prompt_trims() {
        let p = shape_prompt("  dashboard  ", Framework::React).unwrap();
        assert_eq!(p, "dashboard using React");
    }

    #[test]
    fn test_shape_prompt_rejects_empty() {
        assert!(shape_prompt("", Framework::Tailwind).is_err());
        assert!(shape_prompt("   \n ", Framework::Tailwind).is_err());
    }

    #[test]
    fn test_derived_prompt_format() {
        let p = derived_prompt("make it responsive", "<div/>").unwrap();
        assert_eq!(p, "make it responsive based on the following code:\n\n<div/>");
    }

    #[test]
    fn test_derived_prompt_code_untouched() {
        // Code is not trimmed or altered, even when whitespace-heavy
        let code = "  <div>\n\n</div>  ";
        let p = derived_prompt("x", code).unwrap();
        assert!(p.ends_with(code));
    }

    #[test]
    fn test_derived_prompt_rejects_empty_instruction() {
        let err = derived_prompt("  ", "<div/>").unwrap_err();
        assert!(matches!(err, FusionError::Validation(_)));
    }
}
