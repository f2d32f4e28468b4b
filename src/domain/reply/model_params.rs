//! Per-model generation parameter policy.
//!
//! Reasoning models take a completion-token budget and a reasoning effort
//! and reject `temperature`; chat models take `max_tokens` and usually a
//! temperature. Adding a model is one row in [`MODEL_PARAMETERS`].

/// Which request parameters a model family accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelParameters {
    /// Send `max_completion_tokens` and `reasoning_effort`.
    pub uses_reasoning: bool,
    /// Send `temperature`.
    pub supports_temperature: bool,
}

impl ModelParameters {
    pub const STANDARD: ModelParameters = ModelParameters {
        uses_reasoning: false,
        supports_temperature: true,
    };

    pub const REASONING: ModelParameters = ModelParameters {
        uses_reasoning: true,
        supports_temperature: false,
    };
}

/// Known models. Anything not listed gets [`ModelParameters::STANDARD`].
pub const MODEL_PARAMETERS: &[(&str, ModelParameters)] = &[
    ("gpt-4o-mini", ModelParameters::STANDARD),
    ("gpt-4o", ModelParameters::STANDARD),
    ("gpt-4.1-mini", ModelParameters::STANDARD),
    ("gpt-4.1", ModelParameters::STANDARD),
    ("o4-mini", ModelParameters::REASONING),
    ("o3", ModelParameters::REASONING),
    ("o3-mini", ModelParameters::REASONING),
];

/// Looks up the parameter policy for a model identifier (exact match).
pub fn parameters_for(model: &str) -> ModelParameters {
    MODEL_PARAMETERS
        .iter()
        .find(|(name, _)| *name == model)
        .map(|(_, params)| *params)
        .unwrap_or(ModelParameters::STANDARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_models_use_temperature_without_reasoning() {
        for model in ["gpt-4o-mini", "gpt-4o", "gpt-4.1-mini", "gpt-4.1"] {
            assert_eq!(parameters_for(model), ModelParameters::STANDARD, "{}", model);
        }
    }

    #[test]
    fn reasoning_models_drop_temperature() {
        for model in ["o4-mini", "o3", "o3-mini"] {
            let params = parameters_for(model);
            assert!(params.uses_reasoning, "{}", model);
            assert!(!params.supports_temperature, "{}", model);
        }
    }

    #[test]
    fn unknown_models_fall_back_to_standard() {
        assert_eq!(parameters_for("my-finetune"), ModelParameters::STANDARD);
        assert_eq!(parameters_for(""), ModelParameters::STANDARD);
        // Lookup is exact, not prefix based
        assert_eq!(parameters_for("o3-pro"), ModelParameters::STANDARD);
    }
}
