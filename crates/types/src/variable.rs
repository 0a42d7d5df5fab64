use serde::{Deserialize, Serialize};

/// Name of the variable that carries the standard transformer configuration.
///
/// The value is an internal configuration blob, not user-supplied data, so it
/// is excluded from every variable listing. Matching is exact and
/// case-sensitive.
pub const STANDARD_TRANSFORMER_CONFIG_ENV_NAME: &str = "STANDARD_TRANSFORMER_CONFIG";

/// A single name/value configuration pair shown to the user.
///
/// Names are expected to be unique within a list; the name doubles as the row
/// key when the list is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    pub name: String,
    /// The API omits empty values, so a missing value reads as `""`.
    #[serde(default)]
    pub value: String,
}

impl EnvironmentVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns `true` when this entry is the reserved transformer config variable.
    pub fn is_reserved(&self) -> bool {
        self.name == STANDARD_TRANSFORMER_CONFIG_ENV_NAME
    }
}

/// Iterates the displayable entries of `variables` in their original order.
pub fn visible_variables(variables: &[EnvironmentVariable]) -> impl Iterator<Item = &EnvironmentVariable> {
    variables.iter().filter(|variable| !variable.is_reserved())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_name_is_matched_exactly() {
        assert!(EnvironmentVariable::new(STANDARD_TRANSFORMER_CONFIG_ENV_NAME, "{}").is_reserved());
        assert!(!EnvironmentVariable::new("standard_transformer_config", "{}").is_reserved());
        assert!(!EnvironmentVariable::new(" STANDARD_TRANSFORMER_CONFIG", "{}").is_reserved());
    }

    #[test]
    fn visible_variables_drops_reserved_entry_anywhere_in_list() {
        let variables = vec![
            EnvironmentVariable::new(STANDARD_TRANSFORMER_CONFIG_ENV_NAME, "first"),
            EnvironmentVariable::new("MODEL_NAME", "iris"),
            EnvironmentVariable::new(STANDARD_TRANSFORMER_CONFIG_ENV_NAME, "middle"),
            EnvironmentVariable::new("WORKERS", "4"),
        ];

        let names: Vec<&str> = visible_variables(&variables).map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["MODEL_NAME", "WORKERS"]);
        assert_eq!(variables.len(), 4);
    }

    #[test]
    fn deserializes_from_api_shape() {
        let variable: EnvironmentVariable = serde_json::from_str(r#"{"name":"LOG_LEVEL","value":"DEBUG"}"#).unwrap();
        assert_eq!(variable, EnvironmentVariable::new("LOG_LEVEL", "DEBUG"));

        let without_value: EnvironmentVariable = serde_json::from_str(r#"{"name":"EMPTY"}"#).unwrap();
        assert_eq!(without_value.value, "");
    }
}
