use serde::{Deserialize, Serialize};


#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub invalid_move_notice: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            invalid_move_notice: "Invalid move!".to_owned(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: BoardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
        let config: BoardConfig =
            serde_json::from_str(r#"{"invalid_move_notice": "Nope"}"#).unwrap();
        assert_eq!(config.invalid_move_notice, "Nope");
    }
}
