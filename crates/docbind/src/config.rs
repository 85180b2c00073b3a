use serde::{Deserialize, Serialize};

/// How documents reach the mapper, and therefore which mapper applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodingMode {
    /// Plain documents; re-encode each one and hand the bytes to an unmarshaller.
    #[default]
    Reencode,
    /// Documents come from a pre-decoding cursor and already carry their value.
    PreDecoded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub mode: DecodingMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_reencode() {
        assert_eq!(MapperConfig::default().mode, DecodingMode::Reencode);
        let cfg: MapperConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.mode, DecodingMode::Reencode);
    }

    #[test]
    fn parses_snake_case_mode() {
        let cfg: MapperConfig = serde_json::from_str(r#"{ "mode": "pre_decoded" }"#).unwrap();
        assert_eq!(cfg.mode, DecodingMode::PreDecoded);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(serde_json::from_str::<MapperConfig>(r#"{ "mode": "json" }"#).is_err());
    }
}
