use miniserde::{Deserialize, Serialize};

/// JOSE header of a session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TokenHeader {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type (typically "JWT")
    #[serde(rename = "typ")]
    pub token_type: Option<String>,
}

impl TokenHeader {
    /// Header written into every token this crate creates
    pub(crate) fn hs256() -> Self {
        Self {
            algorithm: crate::algorithm::HS256.to_string(),
            token_type: Some("JWT".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_hs256() {
        let json = miniserde::json::to_string(&TokenHeader::hs256());
        assert_eq!(json, r#"{"alg":"HS256","typ":"JWT"}"#);
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let header: TokenHeader =
            miniserde::json::from_str(r#"{"alg":"HS256","kid":"k1"}"#).unwrap();
        assert_eq!(header.algorithm, "HS256");
        assert_eq!(header.token_type, None);
    }

    #[test]
    fn test_deserialize_requires_alg() {
        assert!(miniserde::json::from_str::<TokenHeader>(r#"{"typ":"JWT"}"#).is_err());
    }
}
