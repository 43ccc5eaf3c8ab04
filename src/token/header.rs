use serde_json::{Map, Value};

/// Registered JOSE header parameters, read as data
///
/// A borrowed view over a decoded header. Nothing here is enforced: the
/// algorithm is reported exactly as the token declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenHeader<'a> {
    /// Algorithm the token claims to be signed with (`alg`)
    pub algorithm: Option<&'a str>,

    /// Token type, typically "JWT" (`typ`)
    pub token_type: Option<&'a str>,

    /// Content type for nested tokens (`cty`)
    pub content_type: Option<&'a str>,

    /// Key ID (`kid`)
    pub key_id: Option<&'a str>,
}

impl<'a> TokenHeader<'a> {
    pub fn from_map(header: &'a Map<String, Value>) -> Self {
        let field = |name: &str| header.get(name).and_then(Value::as_str);

        Self {
            algorithm: field("alg"),
            token_type: field("typ"),
            content_type: field("cty"),
            key_id: field("kid"),
        }
    }

    /// Whether the token declares itself unsigned (`"alg": "none"`)
    pub fn is_unsecured(&self) -> bool {
        self.algorithm
            .is_some_and(|alg| alg.eq_ignore_ascii_case("none"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test input must be an object"),
        }
    }

    #[test]
    fn test_reads_registered_parameters() {
        let header = map(json!({"alg": "RS256", "typ": "JWT", "kid": "key-1"}));
        let view = TokenHeader::from_map(&header);

        assert_eq!(view.algorithm, Some("RS256"));
        assert_eq!(view.token_type, Some("JWT"));
        assert_eq!(view.key_id, Some("key-1"));
        assert_eq!(view.content_type, None);
        assert!(!view.is_unsecured());
    }

    #[test]
    fn test_non_string_parameters_are_absent() {
        let header = map(json!({"alg": 256, "typ": null}));
        assert_eq!(TokenHeader::from_map(&header), TokenHeader::default());
    }

    #[test]
    fn test_none_algorithm() {
        let header = map(json!({"alg": "None"}));
        assert!(TokenHeader::from_map(&header).is_unsecured());
    }
}
