use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OutputParamType;
use crate::error::ParameterError;

/// One named output of a rule execution, as handed over by the layer that
/// decoded the engine's response. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawParameter {
    pub name: Option<String>,
    pub kind: Option<OutputParamType>,
    pub value: Option<Value>,
}

impl RawParameter {
    pub fn new(name: impl Into<String>, kind: OutputParamType, value: Value) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind),
            value: Some(value),
        }
    }
}

/// Immutable output parameter of a rule execution.
///
/// The payload is kept opaque; its shape follows `kind` by convention only.
/// Every instance, including deserialized ones, has passed the same checks:
/// a non-empty name, a kind and a non-null payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameter")]
pub struct ResultParameter {
    name: String,
    kind: OutputParamType,
    #[serde(rename = "value")]
    payload: Value,
}

impl ResultParameter {
    pub fn new(
        name: impl Into<String>,
        kind: OutputParamType,
        payload: Value,
    ) -> Result<Self, ParameterError> {
        Self::validated(Some(name.into()), Some(kind), Some(payload))
    }

    fn validated(
        name: Option<String>,
        kind: Option<OutputParamType>,
        payload: Option<Value>,
    ) -> Result<Self, ParameterError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(ParameterError::EmptyName)?;
        let kind = kind.ok_or(ParameterError::MissingKind)?;
        let payload = payload
            .filter(|p| !p.is_null())
            .ok_or(ParameterError::MissingPayload)?;

        Ok(Self {
            name,
            kind,
            payload,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> OutputParamType {
        self.kind
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Payload as text, if it is a JSON string. Does not look at `kind`.
    pub fn as_text(&self) -> Option<&str> {
        self.payload.as_str()
    }

    /// Payload as an integer, if it is a JSON integer. Does not look at `kind`.
    pub fn as_int(&self) -> Option<i64> {
        self.payload.as_i64()
    }

    /// Payload in its display form: strings unquoted, everything else as
    /// compact JSON.
    pub fn payload_text(&self) -> String {
        match &self.payload {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl TryFrom<RawParameter> for ResultParameter {
    type Error = ParameterError;

    fn try_from(raw: RawParameter) -> Result<Self, Self::Error> {
        Self::validated(raw.name, raw.kind, raw.value)
    }
}

impl fmt::Display for ResultParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule output parm:")?;
        write!(f, "\n   parameterName:{}", self.name)?;
        write!(f, "\n   parmType:{}", self.kind)?;
        write!(f, "\n   resultObject:{}", self.payload_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_string_parameter() {
        let param = ResultParameter::new("myVar", OutputParamType::Text, json!("hello")).unwrap();
        assert_eq!(param.name(), "myVar");
        assert_eq!(param.kind(), OutputParamType::Text);
        assert_eq!(param.payload(), &json!("hello"));
        assert_eq!(param.as_text(), Some("hello"));
    }

    #[test]
    fn test_accessors_return_supplied_values_for_every_kind() {
        let cases = vec![
            ("ruleExecOut", OutputParamType::RuleExecOut, json!({"stdout": "ok", "stderr": ""})),
            ("rows", OutputParamType::QueryOut, json!([["a", 1], ["b", 2]])),
            ("action", OutputParamType::ClientActionResult, json!({"status": 0})),
            ("label", OutputParamType::Text, json!("")),
            ("count", OutputParamType::Integer, json!(-7)),
        ];

        for (name, kind, payload) in cases {
            let param = ResultParameter::new(name, kind, payload.clone()).unwrap();
            assert_eq!(param.name(), name);
            assert_eq!(param.kind(), kind);
            assert_eq!(param.payload(), &payload);
        }
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = ResultParameter::new("", OutputParamType::Text, json!("hello")).unwrap_err();
        assert_eq!(err, ParameterError::EmptyName);
        assert_eq!(err.to_string(), "parameterName is null or empty");
    }

    #[test]
    fn test_absent_name_is_rejected() {
        let raw = RawParameter {
            name: None,
            kind: Some(OutputParamType::Text),
            value: Some(json!("hello")),
        };
        assert_eq!(
            ResultParameter::try_from(raw).unwrap_err(),
            ParameterError::EmptyName
        );
    }

    #[test]
    fn test_absent_kind_is_rejected() {
        let raw = RawParameter {
            name: Some("myVar".to_string()),
            kind: None,
            value: Some(json!("hello")),
        };
        let err = ResultParameter::try_from(raw).unwrap_err();
        assert_eq!(err, ParameterError::MissingKind);
        assert_eq!(err.to_string(), "outputParamType is null");
    }

    #[test]
    fn test_null_payload_is_rejected() {
        let err = ResultParameter::new("ruleOut", OutputParamType::RuleExecOut, Value::Null)
            .unwrap_err();
        assert_eq!(err, ParameterError::MissingPayload);
        assert_eq!(err.to_string(), "resultObject is null");

        let raw = RawParameter {
            name: Some("ruleOut".to_string()),
            kind: Some(OutputParamType::RuleExecOut),
            value: None,
        };
        assert_eq!(
            ResultParameter::try_from(raw).unwrap_err(),
            ParameterError::MissingPayload
        );
    }

    #[test]
    fn test_name_is_checked_before_kind_and_payload() {
        let err = ResultParameter::try_from(RawParameter::default()).unwrap_err();
        assert_eq!(err, ParameterError::EmptyName);

        let raw = RawParameter {
            name: Some("x".to_string()),
            ..RawParameter::default()
        };
        assert_eq!(
            ResultParameter::try_from(raw).unwrap_err(),
            ParameterError::MissingKind
        );
    }

    #[test]
    fn test_kind_and_payload_shape_are_not_cross_checked() {
        let param = ResultParameter::new("odd", OutputParamType::Text, json!(12)).unwrap();
        assert_eq!(param.as_text(), None);
        assert_eq!(param.as_int(), Some(12));
    }

    #[test]
    fn test_accessors_are_stable() {
        let param = ResultParameter::new("count", OutputParamType::Integer, json!(42)).unwrap();
        for _ in 0..3 {
            assert_eq!(param.name(), "count");
            assert_eq!(param.kind(), OutputParamType::Integer);
            assert_eq!(param.as_int(), Some(42));
        }
    }

    #[test]
    fn test_diagnostic_lists_fields_in_order() {
        let param = ResultParameter::new("count", OutputParamType::Integer, json!(42)).unwrap();
        let text = param.to_string();
        assert_eq!(
            text,
            "Rule output parm:\n   parameterName:count\n   parmType:INT\n   resultObject:42"
        );

        let name_at = text.find("parameterName:count").unwrap();
        let kind_at = text.find("parmType:INT").unwrap();
        let value_at = text.find("resultObject:42").unwrap();
        assert!(name_at < kind_at && kind_at < value_at);
    }

    #[test]
    fn test_diagnostic_prints_strings_unquoted() {
        let param = ResultParameter::new("myVar", OutputParamType::Text, json!("hello")).unwrap();
        assert!(param.to_string().ends_with("resultObject:hello"));
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let param: ResultParameter =
            serde_json::from_str(r#"{"name":"myVar","kind":"STRING","value":"hello"}"#).unwrap();
        assert_eq!(param.name(), "myVar");

        let err = serde_json::from_str::<ResultParameter>(
            r#"{"name":"ruleOut","kind":"RULE_EXEC_OUT","value":null}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("resultObject is null"));

        let err = serde_json::from_str::<ResultParameter>(r#"{"kind":"INT","value":1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("parameterName is null or empty"));
    }

    #[test]
    fn test_serialize_matches_raw_layout() {
        let param = ResultParameter::new("count", OutputParamType::Integer, json!(42)).unwrap();
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value, json!({"name": "count", "kind": "INT", "value": 42}));
    }

    #[test]
    fn test_parameter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResultParameter>();

        let param = std::sync::Arc::new(
            ResultParameter::new("shared", OutputParamType::Text, json!("v")).unwrap(),
        );
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let param = std::sync::Arc::clone(&param);
                std::thread::spawn(move || param.name().to_string())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "shared");
        }
    }
}
