use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Kind of value a rule returned for one of its output parameters.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum OutputParamType {
    #[serde(rename = "RULE_EXEC_OUT")]
    #[strum(serialize = "RULE_EXEC_OUT")]
    RuleExecOut,
    #[serde(rename = "QUERY_OUT")]
    #[strum(serialize = "QUERY_OUT")]
    QueryOut,
    #[serde(rename = "CLIENT_ACTION_RESULT")]
    #[strum(serialize = "CLIENT_ACTION_RESULT")]
    ClientActionResult,
    #[serde(rename = "STRING")]
    #[strum(serialize = "STRING")]
    Text,
    #[serde(rename = "INT")]
    #[strum(serialize = "INT")]
    Integer,
}

impl OutputParamType {
    pub fn description(&self) -> &'static str {
        match self {
            OutputParamType::RuleExecOut => "captured stdout/stderr of the rule execution",
            OutputParamType::QueryOut => "result of a catalog query",
            OutputParamType::ClientActionResult => "result of a client-side action",
            OutputParamType::Text => "plain string",
            OutputParamType::Integer => "plain integer",
        }
    }
}
