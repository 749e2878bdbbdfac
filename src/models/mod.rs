mod exec_result;
mod param_type;
mod parameter;

pub use exec_result::RuleExecResult;
pub use param_type::OutputParamType;
pub use parameter::{RawParameter, ResultParameter};
