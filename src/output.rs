use std::io::{self, Write};

use anyhow::Result;
use console::{style, Term};
use serde::Serialize;
use serde_json::Value;
use strum::IntoEnumIterator;
use textwrap::wrap;

use crate::models::{OutputParamType, ResultParameter, RuleExecResult};

/// Trait for types that can render themselves as human-readable CLI output.
pub trait Render {
    fn render(&self, w: &mut dyn Write) -> Result<()>;
}

/// Print as JSON if `json` is true, otherwise call `human` with a writer.
fn json_or<T: Serialize + ?Sized>(
    value: &T,
    json: bool,
    human: impl FnOnce(&mut dyn Write) -> Result<()>,
) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, value)?;
        writeln!(stdout)?;
    } else {
        human(&mut stdout)?;
    }
    Ok(())
}

fn terminal_width() -> usize {
    let (_, cols) = Term::stdout().size();
    cols as usize
}

/// Write a labeled field, wrapping long or multiline values.
///
/// Short values print inline: `{prefix}{label}: {value}`
/// Long or multiline values wrap onto indented continuation lines:
/// ```text
/// {prefix}{label}:
/// {prefix}  {wrapped line 1}
/// {prefix}  {wrapped line 2}
/// ```
pub fn write_field(w: &mut dyn Write, prefix: &str, label: &str, value: &str) -> Result<()> {
    let width = terminal_width();
    let inline_prefix = format!("{prefix}{label}: ");
    let inline_len = inline_prefix.len() + value.len();

    if !value.contains('\n') && inline_len <= width {
        writeln!(w, "{inline_prefix}{value}")?;
    } else {
        writeln!(w, "{prefix}{label}:")?;
        let continuation = format!("{prefix}  ");
        let wrap_width = width.saturating_sub(continuation.len()).max(20);
        for paragraph in value.split('\n') {
            if paragraph.is_empty() {
                writeln!(w)?;
            } else {
                for line in wrap(paragraph, wrap_width) {
                    writeln!(w, "{continuation}{line}")?;
                }
            }
        }
    }
    Ok(())
}

/// Structured payloads are pretty-printed so they wrap one member per line.
fn payload_display(param: &ResultParameter) -> String {
    match param.payload() {
        v @ (Value::Array(_) | Value::Object(_)) => {
            serde_json::to_string_pretty(v).unwrap_or_else(|_| param.payload_text())
        }
        _ => param.payload_text(),
    }
}

impl Render for ResultParameter {
    fn render(&self, w: &mut dyn Write) -> Result<()> {
        writeln!(
            w,
            "{} [{}]",
            style(self.name()).cyan().bold(),
            style(self.kind().as_ref()).yellow()
        )?;
        write_field(w, "  ", "Value", &payload_display(self))?;
        Ok(())
    }
}

impl Render for RuleExecResult {
    fn render(&self, w: &mut dyn Write) -> Result<()> {
        if self.is_empty() {
            writeln!(w, "No output parameters.")?;
            return Ok(());
        }

        writeln!(
            w,
            "{} output parameter(s):\n",
            style(self.len()).green().bold()
        )?;
        for param in self {
            param.render(w)?;
            writeln!(w)?;
        }
        Ok(())
    }
}

// -- Parameter outputs --

pub fn result_set(result: &RuleExecResult, json: bool) -> Result<()> {
    json_or(result, json, |w| result.render(w))
}

pub fn parameter(param: &ResultParameter, json: bool) -> Result<()> {
    json_or(param, json, |w| param.render(w))
}

/// The plain multi-line diagnostic form of a parameter.
pub fn diagnostic(param: &ResultParameter) -> Result<()> {
    let mut w = io::stdout().lock();
    writeln!(w, "{param}")?;
    Ok(())
}

// -- Kinds --

#[derive(Serialize)]
struct KindInfo {
    kind: OutputParamType,
    description: &'static str,
}

pub fn kinds(json: bool) -> Result<()> {
    let infos: Vec<KindInfo> = OutputParamType::iter()
        .map(|kind| KindInfo {
            kind,
            description: kind.description(),
        })
        .collect();

    json_or(&infos, json, |w| {
        for info in &infos {
            writeln!(
                w,
                "{:<22} {}",
                style(info.kind.as_ref()).yellow(),
                style(info.description).dim()
            )?;
        }
        Ok(())
    })
}
