//! Literal `$name` / `${name}` placeholder substitution.
//!
//! Only placeholders are recognised, so CSS and markup braces in the template
//! pass through untouched. Substituted values are never re-scanned.

use crate::utils::error::{Result, SheetError};
use regex::Regex;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self> {
        let re = Regex::new(r"\$(?:(\$)|([A-Za-z_][A-Za-z0-9_]*)|\{([A-Za-z_][A-Za-z0-9_]*)\})")
            .map_err(|e| SheetError::TemplateError {
                message: format!("placeholder pattern failed to compile: {}", e),
            })?;

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in re.captures_iter(source) {
            let Some(whole) = caps.get(0) else { continue };
            literal.push_str(&source[last..whole.start()]);
            last = whole.end();

            if caps.get(1).is_some() {
                literal.push('$');
                continue;
            }

            let name = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(name));
        }

        literal.push_str(&source[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Names of every placeholder, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Every supplied value must have a placeholder to land in.
    pub fn check_values(&self, values: &HashMap<&str, String>) -> Result<()> {
        let used: HashSet<&str> = self.placeholders().collect();
        let mut unused: Vec<&str> = values
            .keys()
            .copied()
            .filter(|name| !used.contains(name))
            .collect();

        if unused.is_empty() {
            return Ok(());
        }
        unused.sort_unstable();
        Err(SheetError::TemplateError {
            message: format!("values with no placeholder: {}", unused.join(", ")),
        })
    }

    /// Fills every placeholder. A placeholder without a value is an error and
    /// nothing is produced.
    pub fn substitute(&self, values: &HashMap<&str, String>) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = values.get(name.as_str()).ok_or_else(|| SheetError::TemplateError {
                        message: format!("no value for placeholder ${}", name),
                    })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}
