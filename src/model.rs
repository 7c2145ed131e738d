use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// Identifier of a rule within a policy.
pub type RuleId = String;

/// Identifier of a macro within a policy.
pub type MacroId = String;

/// A named, taggable expression matched against runtime security events.
///
/// The expression is an opaque string in the event-matching language; it is
/// compiled and evaluated by the downstream rule engine, not here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuleDefinition {
    pub id: RuleId,
    pub expression: String,
    pub tags: HashMap<String, String>,
}

impl RuleDefinition {
    /// The rule's tags as `"key:value"` strings, in unspecified order.
    pub fn tag_strings(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect()
    }
}

/// A named, reusable expression fragment for use inside rule expressions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MacroDefinition {
    pub id: MacroId,
    pub expression: String,
}

/// The validated result of loading one policy document.
///
/// Rules and macros appear in document order; later entries take precedence
/// in the downstream engine. A load either produces a complete `Policy` or
/// fails — there is no partial result and no mutation after the fact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Policy {
    pub rules: Vec<RuleDefinition>,
    pub macros: Vec<MacroDefinition>,
}

impl Policy {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.macros.is_empty()
    }
}

/// The declared kind of a policy document item.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum ItemKind {
    Rule,
    Macro,
}

impl ItemKind {
    /// Parse an item key. Keys are case-sensitive; anything other than
    /// `rule` or `macro` is unknown.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rule" => Some(Self::Rule),
            "macro" => Some(Self::Macro),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rule => "rule",
            Self::Macro => "macro",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
