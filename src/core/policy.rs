//! Ref policy matching
//!
//! A ref policy is the list of expressions found under `only: { refs: [...] }`
//! or `except: { refs: [...] }`. Each expression is classified once, when the
//! policy is built, as a regular expression, a reserved keyword, or a literal
//! ref name. Classification order is regex, then keyword, then literal.

use crate::core::context::{PipelineContext, PipelineSource};
use regex::{Regex, RegexBuilder};

/// Reserved words that match on ref kind or pipeline source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKeyword {
    /// Any ref that is not a tag
    Branches,
    /// Any tag ref
    Tags,
    /// Pipelines started by the given source
    Source(PipelineSource),
}

impl RefKeyword {
    /// Look up a keyword; `None` means the word is not reserved
    pub fn parse(word: &str) -> Option<Self> {
        let keyword = match word {
            "branches" => RefKeyword::Branches,
            "tags" => RefKeyword::Tags,
            "pushes" => RefKeyword::Source(PipelineSource::Push),
            "web" => RefKeyword::Source(PipelineSource::Web),
            "triggers" | "trigger" => RefKeyword::Source(PipelineSource::Trigger),
            "schedules" | "schedule" => RefKeyword::Source(PipelineSource::Schedule),
            "api" => RefKeyword::Source(PipelineSource::Api),
            "external" => RefKeyword::Source(PipelineSource::External),
            _ => return None,
        };
        Some(keyword)
    }

    /// Check the keyword against the pipeline
    pub fn matches(&self, context: &PipelineContext) -> bool {
        match self {
            RefKeyword::Branches => !context.tag,
            RefKeyword::Tags => context.tag,
            RefKeyword::Source(source) => context.source == *source,
        }
    }
}

/// How a single expression is evaluated
#[derive(Debug, Clone)]
pub enum PatternKind {
    /// `/pattern/flags`, matched unanchored against the ref
    Regex(Regex),
    /// Reserved keyword; never compared literally
    Keyword(RefKeyword),
    /// Exact ref name
    Literal(String),
}

/// One entry of a ref policy, with its optional `@repository/path` constraint
#[derive(Debug, Clone)]
pub struct MatchExpression {
    raw: String,
    kind: PatternKind,
    path: Option<String>,
}

impl MatchExpression {
    /// Classify an expression string.
    ///
    /// Anything that is neither a valid regex nor a reserved keyword is a
    /// literal ref name, including misspelled keywords and regexes that fail
    /// to compile.
    pub fn parse(raw: &str) -> Self {
        // The first `@` always starts the path, even inside `/.../`
        let (pattern, path) = match raw.split_once('@') {
            Some((pattern, path)) => (pattern, Some(path.to_string())),
            None => (raw, None),
        };

        let kind = if let Some(regex) = fabricate_regex(pattern) {
            PatternKind::Regex(regex)
        } else if let Some(keyword) = RefKeyword::parse(pattern) {
            PatternKind::Keyword(keyword)
        } else {
            PatternKind::Literal(pattern.to_string())
        };

        Self {
            raw: raw.to_string(),
            kind,
            path,
        }
    }

    /// The expression as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    /// Repository path constraint, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Evaluate against the pipeline and the job's effective ref
    pub fn matches(&self, context: &PipelineContext, git_ref: &str) -> bool {
        if let Some(path) = &self.path {
            if context.project_full_path != *path {
                return false;
            }
        }

        match &self.kind {
            PatternKind::Keyword(keyword) => keyword.matches(context),
            PatternKind::Regex(regex) => regex.is_match(git_ref),
            PatternKind::Literal(name) => name == git_ref,
        }
    }
}

/// Build a regex from `/source/flags` syntax.
///
/// Supported flags are `i` (case insensitive), `m` (dot matches newline) and
/// `x` (ignore whitespace). Returns `None` when the text is not delimited,
/// carries unknown flags, or does not compile.
fn fabricate_regex(pattern: &str) -> Option<Regex> {
    let body = pattern.strip_prefix('/')?;
    let end = body.rfind('/')?;
    let (source, flags) = (&body[..end], &body[end + 1..]);

    let mut builder = RegexBuilder::new(source);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            _ => return None,
        };
    }

    builder.build().ok()
}

/// An ordered rule-set; satisfied when any expression matches
#[derive(Debug, Clone, Default)]
pub struct RefPolicy {
    expressions: Vec<MatchExpression>,
}

impl RefPolicy {
    /// Build a policy from raw `refs` entries
    pub fn from_refs<I, S>(refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            expressions: refs
                .into_iter()
                .map(|r| MatchExpression::parse(r.as_ref()))
                .collect(),
        }
    }

    pub fn expressions(&self) -> &[MatchExpression] {
        &self.expressions
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// True when any expression matches; an empty policy matches nothing
    pub fn satisfied_by(&self, context: &PipelineContext, git_ref: &str) -> bool {
        self.expressions
            .iter()
            .any(|expression| expression.matches(context, git_ref))
    }
}

/// Match an optional rule-set. An absent rule-set is vacuously satisfied.
pub fn matches(policy: Option<&RefPolicy>, context: &PipelineContext, git_ref: &str) -> bool {
    policy.map_or(true, |policy| policy.satisfied_by(context, git_ref))
}
