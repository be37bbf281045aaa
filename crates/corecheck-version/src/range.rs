use std::fmt;

use winnow::combinator::{alt, opt};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::token::take_while;
use winnow::{ModalResult, Parser};

use corecheck_types::{CorecheckError, Result};

use crate::version::Version;

/// A Maven-style version range: an immutable predicate over [`Version`]s.
///
/// Accepted syntax (whitespace around versions is ignored):
/// - `[1.0,2.0]` — inclusive bounds; mixed brackets allowed
/// - `(1.0,2.0)` — exclusive bounds
/// - `[3.0,)` / `(,2.0]` — half-open ranges
/// - `[1.0]` — exactly one version
///
/// `Display` renders the canonical form, so `[3.0,)` round-trips unchanged.
/// A range with inverted bounds parses fine and simply matches nothing.
#[derive(Debug, Clone)]
pub struct VersionRange {
    lower: Option<Bound>,
    upper: Option<Bound>,
    exact: bool,
}

#[derive(Debug, Clone)]
struct Bound {
    version: Version,
    inclusive: bool,
}

fn make_cut_error(desc: &'static str) -> ErrMode<ContextError<StrContext>> {
    let mut e = ContextError::new();
    e.push(StrContext::Expected(StrContextValue::Description(desc)));
    ErrMode::Cut(e)
}

/// Everything up to a comma or bracket; may be empty (unbounded side).
fn version_text<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |c: char| !matches!(c, ',' | '[' | ']' | '(' | ')')).parse_next(input)
}

fn bound(text: &str, inclusive: bool) -> Option<Bound> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(Bound {
            version: Version::parse(text),
            inclusive,
        })
    }
}

fn range_spec(input: &mut &str) -> ModalResult<VersionRange> {
    let lower_inclusive = alt(('['.value(true), '('.value(false)))
        .parse_next(input)
        .map_err(|_: ErrMode<ContextError>| make_cut_error("range must start with [ or ("))?;

    let lower_text = version_text.parse_next(input)?;
    let comma = opt(',').parse_next(input)?;
    let upper_text = if comma.is_some() {
        version_text.parse_next(input)?
    } else {
        lower_text
    };

    let upper_inclusive = alt((']'.value(true), ')'.value(false)))
        .parse_next(input)
        .map_err(|_: ErrMode<ContextError>| make_cut_error("range must end with ] or )"))?;

    let exact = comma.is_none();
    if exact {
        if !(lower_inclusive && upper_inclusive) {
            return Err(make_cut_error("a single version surrounded by []"));
        }
        if lower_text.trim().is_empty() {
            return Err(make_cut_error("a version between the brackets"));
        }
    }

    Ok(VersionRange {
        lower: bound(lower_text, lower_inclusive),
        upper: bound(upper_text, upper_inclusive),
        exact,
    })
}

impl VersionRange {
    /// Parse a range from its string form.
    pub fn parse(input: &str) -> Result<VersionRange> {
        range_spec.parse(input.trim()).map_err(|e| {
            let message = e.into_inner().to_string();
            CorecheckError::InvalidRange {
                input: input.to_string(),
                message: if message.is_empty() {
                    "malformed version range".to_string()
                } else {
                    message
                },
            }
        })
    }

    /// Does `version` satisfy this range?
    pub fn contains(&self, version: &Version) -> bool {
        if let Some(ref lower) = self.lower {
            match version.cmp(&lower.version) {
                std::cmp::Ordering::Less => return false,
                std::cmp::Ordering::Equal if !lower.inclusive => return false,
                _ => {}
            }
        }
        if let Some(ref upper) = self.upper {
            match version.cmp(&upper.version) {
                std::cmp::Ordering::Greater => return false,
                std::cmp::Ordering::Equal if !upper.inclusive => return false,
                _ => {}
            }
        }
        true
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exact {
            // `exact` implies a lower bound is present
            if let Some(ref lower) = self.lower {
                return write!(f, "[{}]", lower.version);
            }
        }
        match self.lower {
            Some(ref lower) => {
                write!(f, "{}{},", if lower.inclusive { '[' } else { '(' }, lower.version)?;
            }
            None => f.write_str("(,")?,
        }
        match self.upper {
            Some(ref upper) => {
                write!(f, "{}{}", upper.version, if upper.inclusive { ']' } else { ')' })
            }
            None => f.write_str(")"),
        }
    }
}
