//! Severity names, numeric levels and local severity filters.
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub use cloud_logging_proto::LogSeverity;

/// Parses a severity name, ignoring case.
///
/// Besides the canonical names this accepts the level names used by
/// `tracing` and `log` (`TRACE`, `WARN`) and `FATAL`, as well as numeric
/// levels such as `"400"`.
pub fn parse_severity(name: &str) -> Result<LogSeverity> {
    let name = name.trim();
    if let Ok(level) = name.parse::<i32>() {
        return Ok(severity_from_level(level));
    }
    let upper = name.to_ascii_uppercase();
    let severity = match upper.as_str() {
        "TRACE" => Some(LogSeverity::Debug),
        "WARN" => Some(LogSeverity::Warning),
        "FATAL" => Some(LogSeverity::Critical),
        other => LogSeverity::from_str_name(other),
    };
    severity.ok_or_else(|| Error::InvalidArgument(format!("unknown severity `{name}`")))
}

/// Maps a numeric level to the highest severity not above it. Levels below
/// zero map to `DEFAULT`, levels above 800 to `EMERGENCY`.
pub fn severity_from_level(level: i32) -> LogSeverity {
    LogSeverity::ALL
        .iter()
        .rev()
        .find(|severity| **severity as i32 <= level)
        .copied()
        .unwrap_or(LogSeverity::Default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Op {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Lt => ordering == Ordering::Less,
            Op::Le => ordering != Ordering::Greater,
            Op::Gt => ordering == Ordering::Greater,
            Op::Ge => ordering != Ordering::Less,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
        }
    }
}

/// A conjunction of severity comparisons evaluated on the client, such as
/// `severity > DEBUG AND severity <= WARNING`.
///
/// This understands only the severity subset of the Logging query language.
/// It is meant for checking entries already fetched, not for building server
/// side filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityFilter {
    clauses: Vec<(Op, LogSeverity)>,
}

impl SeverityFilter {
    /// Whether `severity` satisfies every clause.
    pub fn matches(&self, severity: LogSeverity) -> bool {
        self.clauses
            .iter()
            .all(|(op, bound)| op.holds(severity.cmp(bound)))
    }

    /// Whether an entry's raw `severity` field satisfies every clause.
    pub fn matches_level(&self, level: i32) -> bool {
        self.matches(LogSeverity::try_from(level).unwrap_or_else(|_| severity_from_level(level)))
    }

    /// The severities, in ascending order, that pass the filter.
    pub fn selected(&self) -> Vec<LogSeverity> {
        LogSeverity::ALL
            .into_iter()
            .filter(|severity| self.matches(*severity))
            .collect()
    }
}

fn parse_clause(clause: &str) -> Result<(Op, LogSeverity)> {
    let invalid = || Error::InvalidArgument(format!("invalid severity clause `{clause}`"));
    let rest = clause.trim();
    let field = rest.get(..8).ok_or_else(invalid)?;
    if !field.eq_ignore_ascii_case("severity") {
        return Err(invalid());
    }
    let rest = rest[8..].trim_start();
    let (op, rest) = [
        ("!=", Op::Ne),
        ("<=", Op::Le),
        (">=", Op::Ge),
        ("<", Op::Lt),
        (">", Op::Gt),
        ("=", Op::Eq),
    ]
    .into_iter()
    .find_map(|(token, op)| rest.strip_prefix(token).map(|rest| (op, rest)))
    .ok_or_else(invalid)?;
    let level = rest.trim().trim_matches('"');
    if level.is_empty() {
        return Err(invalid());
    }
    Ok((op, parse_severity(level)?))
}

impl FromStr for SeverityFilter {
    type Err = Error;

    fn from_str(filter: &str) -> Result<Self> {
        let mut clauses = Vec::new();
        let mut rest = filter;
        loop {
            let upper = rest.to_ascii_uppercase();
            match upper.find(" AND ") {
                Some(at) => {
                    clauses.push(parse_clause(&rest[..at])?);
                    rest = &rest[at + 5..];
                }
                None => {
                    clauses.push(parse_clause(rest)?);
                    break;
                }
            }
        }
        Ok(SeverityFilter { clauses })
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (op, severity)) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "severity {} {}", op.as_str(), severity.as_str_name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(parse_severity("warning").unwrap(), LogSeverity::Warning);
        assert_eq!(parse_severity("Warn").unwrap(), LogSeverity::Warning);
        assert_eq!(parse_severity("trace").unwrap(), LogSeverity::Debug);
        assert_eq!(parse_severity("EMERGENCY").unwrap(), LogSeverity::Emergency);
        assert_eq!(parse_severity("500").unwrap(), LogSeverity::Error);
        assert!(matches!(
            parse_severity("loud"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn numeric_levels_round_down() {
        assert_eq!(severity_from_level(-3), LogSeverity::Default);
        assert_eq!(severity_from_level(0), LogSeverity::Default);
        assert_eq!(severity_from_level(150), LogSeverity::Debug);
        assert_eq!(severity_from_level(300), LogSeverity::Notice);
        assert_eq!(severity_from_level(799), LogSeverity::Alert);
        assert_eq!(severity_from_level(10_000), LogSeverity::Emergency);
    }

    #[test]
    fn range_filter_selects_info_through_warning() {
        let filter: SeverityFilter = "severity > DEBUG AND severity <= WARNING".parse().unwrap();
        assert_eq!(
            filter.selected(),
            vec![LogSeverity::Info, LogSeverity::Notice, LogSeverity::Warning]
        );
        assert!(filter.matches_level(200));
        assert!(!filter.matches_level(500));
        assert_eq!(
            filter.to_string(),
            "severity > DEBUG AND severity <= WARNING"
        );
    }

    #[test]
    fn filter_accepts_lowercase_and_quotes() {
        let filter: SeverityFilter = "severity>=\"error\" and severity != critical".parse().unwrap();
        assert_eq!(
            filter.selected(),
            vec![
                LogSeverity::Error,
                LogSeverity::Alert,
                LogSeverity::Emergency
            ]
        );
    }

    #[test]
    fn malformed_filters_are_rejected() {
        for filter in ["", "severity", "severity ~ INFO", "timestamp > DEBUG", "severity >"] {
            assert!(
                filter.parse::<SeverityFilter>().is_err(),
                "{filter:?} should not parse"
            );
        }
    }
}
