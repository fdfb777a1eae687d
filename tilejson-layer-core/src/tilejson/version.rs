//! Semantic-version-like parsing of the `tilejson` property.

use std::sync::LazyLock;

use regex::Regex;

use crate::tilejson::{TileJsonError, TileJsonResult};

/// The only major version of TileJSON the parser understands.
pub const SUPPORTED_MAJOR: &str = "2";

static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*\s*[v=]*\s*([0-9]+)", // major
        r"\.([0-9]+)",              // minor
        r"\.([0-9]+)",              // patch
        r"(-[0-9]+-?)?",            // build
        r"([a-zA-Z\-][a-zA-Z0-9\-.:]*)?", // tag
        r"\s*$",
    ))
    .expect("semver pattern is valid")
});

/// Components of a version string such as `v2.1.0-3-beta`, as written in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemVer<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
    /// Numeric build suffix including its dashes, e.g. `-3-`.
    pub build: Option<&'a str>,
    /// Free-form tag, e.g. `beta` or `-rc.1`.
    pub tag: Option<&'a str>,
}

impl<'a> SemVer<'a> {
    /// Matches the whole of `version`, ignoring surrounding whitespace and a leading `v` or `=`.
    ///
    /// Returns `None` when the string is not a version at all.
    #[must_use]
    pub fn parse(version: &'a str) -> Option<Self> {
        let caps = SEMVER.captures(version)?;
        Some(Self {
            major: caps.get(1)?.as_str(),
            minor: caps.get(2)?.as_str(),
            patch: caps.get(3)?.as_str(),
            build: caps.get(4).map(|m| m.as_str()),
            tag: caps.get(5).map(|m| m.as_str()),
        })
    }
}

/// Accepts `version` only if its major component is exactly [`SUPPORTED_MAJOR`].
pub fn check_tilejson_version(version: &str) -> TileJsonResult<SemVer<'_>> {
    match SemVer::parse(version) {
        Some(v) if v.major == SUPPORTED_MAJOR => Ok(v),
        _ => Err(TileJsonError::VersionError(version.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2.0.0", ("2", "0", "0", None, None))]
    #[case("v2.1.0", ("2", "1", "0", None, None))]
    #[case("  = 2.2.0  ", ("2", "2", "0", None, None))]
    #[case("v=2.0.1", ("2", "0", "1", None, None))]
    #[case("2.0.0-12-beta", ("2", "0", "0", Some("-12-"), Some("beta")))]
    #[case("2.0.0-3", ("2", "0", "0", Some("-3"), None))]
    #[case("2.0.0rc.1:x", ("2", "0", "0", None, Some("rc.1:x")))]
    #[case("2.0.0-alpha", ("2", "0", "0", None, Some("-alpha")))]
    #[case("10.20.30", ("10", "20", "30", None, None))]
    fn parses(
        #[case] version: &str,
        #[case] expected: (&str, &str, &str, Option<&str>, Option<&str>),
    ) {
        let v = SemVer::parse(version).unwrap();
        assert_eq!((v.major, v.minor, v.patch, v.build, v.tag), expected);
    }

    #[rstest]
    #[case("")]
    #[case("2")]
    #[case("2.0")]
    #[case("2.0.x")]
    #[case("x2.0.0")]
    #[case("2.0.0 beta")]
    #[case("two.zero.zero")]
    fn does_not_match(#[case] version: &str) {
        assert_eq!(SemVer::parse(version), None);
    }

    #[rstest]
    #[case("2.0.0")]
    #[case("2.2.0")]
    #[case(" v2.9.9 ")]
    #[case("=2.0.0-1-")]
    fn supported(#[case] version: &str) {
        assert!(check_tilejson_version(version).is_ok());
    }

    #[rstest]
    #[case("1.0.0")]
    #[case("3.0.0")]
    #[case("02.0.0")]
    #[case("2.0")]
    #[case("latest")]
    fn unsupported(#[case] version: &str) {
        let err = check_tilejson_version(version).unwrap_err();
        assert!(matches!(&err, TileJsonError::VersionError(v) if v == version));
        assert!(err.to_string().contains(version));
    }
}
