use std::fmt;

use corecheck_types::{CorecheckError, Result};

const DEFAULT_EXTENSION: &str = "jar";

/// Identity of a dependency coordinate: group id, artifact id, extension,
/// optional classifier, and a version value. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    group_id: String,
    artifact_id: String,
    extension: String,
    classifier: Option<String>,
    version: String,
}

impl Artifact {
    /// Create an artifact with the default `jar` extension and no classifier.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            classifier: None,
            version: version.into(),
        }
    }

    /// Parse colon-separated coordinates:
    /// `<groupId>:<artifactId>[:<extension>[:<classifier>]]:<version>`.
    ///
    /// Every segment must be non-empty; a missing extension defaults to `jar`.
    pub fn parse(coords: &str) -> Result<Artifact> {
        let invalid = |message: &str| CorecheckError::InvalidCoordinates {
            input: coords.to_string(),
            message: message.to_string(),
        };

        let segments: Vec<&str> = coords.split(':').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid("coordinates must not contain empty segments"));
        }
        let artifact = match segments.as_slice() {
            [group, artifact, version] => Artifact::new(*group, *artifact, *version),
            [group, artifact, extension, version] => Artifact {
                group_id: (*group).to_string(),
                artifact_id: (*artifact).to_string(),
                extension: (*extension).to_string(),
                classifier: None,
                version: (*version).to_string(),
            },
            [group, artifact, extension, classifier, version] => Artifact {
                group_id: (*group).to_string(),
                artifact_id: (*artifact).to_string(),
                extension: (*extension).to_string(),
                classifier: Some((*classifier).to_string()),
                version: (*version).to_string(),
            },
            _ => {
                return Err(invalid(
                    "expected <groupId>:<artifactId>[:<extension>[:<classifier>]]:<version>",
                ))
            }
        };
        Ok(artifact)
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for Artifact {
    /// Canonical coordinate form: `group:artifact:extension[:classifier]:version`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.extension)?;
        if let Some(ref classifier) = self.classifier {
            write!(f, ":{classifier}")?;
        }
        write!(f, ":{}", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_three_segment_coordinates() {
        let a = Artifact::parse("org.apache.maven:maven-core:2.0").unwrap();
        assert_eq!(a.group_id(), "org.apache.maven");
        assert_eq!(a.artifact_id(), "maven-core");
        assert_eq!(a.extension(), "jar");
        assert_eq!(a.classifier(), None);
        assert_eq!(a.version(), "2.0");
    }

    #[test]
    fn parse_four_segment_coordinates() {
        let a = Artifact::parse("com.example:lib:pom:1.1").unwrap();
        assert_eq!(a.extension(), "pom");
        assert_eq!(a.version(), "1.1");
    }

    #[test]
    fn parse_five_segment_coordinates() {
        let a = Artifact::parse("com.example:lib:jar:sources:1.1").unwrap();
        assert_eq!(a.classifier(), Some("sources"));
        assert_eq!(a.to_string(), "com.example:lib:jar:sources:1.1");
    }

    #[test]
    fn display_is_canonical_form() {
        let a = Artifact::parse("o.a.m.p:plugin:1.0").unwrap();
        assert_eq!(a.to_string(), "o.a.m.p:plugin:jar:1.0");
    }

    #[test]
    fn display_parses_back() {
        let a = Artifact::parse("org.apache.maven:maven-core:2.0").unwrap();
        let b = Artifact::parse(&a.to_string()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn wrong_arity_is_rejected() {
        for coords in ["just-a-name", "group:artifact", "a:b:c:d:e:f"] {
            let err = Artifact::parse(coords).unwrap_err();
            assert!(
                matches!(err, CorecheckError::InvalidCoordinates { .. }),
                "expected coordinate error for {coords}"
            );
        }
    }

    #[test]
    fn empty_segments_are_rejected() {
        assert!(Artifact::parse("group::1.0").is_err());
        assert!(Artifact::parse(":artifact:1.0").is_err());
        assert!(Artifact::parse("group:artifact:").is_err());
    }
}
