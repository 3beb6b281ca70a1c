//! Route path patterns.
//!
//! A pattern is an ordered list of segments, each a literal constant or a
//! named parameter. Patterns arrive either pre-parsed as a component list or
//! as a path string in `{name}` bracket syntax.

use std::fmt;

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathComponent {
    /// Literal segment, matched verbatim.
    Constant(String),
    /// Named parameter segment, matched by the router and extracted by name.
    Parameter(String),
}

/// A route template composed of constant and parameter segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPattern {
    components: Vec<PathComponent>,
}

impl PathPattern {
    /// Build a pattern from a pre-parsed component list.
    pub fn from_components(components: Vec<PathComponent>) -> Self {
        Self { components }
    }

    /// Parse a path string in `{name}` bracket syntax.
    ///
    /// The string is split on `/` with empty segments preserved. A segment
    /// is a parameter iff it starts with `{` and ends with `}`; its name is
    /// the text between the brackets.
    pub fn parse(path: &str) -> Self {
        let components = path
            .split('/')
            .map(|segment| {
                if segment.len() >= 2 && segment.starts_with('{') && segment.ends_with('}') {
                    PathComponent::Parameter(segment[1..segment.len() - 1].to_string())
                } else {
                    PathComponent::Constant(segment.to_string())
                }
            })
            .collect();

        Self { components }
    }

    /// The ordered segments of the pattern.
    pub fn components(&self) -> &[PathComponent] {
        &self.components
    }

    /// Names of the parameter segments, in pattern order, duplicates
    /// included.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.components
            .iter()
            .filter_map(|component| match component {
                PathComponent::Parameter(name) => Some(name.as_str()),
                PathComponent::Constant(_) => None,
            })
            .collect()
    }

    /// Returns `true` if some parameter name appears more than once.
    pub fn has_duplicate_parameters(&self) -> bool {
        let names = self.parameter_names();
        names
            .iter()
            .enumerate()
            .any(|(index, name)| names[..index].contains(name))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .components
            .iter()
            .map(|component| match component {
                PathComponent::Constant(value) => value.clone(),
                PathComponent::Parameter(name) => format!("{{{name}}}"),
            })
            .collect();
        f.write_str(&rendered.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constants_and_parameters() {
        let pattern = PathPattern::parse("/a/{b}/{c}");
        assert_eq!(
            pattern.components(),
            &[
                PathComponent::Constant(String::new()),
                PathComponent::Constant("a".to_string()),
                PathComponent::Parameter("b".to_string()),
                PathComponent::Parameter("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_preserves_empty_segments() {
        let pattern = PathPattern::parse("/a//b");
        assert_eq!(
            pattern.components(),
            &[
                PathComponent::Constant(String::new()),
                PathComponent::Constant("a".to_string()),
                PathComponent::Constant(String::new()),
                PathComponent::Constant("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_unbalanced_brackets_are_constants() {
        let pattern = PathPattern::parse("/{a/b}");
        assert_eq!(
            pattern.components(),
            &[
                PathComponent::Constant(String::new()),
                PathComponent::Constant("{a".to_string()),
                PathComponent::Constant("b}".to_string()),
            ]
        );
    }

    #[test]
    fn test_display_round_trip() {
        for path in ["/a/{b}/{c}", "/", "/tasks/{id}", "/a//b"] {
            assert_eq!(PathPattern::parse(path).to_string(), path);
        }
    }

    #[test]
    fn test_parameter_names_include_duplicates() {
        let pattern = PathPattern::parse("/{x}/{y}/{x}");
        assert_eq!(pattern.parameter_names(), vec!["x", "y", "x"]);
    }

    #[test]
    fn test_duplicate_detection() {
        assert!(PathPattern::parse("/{x}/{x}").has_duplicate_parameters());
        assert!(!PathPattern::parse("/{x}/{y}").has_duplicate_parameters());
        assert!(!PathPattern::parse("/a/b").has_duplicate_parameters());
    }
}
