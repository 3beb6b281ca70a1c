//! Route pattern rendering for the platform router.

use openapi_edge_core::{PathComponent, PathPattern};

/// Render a pattern in the platform router's path syntax.
///
/// Constant segments are rendered verbatim and parameters as `:name`,
/// joined with `/`. Empty segments are preserved, so a pattern parsed from
/// an absolute path renders back with its leading slash.
pub fn to_axum_path(pattern: &PathPattern) -> String {
    pattern
        .components()
        .iter()
        .map(|component| match component {
            PathComponent::Constant(value) => value.clone(),
            PathComponent::Parameter(name) => format!(":{name}"),
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_parameters_with_colon_syntax() {
        let pattern = PathPattern::parse("/a/{b}/{c}");
        assert_eq!(to_axum_path(&pattern), "/a/:b/:c");
    }

    #[test]
    fn test_renders_constants_verbatim() {
        let pattern = PathPattern::parse("/health");
        assert_eq!(to_axum_path(&pattern), "/health");
    }

    #[test]
    fn test_renders_from_components() {
        let pattern = PathPattern::from_components(vec![
            PathComponent::Constant(String::new()),
            PathComponent::Constant("tasks".to_string()),
            PathComponent::Parameter("id".to_string()),
        ]);
        assert_eq!(to_axum_path(&pattern), "/tasks/:id");
    }
}
