//! Shared utility functions for code generation.

use std::path::PathBuf;

/// Convert a snake_case or ALL_CAPS identifier to camelCase.
///
/// The first segment is lower-cased as a whole, every following segment is
/// capitalized (first character upper, the rest lower), so acronym segments
/// collapse: `"build_GBM_model"` -> `"buildGbmModel"`, `"KEY"` -> `"key"`.
pub fn to_camel_case(s: &str) -> String {
    let mut parts = s.split('_');
    let mut result = parts.next().unwrap_or_default().to_lowercase();
    for part in parts {
        result.push_str(&capitalize(part));
    }
    result
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

/// Convert a dotted package name into a relative directory path.
pub fn package_to_path(package: &str) -> PathBuf {
    package.split('.').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("num_rows"), "numRows");
        assert_eq!(to_camel_case("very_long_json_name"), "veryLongJsonName");
        assert_eq!(to_camel_case("build_GBM_model"), "buildGbmModel");
        assert_eq!(to_camel_case("KEY"), "key");
        assert_eq!(to_camel_case("name"), "name");
    }

    #[test]
    fn test_to_camel_case_mixed_first_segment() {
        assert_eq!(to_camel_case("modelId_x"), "modelidX");
    }

    #[test]
    fn test_to_camel_case_leading_underscore() {
        assert_eq!(to_camel_case("_exclude_fields"), "ExcludeFields");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("gbm"), "Gbm");
        assert_eq!(capitalize("GBM"), "Gbm");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_package_to_path() {
        assert_eq!(
            package_to_path("water.bindings.pojos"),
            PathBuf::from("water").join("bindings").join("pojos")
        );
        assert_eq!(package_to_path(""), PathBuf::new());
    }
}
