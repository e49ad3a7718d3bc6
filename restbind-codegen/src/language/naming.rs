//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how wire identifiers become member names and how reserved words
/// are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a wire field name to a member name (e.g., "num_rows" -> "numRows")
    pub field_to_name: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "default" -> "default_")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.field_to_name)(name);
        self.safe_name(&transformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(s: &str) -> String {
        s.to_uppercase()
    }

    fn escape(s: &str) -> String {
        format!("{}_", s)
    }

    const TEST_NAMING: NamingConvention = NamingConvention {
        field_to_name: upper,
        reserved_words: &["IF"],
        escape_reserved: escape,
    };

    #[test]
    fn test_field_name() {
        assert_eq!(TEST_NAMING.field_name("rows"), "ROWS");
    }

    #[test]
    fn test_reserved_after_transform() {
        assert!(TEST_NAMING.is_reserved("IF"));
        assert_eq!(TEST_NAMING.field_name("if"), "IF_");
    }
}
