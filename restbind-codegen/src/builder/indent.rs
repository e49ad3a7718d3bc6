//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
}

impl Indent {
    /// 4-space indentation (data classes and enums).
    pub const JAVA: Self = Self::Spaces(4);

    /// 2-space indentation (Retrofit interfaces and the client facade).
    pub const COMPACT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
        }
    }

    /// Width in columns of one indent level.
    pub fn width(&self) -> usize {
        self.as_str().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::COMPACT.as_str(), "  ");
        assert_eq!(Indent::JAVA.as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "    ");
    }

    #[test]
    fn test_indent_width() {
        assert_eq!(Indent::COMPACT.width(), 2);
        assert_eq!(Indent::JAVA.width(), 4);
    }
}
