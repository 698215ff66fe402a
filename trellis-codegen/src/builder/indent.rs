//! Indentation configuration for code generation.

use std::fmt;

/// Width in spaces of one indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub u8);

impl Indent {
    /// 4-space indentation, as in Gradle's generated accessors.
    pub const JAVA: Self = Self(4);
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = usize::from(self.0))
    }
}
