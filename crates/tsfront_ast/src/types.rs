//! Flag types shared by the scanner, parser and AST.

bitflags::bitflags! {
    /// Flags for AST nodes and parser context.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u32 {
        const NONE                          = 0;
        const LET                           = 1 << 0;
        const CONST                         = 1 << 1;
        const USING                         = 1 << 2;
        const OPTIONAL_CHAIN                = 1 << 3;
        const EXPORT_CONTEXT                = 1 << 4;
        const AMBIENT                       = 1 << 5;
        const DISALLOW_IN_CONTEXT           = 1 << 6;
        const YIELD_CONTEXT                 = 1 << 7;
        const AWAIT_CONTEXT                 = 1 << 8;
        const DISALLOW_CONDITIONAL_TYPES_CONTEXT = 1 << 9;
        /// Inside the `extends` clause of a conditional type, where `infer`
        /// is legal.
        const CONDITIONAL_EXTENDS_CONTEXT   = 1 << 10;
        /// A lexical error was reported inside this node.
        const CONTAINS_LEX_ERROR            = 1 << 11;

        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits() | Self::USING.bits();

        const TYPE_CONTEXT_FLAGS = Self::DISALLOW_CONDITIONAL_TYPES_CONTEXT.bits()
            | Self::CONDITIONAL_EXTENDS_CONTEXT.bits();
    }
}

bitflags::bitflags! {
    /// Modifier flags for declarations and members.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u32 {
        const NONE              = 0;
        const EXPORT            = 1 << 0;
        /// `declare`
        const AMBIENT           = 1 << 1;
        const PUBLIC            = 1 << 2;
        const PRIVATE           = 1 << 3;
        const PROTECTED         = 1 << 4;
        const STATIC            = 1 << 5;
        const READONLY          = 1 << 6;
        const ACCESSOR          = 1 << 7;
        const ABSTRACT          = 1 << 8;
        const ASYNC             = 1 << 9;
        const DEFAULT           = 1 << 10;
        const CONST             = 1 << 11;
        const OVERRIDE          = 1 << 12;
        const IN                = 1 << 13;
        const OUT               = 1 << 14;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const PARAMETER_PROPERTY_MODIFIER = Self::ACCESSIBILITY_MODIFIER.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();
    }
}

impl ModifierFlags {
    /// Source spelling of each single modifier, in canonical print order.
    pub const KEYWORDS: [(ModifierFlags, &'static str); 15] = [
        (ModifierFlags::EXPORT, "export"),
        (ModifierFlags::DEFAULT, "default"),
        (ModifierFlags::AMBIENT, "declare"),
        (ModifierFlags::PUBLIC, "public"),
        (ModifierFlags::PRIVATE, "private"),
        (ModifierFlags::PROTECTED, "protected"),
        (ModifierFlags::STATIC, "static"),
        (ModifierFlags::OVERRIDE, "override"),
        (ModifierFlags::ABSTRACT, "abstract"),
        (ModifierFlags::ACCESSOR, "accessor"),
        (ModifierFlags::READONLY, "readonly"),
        (ModifierFlags::ASYNC, "async"),
        (ModifierFlags::CONST, "const"),
        (ModifierFlags::IN, "in"),
        (ModifierFlags::OUT, "out"),
    ];
}

// Token flags from the scanner.
bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u16 {
        const NONE                              = 0;
        const PRECEDING_LINE_BREAK              = 1 << 0;
        const UNTERMINATED                      = 1 << 1;
        const SCIENTIFIC                        = 1 << 2;
        const OCTAL                             = 1 << 3;
        const HEX_SPECIFIER                     = 1 << 4;
        const BINARY_SPECIFIER                  = 1 << 5;
        const OCTAL_SPECIFIER                   = 1 << 6;
        const CONTAINS_SEPARATOR                = 1 << 7;
        const UNICODE_ESCAPE                    = 1 << 8;
        const CONTAINS_INVALID_ESCAPE           = 1 << 9;
        const IS_INVALID                        = 1 << 10;

        const NUMERIC_LITERAL_FLAGS = Self::SCIENTIFIC.bits()
            | Self::OCTAL.bits()
            | Self::HEX_SPECIFIER.bits()
            | Self::BINARY_SPECIFIER.bits()
            | Self::OCTAL_SPECIFIER.bits()
            | Self::CONTAINS_SEPARATOR.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_keywords_are_single_bits() {
        for (flag, text) in ModifierFlags::KEYWORDS {
            assert_eq!(flag.bits().count_ones(), 1, "{text}");
        }
        assert!(ModifierFlags::PARAMETER_PROPERTY_MODIFIER.contains(ModifierFlags::READONLY));
    }

    #[test]
    fn test_context_flags() {
        let flags = NodeFlags::DISALLOW_CONDITIONAL_TYPES_CONTEXT | NodeFlags::LET;
        assert!(flags.intersects(NodeFlags::TYPE_CONTEXT_FLAGS));
        assert!(!(flags - NodeFlags::TYPE_CONTEXT_FLAGS).intersects(NodeFlags::TYPE_CONTEXT_FLAGS));
    }
}
