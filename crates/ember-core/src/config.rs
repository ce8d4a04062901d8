//! Compiler configuration.

/// Default bound on nested sub-expressions, see
/// [`CompilerOptions::max_nesting_depth`].
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 512;

/// Options controlling a single compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Disassemble the finished chunk (through `tracing`) when compilation
    /// succeeds. Defaults to on when the `print-code` feature is enabled.
    pub print_code: bool,

    /// Maximum number of nested precedence levels (parentheses, unary
    /// operators, right operands) before compilation gives up with
    /// `Expression nesting too deep.`
    pub max_nesting_depth: usize,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            print_code: cfg!(feature = "print-code"),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl CompilerOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables disassembly of the finished chunk.
    pub fn with_print_code(mut self, print_code: bool) -> Self {
        self.print_code = print_code;
        self
    }

    /// Sets the nesting bound.
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}
