//! Error codes for every diagnostic the toolchain reports.

use std::fmt;

/// Error codes.
///
/// The first digit names the phase:
/// - E0xxx / W0xxx: lexer
/// - E1xxx: parser
/// - E6xxx / W6xxx: interpreter
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer
    /// Character that starts no token
    E0001,
    /// Malformed number literal
    E0002,
    /// Unterminated character literal
    E0003,
    /// Invalid escape sequence in a character literal
    E0004,
    /// Unterminated block comment (warning)
    W0001,

    // Parser
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Missing closing delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected function definition at top level
    E1005,
    /// Unexpected end of input
    E1006,

    // Interpreter
    /// No `main` function
    E6001,
    /// `main` declares parameters
    E6002,
    /// Undefined variable
    E6003,
    /// Undefined function
    E6004,
    /// Wrong number of arguments
    E6005,
    /// Indexing a value that is not an array
    E6006,
    /// Array index out of bounds
    E6007,
    /// Division by zero
    E6008,
    /// Modulo by zero
    E6009,
    /// Operator not defined for the operand types
    E6010,
    /// Call depth limit exceeded
    E6011,
    /// Function defined more than once (warning)
    W6001,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::W0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        ErrorCode::E6008,
        ErrorCode::E6009,
        ErrorCode::E6010,
        ErrorCode::E6011,
        ErrorCode::W6001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::W0001 => "W0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::W6001 => "W6001",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001
                | ErrorCode::E0002
                | ErrorCode::E0003
                | ErrorCode::E0004
                | ErrorCode::W0001
        )
    }

    pub fn is_parser_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
        )
    }

    pub fn is_eval_error(&self) -> bool {
        self.as_str()[1..].starts_with('6')
    }

    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a code such as `"E1002"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
