/// Operators applied to a single value without spending another digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Sqrt,
    Factorial,
}

/// Operators combining two values built from independent digit budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl UnaryOp {
    /// Registry order. Earlier operators win ties between equal results.
    pub const ALL: [UnaryOp; 3] = [UnaryOp::Neg, UnaryOp::Sqrt, UnaryOp::Factorial];

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Sqrt => "√",
            UnaryOp::Factorial => "!",
        }
    }

    /// Postfix operators are written after their operand.
    pub fn is_postfix(self) -> bool {
        matches!(self, UnaryOp::Factorial)
    }

    /// Render `path` with this operator applied, e.g. `(-4)` or `(4!)`.
    pub fn wrap(self, path: &str) -> String {
        if self.is_postfix() {
            format!("({}{})", path, self.symbol())
        } else {
            format!("({}{})", self.symbol(), path)
        }
    }
}

impl BinaryOp {
    /// Registry order. Earlier operators win ties between equal results.
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }

    pub fn from_symbol(symbol: char) -> Option<BinaryOp> {
        match symbol {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            '^' => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    /// Render `left op right` fully parenthesized, e.g. `(4+(√4))`.
    pub fn join(self, left: &str, right: &str) -> String {
        format!("({}{}{})", left, self.symbol(), right)
    }
}
