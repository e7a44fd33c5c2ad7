use std::fmt;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    // All operators are left associative, so equal precedence pops
    pub fn precedence(self) -> usize {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn apply(self, l: f64, r: f64) -> f64 {
        match self {
            Operator::Add => l + r,
            Operator::Sub => l - r,
            Operator::Mul => l * r,
            Operator::Div => l / r,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single postfix token.
///
/// Numbers keep their source lexeme; the evaluator decides whether it is a
/// valid literal.
#[derive(PartialEq, Debug, Clone)]
pub enum MathToken {
    Number(String),
    Operator(Operator),
    OParen,
    CParen,
    Unknown(String),
}

impl MathToken {
    pub fn number(lexeme: &str) -> MathToken {
        MathToken::Number(lexeme.to_string())
    }
}

impl fmt::Display for MathToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MathToken::Number(n) => write!(f, "{}", n),
            MathToken::Operator(op) => write!(f, "{}", op),
            MathToken::OParen => write!(f, "("),
            MathToken::CParen => write!(f, ")"),
            MathToken::Unknown(lexeme) => write!(f, "{}", lexeme),
        }
    }
}
