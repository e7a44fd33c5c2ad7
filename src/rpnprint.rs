use crate::parser::RPNExpr;
use crate::token::{MathToken, Operator};
use std::fmt;

const DELIMITER: char = ' ';

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", DELIMITER)?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl RPNExpr {
    // split on whitespace runs, e.g. "3 4 2 * +"
    pub fn from_postfix(text: &str) -> RPNExpr {
        RPNExpr(text.split_whitespace().map(classify).collect())
    }
}

fn classify(lexeme: &str) -> MathToken {
    let mut chars = lexeme.chars();
    match (chars.next(), chars.next()) {
        (Some('('), None) => MathToken::OParen,
        (Some(')'), None) => MathToken::CParen,
        (Some(c), _) if c.is_ascii_digit() => MathToken::number(lexeme),
        (Some(c), None) => match Operator::from_char(c) {
            Some(op) => MathToken::Operator(op),
            None => MathToken::Unknown(lexeme.to_string()),
        },
        _ => MathToken::Unknown(lexeme.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{RPNExpr, ShuntingParser};
    use crate::token::{MathToken, Operator};

    #[test]
    fn print() {
        let rpn = ShuntingParser::parse_str("3+4*2");
        assert_eq!(rpn.to_string(), "3 4 2 * +");
        assert_eq!(ShuntingParser::parse_str("8-3-2").to_string(), "8 3 - 2 -");
        assert_eq!(ShuntingParser::parse_str("(1").to_string(), "1 (");
        assert_eq!(RPNExpr(Vec::new()).to_string(), "");
    }

    #[test]
    fn read() {
        let rpn = RPNExpr::from_postfix("  12   3.5\t/ ( x ");
        let expect = vec![
            MathToken::number("12"),
            MathToken::number("3.5"),
            MathToken::Operator(Operator::Div),
            MathToken::OParen,
            MathToken::Unknown("x".to_string()),
        ];
        assert_eq!(rpn, RPNExpr(expect));
    }

    #[test]
    fn reads_what_it_prints() {
        let rpn = ShuntingParser::parse_str("(10-4)/3+2*7");
        assert_eq!(RPNExpr::from_postfix(&rpn.to_string()), rpn);
    }
}
