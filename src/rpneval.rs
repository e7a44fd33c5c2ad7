use crate::error::EvalFailure;
use crate::parser::RPNExpr;
use crate::token::MathToken;
use tracing::{debug, trace};

// tokens that aren't literals or operators are skipped, x/0 is left to f64
pub fn evaluate(rpn: &RPNExpr) -> Result<f64, EvalFailure> {
    let mut operands = Vec::new();

    for token in rpn.0.iter() {
        match token {
            MathToken::Number(lexeme) if is_literal(lexeme) => match lexeme.parse::<f64>() {
                Ok(num) => operands.push(num),
                Err(_) => trace!(%lexeme, "unparsable literal"),
            },
            MathToken::Operator(op) => {
                let r = operands.pop().ok_or(EvalFailure::Malformed)?;
                let l = operands.pop().ok_or(EvalFailure::Malformed)?;
                operands.push(op.apply(l, r));
            }
            other => trace!(token = %other, "ignoring token"),
        }
    }

    match (operands.pop(), operands.is_empty()) {
        (Some(value), true) => {
            debug!(postfix = %rpn, value, "evaluated");
            Ok(value)
        }
        _ => Err(EvalFailure::Malformed),
    }
}

pub fn evaluate_str(postfix: &str) -> Result<f64, EvalFailure> {
    evaluate(&RPNExpr::from_postfix(postfix))
}

// digits, optionally followed by a single '.' and more digits
fn is_literal(lexeme: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match lexeme.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(lexeme),
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, evaluate_str, is_literal};
    use crate::error::EvalFailure;
    use crate::parser::{RPNExpr, ShuntingParser};
    use crate::token::{MathToken, Operator};

    macro_rules! fuzzy_eq {
        ($lhs:expr, $rhs:expr) => {
            assert!(($lhs - $rhs).abs() < 1.0e-10)
        };
    }

    #[test]
    fn test_eval1() {
        let expr = ShuntingParser::parse_str("3+4*2");
        fuzzy_eq!(evaluate(&expr).unwrap(), 11.0);
    }

    #[test]
    fn test_eval2() {
        let expr = ShuntingParser::parse_str("(1+2)*3");
        fuzzy_eq!(evaluate(&expr).unwrap(), 9.0);
    }

    #[test]
    fn test_eval3() {
        let expr = ShuntingParser::parse_str("8-3-2");
        fuzzy_eq!(evaluate(&expr).unwrap(), 3.0);
        let expr = ShuntingParser::parse_str("100/10/5");
        fuzzy_eq!(evaluate(&expr).unwrap(), 2.0);
    }

    #[test]
    fn test_eval4() {
        let expr = ShuntingParser::parse_str("(12-4)*(3+2)/8");
        fuzzy_eq!(evaluate(&expr).unwrap(), 5.0);
    }

    #[test]
    fn test_eval5() {
        let expr = ShuntingParser::parse_str("1/3");
        assert_eq!(evaluate(&expr).unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(evaluate_str("8 0 /"), Ok(f64::INFINITY));
        assert!(evaluate_str("0 0 /").unwrap().is_nan());
        let expr = ShuntingParser::parse_str("(0-8)/0");
        assert_eq!(evaluate(&expr), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn malformed() {
        assert_eq!(evaluate_str("5 *"), Err(EvalFailure::Malformed));
        assert_eq!(evaluate_str("+"), Err(EvalFailure::Malformed));
        assert_eq!(evaluate_str("1 2"), Err(EvalFailure::Malformed));
        assert_eq!(evaluate_str(""), Err(EvalFailure::Malformed));
        assert_eq!(evaluate(&RPNExpr(Vec::new())), Err(EvalFailure::Malformed));
    }

    #[test]
    fn ignores_strays() {
        assert_eq!(evaluate_str("1 2 + ("), Ok(3.0));
        assert_eq!(evaluate_str(") 4 x 2 *"), Ok(8.0));
        // only the paren survives, so nothing is left on the stack
        assert_eq!(evaluate_str("("), Err(EvalFailure::Malformed));
        let expr = RPNExpr(vec![
            MathToken::number("1.2.3"),
            MathToken::number("6"),
            MathToken::number("2"),
            MathToken::Operator(Operator::Sub),
        ]);
        assert_eq!(evaluate(&expr), Ok(4.0));
    }

    #[test]
    fn decimal_literals() {
        assert_eq!(evaluate_str("2.5 0.5 +"), Ok(3.0));
        fuzzy_eq!(evaluate_str("0.1 0.2 +").unwrap(), 0.3);
    }

    #[test]
    fn literal_pattern() {
        assert!(is_literal("0"));
        assert!(is_literal("123"));
        assert!(is_literal("3.25"));
        assert!(!is_literal(""));
        assert!(!is_literal("3."));
        assert!(!is_literal(".5"));
        assert!(!is_literal("1.2.3"));
        assert!(!is_literal("1e5"));
        assert!(!is_literal("-1"));
    }
}
