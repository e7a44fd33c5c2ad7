use crate::config::CalcConfig;
use crate::error::EvalFailure;
use crate::scanner::Scanner;
use crate::token::{MathToken, Operator};
use std::convert::Infallible;
use tracing::{debug, trace};

#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<MathToken>);

pub struct ShuntingParser;

// Input that lenient conversion steps over and strict conversion rejects
#[derive(Debug, Clone, Copy, PartialEq)]
enum Lapse {
    Unrecognized { ch: char, position: usize },
    UnmatchedClose,
    UnmatchedOpen,
}

impl Lapse {
    fn failure(self) -> EvalFailure {
        match self {
            Lapse::Unrecognized { ch, position } => {
                EvalFailure::UnrecognizedInput { ch, position }
            }
            Lapse::UnmatchedClose | Lapse::UnmatchedOpen => EvalFailure::Malformed,
        }
    }
}

impl ShuntingParser {
    // Lenient conversion: unknown characters and unmatched parens never fail
    pub fn parse_str(expr: &str) -> RPNExpr {
        let decimals = CalcConfig::default().decimals;
        match Self::parse(expr, decimals, Self::tolerate::<Infallible>) {
            Ok(rpn) => rpn,
            Err(never) => match never {},
        }
    }

    pub fn parse_str_with(expr: &str, config: &CalcConfig) -> Result<RPNExpr, EvalFailure> {
        if config.strict {
            Self::parse(expr, config.decimals, |lapse| Err(lapse.failure()))
        } else {
            Self::parse(expr, config.decimals, Self::tolerate::<EvalFailure>)
        }
    }

    fn tolerate<E>(lapse: Lapse) -> Result<(), E> {
        trace!(?lapse, "tolerated");
        Ok(())
    }

    // on_lapse decides whether a lapse aborts the conversion
    fn parse<E>(
        expr: &str,
        decimals: bool,
        mut on_lapse: impl FnMut(Lapse) -> Result<(), E>,
    ) -> Result<RPNExpr, E> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut scanner = Scanner::new(expr.chars());

        loop {
            let position = scanner.offset();
            if let Some(lexeme) = scanner.scan_number(decimals) {
                out.push(MathToken::Number(lexeme));
                continue;
            }
            let c = match scanner.next() {
                Some(c) => c,
                None => break,
            };
            scanner.extract();

            match c {
                '(' => stack.push(MathToken::OParen),
                ')' => {
                    let mut matched = false;
                    while let Some(top) = stack.pop() {
                        if top == MathToken::OParen {
                            matched = true;
                            break;
                        }
                        out.push(top);
                    }
                    if !matched {
                        on_lapse(Lapse::UnmatchedClose)?;
                    }
                }
                c => match Operator::from_char(c) {
                    Some(op) => {
                        while let Some(&MathToken::Operator(top)) = stack.last() {
                            if top.precedence() < op.precedence() {
                                break;
                            }
                            stack.pop();
                            out.push(MathToken::Operator(top));
                        }
                        stack.push(MathToken::Operator(op));
                    }
                    None => on_lapse(Lapse::Unrecognized { ch: c, position })?,
                },
            }
        }
        // unmatched '(' is left in the output for the evaluator to ignore
        while let Some(top) = stack.pop() {
            if top == MathToken::OParen {
                on_lapse(Lapse::UnmatchedOpen)?;
            }
            out.push(top);
        }

        let rpn = RPNExpr(out);
        debug!(expr, postfix = %rpn, "converted to postfix");
        Ok(rpn)
    }
}
