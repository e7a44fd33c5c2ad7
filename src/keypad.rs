//! Button handling for the calculator display.
//!
//! This is the editing policy of the input surface, kept free of any
//! windowing code: a button symbol is classified into a [`Command`] once,
//! and [`press`] maps the current display and [`EditMode`] to the next
//! ones.

use crate::config::CalcConfig;
use crate::token::Operator;
use tracing::debug;

/// Shown in place of a result when evaluation fails for any reason.
pub const ERROR_TEXT: &str = "Error";

const INITIAL_DISPLAY: &str = "0";

/// The calculator's 4×4 button grid, row by row.
pub const BUTTON_LAYOUT: [[char; 4]; 4] = [
    ['7', '8', '9', '+'],
    ['4', '5', '6', '-'],
    ['1', '2', '3', '*'],
    ['0', 'C', '=', '/'],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Digit(char),
    Point,
    Operator(Operator),
    OpenParen,
    CloseParen,
    Clear,
    Evaluate,
}

impl Command {
    pub fn classify(symbol: char) -> Option<Command> {
        match symbol {
            '0'..='9' => Some(Command::Digit(symbol)),
            '.' => Some(Command::Point),
            '(' => Some(Command::OpenParen),
            ')' => Some(Command::CloseParen),
            'C' | 'c' => Some(Command::Clear),
            '=' => Some(Command::Evaluate),
            c => Operator::from_char(c).map(Command::Operator),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Command::Digit(d) => d,
            Command::Point => '.',
            Command::Operator(op) => op.symbol(),
            Command::OpenParen => '(',
            Command::CloseParen => ')',
            Command::Clear => 'C',
            Command::Evaluate => '=',
        }
    }
}

/// Whether the display holds a finished result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Right after `=`: the next digit or point starts a new entry.
    Fresh,
    Continuing,
}

/// Next mode and display text after `command`.
pub fn press(
    mode: EditMode,
    shown: &str,
    command: Command,
    config: &CalcConfig,
) -> (EditMode, String) {
    match command {
        Command::Clear => (EditMode::Continuing, INITIAL_DISPLAY.to_string()),
        Command::Evaluate => {
            let text = match crate::evaluate_expression_with(shown, config) {
                Ok(value) => format_result(value),
                Err(err) => {
                    debug!(expr = shown, %err, "evaluation failed");
                    ERROR_TEXT.to_string()
                }
            };
            (EditMode::Fresh, text)
        }
        entry => {
            let replaces = match mode {
                EditMode::Fresh => matches!(entry, Command::Digit(_) | Command::Point),
                EditMode::Continuing => {
                    shown == INITIAL_DISPLAY && matches!(entry, Command::Digit(_))
                }
            };
            let mut text = if replaces { String::new() } else { shown.to_string() };
            // a point with no digits before it reads as "0."
            if entry == Command::Point && !text.ends_with(|c: char| c.is_ascii_digit()) {
                text.push('0');
            }
            text.push(entry.symbol());
            (EditMode::Continuing, text)
        }
    }
}

/// Renders a result the way the display shows it: `11.0`, `2.5`, `1.0E10`,
/// `Infinity`, `NaN`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1.0e-3..1.0e7).contains(&magnitude) {
        with_fraction(value.to_string())
    } else {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                format!("{}E{}", with_fraction(mantissa.to_string()), exponent)
            }
            None => text,
        }
    }
}

fn with_fraction(mut text: String) -> String {
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Display state driven one button at a time.
#[derive(Debug, Clone)]
pub struct Keypad {
    display: String,
    mode: EditMode,
    config: CalcConfig,
}

impl Keypad {
    pub fn new(config: CalcConfig) -> Keypad {
        Keypad {
            display: INITIAL_DISPLAY.to_string(),
            mode: EditMode::Continuing,
            config,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn press(&mut self, command: Command) {
        let (mode, display) = press(self.mode, &self.display, command, &self.config);
        self.mode = mode;
        self.display = display;
    }

    /// Presses the button labelled `symbol`. Returns false, leaving the
    /// state untouched, when no button has that label.
    pub fn press_symbol(&mut self, symbol: char) -> bool {
        match Command::classify(symbol) {
            Some(command) => {
                self.press(command);
                true
            }
            None => false,
        }
    }

    /// Presses every recognized symbol in `keys`, in order.
    pub fn type_keys(&mut self, keys: &str) {
        for symbol in keys.chars() {
            self.press_symbol(symbol);
        }
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(CalcConfig::default())
    }
}
