use once_cell::sync::Lazy;
use regex::Regex;

static QUESTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"what is [0-9]+[\s+\-*/]+[0-9]+").expect("arithmetic question pattern")
});

static EXPRESSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)\s*([+\-*/])\s*([0-9]+)").expect("arithmetic expression pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Division by zero yields NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 { f64::NAN } else { lhs / rhs }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
}

impl Expression {
    /// Extracts the first `N <op> N` in `text`, provided the text asks
    /// "what is N ... N". Anything that does not parse is `None`.
    pub fn parse(text: &str) -> Option<Self> {
        if !QUESTION.is_match(text) {
            return None;
        }
        let caps = EXPRESSION.captures(text)?;
        let lhs = caps.get(1)?.as_str().parse::<f64>().ok()?;
        let op = Operator::from_symbol(caps.get(2)?.as_str())?;
        let rhs = caps.get(3)?.as_str().parse::<f64>().ok()?;
        Some(Self { lhs, op, rhs })
    }

    /// `None` when the result is NaN. Infinite results still count.
    pub fn evaluate(&self) -> Option<f64> {
        let result = self.op.apply(self.lhs, self.rhs);
        (!result.is_nan()).then_some(result)
    }
}

/// Renders a result the way a browser prints numbers: `10`, `3.5`,
/// `3.3333333333333335e-7`, `9.9999999998e+21`, `Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // shortest round-trip digits and decimal exponent
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{}.{}", int, frac)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat(-n as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() { first.to_string() } else { format!("{}.{}", first, rest) };
        let exp_sign = if n > 0 { "+" } else { "-" };
        format!("{}e{}{}", mantissa, exp_sign, (n - 1).abs())
    };

    format!("{}{}", sign, body)
}

/// Full arithmetic answer for `text`, or `None` to let the cascade continue.
pub fn answer(text: &str) -> Option<String> {
    let result = Expression::parse(text)?.evaluate()?;
    Some(format!("The answer is {}.", format_number(result)))
}
