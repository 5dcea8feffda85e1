//! LaTeX rendering of a formula, built from the same token stream the
//! evaluator is compiled from.

use meval::shunting_yard::to_rpn;
use meval::tokenizer::{
    tokenize,
    Operation,
    Token
};

use super::parsefailure::ParseFailure;

// Binding strength of a rendered node, loosest first.
const SUM: u8 = 1;
const NEGATION: u8 = 2;
const PRODUCT: u8 = 3;
const POWER: u8 = 4;
const ATOM: u8 = 5;

struct Node {
    latex: String,
    precedence: u8
}

impl Node {
    fn new(latex: String, precedence: u8) -> Node {
        Node { latex, precedence }
    }

    fn atom(latex: String) -> Node {
        Node::new(latex, ATOM)
    }

    /// The node's LaTeX, parenthesized when it binds at most as tightly as
    /// `precedence`.
    fn wrapped_at(&self, precedence: u8) -> String {
        if self.precedence <= precedence {
            parenthesize(&self.latex)
        } else {
            self.latex.clone()
        }
    }
}

fn parenthesize(latex: &str) -> String {
    format!("\\left({}\\right)", latex)
}

/// Renders `text` as LaTeX.
pub fn to_latex(text: &str) -> Result<String, ParseFailure> {
    let tokens = tokenize(text).map_err(|_| ParseFailure::Malformed)?;
    let rpn = to_rpn(&tokens).map_err(|_| ParseFailure::Malformed)?;
    render(&rpn).ok_or(ParseFailure::Malformed)
}

fn render(rpn: &[Token]) -> Option<String> {
    let mut stack: Vec<Node> = Vec::new();
    for token in rpn {
        let node = match token {
            Token::Number(value) => Node::atom(number(*value)),
            Token::Var(name) => Node::atom(variable(name)),
            Token::Unary(op) => {
                let arg = stack.pop()?;
                unary(*op, arg)?
            },
            Token::Binary(op) => {
                let rhs = stack.pop()?;
                let lhs = stack.pop()?;
                binary(*op, lhs, rhs)
            },
            Token::Func(name, arity) => {
                let arity = arity.unwrap_or(0);
                if stack.len() < arity {
                    return None;
                }
                let args = stack.split_off(stack.len() - arity);
                function(name, args)
            },
            _ => return None
        };
        stack.push(node);
    }
    if stack.len() == 1 {
        stack.pop().map(|node| node.latex)
    } else {
        None
    }
}

fn number(value: f64) -> String {
    if value.is_infinite() {
        "\\infty".to_owned()
    } else {
        value.to_string()
    }
}

fn variable(name: &str) -> String {
    match name {
        "pi" => "\\pi".to_owned(),
        _ => name.to_owned()
    }
}

fn unary(op: Operation, arg: Node) -> Option<Node> {
    match op {
        Operation::Plus => Some(arg),
        Operation::Minus => Some(Node::new(format!("- {}", arg.wrapped_at(NEGATION)), NEGATION)),
        _ => None
    }
}

fn binary(op: Operation, lhs: Node, rhs: Node) -> Node {
    match op {
        Operation::Plus => {
            let rhs = if rhs.precedence == NEGATION {
                parenthesize(&rhs.latex)
            } else {
                rhs.latex
            };
            Node::new(format!("{} + {}", lhs.latex, rhs), SUM)
        },
        Operation::Minus => {
            Node::new(format!("{} - {}", lhs.latex, rhs.wrapped_at(NEGATION)), SUM)
        },
        Operation::Times => {
            Node::new(format!("{} \\cdot {}", lhs.wrapped_at(NEGATION), rhs.wrapped_at(NEGATION)), PRODUCT)
        },
        Operation::Div => {
            Node::new(format!("\\frac{{{}}}{{{}}}", lhs.latex, rhs.latex), PRODUCT)
        },
        Operation::Rem => {
            Node::new(format!("{} \\bmod {}", lhs.wrapped_at(NEGATION), rhs.wrapped_at(PRODUCT)), PRODUCT)
        },
        Operation::Pow => {
            Node::new(format!("{}^{{{}}}", lhs.wrapped_at(POWER), rhs.latex), POWER)
        }
    }
}

fn function(name: &str, args: Vec<Node>) -> Node {
    let joined = args
        .iter()
        .map(|arg| arg.latex.as_str())
        .collect::<Vec<&str>>()
        .join(", ");
    match name {
        "sqrt" => Node::atom(format!("\\sqrt{{{}}}", joined)),
        "exp" => Node::new(format!("e^{{{}}}", joined), POWER),
        "abs" => Node::atom(format!("\\left|{{{}}}\\right|", joined)),
        "floor" => Node::atom(format!("\\left\\lfloor{{{}}}\\right\\rfloor", joined)),
        "ceil" => Node::atom(format!("\\left\\lceil{{{}}}\\right\\rceil", joined)),
        _ => Node::atom(format!("{}{{\\left({} \\right)}}", operator_name(name), joined))
    }
}

fn operator_name(name: &str) -> String {
    match name {
        "sin" | "cos" | "tan" | "sinh" | "cosh" | "tanh" | "max" | "min" => format!("\\{}", name),
        "ln" => "\\log".to_owned(),
        _ => format!("\\operatorname{{{}}}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latex(text: &str) -> String {
        to_latex(text).unwrap()
    }

    #[test]
    fn atoms() {
        assert_eq!(latex("x"), "x");
        assert_eq!(latex("2"), "2");
        assert_eq!(latex("2.5"), "2.5");
        assert_eq!(latex("pi"), "\\pi");
    }

    #[test]
    fn functions() {
        assert_eq!(latex("sin(x)"), "\\sin{\\left(x \\right)}");
        assert_eq!(latex("ln(x)"), "\\log{\\left(x \\right)}");
        assert_eq!(latex("sqrt(x)"), "\\sqrt{x}");
        assert_eq!(latex("exp(x)"), "e^{x}");
        assert_eq!(latex("asin(x)"), "\\operatorname{asin}{\\left(x \\right)}");
    }

    #[test]
    fn arithmetic_and_grouping() {
        assert_eq!(latex("x^2"), "x^{2}");
        assert_eq!(latex("(x+1)^2"), "\\left(x + 1\\right)^{2}");
        assert_eq!(latex("1/x"), "\\frac{1}{x}");
        assert_eq!(latex("2*(x+1)"), "2 \\cdot \\left(x + 1\\right)");
        assert_eq!(latex("x-(y-1)"), "x - \\left(y - 1\\right)");
        assert_eq!(latex("-x"), "- x");
    }

    #[test]
    fn rejects_implicit_multiplication() {
        assert_eq!(to_latex("2x"), Err(ParseFailure::Malformed));
        assert_eq!(to_latex("sin(x"), Err(ParseFailure::Malformed));
    }

    #[test]
    fn rejects_factorial() {
        assert_eq!(to_latex("x!"), Err(ParseFailure::Malformed));
    }

    #[test]
    fn overflowing_literal_is_infinity() {
        assert_eq!(latex("1e400*x"), "\\infty \\cdot x");
    }
}
