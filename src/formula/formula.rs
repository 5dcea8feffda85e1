use std::fmt;
use std::rc::Rc;

use crate::math::curve::curve::Curve;

/// A compiled single-variable formula.
#[derive(Clone)]
pub struct Formula {
    text: String,
    typeset: String,
    evaluator: Rc<dyn Fn(f64) -> f64>
}

impl Formula {
    pub fn new(text: String, typeset: String, evaluator: Rc<dyn Fn(f64) -> f64>) -> Formula {
        Formula { text, typeset, evaluator }
    }

    /// The formula as the user typed it, trimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// LaTeX rendering of the expression.
    pub fn typeset(&self) -> &str {
        &self.typeset
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        (self.evaluator)(x)
    }
}

impl Curve for Formula {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formula")
            .field("text", &self.text)
            .field("typeset", &self.typeset)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x) = {}", self.text)
    }
}
