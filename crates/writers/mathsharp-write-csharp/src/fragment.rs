//! Typed C# expressions.
//!
//! Translators build fragments bottom-up and serialize them once through
//! `Display`. Keeping the structure until then lets the conditional
//! rewrite see argument boundaries instead of re-splitting text.

use std::fmt;

/// A C# expression under construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Nothing; an operation with no operands.
    Empty,
    /// Literal or identifier text.
    Atom(String),
    /// `(lhs op rhs)`
    Infix {
        op: &'static str,
        lhs: Box<Fragment>,
        rhs: Box<Fragment>,
    },
    /// `func(args)`
    Call { func: String, args: Vec<Fragment> },
    /// `(inner)`
    Group(Box<Fragment>),
    /// `target[index]`
    Index {
        target: Box<Fragment>,
        index: Box<Fragment>,
    },
    /// `(-1.0 * (inner))`
    Negate(Box<Fragment>),
    /// `new Complex(re, im)`
    Complex { re: Box<Fragment>, im: Box<Fragment> },
    /// `(cond ? (then) : otherwise)`
    Conditional {
        cond: Box<Fragment>,
        then: Box<Fragment>,
        otherwise: Box<Fragment>,
    },
    /// `a, b, c`
    List(Vec<Fragment>),
}

impl Fragment {
    pub fn atom(text: impl Into<String>) -> Self {
        Fragment::Atom(text.into())
    }

    pub fn infix(op: &'static str, lhs: Fragment, rhs: Fragment) -> Self {
        Fragment::Infix {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn call(func: impl Into<String>, args: Vec<Fragment>) -> Self {
        Fragment::Call {
            func: func.into(),
            args,
        }
    }

    pub fn group(inner: Fragment) -> Self {
        Fragment::Group(Box::new(inner))
    }

    pub fn index(target: Fragment, index: Fragment) -> Self {
        Fragment::Index {
            target: Box::new(target),
            index: Box::new(index),
        }
    }

    pub fn negate(inner: Fragment) -> Self {
        Fragment::Negate(Box::new(inner))
    }

    pub fn complex(re: Fragment, im: Fragment) -> Self {
        Fragment::Complex {
            re: Box::new(re),
            im: Box::new(im),
        }
    }

    pub fn conditional(cond: Fragment, then: Fragment, otherwise: Fragment) -> Self {
        Fragment::Conditional {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    /// Whether the rendered text is already wrapped in one outer pair of
    /// parentheses.
    pub fn is_parenthesized(&self) -> bool {
        matches!(
            self,
            Fragment::Infix { .. }
                | Fragment::Group(_)
                | Fragment::Negate(_)
                | Fragment::Conditional { .. }
        )
    }

    /// Whether this is a complex-number construction.
    pub fn is_complex(&self) -> bool {
        matches!(self, Fragment::Complex { .. })
    }

    /// The top-level comma-separated parts, with nested lists flattened.
    ///
    /// Anything that is not a list is a single part, so commas inside
    /// calls and indexers never separate parts.
    pub fn parts(&self) -> Vec<&Fragment> {
        let mut parts = Vec::new();
        self.collect_parts(&mut parts);
        parts
    }

    fn collect_parts<'a>(&'a self, parts: &mut Vec<&'a Fragment>) {
        match self {
            Fragment::List(items) => {
                for item in items {
                    item.collect_parts(parts);
                }
            }
            other => parts.push(other),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Empty => Ok(()),
            Fragment::Atom(text) => f.write_str(text),
            Fragment::Infix { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
            Fragment::Call { func, args } => {
                write!(f, "{func}(")?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Fragment::Group(inner) => write!(f, "({inner})"),
            Fragment::Index { target, index } => write!(f, "{target}[{index}]"),
            Fragment::Negate(inner) => write!(f, "(-1.0 * ({inner}))"),
            Fragment::Complex { re, im } => write!(f, "new Complex({re}, {im})"),
            Fragment::Conditional {
                cond,
                then,
                otherwise,
            } => write!(f, "({cond} ? ({then}) : {otherwise})"),
            Fragment::List(items) => write_list(f, items),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Fragment]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
