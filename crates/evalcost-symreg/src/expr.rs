//! Expression trees over two variables.
//!
//! The function set matches the external library's defaults: addition,
//! subtraction, multiplication, and protected division, over the terminals
//! `x`, `y`, and constants drawn from `(-1, 1)`.

use std::fmt;

use rand::Rng;

/// Division guard: denominators within this distance of zero yield 1.0.
const PROTECTED_DIV_THRESHOLD: f64 = 1e-3;

/// Tree-generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMethod {
    /// Nodes may become terminals at any depth.
    Grow,
    /// Every branch extends to the full depth.
    Full,
}

/// A surface expression over `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    X,
    Y,
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    /// Protected division: a denominator within `1e-3` of zero yields 1.0.
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Evaluates the expression at a point.
    #[must_use]
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        match self {
            Expr::Const(c) => *c,
            Expr::X => x,
            Expr::Y => y,
            Expr::Add(a, b) => a.eval(x, y) + b.eval(x, y),
            Expr::Sub(a, b) => a.eval(x, y) - b.eval(x, y),
            Expr::Mul(a, b) => a.eval(x, y) * b.eval(x, y),
            Expr::Div(a, b) => {
                let denominator = b.eval(x, y);
                if denominator.abs() <= PROTECTED_DIV_THRESHOLD {
                    1.0
                } else {
                    a.eval(x, y) / denominator
                }
            }
        }
    }

    /// Generates a random tree of at most `max_depth` function levels.
    ///
    /// With [`InitMethod::Full`] every branch reaches exactly `max_depth`;
    /// with [`InitMethod::Grow`] branches may stop early at a terminal.
    pub fn random<R>(rng: &mut R, method: InitMethod, max_depth: usize) -> Self
    where
        R: Rng + ?Sized,
    {
        if max_depth == 0 || (method == InitMethod::Grow && rng.random_bool(0.3)) {
            return Self::random_terminal(rng);
        }

        let left = Box::new(Self::random(rng, method, max_depth - 1));
        let right = Box::new(Self::random(rng, method, max_depth - 1));
        match rng.random_range(0..4) {
            0 => Expr::Add(left, right),
            1 => Expr::Sub(left, right),
            2 => Expr::Mul(left, right),
            _ => Expr::Div(left, right),
        }
    }

    fn random_terminal<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        match rng.random_range(0..3) {
            0 => Expr::X,
            1 => Expr::Y,
            _ => Expr::Const(rng.random_range(-1.0..1.0)),
        }
    }

    /// Number of function levels below this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::X | Expr::Y => 0,
            Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) => {
                1 + a.depth().max(b.depth())
            }
        }
    }

    /// Total node count.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::X | Expr::Y => 1,
            Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) => {
                1 + a.node_count() + b.node_count()
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(c) => write!(f, "{c:.3}"),
            Expr::X => write!(f, "x"),
            Expr::Y => write!(f, "y"),
            Expr::Add(a, b) => write!(f, "({a} + {b})"),
            Expr::Sub(a, b) => write!(f, "({a} - {b})"),
            Expr::Mul(a, b) => write!(f, "({a} * {b})"),
            Expr::Div(a, b) => write!(f, "({a} / {b})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_eval_arithmetic() {
        // (x * x) - y + 0.5
        let expr = Expr::Add(
            Box::new(Expr::Sub(
                Box::new(Expr::Mul(Box::new(Expr::X), Box::new(Expr::X))),
                Box::new(Expr::Y),
            )),
            Box::new(Expr::Const(0.5)),
        );
        assert!((expr.eval(2.0, 1.0) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_protected_division_guards_small_denominators() {
        let expr = Expr::Div(Box::new(Expr::X), Box::new(Expr::Y));
        assert_eq!(expr.eval(5.0, 0.0), 1.0);
        assert_eq!(expr.eval(5.0, 1e-4), 1.0);
        assert!((expr.eval(6.0, 2.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_full_trees_reach_the_requested_depth() {
        let mut rng = Pcg64::seed_from_u64(0);
        for _ in 0..20 {
            let expr = Expr::random(&mut rng, InitMethod::Full, 4);
            assert_eq!(expr.depth(), 4);
        }
    }

    #[test]
    fn test_grow_trees_stay_within_the_depth_bound() {
        let mut rng = Pcg64::seed_from_u64(1);
        for _ in 0..50 {
            let expr = Expr::random(&mut rng, InitMethod::Grow, 5);
            assert!(expr.depth() <= 5);
        }
    }

    #[test]
    fn test_zero_depth_yields_a_terminal() {
        let mut rng = Pcg64::seed_from_u64(2);
        let expr = Expr::random(&mut rng, InitMethod::Full, 0);
        assert_eq!(expr.node_count(), 1);
    }

    #[test]
    fn test_display_is_parenthesized_infix() {
        let expr = Expr::Mul(Box::new(Expr::X), Box::new(Expr::Y));
        assert_eq!(expr.to_string(), "(x * y)");
    }
}
