use std::fmt::{Display, Formatter, Result};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Writes `inner` surrounded by `\left(` and `\right)`.
pub fn fmt_paren<T: Latex + ?Sized>(f: &mut Formatter, inner: &T) -> Result {
    write!(f, "\\left(")?;
    inner.fmt_latex(f)?;
    write!(f, "\\right)")
}

/// Writes `\frac{numerator}{denominator}`.
pub fn fmt_frac<N, D>(f: &mut Formatter, numerator: &N, denominator: &D) -> Result
where
    N: Latex + ?Sized,
    D: Latex + ?Sized,
{
    write!(f, "\\frac{{")?;
    numerator.fmt_latex(f)?;
    write!(f, "}}{{")?;
    denominator.fmt_latex(f)?;
    write!(f, "}}")
}
