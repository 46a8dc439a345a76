//! `Debug` and `Display` output shared by all matrix-like types.

use std::fmt;

use crate::MatrixRef;

/// Writes `m` as a list of rows, eg. `[[0, 1], [2, 3]]`.
///
/// The `#` modifier prints each row in its own line, but not each individual element.
pub(crate) fn debug<M>(m: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    M: MatrixRef,
    M::Elem: fmt::Debug,
{
    struct FormatRow<'a, M>(&'a M, usize);
    impl<'a, M> fmt::Debug for FormatRow<'a, M>
    where
        M: MatrixRef,
        M::Elem: fmt::Debug,
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[")?;
            for col in 0..self.0.cols() {
                if col != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", self.0.entry(self.1, col))?;
            }
            write!(f, "]")?;
            Ok(())
        }
    }

    let mut list = f.debug_list();
    for row in 0..m.rows() {
        list.entry(&FormatRow(m, row));
    }
    list.finish()
}

/// Writes `m` as one `| a b c |` line per row.
///
/// Formatting flags (width, precision) are applied to every element.
pub(crate) fn display<M>(m: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    M: MatrixRef,
    M::Elem: fmt::Display,
{
    for row in 0..m.rows() {
        if row != 0 {
            writeln!(f)?;
        }
        f.write_str("|")?;
        for col in 0..m.cols() {
            f.write_str(" ")?;
            fmt::Display::fmt(m.entry(row, col), f)?;
        }
        f.write_str(" |")?;
    }
    Ok(())
}
