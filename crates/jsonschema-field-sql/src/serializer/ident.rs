use super::{Formatter, Params, ToSql};

/// A double-quoted identifier.
pub(super) struct Ident<S>(pub(super) S);

/// A single-quoted string literal.
pub(super) struct Quoted<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        quote(f.dst, self.0.as_ref(), '"');
    }
}

impl<S: AsRef<str>> ToSql for Quoted<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        quote(f.dst, self.0.as_ref(), '\'');
    }
}

/// Wraps `s` in `quote`, doubling any embedded quote characters.
fn quote(dst: &mut String, s: &str, quote: char) {
    dst.push(quote);

    for ch in s.chars() {
        if ch == quote {
            dst.push(quote);
        }
        dst.push(ch);
    }

    dst.push(quote);
}
