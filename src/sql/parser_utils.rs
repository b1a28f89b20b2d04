use nom::{
    bytes::complete::{tag_no_case, take_while1},
    IResult,
};

pub type SqlResult<'a, T> = IResult<&'a str, T, nom::error::Error<&'a str>>;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Word identifier (`[A-Za-z0-9_]+`). Leading digits are allowed.
pub fn ident(input: &str) -> SqlResult<'_, &str> {
    take_while1(is_word_char)(input)
}

/// Case-insensitive keyword parser.
pub fn kw<'a>(keyword: &'static str) -> impl FnMut(&'a str) -> SqlResult<'a, &'a str> {
    tag_no_case(keyword)
}

/// Drops one optional `;` and the whitespace around it from the end of a statement.
pub fn strip_terminator(input: &str) -> &str {
    let trimmed = input.trim_end();
    trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end()
}
