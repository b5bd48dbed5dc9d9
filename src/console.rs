//! Line-oriented prompting over generic reader/writer pairs.

use std::io::{self, BufRead, Write};

/// Print `prompt` without a trailing newline, flush, and read one line.
///
/// The trailing newline (and a carriage return, if any) is stripped from the
/// returned value. A closed input stream is reported as an
/// [`io::ErrorKind::UnexpectedEof`] error.
///
/// # Errors
///
/// Returns an error if the prompt cannot be written or the line cannot be
/// read.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
