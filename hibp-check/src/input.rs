use std::io::{self, BufRead, IsTerminal};

use zeroize::Zeroizing;

const PROMPT: &str = "enter password\n> ";

/// Reads the password to check.
///
/// An interactive stdin gets a non-echoing prompt on the terminal. Piped
/// stdin is read as a single line, so `echo pw | hibp-check` works.
pub fn read_password() -> io::Result<Zeroizing<String>> {
    let stdin = io::stdin();

    if stdin.is_terminal() {
        let password = Zeroizing::new(rpassword::prompt_password(PROMPT)?);
        println!();
        return Ok(password);
    }

    read_password_line(&mut stdin.lock())
}

/// Reads one line and drops its line terminator. Every other byte is kept.
pub fn read_password_line(reader: &mut impl BufRead) -> io::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no password on stdin"));
    }

    strip_line_ending(&mut line);
    Ok(line)
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
