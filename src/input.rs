use std::io::{self, BufRead};

use crate::error::BenchError;

/// Reads the array length from the start of `reader`, see [`parse_len`].
///
/// Only the leading integer is consumed: reading stops at the first byte that cannot continue it,
/// so an interactive `5<Enter>` is enough and nothing after the number has to be valid UTF-8.
pub fn read_len<R: BufRead>(mut reader: R) -> Result<i64, BenchError> {
    let token = read_number_token(&mut reader)?;

    parse_len(&String::from_utf8_lossy(&token))
}

/// Skips leading ASCII whitespace and returns an optional sign followed by decimal digits. If
/// the first other byte cannot start a number it is returned alone, for the error message.
fn read_number_token<R: BufRead>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut token = Vec::new();

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(token);
        }

        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            if token.is_empty() && byte.is_ascii_whitespace() {
                used += 1;
                continue;
            }

            let is_sign = token.is_empty() && (byte == b'+' || byte == b'-');
            if !(is_sign || byte.is_ascii_digit()) {
                if token.is_empty() {
                    token.push(byte);
                    used += 1;
                }
                done = true;
                break;
            }

            token.push(byte);
            used += 1;
        }

        reader.consume(used);
        if done {
            return Ok(token);
        }
    }
}

/// Parses the leading integer of `input`.
///
/// Leading whitespace is skipped, then an optional sign and the longest run of decimal digits are
/// taken. Anything after the digits is ignored, so `"12abc"` yields 12.
pub fn parse_len(input: &str) -> Result<i64, BenchError> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Err(BenchError::InputParse("no input".into()));
    }

    let sign_len = usize::from(trimmed.starts_with(|c: char| c == '+' || c == '-'));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        let token = trimmed.split_whitespace().next().unwrap_or_default();
        return Err(BenchError::InputParse(format!("`{token}` is not an integer")));
    }

    let number = &trimmed[..sign_len + digits_len];
    number
        .parse()
        .map_err(|err| BenchError::InputParse(format!("`{number}`: {err}")))
}
