use std::io::{self, BufReader, Read};

use sort_tally_rs::input::{parse_len, read_len};
use sort_tally_rs::BenchError;

#[test]
fn plain_numbers() {
    assert_eq!(parse_len("5").unwrap(), 5);
    assert_eq!(parse_len("  \n\t1000\n").unwrap(), 1000);
    assert_eq!(parse_len("+7").unwrap(), 7);
    assert_eq!(parse_len("-3").unwrap(), -3);
    assert_eq!(parse_len("0").unwrap(), 0);
}

#[test]
fn trailing_input_is_ignored() {
    assert_eq!(parse_len("12abc").unwrap(), 12);
    assert_eq!(parse_len("8 9 10").unwrap(), 8);
}

#[test]
fn rejects_missing_or_garbage() {
    for input in ["", "   \n", "abc", "-", "+x", "x12"] {
        assert!(
            matches!(parse_len(input), Err(BenchError::InputParse(_))),
            "accepted {input:?}"
        );
    }
}

#[test]
fn rejects_overflow() {
    assert!(matches!(
        parse_len("99999999999999999999"),
        Err(BenchError::InputParse(_))
    ));
}

#[test]
fn reads_from_any_reader() {
    assert_eq!(read_len("42\n".as_bytes()).unwrap(), 42);
    assert!(read_len(&b""[..]).is_err());
}

/// Hands out `chunks` one per read, then behaves like a terminal nobody types into anymore.
struct OpenStream {
    chunks: Vec<&'static [u8]>,
}

impl Read for OpenStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.chunks.is_empty() {
            panic!("read past the leading number, this would block on a real stdin");
        }

        let chunk = self.chunks.remove(0);
        assert!(chunk.len() <= buf.len());
        buf[..chunk.len()].copy_from_slice(chunk);
        Ok(chunk.len())
    }
}

#[test]
fn stops_after_the_number() {
    let stream = OpenStream {
        chunks: vec![&b"5 \xff\xfe garbage"[..]],
    };

    assert_eq!(read_len(BufReader::new(stream)).unwrap(), 5);
}

#[test]
fn number_split_across_reads() {
    let stream = OpenStream {
        chunks: vec![&b"  \n"[..], &b"-1"[..], &b"2\n"[..]],
    };

    assert_eq!(read_len(BufReader::new(stream)).unwrap(), -12);
}

#[test]
fn invalid_utf8_right_after_digits() {
    assert_eq!(read_len(&b"42\xff"[..]).unwrap(), 42);
}

#[test]
fn garbage_first_byte_is_an_error() {
    assert!(matches!(
        read_len(&b"\xffabc"[..]),
        Err(BenchError::InputParse(_))
    ));
    assert!(matches!(
        read_len(&b"abc\n"[..]),
        Err(BenchError::InputParse(_))
    ));
}
