use std::io::{self, BufRead, Write};

/// Prints the prompt and reads the first whitespace separated token, blank lines are skipped
pub fn input(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    first_token(&mut io::stdin().lock())
}

/// Empty when the reader ends before any token
pub fn first_token(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(String::new());
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.to_owned());
        }
    }
}

pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|byte| byte.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_in_any_case_and_length() {
        let long = "x".repeat(300);
        for word in ["a", "Hello", "WORLD", "mIxEd", long.as_str()] {
            assert!(is_valid_word(word), "{word:?} should be accepted");
        }
    }

    #[test]
    fn rejects_anything_but_ascii_letters() {
        for word in ["", "hello1", "two words", "don't", "hello!", " hello", "café", "naïve", "h-e"] {
            assert!(!is_valid_word(word), "{word:?} should be rejected");
        }
    }

    #[test]
    fn first_token_skips_blank_lines() {
        let mut reader = "\n   \n  hello world\nnext\n".as_bytes();
        assert_eq!(first_token(&mut reader).unwrap(), "hello");
    }

    #[test]
    fn first_token_is_empty_at_end_of_input() {
        let mut reader = "\n\n".as_bytes();
        assert_eq!(first_token(&mut reader).unwrap(), "");
    }
}
