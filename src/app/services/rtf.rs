//! Minimal RTF codec.
//!
//! Encoding produces `{\rtf1\ansi ...}` with escaped braces and backslashes,
//! `\tab ` for tabs and `\par` for line breaks. Decoding accepts that grammar
//! and ignores any other control word instead of rejecting the input.

use std::iter::Peekable;
use std::str::Chars;

const HEADER: &str = "{\\rtf1\\ansi\n";
const FOOTER: &str = "\n}";

/// Encode plain text as a minimal RTF document
pub fn encode(text: &str) -> String {
    let mut body = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => body.push_str("\\\\"),
            '{' => body.push_str("\\{"),
            '}' => body.push_str("\\}"),
            '\t' => body.push_str("\\tab "),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => body.push_str("\\par\n"),
            _ => body.push(ch),
        }
    }

    let mut rtf = String::with_capacity(HEADER.len() + body.len() + FOOTER.len());
    rtf.push_str(HEADER);
    rtf.push_str(&body);
    rtf.push_str(FOOTER);
    rtf
}

/// A control word as it appears after a backslash, e.g. `\fs24` or `\par`
#[derive(Debug, PartialEq, Eq)]
struct ControlWord {
    name: String,
    #[allow(dead_code)]
    parameter: Option<i32>,
}

impl ControlWord {
    fn output(&self) -> Option<char> {
        match self.name.as_str() {
            "par" | "line" => Some('\n'),
            "tab" => Some('\t'),
            _ => None,
        }
    }
}

/// Decode the supported RTF subset back into plain text
pub fn decode(rtf: &str) -> String {
    let mut text = String::with_capacity(rtf.len());
    let mut chars = rtf.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                let Some(&next) = chars.peek() else {
                    break;
                };
                if matches!(next, '\\' | '{' | '}') {
                    chars.next();
                    text.push(next);
                    continue;
                }
                if let Some(out) = read_control_word(&mut chars).output() {
                    text.push(out);
                }
            }
            '{' | '}' | '\r' | '\n' => {}
            _ => text.push(ch),
        }
    }

    text
}

/// Consume a control word, its optional signed parameter and one trailing space
fn read_control_word(chars: &mut Peekable<Chars<'_>>) -> ControlWord {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_alphabetic() {
            break;
        }
        name.push(c);
        chars.next();
    }

    let negative = chars.next_if_eq(&'-').is_some();
    let mut digits = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        digits.push(c);
    }
    let parameter = digits
        .parse::<i32>()
        .ok()
        .map(|n| if negative { -n } else { n });

    chars.next_if_eq(&' ');

    ControlWord { name, parameter }
}
