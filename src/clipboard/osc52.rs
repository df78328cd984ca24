use std::io::{self, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::backend::ClipboardError;

/// Writes the OSC 52 sequence to stdout for the terminal to pick up
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    write_sequence(&mut io::stdout(), text)
}

pub fn write_sequence<W: Write>(out: &mut W, text: &str) -> Result<(), ClipboardError> {
    out.write_all(encode_osc52(text).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| ClipboardError::Write(e.to_string()))
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PREFIX: &str = "\x1b]52;c;";

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_osc52("hello"), "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn test_write_sequence_to_buffer() {
        let mut buf = Vec::new();
        write_sequence(&mut buf, "kuu").unwrap();
        assert_eq!(buf, b"\x1b]52;c;a3V1\x07");
    }

    proptest! {
        #[test]
        fn prop_payload_decodes_to_input(text in "\\PC{0,40}") {
            let encoded = encode_osc52(&text);
            prop_assert!(encoded.starts_with(PREFIX));
            prop_assert!(encoded.ends_with('\x07'));

            let payload = &encoded[PREFIX.len()..encoded.len() - 1];
            let decoded = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
            prop_assert_eq!(decoded, text);
        }
    }
}
