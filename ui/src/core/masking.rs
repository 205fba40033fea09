//! De-identification token highlighting.
//!
//! The backend replaces identifying fragments of free text with `<비식별화:...>` tokens.
//! Renderers split text into plain/masked runs so the tokens can be styled.

const TOKEN_OPEN: &str = "<비식별화:";
const TOKEN_CLOSE: char = '>';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub masked: bool,
}

/// Split `text` into alternating plain and masked segments. A token needs at least one
/// character between the colon and the closing `>`.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(TOKEN_OPEN) {
        let open = cursor + found;
        let body_start = open + TOKEN_OPEN.len();
        match text[body_start..].find(TOKEN_CLOSE) {
            Some(0) => {
                cursor = body_start;
            }
            Some(len) => {
                let end = body_start + len + TOKEN_CLOSE.len_utf8();
                if open > plain_start {
                    out.push(Segment {
                        text: &text[plain_start..open],
                        masked: false,
                    });
                }
                out.push(Segment {
                    text: &text[open..end],
                    masked: true,
                });
                plain_start = end;
                cursor = end;
            }
            None => break,
        }
    }

    if plain_start < text.len() {
        out.push(Segment {
            text: &text[plain_start..],
            masked: false,
        });
    }
    out
}
