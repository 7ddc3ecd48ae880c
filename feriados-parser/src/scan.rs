//! Minimal scanning of the JavaScript literal that carries the holiday list.
//!
//! The page declares something shaped like
//!
//! ```text
//! holidays2025 = { es: [ {"date": "1/01/2025", "label": "...", "type": "..."}, ... ], en: [...] }
//! ```
//!
//! This is not a JavaScript parser. It only knows about string literals and
//! bracket depth, which is enough to find the language array and to split it
//! into object literals without being confused by braces inside labels.

/// Returns the contents (without the brackets) of the `language` array inside
/// the `holidays<year> = { ... }` mapping.
pub(crate) fn language_array<'a>(script: &'a str, year: i32, language: &str) -> Option<&'a str> {
    let marker = format!("holidays{year}");

    script.match_indices(&marker).find_map(|(at, _)| {
        let mapping = script[at + marker.len()..]
            .trim_start()
            .strip_prefix('=')?
            .trim_start()
            .strip_prefix('{')?;

        let mapping = &mapping[..closing(mapping)?];
        array_for_key(mapping, language)
    })
}

/// Splits the contents of an array into its top-level `{ ... }` literals.
pub(crate) fn objects(array: &str) -> Vec<&str> {
    let bytes = array.as_bytes();
    let mut objects = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'"' | b'\'') => match string_len(&array[i + 1..], quote) {
                Some(len) => i += len + 2,
                None => break,
            },
            b'{' => match closing(&array[i + 1..]) {
                Some(len) => {
                    objects.push(&array[i..i + len + 2]);
                    i += len + 2;
                }
                None => break,
            },
            _ => i += 1,
        }
    }

    objects
}

fn array_for_key<'a>(mapping: &'a str, key: &str) -> Option<&'a str> {
    let bytes = mapping.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let (name, end) = match bytes[i] {
            quote @ (b'"' | b'\'') => {
                let len = string_len(&mapping[i + 1..], quote)?;
                (&mapping[i + 1..i + 1 + len], i + len + 2)
            }
            b if is_ident(b) => {
                let len = bytes[i..].iter().take_while(|b| is_ident(**b)).count();
                (&mapping[i..i + len], i + len)
            }
            b'{' | b'[' => {
                i += closing(&mapping[i + 1..])? + 2;
                continue;
            }
            _ => {
                i += 1;
                continue;
            }
        };

        if name == key {
            let value = mapping[end..]
                .trim_start()
                .strip_prefix(':')
                .map(str::trim_start)
                .and_then(|value| value.strip_prefix('['));

            if let Some(value) = value {
                return Some(&value[..closing(value)?]);
            }
        }

        i = end;
    }

    None
}

/// Offset of the bracket closing an already opened `{` or `[`, with `s`
/// starting right after the opener.
fn closing(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote = None;
    let mut escaped = false;

    for (i, b) in s.bytes().enumerate() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == q {
                quote = None;
            }
            continue;
        }

        match b {
            b'"' | b'\'' => quote = Some(b),
            b'{' | b'[' => depth += 1,
            b'}' | b']' if depth == 0 => return Some(i),
            b'}' | b']' => depth -= 1,
            _ => {}
        }
    }

    None
}

/// Length of a string literal body, with `s` starting right after the opening quote.
fn string_len(s: &str, quote: u8) -> Option<usize> {
    let mut escaped = false;

    for (i, b) in s.bytes().enumerate() {
        if escaped {
            escaped = false;
        } else if b == b'\\' {
            escaped = true;
        } else if b == quote {
            return Some(i);
        }
    }

    None
}

fn is_ident(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}
