use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::{Args, Value};

/// Replaces `{{.Name}}` placeholders with values from `args`.
///
/// Names are matched ignoring ASCII case. Whitespace is allowed between the
/// braces and the `.Name` part. Placeholders without a matching value are
/// left in the output untouched.
pub fn substitute(template: &str, args: &Args) -> String {
    if !template.contains("{{") {
        return String::from(template);
    }

    let lookup = fold_names(args);
    let bytes = template.as_bytes();
    let mut output = String::with_capacity(template.len());
    let mut copied = 0;
    let mut offset = 0;

    while let Some(found) = template[offset..].find("{{") {
        let start = offset + found;
        let Some(placeholder) = parse_placeholder(bytes, start) else {
            offset = start + 1;
            continue;
        };
        let name = template[placeholder.name_start..placeholder.name_end].to_ascii_lowercase();
        if let Some(value) = lookup.get(&name) {
            output.push_str(&template[copied..start]);
            output.push_str(&value.to_string());
            copied = placeholder.end;
        }
        offset = placeholder.end;
    }

    output.push_str(&template[copied..]);
    output
}

// On a case-insensitive clash the name that sorts first wins.
fn fold_names(args: &Args) -> BTreeMap<String, &Value> {
    let mut lookup = BTreeMap::new();
    for (name, value) in args.iter() {
        lookup.entry(name.to_ascii_lowercase()).or_insert(value);
    }
    lookup
}

struct Placeholder {
    name_start: usize,
    name_end: usize,
    end: usize,
}

fn parse_placeholder(bytes: &[u8], start: usize) -> Option<Placeholder> {
    let mut idx = skip_whitespace(bytes, start + 2);
    if bytes.get(idx) != Some(&b'.') {
        return None;
    }
    idx += 1;

    let name_start = idx;
    while bytes.get(idx).is_some_and(|byte| is_word(*byte)) {
        idx += 1;
    }
    if idx == name_start {
        return None;
    }
    let name_end = idx;

    idx = skip_whitespace(bytes, idx);
    if bytes.get(idx..idx + 2) != Some(b"}}".as_slice()) {
        return None;
    }

    Some(Placeholder {
        name_start,
        name_end,
        end: idx + 2,
    })
}

fn skip_whitespace(bytes: &[u8], mut idx: usize) -> usize {
    while bytes
        .get(idx)
        .is_some_and(|byte| matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0c))
    {
        idx += 1;
    }
    idx
}

fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
