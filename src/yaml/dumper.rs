//! Block/flow YAML emitter.
//!
//! The top `inline` levels of a document are written in block style with four
//! spaces of indentation per level; anything deeper is written in flow style:
//!
//! ```text
//! imports:
//!     - { resource: config/framework.yml }
//! ```

use serde_yaml::Value;

const INDENTATION: usize = 4;

/// Dump `value` with `inline` levels of block style.
pub fn dump_with_inline(value: &Value, inline: usize) -> String {
    dump_level(value, inline, 0)
}

fn dump_level(value: &Value, inline: usize, indent: usize) -> String {
    let prefix = " ".repeat(indent);
    let mut output = String::new();

    match value {
        Value::Mapping(map) if inline > 0 && !map.is_empty() => {
            for (key, child) in map {
                let marker = format!("{}:", dump_inline(key));
                push_entry(&mut output, &prefix, &marker, child, inline, indent);
            }
        }
        Value::Sequence(seq) if inline > 0 && !seq.is_empty() => {
            for child in seq {
                push_entry(&mut output, &prefix, "-", child, inline, indent);
            }
        }
        _ => {
            output.push_str(&prefix);
            output.push_str(&dump_inline(value));
        }
    }

    output
}

fn push_entry(
    output: &mut String,
    prefix: &str,
    marker: &str,
    child: &Value,
    inline: usize,
    indent: usize,
) {
    output.push_str(prefix);
    output.push_str(marker);

    if inline == 1 || !is_non_empty_collection(child) {
        output.push(' ');
        output.push_str(&dump_level(child, inline - 1, 0));
        output.push('\n');
    } else {
        output.push('\n');
        output.push_str(&dump_level(child, inline - 1, indent + INDENTATION));
    }
}

fn is_non_empty_collection(value: &Value) -> bool {
    match value {
        Value::Mapping(map) => !map.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        _ => false,
    }
}

/// Dump a value in flow style on a single line.
pub fn dump_inline(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => dump_string(s),
        Value::Sequence(seq) => {
            let items: Vec<String> = seq.iter().map(dump_inline).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) if map.is_empty() => "{  }".to_string(),
        Value::Mapping(map) => {
            let items: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", dump_inline(k), dump_inline(v)))
                .collect();
            format!("{{ {} }}", items.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, dump_inline(&tagged.value)),
    }
}

fn dump_string(s: &str) -> String {
    if requires_double_quoting(s) {
        escape_with_double_quotes(s)
    } else if requires_single_quoting(s) {
        format!("'{}'", s.replace('\'', "''"))
    } else {
        s.to_string()
    }
}

fn requires_double_quoting(s: &str) -> bool {
    s.chars().any(|c| c.is_control())
}

fn escape_with_double_quotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn requires_single_quoting(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return true;
    };

    if matches!(
        first,
        '-' | '?' | '|' | '<' | '>' | '=' | '!' | '%' | '@' | '`'
    ) {
        return true;
    }

    if s.chars().any(|c| {
        c.is_whitespace()
            || matches!(
                c,
                '\'' | '"' | ':' | '{' | '}' | '[' | ']' | ',' | '&' | '*' | '#' | '?'
            )
    }) {
        return true;
    }

    looks_like_non_string(s)
}

/// Plain scalars that a YAML reader would not load back as a string.
fn looks_like_non_string(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    if matches!(
        lower.as_str(),
        "null" | "~" | "true" | "false" | "yes" | "no" | "on" | "off" | ".inf" | ".nan"
    ) {
        return true;
    }

    lower.parse::<f64>().is_ok() || lower.starts_with("0x") || lower.starts_with("0o")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yaml::parse;

    fn doc(text: &str) -> Value {
        parse(text).unwrap().unwrap()
    }

    #[test]
    fn imports_document_uses_flow_entries() {
        let value = doc("imports:\n- resource: config/framework.yml\n- resource: config/monolog.yml\n");

        assert_eq!(
            dump_with_inline(&value, 2),
            "imports:\n    - { resource: config/framework.yml }\n    - { resource: config/monolog.yml }\n"
        );
    }

    #[test]
    fn empty_imports_list_is_flow() {
        let value = doc("imports: []\n");
        assert_eq!(dump_with_inline(&value, 2), "imports: []\n");
    }

    #[test]
    fn expanded_dump_nests_blocks() {
        let value = doc("parameters:\n  database_host: 127.0.0.1\n  database_port: ~\n  mailer_user: null\n");

        assert_eq!(
            dump_with_inline(&value, 99),
            "parameters:\n    database_host: 127.0.0.1\n    database_port: null\n    mailer_user: null\n"
        );
    }

    #[test]
    fn strings_are_quoted_when_needed() {
        assert_eq!(dump_inline(&Value::from("plain")), "plain");
        assert_eq!(dump_inline(&Value::from("")), "''");
        assert_eq!(dump_inline(&Value::from("two words")), "'two words'");
        assert_eq!(dump_inline(&Value::from("it's")), "'it''s'");
        assert_eq!(dump_inline(&Value::from("%kernel.root_dir%")), "'%kernel.root_dir%'");
        assert_eq!(dump_inline(&Value::from("@service")), "'@service'");
        assert_eq!(dump_inline(&Value::from("true")), "'true'");
        assert_eq!(dump_inline(&Value::from("8080")), "'8080'");
        assert_eq!(dump_inline(&Value::from("line\nbreak")), "\"line\\nbreak\"");
    }

    #[test]
    fn scalars_and_flow_collections() {
        assert_eq!(dump_inline(&Value::Null), "null");
        assert_eq!(dump_inline(&Value::Bool(false)), "false");
        assert_eq!(dump_inline(&Value::from(42)), "42");
        assert_eq!(dump_inline(&doc("[a, b]")), "[a, b]");
        assert_eq!(dump_inline(&doc("{ a: 1, b: x }")), "{ a: 1, b: x }");
        assert_eq!(dump_inline(&Value::Mapping(Default::default())), "{  }");
    }

    #[test]
    fn dumped_documents_parse_back() {
        let value = doc(
            "imports:\n- resource: \"it's here.yml\"\nframework:\n  secret: '%secret%'\n  list: [1, 2]\n",
        );

        let text = dump_with_inline(&value, 2);
        assert_eq!(parse(&text).unwrap().unwrap(), value);
    }
}
