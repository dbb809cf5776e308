use super::{is_comment, node_text};
use crate::model::JavaAnnotation;
use beansec_api::annotation::AnnotationValue;
use tree_sitter::Node;

/// Reads the annotations among a declaration's `modifiers`, in source order.
pub(crate) fn read_annotations(declaration: Node, source: &str) -> Vec<JavaAnnotation> {
    let mut cursor = declaration.walk();
    let Some(modifiers) = declaration
        .children(&mut cursor)
        .find(|c| c.kind() == "modifiers")
    else {
        return Vec::new();
    };

    let mut annotations = Vec::new();
    let mut cursor = modifiers.walk();
    for child in modifiers.named_children(&mut cursor) {
        match child.kind() {
            "marker_annotation" | "annotation" => annotations.push(read_annotation(child, source)),
            _ => {}
        }
    }
    annotations
}

fn read_annotation(node: Node, source: &str) -> JavaAnnotation {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source))
        .unwrap_or_default()
        .split_whitespace()
        .collect::<String>();
    let value = node
        .child_by_field_name("arguments")
        .and_then(|args| read_value_member(args, source));
    JavaAnnotation {
        name,
        value,
        malformed: node.has_error(),
    }
}

/// The `value` member: a lone unnamed element or an explicit `value = ...` pair.
fn read_value_member(arguments: Node, source: &str) -> Option<AnnotationValue> {
    let mut cursor = arguments.walk();
    let members: Vec<Node> = arguments
        .named_children(&mut cursor)
        .filter(|n| !is_comment(n))
        .collect();

    for member in members {
        if member.kind() == "element_value_pair" {
            let key = member.child_by_field_name("key").map(|k| node_text(&k, source));
            if key.as_deref() == Some("value") {
                return member
                    .child_by_field_name("value")
                    .map(|v| read_element_value(v, source));
            }
        } else {
            return Some(read_element_value(member, source));
        }
    }
    None
}

fn read_element_value(node: Node, source: &str) -> AnnotationValue {
    if node.kind() == "element_value_array_initializer" {
        let mut cursor = node.walk();
        let values = node
            .named_children(&mut cursor)
            .filter(|n| !is_comment(n))
            .map(|n| scalar_text(n, source))
            .collect();
        return AnnotationValue::List(values);
    }
    AnnotationValue::Scalar(scalar_text(node, source))
}

/// String literals are decoded to their value; other expressions keep their
/// source text.
fn scalar_text(node: Node, source: &str) -> String {
    let text = node_text(&node, source);
    if node.kind() == "string_literal" {
        return string_value(&text);
    }
    text
}

/// Value of a string literal or text block, delimiters removed and escapes
/// decoded.
fn string_value(literal: &str) -> String {
    if let Some(body) = literal
        .strip_prefix(TEXT_BLOCK_DELIMITER)
        .and_then(|s| s.strip_suffix(TEXT_BLOCK_DELIMITER))
    {
        return unescape(&text_block_content(body));
    }
    let body = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal);
    unescape(body)
}

const TEXT_BLOCK_DELIMITER: &str = "\"\"\"";

/// Drops the line terminator after the opening delimiter, then strips the
/// incidental indentation and trailing spaces of every line. The closing
/// delimiter's line takes part in the indentation.
fn text_block_content(body: &str) -> String {
    let body = body.replace("\r\n", "\n");
    let body = body.split_once('\n').map_or(body.as_str(), |(_, rest)| rest);
    let lines: Vec<&str> = body.split('\n').collect();
    let last = lines.len().saturating_sub(1);
    let indent = lines
        .iter()
        .enumerate()
        .filter(|(i, line)| *i == last || !line.trim().is_empty())
        .map(|(_, line)| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|line| line.get(indent..).unwrap_or("").trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decodes Java escape sequences, including octal and `\uXXXX` escapes.
/// Unicode escapes forming a surrogate pair are combined.
fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_utf16(&mut units, &mut out);
            out.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            flush_utf16(&mut units, &mut out);
            out.push('\\');
            break;
        };
        if escape == 'u' {
            while chars.peek() == Some(&'u') {
                chars.next();
            }
            let hex: String = chars.by_ref().take(4).collect();
            match u16::from_str_radix(&hex, 16) {
                Ok(unit) if hex.len() == 4 => units.push(unit),
                _ => {
                    flush_utf16(&mut units, &mut out);
                    out.push_str("\\u");
                    out.push_str(&hex);
                }
            }
            continue;
        }

        flush_utf16(&mut units, &mut out);
        match escape {
            'b' => out.push('\u{8}'),
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'f' => out.push('\u{c}'),
            'r' => out.push('\r'),
            's' => out.push(' '),
            '"' | '\'' | '\\' => out.push(escape),
            // Line continuation inside a text block.
            '\n' => {}
            d if d.is_digit(8) => {
                let max_len = if d <= '3' { 3 } else { 2 };
                let mut value = d.to_digit(8).unwrap_or_default();
                for _ in 1..max_len {
                    match chars.peek().and_then(|n| n.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    flush_utf16(&mut units, &mut out);
    out
}

fn flush_utf16(units: &mut Vec<u16>, out: &mut String) {
    if units.is_empty() {
        return;
    }
    out.extend(
        char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

#[cfg(test)]
mod tests {
    use super::string_value;
    use super::super::JavaSourceParser;
    use crate::model::{JavaAnnotation, JavaType};
    use beansec_api::annotation::AnnotationValue;
    use std::path::Path;

    fn parse(source: &str) -> JavaType {
        JavaSourceParser::default()
            .parse_unit(Path::new("Sample.java"), source)
            .first_type
            .unwrap()
    }

    fn find<'a>(annotations: &'a [JavaAnnotation], name: &str) -> &'a JavaAnnotation {
        annotations.iter().find(|a| a.name == name).unwrap()
    }

    #[test]
    fn reads_both_spellings_and_value_shapes() {
        let ty = parse(
            r#"
            @javax.ejb.Stateless
            @RolesAllowed({"admin", "auditor"})
            @RunAs("system")
            @DeclareRoles(value = {"a"})
            public class OrderService {}
            "#,
        );
        let names: Vec<_> = ty.annotations.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["javax.ejb.Stateless", "RolesAllowed", "RunAs", "DeclareRoles"]
        );
        assert_eq!(find(&ty.annotations, "javax.ejb.Stateless").value, None);
        assert_eq!(
            find(&ty.annotations, "RolesAllowed").value,
            Some(AnnotationValue::List(vec!["admin".into(), "auditor".into()]))
        );
        assert_eq!(
            find(&ty.annotations, "RunAs").value,
            Some(AnnotationValue::Scalar("system".into()))
        );
        assert_eq!(
            find(&ty.annotations, "DeclareRoles").value,
            Some(AnnotationValue::List(vec!["a".into()]))
        );
    }

    #[test]
    fn ignores_members_other_than_value() {
        let ty = parse(
            r#"
            @MessageDriven(mappedName = "jms/orders")
            public class Listener {
                @RolesAllowed(value = "admin", comments = "x")
                public void onMessage() {}
            }
            "#,
        );
        assert_eq!(find(&ty.annotations, "MessageDriven").value, None);
        assert_eq!(
            find(&ty.methods[0].annotations, "RolesAllowed").value,
            Some(AnnotationValue::Scalar("admin".into()))
        );
    }

    #[test]
    fn constant_references_keep_source_text() {
        let ty = parse("@RolesAllowed({Roles.ADMIN, \"user\"}) class A {}");
        assert_eq!(
            find(&ty.annotations, "RolesAllowed").value,
            Some(AnnotationValue::List(vec!["Roles.ADMIN".into(), "user".into()]))
        );
    }

    #[test]
    fn string_literals_decode_escapes() {
        assert_eq!(string_value(r#""a\"b""#), "a\"b");
        assert_eq!(string_value(r#""c\\d""#), "c\\d");
        assert_eq!(string_value(r#""\"admin\"""#), "\"admin\"");
        assert_eq!(string_value(r#""tab\tnl\n\'q\'""#), "tab\tnl\n'q'");
        assert_eq!(string_value(r#""\101\60\7""#), "A0\u{7}");
        assert_eq!(string_value(r#""A\uuu00e9""#), "Aé");
        assert_eq!(string_value(r#""\uD83D\uDE00""#), "\u{1F600}");
    }

    #[test]
    fn text_blocks_strip_incidental_indentation() {
        let literal = "\"\"\"\n        admin\n          auditor  \n        \"\"\"";
        assert_eq!(string_value(literal), "admin\n  auditor\n");
        assert_eq!(string_value("\"\"\"\n    a\\\n    b\"\"\""), "ab");
    }

    #[test]
    fn escaped_role_names_in_source() {
        let ty = parse(r#"@RolesAllowed({"a\"b", "c\\d", "Admin"}) class A {}"#);
        assert_eq!(
            find(&ty.annotations, "RolesAllowed").value,
            Some(AnnotationValue::List(vec![
                "a\"b".into(),
                "c\\d".into(),
                "Admin".into()
            ]))
        );
    }

    #[test]
    fn broken_value_list_makes_annotation_malformed() {
        let ty = parse(r#"@Stateless @RolesAllowed({"a" "b"}) public class A {}"#);
        assert!(!find(&ty.annotations, "Stateless").malformed);
        assert!(
            ty.annotations
                .iter()
                .filter(|a| a.name == "RolesAllowed")
                .all(|a| a.malformed || a.value.is_none())
        );
    }
}
