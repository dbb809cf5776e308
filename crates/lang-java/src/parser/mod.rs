use crate::model::{JavaCompilationUnit, JavaMethod, JavaType};
use beansec_api::error::IntrospectionError;
use std::path::Path;
use tree_sitter::{Node, Parser};

mod annotations;

pub(crate) use annotations::read_annotations;

/// Top-level declarations that count as a compilation unit's type.
const TYPE_DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

const CONSTRUCTOR_KINDS: &[&str] = &["constructor_declaration", "compact_constructor_declaration"];

pub(crate) fn is_comment(node: &Node) -> bool {
    matches!(node.kind(), "line_comment" | "block_comment")
}

pub(crate) fn node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .unwrap_or_default()
        .to_string()
}

#[derive(Clone)]
pub struct JavaSourceParser {
    pub language: tree_sitter::Language,
    pub include_constructors: bool,
}

impl JavaSourceParser {
    pub fn new(include_constructors: bool) -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
            include_constructors,
        }
    }

    /// Reads the first type declared in `source`, named after `path`'s file name.
    pub fn parse_unit(&self, path: &Path, source: &str) -> JavaCompilationUnit {
        let element_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let first_type = self.parse_first_type(&element_name, source);
        JavaCompilationUnit {
            path: path.to_path_buf(),
            element_name,
            first_type,
        }
    }

    fn parse_first_type(
        &self,
        element_name: &str,
        source: &str,
    ) -> Result<JavaType, IntrospectionError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| IntrospectionError::Other(format!("Java grammar unavailable: {}", e)))?;
        let tree = parser.parse(source, None).ok_or_else(|| {
            IntrospectionError::Other(format!("Parsing {} did not complete", element_name))
        })?;

        let root = tree.root_node();
        let mut cursor = root.walk();
        let declaration = root
            .named_children(&mut cursor)
            .find(|n| TYPE_DECLARATION_KINDS.contains(&n.kind()))
            .ok_or_else(|| IntrospectionError::NoTypeDeclared(element_name.to_string()))?;

        Ok(self.read_type(declaration, source))
    }

    fn read_type(&self, declaration: Node, source: &str) -> JavaType {
        let name = declaration
            .child_by_field_name("name")
            .map(|n| node_text(&n, source))
            .unwrap_or_default();

        let mut methods = Vec::new();
        if let Some(body) = declaration.child_by_field_name("body") {
            self.collect_methods(body, source, &mut methods);
        }

        JavaType {
            name,
            kind: declaration.kind().to_string(),
            annotations: read_annotations(declaration, source),
            methods,
        }
    }

    /// Direct members only; nested types keep their own methods.
    fn collect_methods(&self, body: Node, source: &str, methods: &mut Vec<JavaMethod>) {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            let kind = member.kind();
            let is_constructor = CONSTRUCTOR_KINDS.contains(&kind);
            if kind == "enum_body_declarations" {
                self.collect_methods(member, source, methods);
            } else if kind == "method_declaration" || (is_constructor && self.include_constructors)
            {
                let Some(name_node) = member.child_by_field_name("name") else {
                    continue;
                };
                methods.push(JavaMethod {
                    name: node_text(&name_node, source),
                    annotations: read_annotations(member, source),
                    is_constructor,
                });
            }
        }
    }
}

impl Default for JavaSourceParser {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> JavaType {
        JavaSourceParser::default()
            .parse_unit(Path::new("Sample.java"), source)
            .first_type
            .unwrap()
    }

    #[test]
    fn reads_first_top_level_type_only() {
        let ty = parse(
            r#"
            package shop;
            import javax.ejb.Stateless;
            @Stateless
            public class First {
                public void a() {}
                static class Inner { void hidden() {} }
                public int b(String s) { return 0; }
            }
            class Second { void c() {} }
            "#,
        );
        assert_eq!(ty.name, "First");
        let names: Vec<_> = ty.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn constructors_follow_the_flag() {
        let source = "@Stateful public class Cart { public Cart() {} void add() {} }";
        let with = parse(source);
        assert_eq!(with.methods.len(), 2);
        assert!(with.methods[0].is_constructor);

        let without = JavaSourceParser::new(false)
            .parse_unit(Path::new("Cart.java"), source)
            .first_type
            .unwrap();
        let names: Vec<_> = without.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["add"]);
    }

    #[test]
    fn enum_body_declarations_are_members() {
        let ty = parse("@Singleton enum Registry { INSTANCE; void lookup() {} }");
        assert_eq!(ty.kind, "enum_declaration");
        assert_eq!(ty.methods[0].name, "lookup");
    }

    #[test]
    fn file_without_type_reports_no_type_declared() {
        let unit = JavaSourceParser::default()
            .parse_unit(Path::new("package-info.java"), "package shop;");
        assert_eq!(unit.element_name, "package-info.java");
        assert!(matches!(
            unit.first_type,
            Err(IntrospectionError::NoTypeDeclared(_))
        ));
    }
}
