//! Exported signature extraction from Go source.

use arborium_tree_sitter::Node;
use gonode_core::{BoundaryType, ExportedFunction, Parameter};

use super::comments;
use super::error::ExtractError;
use super::type_map::{self, TypeExpr, UnsupportedType};
use crate::diagnostics::Span;

/// Extract every exported top-level function of a Go file, in declaration order.
///
/// Functions without an export marker are skipped. Any syntax error, any
/// unsupported type, or any function with more than one result fails the
/// whole file. Parameters are named `arg<N>` by position only in lists where
/// none is named.
pub fn extract(source: &str) -> Result<Vec<ExportedFunction>, ExtractError> {
    let Some(tree) = gonode_langs::go().parse(source) else {
        return Err(ExtractError::Parse {
            message: "Go grammar could not be loaded".to_string(),
            span: Span::default(),
        });
    };

    let root = tree.root_node();
    if root.has_error() {
        return Err(syntax_error(root, source));
    }
    check_package_clause(root)?;
    if let Some(list) = mixed_parameter_list(root) {
        return Err(ExtractError::Parse {
            message: "mixed named and unnamed parameters".to_string(),
            span: list.byte_range().into(),
        });
    }

    let extractor = Extractor { source };
    let mut exported = Vec::new();
    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        if node.kind() != "function_declaration" {
            continue;
        }
        if let Some(func) = extractor.function(node)? {
            exported.push(func);
        }
    }

    Ok(exported)
}

struct Extractor<'s> {
    source: &'s str,
}

impl<'s> Extractor<'s> {
    fn text(&self, node: Node<'_>) -> &'s str {
        &self.source[node.byte_range()]
    }

    fn function(&self, node: Node<'_>) -> Result<Option<ExportedFunction>, ExtractError> {
        let group: Vec<&str> = comments::doc_group(node)
            .into_iter()
            .map(|c| self.text(c))
            .collect();
        let Some(doc) = comments::documentation(&group) else {
            return Ok(None);
        };
        let Some(name_node) = node.child_by_field_name("name") else {
            return Ok(None);
        };
        let name = self.text(name_node);

        let params = match node.child_by_field_name("parameters") {
            Some(list) => self.parameters(name, list)?,
            None => Vec::new(),
        };
        let return_type = match node.child_by_field_name("result") {
            Some(result) => self.result(name, result)?,
            None => None,
        };

        Ok(Some(ExportedFunction {
            name: name.to_string(),
            params,
            return_type,
            doc,
        }))
    }

    fn parameters(&self, function: &str, list: Node<'_>) -> Result<Vec<Parameter>, ExtractError> {
        let mut params = Vec::new();
        let mut cursor = list.walk();

        for decl in list.named_children(&mut cursor) {
            match decl.kind() {
                "parameter_declaration" => {
                    let Some(ty_node) = decl.child_by_field_name("type") else {
                        continue;
                    };
                    let ty = self.map_type(function, ty_node)?;

                    let mut names_cursor = decl.walk();
                    let names: Vec<Node<'_>> = decl
                        .children_by_field_name("name", &mut names_cursor)
                        .collect();
                    if names.is_empty() {
                        params.push(Parameter::new(format!("arg{}", params.len()), ty));
                    }
                    for name in names {
                        params.push(Parameter::new(self.text(name), ty));
                    }
                }
                "variadic_parameter_declaration" => {
                    let ty = decl
                        .child_by_field_name("type")
                        .map_or("", |t| self.text(t));
                    return Err(ExtractError::UnsupportedType {
                        function: function.to_string(),
                        ty: format!("...{}", ty),
                        span: decl.byte_range().into(),
                    });
                }
                _ => {}
            }
        }

        Ok(params)
    }

    fn result(
        &self,
        function: &str,
        result: Node<'_>,
    ) -> Result<Option<BoundaryType>, ExtractError> {
        if result.kind() != "parameter_list" {
            return self.map_type(function, result).map(Some);
        }

        let mut cursor = result.walk();
        let decls: Vec<Node<'_>> = result
            .named_children(&mut cursor)
            .filter(|d| d.kind() == "parameter_declaration")
            .collect();

        let count: usize = decls
            .iter()
            .map(|decl| {
                let mut names_cursor = decl.walk();
                decl.children_by_field_name("name", &mut names_cursor)
                    .count()
                    .max(1)
            })
            .sum();

        match count {
            0 => Ok(None),
            1 => match decls[0].child_by_field_name("type") {
                Some(ty_node) => self.map_type(function, ty_node).map(Some),
                None => Ok(None),
            },
            _ => Err(ExtractError::MultipleReturnValues {
                function: function.to_string(),
                count,
                span: result.byte_range().into(),
            }),
        }
    }

    fn map_type(&self, function: &str, node: Node<'_>) -> Result<BoundaryType, ExtractError> {
        type_map::map(&self.type_expr(node)).map_err(|UnsupportedType(ty)| {
            ExtractError::UnsupportedType {
                function: function.to_string(),
                ty,
                span: node.byte_range().into(),
            }
        })
    }

    fn type_expr(&self, node: Node<'_>) -> TypeExpr {
        match node.kind() {
            "type_identifier" | "identifier" => TypeExpr::Ident(self.text(node).to_string()),
            "pointer_type" => {
                if let Some(inner) = node.named_child(0)
                    && inner.kind() == "qualified_type"
                    && let Some(package) = inner.child_by_field_name("package")
                    && let Some(name) = inner.child_by_field_name("name")
                {
                    return TypeExpr::PointerToSelector {
                        package: self.text(package).to_string(),
                        name: self.text(name).to_string(),
                    };
                }
                TypeExpr::Other(self.text(node).to_string())
            }
            _ => TypeExpr::Other(self.text(node).to_string()),
        }
    }
}

/// Locate the first error or missing node and describe it.
fn syntax_error(root: Node<'_>, source: &str) -> ExtractError {
    let mut node = root;
    let mut cursor = root.walk();

    while !node.is_error() && !node.is_missing() {
        let next = node
            .children(&mut cursor)
            .find(|child| child.has_error() || child.is_missing());
        match next {
            Some(child) => node = child,
            None => break,
        }
    }

    let message = if node.is_missing() {
        format!("missing `{}`", node.kind())
    } else {
        let text = source[node.byte_range()].lines().next().unwrap_or("").trim();
        if text.is_empty() {
            "unexpected end of input".to_string()
        } else {
            format!("unexpected `{}`", text)
        }
    };

    ExtractError::Parse {
        message,
        span: node.byte_range().into(),
    }
}

/// A Go file must open with its package clause, comments aside.
fn check_package_clause(root: Node<'_>) -> Result<(), ExtractError> {
    let mut cursor = root.walk();
    let first = root
        .named_children(&mut cursor)
        .find(|node| node.kind() != "comment");

    match first {
        Some(node) if node.kind() == "package_clause" => Ok(()),
        Some(node) => Err(ExtractError::Parse {
            message: "expected `package` clause".to_string(),
            span: node.byte_range().into(),
        }),
        None => Err(ExtractError::Parse {
            message: "expected `package` clause".to_string(),
            span: Span::new(root.end_byte(), root.end_byte()),
        }),
    }
}

/// First parameter list, in source order, where some entries are named and
/// others are not. The grammar accepts these, Go does not.
fn mixed_parameter_list(root: Node<'_>) -> Option<Node<'_>> {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.kind() == "parameter_list" && mixes_named_and_unnamed(node) {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }

    None
}

fn mixes_named_and_unnamed(list: Node<'_>) -> bool {
    let mut named = false;
    let mut unnamed = false;
    let mut cursor = list.walk();

    for decl in list.named_children(&mut cursor) {
        if !matches!(
            decl.kind(),
            "parameter_declaration" | "variadic_parameter_declaration"
        ) {
            continue;
        }
        if decl.child_by_field_name("name").is_some() {
            named = true;
        } else {
            unnamed = true;
        }
    }

    named && unnamed
}
