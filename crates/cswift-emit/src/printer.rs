//! Swift surface syntax for [`Declaration`] trees.

use cswift_core::decl::{AccessLevel, CDeclKind, Declaration, Extension, MemberFunction, MemberVariable, Parameter, TypeAlias};
use cswift_core::doc_block::DocCommentBlock;

use crate::stream::SyntaxStream;

/// Reserved words that must be escaped with backticks when used as names.
const SWIFT_KEYWORDS: &[&str] = &[
    "as", "associatedtype", "break", "case", "catch", "class", "continue", "default", "defer", "deinit", "do",
    "else", "enum", "extension", "fallthrough", "false", "fileprivate", "for", "func", "guard", "if", "import",
    "in", "init", "inout", "internal", "is", "let", "nil", "open", "operator", "private", "protocol", "public",
    "repeat", "rethrows", "return", "self", "Self", "static", "struct", "subscript", "super", "switch", "throw",
    "throws", "true", "try", "typealias", "var", "where", "while", "Any", "Type",
];

/// `name`, backticked when it collides with a Swift keyword.
#[must_use]
pub fn escape_identifier(name: &str) -> String {
    if SWIFT_KEYWORDS.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

/// Render a single declaration as Swift source.
#[must_use]
pub fn render(decl: &Declaration) -> String {
    let mut stream = SyntaxStream::new();
    write_declaration(&mut stream, decl);
    stream.finish()
}

pub fn write_declaration(stream: &mut SyntaxStream, decl: &Declaration) {
    match decl {
        Declaration::Variable(variable) => write_variable(stream, variable),
        Declaration::Function(function) => write_function(stream, function),
        Declaration::TypeAlias(alias) => write_typealias(stream, alias),
        Declaration::Extension(extension) => write_extension(stream, extension),
    }
}

/// Whether writing `decl` at the top level produces any text.
#[must_use]
pub fn has_output(decl: &Declaration) -> bool {
    match decl {
        Declaration::Extension(extension) => {
            !extension.members.is_empty() || !extension.conformances.is_empty() || type_alias_line(extension).is_some()
        }
        Declaration::TypeAlias(alias) => alias.info.original_name.is_some(),
        Declaration::Variable(_) | Declaration::Function(_) => true,
    }
}

fn write_doc_comment(stream: &mut SyntaxStream, doc: Option<&DocCommentBlock>) {
    let Some(doc) = doc else {
        return;
    };
    for line in doc.lines() {
        if line.is_empty() {
            stream.line("///");
        } else {
            stream.line(&format!("/// {line}"));
        }
    }
}

/// `typealias <Swift> = <C>` for struct and enum extensions whose Swift name
/// differs from the C name they were generated from.
fn type_alias_line(extension: &Extension) -> Option<String> {
    let original = extension.info.original_name.as_deref()?;
    if !matches!(extension.info.c_kind, CDeclKind::Struct | CDeclKind::Enum) {
        return None;
    }
    let name = extension.info.name.to_string();
    (name != original).then(|| format!("{} typealias {name} = {original}", extension.access_level.as_str()))
}

fn separate(stream: &mut SyntaxStream, first: &mut bool) {
    if !*first {
        stream.line("");
    }
    *first = false;
}

fn write_extension(stream: &mut SyntaxStream, extension: &Extension) {
    let name = extension.info.name.to_string();
    let mut doc = extension.info.doc_comment.as_ref();
    let mut first = true;

    if let Some(alias) = type_alias_line(extension) {
        separate(stream, &mut first);
        write_doc_comment(stream, doc.take());
        stream.line(&alias);
    }

    if !extension.conformances.is_empty() {
        separate(stream, &mut first);
        let conformances: Vec<String> = extension
            .conformances
            .iter()
            .map(|protocol| format!("@retroactive {protocol}"))
            .collect();
        stream.line(&format!("extension {name}: {} {{ }}", conformances.join(", ")));
    }

    if extension.members.is_empty() {
        return;
    }

    separate(stream, &mut first);
    write_doc_comment(stream, doc);
    stream.block(&format!("{} extension {name} {{", extension.access_level.as_str()), |s| {
        for (index, member) in extension.members.iter().enumerate() {
            if index > 0 {
                s.line("");
            }
            write_declaration(s, member);
        }
    });
}

fn modifiers(access_level: Option<AccessLevel>, is_static: bool) -> String {
    let mut prefix = String::new();
    if let Some(level) = access_level {
        prefix.push_str(level.as_str());
        prefix.push(' ');
    }
    if is_static {
        prefix.push_str("static ");
    }
    prefix
}

fn write_variable(stream: &mut SyntaxStream, variable: &MemberVariable) {
    write_doc_comment(stream, variable.info.doc_comment.as_ref());

    let keyword = if variable.accessor_lines.is_some() { "var" } else { "let" };
    let mut header = format!(
        "{}{keyword} {}",
        modifiers(variable.access_level, variable.is_static),
        escape_identifier(&variable.info.name.to_string())
    );
    if let Some(ty) = &variable.var_type {
        header.push_str(&format!(": {ty}"));
    }
    if let Some(value) = &variable.initial_value {
        header.push_str(&format!(" = {value}"));
    }

    match &variable.accessor_lines {
        Some(lines) => {
            header.push_str(" {");
            stream.block(&header, |s| {
                for line in lines {
                    s.line(line);
                }
            });
        }
        None => stream.line(&header),
    }
}

fn parameter(parameter: &Parameter) -> String {
    let label = parameter.label.as_deref().map_or_else(|| "_".to_string(), escape_identifier);
    let decoration = parameter
        .decoration
        .as_deref()
        .map(|decoration| format!("{decoration} "))
        .unwrap_or_default();
    format!(
        "{label} {}: {decoration}{}",
        escape_identifier(&parameter.name),
        parameter.ty
    )
}

fn write_function(stream: &mut SyntaxStream, function: &MemberFunction) {
    write_doc_comment(stream, function.info.doc_comment.as_ref());

    let parameters: Vec<String> = function.parameters.iter().map(parameter).collect();
    let mut header = format!(
        "{}func {}({}) ",
        modifiers(function.access_level, function.is_static),
        escape_identifier(&function.info.name.to_string()),
        parameters.join(", ")
    );
    if let Some(return_type) = function.return_type.as_ref().filter(|ty| !ty.is_void()) {
        header.push_str(&format!("-> {return_type} "));
    }

    if function.body.is_empty() {
        header.push_str("{ }");
        stream.line(&header);
        return;
    }
    header.push('{');
    stream.block(&header, |s| {
        for line in &function.body {
            s.line(line);
        }
    });
}

fn write_typealias(stream: &mut SyntaxStream, alias: &TypeAlias) {
    let Some(original) = &alias.info.original_name else {
        return;
    };
    write_doc_comment(stream, alias.info.doc_comment.as_ref());
    stream.line(&format!(
        "{} typealias {} = {original}",
        alias.access_level.as_str(),
        escape_identifier(&alias.info.name.to_string())
    ));
}
