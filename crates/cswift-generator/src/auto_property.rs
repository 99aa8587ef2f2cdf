//! Folds `getX`/`setX` method pairs into computed properties.

use cswift_core::decl::{Declaration, Extension, MemberFunction, MemberVariable};
use cswift_core::doc_block::DocCommentBlock;

const GETTER: &str = "get";
const SETTER: &str = "set";

#[derive(Default)]
struct Accessors {
    getters: Vec<usize>,
    setters: Vec<usize>,
}

/// Apply [`fold_extension`] to every top-level extension.
pub fn fold_accessors(decls: &mut [Declaration]) {
    let mut folded = 0usize;
    for decl in decls {
        if let Declaration::Extension(extension) = decl {
            folded += fold_extension(extension);
        }
    }
    tracing::debug!(count = folded, "folded accessor pairs into properties");
}

/// Replace each eligible getter/setter pair in `extension` with one computed
/// property appended after the remaining members. Returns the number of
/// pairs folded.
pub fn fold_extension(extension: &mut Extension) -> usize {
    let mut groups: Vec<(String, Accessors)> = Vec::new();
    for (index, member) in extension.members.iter().enumerate() {
        let Declaration::Function(function) = member else {
            continue;
        };
        let name = function.info.name.to_string();
        let (suffix, is_getter) = if let Some(suffix) = name.strip_prefix(GETTER) {
            (suffix, true)
        } else if let Some(suffix) = name.strip_prefix(SETTER) {
            (suffix, false)
        } else {
            continue;
        };
        if suffix.is_empty() {
            continue;
        }

        let slot = match groups.iter().position(|(key, _)| key == suffix) {
            Some(slot) => slot,
            None => {
                groups.push((suffix.to_string(), Accessors::default()));
                groups.len() - 1
            }
        };
        let accessors = &mut groups[slot].1;
        if is_getter {
            accessors.getters.push(index);
        } else {
            accessors.setters.push(index);
        }
    }

    let mut removed = Vec::new();
    let mut properties = Vec::new();
    for (_, accessors) in &groups {
        let ([getter], [setter]) = (accessors.getters.as_slice(), accessors.setters.as_slice()) else {
            continue;
        };
        let (Declaration::Function(get), Declaration::Function(set)) =
            (&extension.members[*getter], &extension.members[*setter])
        else {
            continue;
        };
        if let Some(property) = property_from(get, set) {
            removed.extend([*getter, *setter]);
            properties.push(Declaration::Variable(property));
        }
    }

    let folded = properties.len();
    if folded > 0 {
        let mut index = 0;
        extension.members.retain(|_| {
            let keep = !removed.contains(&index);
            index += 1;
            keep
        });
        extension.members.extend(properties);
    }
    folded
}

fn property_from(getter: &MemberFunction, setter: &MemberFunction) -> Option<MemberVariable> {
    let [parameter] = setter.parameters.as_slice() else {
        return None;
    };
    let var_type = getter.return_type.as_ref()?;
    if !var_type.is_equivalent(&parameter.ty)
        || getter.is_static != setter.is_static
        || getter.access_level != setter.access_level
    {
        return None;
    }

    let mut accessor_lines = vec!["get {".to_string()];
    accessor_lines.extend(getter.body.iter().map(|line| format!("    {line}")));
    accessor_lines.push("}".to_string());
    accessor_lines.push(format!("set({}) {{", parameter.name));
    accessor_lines.extend(setter.body.iter().map(|line| format!("    {line}")));
    accessor_lines.push("}".to_string());

    let mut info = getter.info.clone();
    info.name = getter.info.name.removing_prefixes(&[GETTER], false).camel_cased("_");
    info.doc_comment = DocCommentBlock::merge(getter.info.doc_comment.as_ref(), setter.info.doc_comment.as_ref());

    let mut property = MemberVariable::new(info);
    property.is_static = getter.is_static;
    property.access_level = getter.access_level;
    property.var_type = Some(var_type.clone());
    property.accessor_lines = Some(accessor_lines);
    Some(property)
}
