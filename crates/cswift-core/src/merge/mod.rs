//! Reconciles same-named declarations produced from independent C constructs.
//!
//! A struct typically yields one extension from its definition and one more
//! per free function mapped onto it as a method. Those fragments are folded
//! into a single extension here; anything else sharing a name is fatal.

use std::collections::HashMap;

use crate::CoreError;
use crate::c_ast::{CAst, NodeId};
use crate::decl::{Declaration, Extension, MemberFunction, MemberVariable};
use crate::doc_block::DocCommentBlock;

pub struct DeclMerger<'a> {
    ast: &'a CAst,
}

impl<'a> DeclMerger<'a> {
    #[must_use]
    pub const fn new(ast: &'a CAst) -> Self {
        Self { ast }
    }

    /// Merge declarations by rendered name, keeping first-occurrence order.
    ///
    /// # Errors
    ///
    /// Fails when two same-named declarations cannot be reconciled: a
    /// non-extension collision, extensions with different access levels, or
    /// members that disagree on a non-empty field.
    pub fn merge(&self, decls: Vec<Declaration>) -> Result<Vec<Declaration>, CoreError> {
        let mut merged: Vec<Declaration> = Vec::with_capacity(decls.len());
        let mut index: HashMap<String, usize> = HashMap::new();

        for decl in decls {
            let key = decl.name().to_string();
            let Some(&slot) = index.get(&key) else {
                index.insert(key, merged.len());
                merged.push(decl);
                continue;
            };

            let existing = &merged[slot];
            let combined = match (existing, &decl) {
                (Declaration::Extension(a), Declaration::Extension(b)) => {
                    Declaration::Extension(self.merge_extensions(a, b)?)
                }
                _ => {
                    return Err(CoreError::IncompatibleDeclarations {
                        name: key,
                        existing: existing.kind_label(),
                        existing_original: original_or_none(existing),
                        incoming: decl.kind_label(),
                        incoming_original: original_or_none(&decl),
                    });
                }
            };
            merged[slot] = combined;
        }

        tracing::debug!(count = merged.len(), "merged declarations");
        Ok(merged)
    }

    fn merge_extensions(&self, first: &Extension, second: &Extension) -> Result<Extension, CoreError> {
        let name = first.info.name.to_string();
        if first.access_level != second.access_level {
            return Err(CoreError::AccessLevelMismatch {
                name,
                first: first.access_level,
                second: second.access_level,
            });
        }

        let mut result = first.clone();
        result.info.original_node = self.choose_node(first.info.original_node, second.info.original_node);
        result.info.doc_comment = DocCommentBlock::merge(
            first.info.doc_comment.as_ref(),
            second.info.doc_comment.as_ref(),
        );
        result
            .conformances
            .extend(second.conformances.iter().cloned());
        result.members = merge_members(&name, &first.members, &second.members)?;
        Ok(result)
    }

    /// Prefer the struct node that has a field list, so a forward declaration
    /// never displaces the definition.
    fn choose_node(&self, first: Option<NodeId>, second: Option<NodeId>) -> Option<NodeId> {
        match (first, second) {
            (None, other) | (other, None) => other,
            (Some(a), Some(b)) => {
                if self.ast.is_struct(a) && self.ast.is_struct(b) && self.ast.struct_fields(a).is_none() {
                    Some(b)
                } else {
                    Some(a)
                }
            }
        }
    }
}

fn original_or_none(decl: &Declaration) -> String {
    decl.info()
        .original_name
        .clone()
        .unwrap_or_else(|| "<none>".to_string())
}

fn same_member(a: &Declaration, b: &Declaration) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b) && a.name() == b.name()
}

fn merge_members(
    owner: &str,
    first: &[Declaration],
    second: &[Declaration],
) -> Result<Vec<Declaration>, CoreError> {
    let mut result = first.to_vec();

    for incoming in second {
        let Some(slot) = result.iter().position(|m| same_member(m, incoming)) else {
            result.push(incoming.clone());
            continue;
        };
        result[slot] = match (&result[slot], incoming) {
            (Declaration::Variable(a), Declaration::Variable(b)) => {
                Declaration::Variable(merge_variables(owner, a, b)?)
            }
            (Declaration::Function(a), Declaration::Function(b)) => {
                Declaration::Function(merge_functions(owner, a, b)?)
            }
            (existing, _) => existing.clone(),
        };
    }

    Ok(result)
}

fn conflict(owner: &str, member: &str, field: &'static str, first: String, second: String) -> CoreError {
    CoreError::MemberConflict {
        owner: owner.to_string(),
        member: member.to_string(),
        field,
        first,
        second,
    }
}

fn describe<T: std::fmt::Debug>(value: &T) -> String {
    format!("{value:?}")
}

fn merge_variables(
    owner: &str,
    first: &MemberVariable,
    second: &MemberVariable,
) -> Result<MemberVariable, CoreError> {
    let member = first.info.name.to_string();
    if first.var_type != second.var_type {
        return Err(conflict(owner, &member, "type", describe(&first.var_type), describe(&second.var_type)));
    }
    if first.is_static != second.is_static {
        return Err(conflict(
            owner,
            &member,
            "is_static",
            first.is_static.to_string(),
            second.is_static.to_string(),
        ));
    }

    let mut result = first.clone();
    match (&first.initial_value, &second.initial_value) {
        (Some(a), Some(b)) if a != b => {
            return Err(conflict(owner, &member, "initial value", a.clone(), b.clone()));
        }
        (None, Some(b)) => result.initial_value = Some(b.clone()),
        _ => {}
    }

    // Both accessor blocks are kept; two `get` blocks can result.
    if let Some(extra) = &second.accessor_lines {
        result
            .accessor_lines
            .get_or_insert_with(Vec::new)
            .extend(extra.iter().cloned());
    }

    result.info.doc_comment = DocCommentBlock::merge(
        first.info.doc_comment.as_ref(),
        second.info.doc_comment.as_ref(),
    );
    Ok(result)
}

fn merge_functions(
    owner: &str,
    first: &MemberFunction,
    second: &MemberFunction,
) -> Result<MemberFunction, CoreError> {
    let member = first.info.name.to_string();
    let mut result = first.clone();

    if first.body != second.body {
        if first.body.is_empty() {
            result.body.clone_from(&second.body);
        } else if !second.body.is_empty() {
            return Err(conflict(owner, &member, "body", first.body.join("\n"), second.body.join("\n")));
        }
    }

    if first.parameters != second.parameters {
        if first.parameters.is_empty() {
            result.parameters.clone_from(&second.parameters);
        } else if !second.parameters.is_empty() {
            return Err(conflict(
                owner,
                &member,
                "parameters",
                describe(&first.parameters),
                describe(&second.parameters),
            ));
        }
    }

    match (&first.return_type, &second.return_type) {
        (Some(a), Some(b)) if a != b => {
            return Err(conflict(owner, &member, "return type", a.to_string(), b.to_string()));
        }
        (None, Some(b)) => result.return_type = Some(b.clone()),
        _ => {}
    }

    result.info.doc_comment = DocCommentBlock::merge(
        first.info.doc_comment.as_ref(),
        second.info.doc_comment.as_ref(),
    );
    Ok(result)
}

#[cfg(test)]
mod tests;
