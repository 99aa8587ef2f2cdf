use cswift_core::decl::{CDeclKind, DeclLookup};
use serde::Serialize;

use crate::cli::{GlobalFlags, LookupArgs};
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct LookupRow {
    c_name: String,
    swift_name: Option<String>,
    kind: Option<CDeclKind>,
}

fn resolve(lookup: &DeclLookup, names: &[String]) -> Vec<LookupRow> {
    names
        .iter()
        .map(|name| {
            let entry = lookup.lookup_c_symbol(name);
            LookupRow {
                c_name: name.clone(),
                swift_name: entry.map(|entry| entry.swift_name.clone()),
                kind: entry.map(|entry| entry.c_kind),
            }
        })
        .collect()
}

fn text(rows: &[LookupRow]) -> String {
    rows.iter()
        .map(|row| {
            let swift = row.swift_name.as_deref().unwrap_or("(not generated)");
            format!("{} -> {swift}", row.c_name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handle `cswift lookup`.
pub fn handle(args: &LookupArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (_, generated) = super::run_pipeline(&args.source)?;
    let lookup = DeclLookup::build(&generated.declarations);
    let rows = resolve(&lookup, &args.names);
    output(&rows, flags.format, |rows| text(rows))
}
