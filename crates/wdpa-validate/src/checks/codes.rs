//! Country code lists and source table references.

use std::collections::BTreeSet;

use wdpa_model::{ReferenceCodes, SourceTable};

use super::offending_ids;

/// Separator between codes in `ISO3` and `PARENT_ISO3`.
pub const CODE_SEPARATOR: char = ';';

/// Returns true when every `;`-separated component is a reference code.
///
/// Null and empty components are invalid, so `"USA;"` fails.
pub fn valid_code_list(value: Option<&str>, codes: &ReferenceCodes) -> bool {
    let Some(value) = value else {
        return false;
    };
    value
        .split(CODE_SEPARATOR)
        .all(|code| !code.is_empty() && codes.contains(code))
}

/// Records with an invalid code list.
pub fn invalid_code_lists(
    ids: &[String],
    values: &[Option<String>],
    codes: &ReferenceCodes,
) -> BTreeSet<String> {
    offending_ids(ids, |idx| !valid_code_list(values[idx].as_deref(), codes))
}

/// Records whose value is null or missing from the source table.
pub fn unknown_sources(
    ids: &[String],
    values: &[Option<String>],
    table: &SourceTable,
) -> BTreeSet<String> {
    offending_ids(ids, |idx| {
        values[idx].as_deref().is_none_or(|id| !table.contains(id))
    })
}
