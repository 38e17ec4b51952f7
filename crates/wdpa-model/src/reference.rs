use std::collections::BTreeSet;

/// Code marking an area beyond national jurisdiction.
pub const ABNJ: &str = "ABNJ";

/// ISO 3166-1 alpha-3 codes accepted in `ISO3` and `PARENT_ISO3`.
///
/// The `ABNJ` sentinel is always a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCodes {
    codes: BTreeSet<String>,
}

impl ReferenceCodes {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut codes: BTreeSet<String> = codes.into_iter().map(Into::into).collect();
        codes.insert(ABNJ.to_string());
        Self { codes }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}
