//! Name lookup over an already-loaded extension list.
//!
//! Matching is exact apart from case: no trimming, no partial or fuzzy
//! matches. When several records share a display name ignoring case, the
//! first one in catalog order wins; uniqueness is not enforced anywhere.

use crate::catalog::Extension;

/// Find the first extension whose display name equals `name`, ignoring case.
pub fn find_extension<'a>(name: &str, extensions: &'a [Extension]) -> Option<&'a Extension> {
    let wanted = name.to_lowercase();
    let mut matches = extensions
        .iter()
        .filter(|ext| ext.name.to_lowercase() == wanted);

    let first = matches.next()?;
    if let Some(shadowed) = matches.next() {
        tracing::warn!(
            name,
            chosen = %first.coords(),
            shadowed = %shadowed.coords(),
            "several extensions share this name; using the first"
        );
    }
    Some(first)
}

/// Outcome of looking up several names at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    /// Requested name paired with its record, in request order.
    pub found: Vec<(String, &'a Extension)>,
    /// Names with no matching record, in request order.
    pub missing: Vec<String>,
}

impl Resolution<'_> {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Resolve every requested name against `extensions`.
pub fn resolve_all<'a, S: AsRef<str>>(names: &[S], extensions: &'a [Extension]) -> Resolution<'a> {
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for name in names {
        let name = name.as_ref();
        match find_extension(name, extensions) {
            Some(ext) => found.push((name.to_string(), ext)),
            None => missing.push(name.to_string()),
        }
    }
    Resolution { found, missing }
}
