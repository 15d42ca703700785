//! Finding fingerprints.
//!
//! The fingerprint is the wire format for persisted dismissals: the host
//! stores it verbatim and future runs match it by literal string equality.
//! The field order and `|` separator are frozen; changing either orphans
//! every dismissal existing users have saved. New disambiguators may only be
//! appended at the end.

/// Build the stable identity string for a finding.
///
/// Format: `rule_id|file_path|scene_name|entity...|extra`, with absent
/// optional fields contributing an empty segment.
pub fn fingerprint(
    rule_id: &str,
    file_path: Option<&str>,
    scene_name: Option<&str>,
    entities: &[&str],
    extra: Option<&str>,
) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(4 + entities.len());
    parts.push(rule_id);
    parts.push(file_path.unwrap_or(""));
    parts.push(scene_name.unwrap_or(""));
    parts.extend_from_slice(entities);
    parts.push(extra.unwrap_or(""));
    parts.join("|")
}
