/// Profile field name to provider field name(s).
pub const PROFILE_FIELD_MAP: &[(&str, &[&str])] = &[
    ("id", &["id"]),
    ("username", &["username"]),
    ("displayName", &["name"]),
    ("name", &["last_name", "first_name"]),
    ("url", &["url"]),
];

/// Translates profile field names to the provider's comma separated field
/// list. Unknown names are skipped.
pub fn convert_profile_fields<S: AsRef<str>>(profile_fields: &[S]) -> String {
    profile_fields
        .iter()
        .filter_map(|field| {
            PROFILE_FIELD_MAP
                .iter()
                .find(|(name, _)| *name == field.as_ref())
                .map(|(_, mapped)| *mapped)
        })
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_convert_profile_fields_expands_name() {
        let fixture = ["id", "name", "displayName"];
        let actual = convert_profile_fields(&fixture);
        let expected = "id,last_name,first_name,name";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_convert_profile_fields_skips_unknown() {
        let fixture = ["emails", "url"];
        let actual = convert_profile_fields(&fixture);
        let expected = "url";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_convert_profile_fields_empty() {
        let fixture: [&str; 0] = [];
        let actual = convert_profile_fields(&fixture);
        assert_eq!(actual, "");
    }
}
