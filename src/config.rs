use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const CONTACTS_FILE_ENV: &str = "CONTACTS_FILE";
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

/// Contact file named by `CONTACTS_FILE`, falling back to `contacts.json` in
/// the working directory. `lookup` reads one variable by name.
pub fn storage_path(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup(CONTACTS_FILE_ENV)
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTACTS_FILE))
}

/// [`storage_path`] over the process environment, after loading `.env`.
pub fn storage_path_from_env() -> PathBuf {
    dotenv().ok();

    storage_path(|key| env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn storage_path_follows_variable() {
        let env = vars(&[(CONTACTS_FILE_ENV, "/tmp/parish/contacts.json")]);

        assert_eq!(
            storage_path(|key| env.get(key).cloned()),
            PathBuf::from("/tmp/parish/contacts.json")
        );
    }

    #[test]
    fn storage_path_defaults_when_unset_or_blank() {
        let unset = vars(&[]);
        let blank = vars(&[(CONTACTS_FILE_ENV, "  ")]);

        assert_eq!(
            storage_path(|key| unset.get(key).cloned()),
            PathBuf::from(DEFAULT_CONTACTS_FILE)
        );
        assert_eq!(
            storage_path(|key| blank.get(key).cloned()),
            PathBuf::from(DEFAULT_CONTACTS_FILE)
        );
    }
}
