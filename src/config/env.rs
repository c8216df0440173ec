//! Environment-driven configuration loading.
//!
//! A configuration type lists its keys as [`EnvField`]s in declaration order and
//! implements [`FromEnv`]. Resolution never fails: a key with neither an environment
//! value nor a default resolves to an empty string and logs a warning.

/// One configuration key read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvField {
    pub name: &'static str,
    pub default: Option<&'static str>,
}

impl EnvField {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    pub const fn with_default(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default: Some(default),
        }
    }
}

/// True when `name` has at least one cased character and all cased characters are
/// upper-case. Only such names are read from the environment.
pub fn is_config_key(name: &str) -> bool {
    let mut has_cased = false;
    for c in name.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Values resolved for a set of fields, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvValues {
    entries: Vec<(String, String)>,
    missing: Vec<String>,
}

impl EnvValues {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Removes and returns the value for `name`, or an empty string if it was never
    /// resolved.
    pub fn take(&mut self, name: &str) -> String {
        match self.entries.iter().position(|(key, _)| key == name) {
            Some(index) => self.entries.remove(index).1,
            None => String::new(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Keys that had neither an environment value nor a default.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }
}

/// Reads a variable from the process environment, converting non-UTF-8 values lossily.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}

pub fn resolve<F>(fields: &[EnvField], lookup: F) -> EnvValues
where
    F: Fn(&str) -> Option<String>,
{
    let mut values = EnvValues::default();

    for field in fields {
        if !is_config_key(field.name) {
            continue;
        }

        let value = match (lookup(field.name), field.default) {
            (Some(value), _) => value,
            (None, Some(default)) => default.to_string(),
            (None, None) => {
                tracing::warn!(variable = field.name, "environment variable not set");
                values.missing.push(field.name.to_string());
                String::new()
            }
        };

        values.entries.push((field.name.to_string(), value));
    }

    values
}

pub trait FromEnv: Sized {
    const FIELDS: &'static [EnvField];

    fn from_values(values: EnvValues) -> Self;

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_values(resolve(Self::FIELDS, lookup))
    }

    fn from_env() -> Self {
        Self::from_lookup(process_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_config_key() {
        assert!(is_config_key("API_KEY"));
        assert!(is_config_key("V2"));
        assert!(!is_config_key("api_key"));
        assert!(!is_config_key("Api_Key"));
        assert!(!is_config_key("_helper"));
        assert!(!is_config_key("123"));
        assert!(!is_config_key(""));
    }

    #[test]
    fn test_resolve_keeps_declaration_order() {
        let fields = [
            EnvField::required("ZETA"),
            EnvField::required("ALPHA"),
            EnvField::with_default("MID", "m"),
        ];
        let values = resolve(&fields, |_| Some("x".to_string()));

        let keys: Vec<&str> = values.keys().collect();
        assert_eq!(keys, vec!["ZETA", "ALPHA", "MID"]);
    }

    #[test]
    fn test_environment_wins_over_default() {
        let fields = [EnvField::with_default("REGION", "eu-west-1")];

        let values = resolve(&fields, |_| Some("us-east-2".to_string()));
        assert_eq!(values.get("REGION"), Some("us-east-2"));

        let values = resolve(&fields, |_| None);
        assert_eq!(values.get("REGION"), Some("eu-west-1"));
        assert!(values.missing().is_empty());
    }

    #[test]
    fn test_empty_environment_value_is_present() {
        let fields = [EnvField::required("TOKEN")];
        let values = resolve(&fields, |_| Some(String::new()));

        assert_eq!(values.get("TOKEN"), Some(""));
        assert!(values.missing().is_empty());
    }

    #[test]
    fn test_take_unknown_key_is_empty() {
        let mut values = resolve(&[EnvField::required("A")], |_| Some("1".to_string()));
        assert_eq!(values.take("A"), "1");
        assert_eq!(values.take("A"), "");
    }
}
