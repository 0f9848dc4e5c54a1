/// Loads service configuration from environment variables via `envy`:
/// each struct field maps to the upper-cased env var of the same name.
///
/// Implementors derive `serde::Deserialize` and call `Config::from_env()`
/// once at startup. Configuration is immutable after that point.
///
/// # Panics
///
/// Panics if a required env var is missing or cannot be deserialized —
/// a misconfigured service should fail at boot, not at first request.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Self {
        envy::from_env().expect("failed to load config from environment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct PathConfig {
        // PATH is set in every environment the tests run in.
        path: String,
    }

    impl Config for PathConfig {}

    #[test]
    fn should_map_fields_to_upper_cased_env_vars() {
        let config = PathConfig::from_env();
        assert!(!config.path.is_empty());
    }
}
