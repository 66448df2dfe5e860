/// A trait to abstract over environment variable access.
///
/// Color level detection only ever asks a handful of questions about
/// environment variables, which this trait answers on top of a single
/// required method. Tests substitute a fake environment for the process
/// environment.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Try reading the environment variable as a lower-case string.
    fn read_lowercase(&self, key: &str) -> Option<String> {
        self.read(key).ok().map(|mut s| {
            s.make_ascii_lowercase();
            s
        })
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use std::collections::HashMap;

    /// A fake environment backed by a hash map.
    pub(crate) struct FakeEnv {
        bindings: HashMap<String, String>,
    }

    impl FakeEnv {
        /// Create a new, empty fake environment.
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
            }
        }

        /// Set the fake environment variable.
        pub(crate) fn set(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> &mut Self {
            self.bindings
                .insert(key.as_ref().to_string(), value.as_ref().to_string());
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
            self.bindings.get(key).map(|v| v.into())
        }
    }

    #[test]
    fn test_fake_env() {
        let env = &mut FakeEnv::new();
        assert!(env.read("TERM").is_err());
        assert_eq!(env.read_lowercase("TERM"), None);

        env.set("TERM", "");
        assert_eq!(env.read("TERM"), Ok(String::new()));

        env.set("TERM", "XTerm-256Color");
        assert_eq!(env.read_lowercase("TERM"), Some("xterm-256color".to_string()));
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
