use log::debug;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const SERPER_API_KEY: &str = "SERPER_API_KEY";
pub const GROQ_API_KEY: &str = "GROQ_API_KEY";

/// API keys for the three external services.
///
/// Built once from the environment and then handed to the pipeline explicitly.
/// A session may replace it with keys typed in by the user; nothing writes
/// back into the process environment.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub openai_api_key: Option<String>,
    pub serper_api_key: Option<String>,
    pub groq_api_key: Option<String>,
}

impl Credentials {
    pub fn new(
        openai_api_key: Option<String>,
        serper_api_key: Option<String>,
        groq_api_key: Option<String>
    ) -> Self {
        Self {
            openai_api_key: non_empty(openai_api_key),
            serper_api_key: non_empty(serper_api_key),
            groq_api_key: non_empty(groq_api_key),
        }
    }

    /// Read the keys from the environment. Unset and empty variables count as absent.
    pub fn from_env() -> Self {
        let read = |name: &str| {
            let value = std::env::var(name).ok();
            debug!("{} {}", name, if value.is_some() { "is set" } else { "is not set" });
            value
        };

        Self::new(read(OPENAI_API_KEY), read(SERPER_API_KEY), read(GROQ_API_KEY))
    }

    /// Key for an inference provider by name
    pub fn provider_key(&self, provider: &str) -> Option<&str> {
        match provider.to_lowercase().as_str() {
            "openai" => self.openai_api_key.as_deref(),
            "groq" => self.groq_api_key.as_deref(),
            _ => None,
        }
    }

    pub fn search_key(&self) -> Option<&str> {
        self.serper_api_key.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.serper_api_key.is_some() &&
            (self.openai_api_key.is_some() || self.groq_api_key.is_some())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |v: &Option<String>| if v.is_some() { "<set>" } else { "<unset>" };
        f.debug_struct("Credentials")
            .field("openai_api_key", &mask(&self.openai_api_key))
            .field("serper_api_key", &mask(&self.serper_api_key))
            .field("groq_api_key", &mask(&self.groq_api_key))
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
