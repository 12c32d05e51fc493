use serde::{ Deserialize, Serialize };
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{ debug, info };

use crate::config::Credentials;
use crate::errors::{ ComplianceError, ComplianceResult };

pub const GROQ: &str = "groq";
pub const OPENAI: &str = "openai";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProviderConfig {
    /// Chat completions endpoint
    pub endpoint: String,

    /// Model to request
    pub model: String,
}

/// Persona the agent is given
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AgentPersona {
    pub role: String,
    pub goal: String,
    pub backstory: String,
}

/// The task handed to the agent. `{data}` and `{date}` are substituted per request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TaskTemplate {
    pub description: String,
    pub expected_output: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    /// Inference provider tried first (`groq` or `openai`)
    pub preferred_provider: String,

    /// Endpoint and model per provider
    pub providers: HashMap<String, ProviderConfig>,

    /// Sampling temperature; zero keeps reports as repeatable as the model allows
    pub temperature: f32,

    /// Maximum tokens per completion
    pub max_tokens: Option<usize>,

    /// Search rounds allowed before the agent must give its final answer
    pub max_tool_iterations: usize,

    /// HTTP timeout for each provider or search call
    pub request_timeout_secs: u64,

    /// Search API endpoint
    pub search_endpoint: String,

    /// Results requested per search
    pub search_results: usize,

    /// The only site the agent is told to treat as a source
    pub source_domain: String,

    pub agent: AgentPersona,

    pub task: TaskTemplate,
}

impl AgentConfig {
    /// Load configuration from a YAML file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> ComplianceResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AgentConfig = serde_yaml::from_str(&contents)?;
        info!("Loaded agent configuration from {}", path.display());
        Ok(config)
    }

    /// Pick the inference provider and its key.
    ///
    /// The preferred provider is used when its key is present, otherwise the
    /// other configured provider is tried.
    pub fn resolve_provider(
        &self,
        credentials: &Credentials
    ) -> ComplianceResult<(String, ProviderConfig, String)> {
        let preferred = self.preferred_provider.to_lowercase();
        let mut candidates = vec![preferred.clone()];
        for name in [GROQ, OPENAI] {
            if name != preferred {
                candidates.push(name.to_string());
            }
        }

        for name in candidates {
            let Some(provider) = self.providers.get(&name) else {
                debug!("Provider {} is not configured", name);
                continue;
            };
            match credentials.provider_key(&name) {
                Some(key) => {
                    if name == preferred {
                        info!("Using preferred provider: {}", name);
                    } else {
                        info!("Using alternative provider: {} (preferred was {})", name, preferred);
                    }
                    return Ok((name, provider.clone(), key.to_string()));
                }
                None => debug!("No API key for provider {}", name),
            }
        }

        Err(ComplianceError::MissingCredential("GROQ_API_KEY or OPENAI_API_KEY".to_string()))
    }

    /// Task description with the request fields substituted
    pub fn render_description(&self, params: &HashMap<&str, String>) -> String {
        render_template(&self.task.description, params)
    }

    /// Expected output contract with the request fields substituted
    pub fn render_expected_output(&self, params: &HashMap<&str, String>) -> String {
        render_template(&self.task.expected_output, params)
    }
}

/// Replace each `{key}` in `template` with its value.
///
/// Substituted values are not scanned again, and braces that do not name a
/// known key are left as they are.
pub fn render_template(template: &str, params: &HashMap<&str, String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}').and_then(|end| params.get(&after[..end]).map(|v| (end, v))) {
            Some((end, value)) => {
                result.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

impl Default for AgentConfig {
    fn default() -> Self {
        let mut providers = HashMap::new();
        providers.insert(GROQ.to_string(), ProviderConfig {
            endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
        });
        providers.insert(OPENAI.to_string(), ProviderConfig {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o".to_string(),
        });

        AgentConfig {
            preferred_provider: GROQ.to_string(),
            providers,
            temperature: 0.0,
            max_tokens: Some(8192),
            max_tool_iterations: 8,
            request_timeout_secs: 300,
            search_endpoint: "https://google.serper.dev/search".to_string(),
            search_results: 10,
            source_domain: "mca.gov.in".to_string(),
            agent: AgentPersona {
                role: "Regulatory Compliance Analyst".to_string(),
                goal: "To analyze company details and generate a comprehensive markdown report of applicable compliance obligations under the Companies Act, 2013.".to_string(),
                backstory: concat!(
                    "You are a top-tier regulatory compliance analyst specializing in Indian corporate law. ",
                    "You are highly skilled at interpreting company-specific information to determine which sections of the Companies Act, 2013 apply. ",
                    "You always rely on official government sources and use the Ministry of Corporate Affairs website (https://www.mca.gov.in) as your only source of truth. ",
                    "You use search tools to find relevant thresholds, forms, and deadlines, and present your findings in a clear, tabular markdown report ",
                    "suitable for audit or legal review."
                ).to_string(),
            },
            task: TaskTemplate {
                description: concat!(
                    "You are provided with structured compliance intake data from a company (see: {data}) ",
                    "and the current reference date (see: {date}). ",
                    "Your task is to determine which legal compliance obligations apply to the company under the Companies Act, 2013. ",
                    "You must use only official sources from the Ministry of Corporate Affairs (https://www.mca.gov.in) to validate all thresholds, conditions, forms, and deadlines."
                ).to_string(),
                expected_output: concat!(
                    "Generate a well-structured **Markdown (.md)** table that includes a full compliance summary for the company. ",
                    "You must not just list applicable compliances. Also show inapplicable, missing, or error-prone cases to help the user correct them.\n\n",
                    "**The markdown table must contain the following columns:**\n",
                    "- Compliance Area (e.g., CSR Committee, Secretarial Audit)\n",
                    "- Section (e.g., 135(1), 204(1))\n",
                    "- Form (if applicable, e.g., MR-3, MGT-8)\n",
                    "- Applicable (✅/❌)\n",
                    "- Trigger or Reason (e.g., 'Net Profit > ₹5 Cr', or 'Does not meet XBRL condition')\n",
                    "- Legal Deadline (e.g., 'within 180 days of financial year end')\n",
                    "- Due Date (calculated from {date})\n",
                    "- Status/Error (e.g., 'Compliant', 'Missing input: Paid-up Capital', 'Exempted due to Small Company')\n",
                    "- Source (URL from mca.gov.in)\n\n",
                    "**You must handle the following cases:**\n",
                    "- ✅ Clearly applicable compliances with due dates.\n",
                    "- ❌ Inapplicable ones with reasons why they do not apply.\n",
                    "- ⚠️ Missing or invalid inputs (e.g., blank fields, ambiguous entries).\n",
                    "- ❗ Any edge cases, exemptions (e.g., OPC, Section 8 Company), or potential legal risks.\n\n",
                    "🛑 **Important Rules:**\n",
                    "- Use only content found via 'site:mca.gov.in' search queries.\n",
                    "- The table must be a clean, valid markdown table viewable on GitHub.\n",
                    "- For each entry, provide a real MCA.gov.in URL as the source.\n",
                    "- Do not guess thresholds. Look them up.\n",
                    "- Ensure all legal deadlines are calculated from the current date ({date}).\n",
                    "- Do not omit entries. Even inapplicable ones must be recorded.\n",
                    "- The report generated should be beautifully presented."
                ).to_string(),
            },
        }
    }
}
