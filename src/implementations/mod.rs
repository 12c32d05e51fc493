pub mod config;
pub mod chat_client;
pub mod serper_search;
pub mod compliance_crew;
