pub mod intake_tests;
pub mod analysis_tests;

/// In-process stand-ins for the external services
#[cfg(test)]
pub mod stubs {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::errors::{ ComplianceError, ComplianceResult };
    use crate::intake::FormSubmission;
    use crate::models::analysis::{ AnalysisRequest, AnalysisResult };
    use crate::models::chat::{ ChatMessage, ChatRequest, FunctionCall, ToolCall };
    use crate::traits::agent_pipeline::AgentPipeline;
    use crate::traits::chat_model::ChatModel;
    use crate::traits::search_tool::{ SearchHit, SearchTool };

    pub fn setup() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Answers that fill in every question
    pub fn full_form() -> FormSubmission {
        let values = [
            "Private",
            "No",
            "Yes",
            "No",
            "No",
            "Yes",
            "2.5",
            "48",
            "6.25",
            "0",
            "No",
            "Yes",
            "120",
            "Yes",
            "Not Sure",
            "85",
        ];
        let mut form = FormSubmission::new();
        for (i, value) in values.iter().enumerate() {
            form.set(i + 1, *value).expect("valid ordinal");
        }
        form
    }

    pub fn tool_call(id: &str, name: &str, arguments: &str) -> ChatMessage {
        ChatMessage {
            role: "assistant".to_string(),
            content: None,
            tool_calls: Some(
                vec![ToolCall {
                    id: id.to_string(),
                    call_type: "function".to_string(),
                    function: FunctionCall {
                        name: name.to_string(),
                        arguments: arguments.to_string(),
                    },
                }]
            ),
            tool_call_id: None,
        }
    }

    pub enum Step {
        Reply(ChatMessage),
        Fail(u16, &'static str),
    }

    /// Replays a fixed script of replies and keeps every request it saw
    pub struct ScriptedModel {
        steps: Mutex<VecDeque<Step>>,
        pub requests: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedModel {
        pub fn new(steps: Vec<Step>) -> Self {
            Self {
                steps: Mutex::new(steps.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<ChatRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatModel for ScriptedModel {
        fn provider(&self) -> &str {
            "scripted"
        }

        fn model(&self) -> &str {
            "scripted-model"
        }

        async fn complete(&self, request: &ChatRequest) -> ComplianceResult<ChatMessage> {
            self.requests.lock().unwrap().push(request.clone());
            match self.steps.lock().unwrap().pop_front() {
                Some(Step::Reply(message)) => Ok(message),
                Some(Step::Fail(status, message)) =>
                    Err(ComplianceError::HttpError {
                        service: "scripted".to_string(),
                        status,
                        message: message.to_string(),
                    }),
                None => Err(ComplianceError::ParseError("script exhausted".to_string())),
            }
        }
    }

    /// Records queries and returns one hit per query
    #[derive(Default)]
    pub struct RecordingSearch {
        pub queries: Mutex<Vec<String>>,
        pub fail: bool,
    }

    impl RecordingSearch {
        pub fn failing() -> Self {
            Self { fail: true, ..Default::default() }
        }

        pub fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchTool for RecordingSearch {
        async fn search(&self, query: &str) -> ComplianceResult<Vec<SearchHit>> {
            self.queries.lock().unwrap().push(query.to_string());
            if self.fail {
                return Err(ComplianceError::HttpError {
                    service: "serper".to_string(),
                    status: 403,
                    message: "Unauthorized".to_string(),
                });
            }
            Ok(
                vec![SearchHit {
                    title: "CSR Rules".to_string(),
                    link: "https://www.mca.gov.in/csr".to_string(),
                    snippet: "Section 135 applies to companies with net profit above ₹5 crore".to_string(),
                }]
            )
        }
    }

    /// Pipeline that returns a fixed report, or fails, and counts its calls
    pub struct StubPipeline {
        outcome: Result<String, String>,
        pub calls: Mutex<Vec<AnalysisRequest>>,
    }

    impl StubPipeline {
        pub fn returning(markdown: &str) -> Self {
            Self { outcome: Ok(markdown.to_string()), calls: Mutex::new(Vec::new()) }
        }

        pub fn failing(message: &str) -> Self {
            Self { outcome: Err(message.to_string()), calls: Mutex::new(Vec::new()) }
        }

        pub fn calls(&self) -> Vec<AnalysisRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AgentPipeline for StubPipeline {
        async fn run(&self, request: AnalysisRequest) -> ComplianceResult<AnalysisResult> {
            self.calls.lock().unwrap().push(request);
            match &self.outcome {
                Ok(markdown) => Ok(AnalysisResult::new(markdown.clone())),
                Err(message) => Err(ComplianceError::NetworkError(message.clone())),
            }
        }
    }
}
