use anyhow::{ anyhow, Result };
use std::path::Path;

use compliance_bot::config::Credentials;
use compliance_bot::implementations::compliance_crew::ComplianceCrew;
use compliance_bot::implementations::config::AgentConfig;
use compliance_bot::intake::{ load_answer_file, FormSubmission };
use compliance_bot::models::analysis::{ today, ReportArtifact };
use compliance_bot::models::questionnaire;
use compliance_bot::workflow::{ self, SubmissionOutcome };

use crate::cli::ui;

/// Report command: questionnaire, agent run, and report download
pub async fn execute(
    config: AgentConfig,
    answers_path: Option<&Path>,
    output_dir: &Path,
    non_interactive: bool
) -> Result<()> {
    ui::print_header("Compliance Bot");
    ui::print_text(
        "This tool analyzes your company details and generates a comprehensive report of applicable compliance obligations under the Companies Act, 2013."
    );

    let mut prefill = match answers_path {
        Some(path) => load_answer_file(path)?,
        None => FormSubmission::new(),
    };

    let mut credentials = Credentials::from_env();
    if !non_interactive {
        credentials = configure_credentials(credentials)?;
    }

    loop {
        let form = if non_interactive {
            prefill.clone()
        } else {
            ui::print_header("Company Information");
            ui::print_info(
                format!("Answer all {} questions to generate a report.", questionnaire::question_count()).as_str()
            );
            ui::fill_form(&prefill)?
        };

        let outcome = run_submission(&config, &credentials, &form).await;
        present(&outcome, output_dir, non_interactive)?;

        if non_interactive {
            return match outcome {
                SubmissionOutcome::Report(_) => Ok(()),
                _ => Err(anyhow!("No report was generated")),
            };
        }

        if !ui::confirm_action("Submit the form again?")? {
            return Ok(());
        }
        if outcome.needs_credentials() {
            credentials = configure_credentials(credentials)?;
        }
        prefill = form;
    }
}

/// Show the current keys' state and let the user replace them for this session
fn configure_credentials(current: Credentials) -> Result<Credentials> {
    ui::print_header("API Configuration");
    let status = |v: &Option<String>| if v.is_some() { "set" } else { "not set" };
    ui::print_result("OpenAI API Key", status(&current.openai_api_key));
    ui::print_result("Serper API Key", status(&current.serper_api_key));
    ui::print_result("GROQ API Key", status(&current.groq_api_key));

    let wants_update = if current.is_complete() {
        ui::confirm_action("Update API keys?")?
    } else {
        ui::print_warning("Some API keys are missing.");
        true
    };
    if !wants_update {
        return Ok(current);
    }

    let entered = ui::prompt_credentials(&current)?;
    if ui::confirm_action("Save API keys?")? {
        ui::print_success("API keys saved!");
        Ok(entered)
    } else {
        Ok(current)
    }
}

async fn run_submission(
    config: &AgentConfig,
    credentials: &Credentials,
    form: &FormSubmission
) -> SubmissionOutcome {
    let request = match workflow::prepare(form, today()) {
        Ok(request) => request,
        Err(outcome) => {
            return outcome;
        }
    };

    let crew = match ComplianceCrew::from_credentials(config.clone(), credentials) {
        Ok(crew) => crew,
        Err(e) => {
            return workflow::pipeline_failure(&e);
        }
    };

    let spinner = ui::spinner_with_message(
        "Analyzing compliance requirements... This may take a few minutes."
    );
    let outcome = workflow::invoke(&crew, request).await;
    spinner.finish_and_clear();
    outcome
}

fn present(outcome: &SubmissionOutcome, output_dir: &Path, non_interactive: bool) -> Result<()> {
    match outcome {
        SubmissionOutcome::Incomplete { warning, .. } => ui::print_warning(warning),
        SubmissionOutcome::Invalid { message } => ui::print_warning(message),
        SubmissionOutcome::Failed { message, hint } => {
            ui::print_error(message);
            ui::print_info(hint);
        }
        SubmissionOutcome::Report(artifact) => {
            ui::print_success("Compliance analysis completed!");
            ui::print_header("Compliance Report");
            ui::display_report(artifact.content());
            offer_download(artifact, output_dir, non_interactive)?;
        }
    }
    Ok(())
}

fn offer_download(artifact: &ReportArtifact, output_dir: &Path, non_interactive: bool) -> Result<()> {
    let save =
        non_interactive ||
        ui::confirm_action(
            format!("Download report as {} ({})?", artifact.file_name, artifact.content_type).as_str()
        )?;

    if save {
        let path = artifact.save(output_dir)?;
        ui::print_success(format!("Report saved to {}", path.display()).as_str());
    }
    Ok(())
}
