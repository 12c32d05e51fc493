use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Confirm, Input, Password, Select };
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::wrap;

use compliance_bot::config::Credentials;
use compliance_bot::intake::{ parse_amount, FormSubmission };
use compliance_bot::models::questionnaire::{ self, Question, QuestionKind };

/// Label shown for the empty choice
const UNANSWERED: &str = "(leave unanswered)";

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn to_io(e: dialoguer::Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e)
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text wrapped to the terminal width
pub fn print_text(text: &str) {
    let width = Term::stdout().size().1 as usize;
    for line in text.lines() {
        for wrapped_line in wrap(line, width.saturating_sub(4).max(20)) {
            println!("{}", wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print the report exactly as the agent returned it
pub fn display_report(markdown: &str) {
    println!("{}", markdown);
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme()).with_prompt(prompt).default(true).interact().map_err(to_io)
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} [{elapsed}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Ask for the three API keys, masked. An empty entry keeps the current key.
pub fn prompt_credentials(current: &Credentials) -> std::io::Result<Credentials> {
    let ask = |label: &str, existing: &Option<String>| -> std::io::Result<Option<String>> {
        let hint = if existing.is_some() { " (set, Enter to keep)" } else { "" };
        let entered = Password::with_theme(&get_theme())
            .with_prompt(format!("{}{}", label, hint))
            .allow_empty_password(true)
            .interact()
            .map_err(to_io)?;
        Ok(if entered.trim().is_empty() { existing.clone() } else { Some(entered) })
    };

    let openai = ask("OpenAI API Key", &current.openai_api_key)?;
    let serper = ask("Serper API Key", &current.serper_api_key)?;
    let groq = ask("GROQ API Key", &current.groq_api_key)?;

    Ok(Credentials::new(openai, serper, groq))
}

/// Walk through every question, starting from the values in `prefill`
pub fn fill_form(prefill: &FormSubmission) -> std::io::Result<FormSubmission> {
    let mut form = FormSubmission::new();
    for question in questionnaire::questionnaire() {
        let initial = prefill.raw(question.ordinal).unwrap_or("");
        let value = ask_question(question, initial)?;
        form.set(question.ordinal, value).map_err(|e|
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
        )?;
    }
    Ok(form)
}

/// One input control, chosen by the question's kind
pub fn ask_question(question: &Question, initial: &str) -> std::io::Result<String> {
    let theme = get_theme();
    match question.kind {
        QuestionKind::Choice(_) => {
            let choices = question.choices().unwrap_or_default();
            let items: Vec<&str> = choices
                .iter()
                .map(|c| if c.is_empty() { UNANSWERED } else { *c })
                .collect();
            let default = choices
                .iter()
                .position(|c| !initial.is_empty() && c.eq_ignore_ascii_case(initial.trim()))
                .unwrap_or(0);

            let selection = Select::with_theme(&theme)
                .with_prompt(question.label())
                .items(&items)
                .default(default)
                .interact()
                .map_err(to_io)?;
            Ok(choices[selection].to_string())
        }
        QuestionKind::Numeric => {
            let ordinal = question.ordinal;
            Input::<String>::with_theme(&theme)
                .with_prompt(question.label())
                .with_initial_text(initial)
                .allow_empty(true)
                .validate_with(move |input: &String| -> Result<(), String> {
                    if input.trim().is_empty() {
                        return Ok(());
                    }
                    parse_amount(ordinal, input)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(to_io)
        }
        QuestionKind::FreeText =>
            Input::<String>::with_theme(&theme)
                .with_prompt(question.label())
                .with_initial_text(initial)
                .allow_empty(true)
                .interact_text()
                .map_err(to_io),
    }
}
