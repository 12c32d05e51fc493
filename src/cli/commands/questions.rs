use anyhow::{ anyhow, Result };

use compliance_bot::models::questionnaire::{ self, QuestionKind };

use crate::cli::ui;

/// Print the questionnaire as text or JSON
pub fn execute(format: &str) -> Result<()> {
    match format.to_lowercase().as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(questionnaire::questionnaire())?);
        }
        "text" => {
            ui::print_header("Compliance Questionnaire");
            for question in questionnaire::questionnaire() {
                ui::print_text(&question.label());
                let kind = match question.kind {
                    QuestionKind::Choice(options) => format!("choice: {}", options.join(" / ")),
                    QuestionKind::Numeric => "number, zero or more, two decimals".to_string(),
                    QuestionKind::FreeText => "text".to_string(),
                };
                ui::print_result("   Answer", &kind);
            }
        }
        other => {
            return Err(anyhow!("Unsupported output format: {}", other));
        }
    }
    Ok(())
}
