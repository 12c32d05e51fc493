#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::intake::IntakeOutcome;
    use crate::models::analysis::{
        format_reference_date,
        AnalysisRequest,
        AnalysisResult,
        ReportArtifact,
        REPORT_CONTENT_TYPE,
        REPORT_FILE_NAME,
    };
    use crate::tests::stubs::full_form;

    fn complete_answers() -> crate::models::answer::ComplianceAnswerSet {
        match full_form().review().unwrap() {
            IntakeOutcome::Complete(answers) => answers,
            other => panic!("expected complete, got {:?}", other),
        }
    }

    #[test]
    fn reference_date_is_day_month_year() {
        assert_eq!(format_reference_date(NaiveDate::from_ymd_opt(2025, 4, 5).unwrap()), "05-04-2025");
        assert_eq!(format_reference_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()), "31-12-2025");
    }

    #[test]
    fn request_pairs_answers_with_date() {
        let answers = complete_answers();
        let request = AnalysisRequest::build(answers.clone(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

        assert_eq!(request.date, "01-01-2025");
        assert_eq!(request.answers.len(), 16);
        assert_eq!(request.answers, answers);
        assert_eq!(request.answers.get(1).unwrap().answer, "Private");
        assert_eq!(request.answers.get(2).unwrap().answer, "No");
        assert_eq!(request.answers.get(3).unwrap().answer, "Yes");
    }

    #[test]
    fn data_is_a_json_list_of_question_answer_pairs() {
        let request = AnalysisRequest::build(complete_answers(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let data: serde_json::Value = serde_json::from_str(&request.data_json().unwrap()).unwrap();

        let entries = data.as_array().unwrap();
        assert_eq!(entries.len(), 16);
        assert_eq!(
            entries[0]["question"],
            "1. What is the type of your company? (Private / Public / Listed / Unlisted / Government / OPC / Section 8 / Dormant / Small)"
        );
        assert_eq!(entries[0]["answer"], "Private");
        assert_eq!(entries[6]["answer"], "2.50");
        assert!(entries[0].get("ordinal").is_none());
    }

    #[test]
    fn artifact_carries_report_verbatim() {
        let markdown = "| Compliance Area | Applicable |\n|---|---|\n| CSR | ✅ |\n";
        let artifact = ReportArtifact::from(AnalysisResult::new(markdown));

        assert_eq!(artifact.file_name, REPORT_FILE_NAME);
        assert_eq!(artifact.file_name, "compliance_report.md");
        assert_eq!(artifact.content_type, REPORT_CONTENT_TYPE);
        assert_eq!(artifact.content_type, "text/markdown");
        assert_eq!(artifact.content(), markdown);
    }

    #[test]
    fn saved_artifact_matches_report_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let markdown = "# Report\n\n  trailing spaces  \n\n";
        let artifact = ReportArtifact::from(AnalysisResult::new(markdown));

        let path = artifact.save(&dir.path().join("out")).unwrap();

        assert_eq!(path.file_name().unwrap(), "compliance_report.md");
        assert_eq!(std::fs::read_to_string(path).unwrap(), markdown);
    }
}
