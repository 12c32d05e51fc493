#[cfg(test)]
mod tests {
    use crate::errors::{ AnswerError, ComplianceError };
    use crate::intake::{ normalize_answer, parse_answer_file, template_yaml, FormSubmission, IntakeOutcome };
    use crate::models::questionnaire::question;
    use crate::tests::stubs::{ full_form, setup };

    #[test]
    fn empty_form_is_missing_everything() {
        setup();
        let outcome = FormSubmission::new().review().unwrap();
        assert_eq!(outcome.missing(), 16);
        assert_eq!(
            outcome.warning().unwrap(),
            "Please fill in all 16 remaining questions to generate a complete report."
        );
    }

    #[test]
    fn partial_form_reports_remaining_count() {
        let form = FormSubmission::new()
            .with(1, "Public").unwrap()
            .with(7, "10").unwrap()
            .with(13, "450").unwrap();

        match form.review().unwrap() {
            IntakeOutcome::Incomplete { answers, missing } => {
                assert_eq!(answers.len(), 3);
                assert_eq!(missing, 13);
            }
            other => panic!("expected incomplete, got {:?}", other),
        }
    }

    #[test]
    fn blank_values_count_as_unanswered() {
        let mut form = full_form();
        form.set(13, "   ").unwrap();
        form.set(2, "").unwrap();
        assert_eq!(form.review().unwrap().missing(), 2);
    }

    #[test]
    fn full_form_is_complete_and_ordered() {
        let mut form = FormSubmission::new();
        // filled back to front
        let full = full_form();
        for ordinal in (1..=16).rev() {
            form.set(ordinal, full.raw(ordinal).unwrap()).unwrap();
        }

        match form.review().unwrap() {
            IntakeOutcome::Complete(answers) => {
                assert_eq!(answers.len(), 16);
                let ordinals: Vec<usize> = answers.iter().map(|a| a.ordinal).collect();
                assert_eq!(ordinals, (1..=16).collect::<Vec<_>>());
                assert_eq!(answers.get(1).unwrap().answer, "Private");
            }
            other => panic!("expected complete, got {:?}", other),
        }
    }

    #[test]
    fn numeric_answers_keep_two_decimals() {
        let capital = question(7).unwrap();
        assert_eq!(normalize_answer(capital, "2.5").unwrap().as_deref(), Some("2.50"));
        assert_eq!(normalize_answer(capital, "1,250").unwrap().as_deref(), Some("1250.00"));
        assert_eq!(normalize_answer(capital, "0").unwrap().as_deref(), Some("0.00"));
        assert_eq!(normalize_answer(capital, "-0").unwrap().as_deref(), Some("0.00"));
        assert_eq!(normalize_answer(capital, "-0.00").unwrap().as_deref(), Some("0.00"));
        assert_eq!(normalize_answer(capital, "3.14159").unwrap().as_deref(), Some("3.14"));
    }

    #[test]
    fn numeric_answers_reject_negative_values() {
        let turnover = question(8).unwrap();
        assert_eq!(
            normalize_answer(turnover, "-1").unwrap_err(),
            AnswerError::NegativeNumber { ordinal: 8, value: -1.0 }
        );
        assert!(matches!(
            normalize_answer(turnover, "lots").unwrap_err(),
            AnswerError::NotANumber { ordinal: 8, .. }
        ));
        assert!(matches!(
            normalize_answer(turnover, "inf").unwrap_err(),
            AnswerError::NotANumber { .. }
        ));
    }

    #[test]
    fn negative_amount_rejects_whole_form() {
        let mut form = full_form();
        form.set(9, "-0.5").unwrap();
        assert!(matches!(form.review(), Err(AnswerError::NegativeNumber { ordinal: 9, .. })));
    }

    #[test]
    fn choice_answers_must_be_offered_options() {
        let listed = question(2).unwrap();
        assert_eq!(normalize_answer(listed, "yes").unwrap().as_deref(), Some("Yes"));
        assert!(matches!(
            normalize_answer(listed, "Not Sure").unwrap_err(),
            AnswerError::UnknownOption { ordinal: 2, .. }
        ));

        let company_type = question(1).unwrap();
        assert_eq!(normalize_answer(company_type, "section 8").unwrap().as_deref(), Some("Section 8"));
        assert!(normalize_answer(company_type, "LLP").is_err());
    }

    #[test]
    fn free_text_is_trimmed() {
        let employees = question(16).unwrap();
        assert_eq!(normalize_answer(employees, "  about 40 ").unwrap().as_deref(), Some("about 40"));
    }

    #[test]
    fn unknown_ordinal_is_rejected() {
        let mut form = FormSubmission::new();
        assert_eq!(form.set(0, "x"), Err(AnswerError::UnknownQuestion(0)));
        assert_eq!(form.set(17, "x"), Err(AnswerError::UnknownQuestion(17)));
    }

    #[test]
    fn answer_file_by_ordinal() {
        let form = parse_answer_file("1: Private\n2: \"No\"\n7: 2.5\n13: 120\n").unwrap();
        assert_eq!(form.raw(1), Some("Private"));
        assert_eq!(form.raw(7), Some("2.5"));
        assert_eq!(form.raw(13), Some("120"));
        assert_eq!(form.review().unwrap().missing(), 12);
    }

    #[test]
    fn answer_file_entries_match_by_number_or_prompt() {
        let yaml = r#"
- question: "1. What is the type of your company?"
  answer: OPC
- question: "Is your company listed on a stock exchange? (Yes / No)"
  answer: "No"
- question: "8. What is your company's Turnover? (in ₹ Crores)"
  answer: 12
"#;
        let form = parse_answer_file(yaml).unwrap();
        assert_eq!(form.raw(1), Some("OPC"));
        assert_eq!(form.raw(2), Some("No"));
        assert_eq!(form.raw(8), Some("12"));
    }

    #[test]
    fn answer_file_rejects_unknown_questions() {
        let err = parse_answer_file("- question: \"What colour is the logo?\"\n  answer: Blue\n").unwrap_err();
        assert!(matches!(err, ComplianceError::ConfigError(_)));

        let err = parse_answer_file("42: Yes\n").unwrap_err();
        assert!(matches!(err, ComplianceError::ConfigError(_)));
    }

    #[test]
    fn answer_file_by_ordinal_accepts_json_keys() {
        let form = parse_answer_file(r#"{"1": "Private", "7": 2.5, "14": true}"#).unwrap();
        assert_eq!(form.raw(1), Some("Private"));
        assert_eq!(form.raw(7), Some("2.5"));
        assert_eq!(form.raw(14), Some("Yes"));
        assert_eq!(form.review().unwrap().missing(), 13);
    }

    #[test]
    fn answer_file_same_question_twice_by_key() {
        let err = parse_answer_file("1: Private\n\"1\": Public\n").unwrap_err();
        assert!(matches!(err, ComplianceError::InvalidAnswer(AnswerError::DuplicateAnswer(1))));
    }

    #[test]
    fn empty_answer_file_is_an_empty_form() {
        assert_eq!(parse_answer_file("").unwrap(), FormSubmission::new());
        assert_eq!(parse_answer_file("  \n").unwrap(), FormSubmission::new());
        assert_eq!(parse_answer_file("~\n").unwrap(), FormSubmission::new());
    }

    #[test]
    fn answer_file_of_the_wrong_shape_names_accepted_shapes() {
        let err = parse_answer_file("just some text\n").unwrap_err();
        match err {
            ComplianceError::ConfigError(message) => assert!(message.contains("map keyed by question number")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn answer_file_rejects_repeated_questions() {
        let yaml = "- question: \"2.\"\n  answer: \"No\"\n- question: \"2.\"\n  answer: \"Yes\"\n";
        let err = parse_answer_file(yaml).unwrap_err();
        assert!(matches!(err, ComplianceError::InvalidAnswer(AnswerError::DuplicateAnswer(2))));
    }

    #[test]
    fn template_lists_every_question_unanswered() {
        let yaml = template_yaml().unwrap();
        assert!(yaml.contains("16. What is the total number of employees in your company?"));

        let form = parse_answer_file(&yaml).unwrap();
        assert_eq!(form.review().unwrap().missing(), 16);
    }
}
