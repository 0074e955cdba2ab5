use voxhire::domain::Recommendation;

#[test]
fn given_strong_hire_phrase_then_it_wins_over_other_keywords() {
    let narrative = "Despite some gaps, this is a strong hire. Definitely not a no hire.";
    assert_eq!(
        Recommendation::from_narrative(narrative),
        Recommendation::StrongHire
    );
}

#[test]
fn given_no_hire_phrase_then_it_wins_over_bare_hire() {
    let narrative = "I would not recommend moving forward: no hire.";
    assert_eq!(
        Recommendation::from_narrative(narrative),
        Recommendation::NoHire
    );
}

#[test]
fn given_bare_hire_keyword_then_recommendation_is_hire() {
    let narrative = "Solid fundamentals and good communication. Recommendation: Hire.";
    assert_eq!(
        Recommendation::from_narrative(narrative),
        Recommendation::Hire
    );
}

#[test]
fn given_no_keyword_then_recommendation_defaults_to_maybe() {
    let narrative = "The candidate answered most questions adequately.";
    assert_eq!(
        Recommendation::from_narrative(narrative),
        Recommendation::Maybe
    );
}

#[test]
fn given_mixed_case_keywords_then_matching_is_case_insensitive() {
    assert_eq!(
        Recommendation::from_narrative("STRONG HIRE without question."),
        Recommendation::StrongHire
    );
}

#[test]
fn given_each_variant_then_display_uses_report_labels() {
    assert_eq!(Recommendation::StrongHire.as_str(), "Strong Hire");
    assert_eq!(Recommendation::Hire.as_str(), "Hire");
    assert_eq!(Recommendation::Maybe.as_str(), "Maybe");
    assert_eq!(Recommendation::NoHire.as_str(), "No Hire");
}
