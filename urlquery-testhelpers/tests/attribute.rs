use urlquery_testhelpers::test;

/// Doc comments stay on the generated test
#[test]
fn question_mark_works_in_bodies() {
    let n: u32 = "42".parse()?;
    assert_eq!(n, 42);
}

#[test]
fn bodies_may_end_in_an_expression() {
    let words = ["a", "b"];
    assert_eq!(words.len(), 2)
}

#[test]
#[cfg_attr(miri, ignore)]
#[allow(clippy::unnecessary_literal_unwrap)]
fn other_attributes_are_kept() {
    let value = Some(3).unwrap();
    assert_eq!(value, 3);
}

#[test]
fn errors_fail_the_test_through_eyre() {
    let outcome: Result<u8, _> = "x".parse::<u8>();
    assert!(outcome.is_err());
    let report = urlquery_testhelpers::eyre::eyre!("wrapped: {}", outcome.unwrap_err());
    assert!(report.to_string().starts_with("wrapped: "));
}
