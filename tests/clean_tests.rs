use huddle::clean_summary;

#[test]
fn text_before_the_first_bullet_is_discarded() {
    assert_eq!(
        clean_summary("Some text - point one\n(Note: informal)"),
        "- point one"
    );
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(clean_summary(""), "");
}

#[test]
fn preamble_is_stripped_when_no_bullet_exists() {
    assert_eq!(
        clean_summary("Here is a concise summary: the team agreed to ship"),
        "- the team agreed to ship"
    );
}

#[test]
fn translation_block_is_removed() {
    assert_eq!(
        clean_summary("- decided to ship friday\n(Translation) 금요일에 출시하기로 결정"),
        "- decided to ship friday"
    );
}

#[test]
fn trailing_sign_off_is_removed() {
    assert_eq!(
        clean_summary("- review the budget\nLet me know if you need any more help"),
        "- review the budget"
    );
}

#[test]
fn bullet_artifacts_collapse_to_plain_bullets() {
    assert_eq!(
        clean_summary("- ): first point\n- : second point"),
        "- first point\n- second point"
    );
}

#[test]
fn leading_dot_bullet_collapses() {
    assert_eq!(clean_summary("- • first point"), "- first point");
}

#[test]
fn plain_text_gains_a_bullet_prefix() {
    assert_eq!(clean_summary("the only takeaway"), "- the only takeaway");
}

#[test]
fn already_clean_bullets_pass_through() {
    assert_eq!(
        clean_summary("- one\n- two\n- three"),
        "- one\n- two\n- three"
    );
}
