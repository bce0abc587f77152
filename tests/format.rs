use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use sqlfmt::{
    CaseStyle, FormatError, FormatOptions, Formatter, IndentStyle, LogicalOperatorNewline,
};

#[test]
fn default_options_produce_the_documented_style() {
    let formatted = sqlfmt::format(
        "select id,name from users where active=1",
        FormatOptions::default(),
    )
    .unwrap();

    assert_eq!(
        formatted,
        "SELECT\n    id,\n    name\nFROM\n    users\nWHERE\n    active = 1"
    );
}

#[test]
fn formatting_is_idempotent_under_fixed_options() {
    let options = FormatOptions::default();
    let input = "select id, count(*) from orders group by id having count(*) > 2 order by id;";

    let once = sqlfmt::format(input, options).unwrap();
    let twice = sqlfmt::format(&once, options).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn function_names_lose_the_space_before_their_parenthesis() {
    let formatted = sqlfmt::format("select count(*) from t", FormatOptions::default()).unwrap();

    assert!(formatted.contains("COUNT(*)"), "got: {formatted}");
}

#[test]
fn keyword_case_lower_preserves_identifiers() {
    let mut options = FormatOptions::default();
    options.keyword_case = Some(CaseStyle::Lower);
    options.function_case = Some(CaseStyle::Lower);

    let formatted = sqlfmt::format("SELECT ID, Name FROM T", options).unwrap();

    assert!(formatted.contains("select"), "got: {formatted}");
    assert!(formatted.contains("from"), "got: {formatted}");
    assert!(formatted.contains("ID"), "got: {formatted}");
    assert!(formatted.contains("Name"), "got: {formatted}");
}

#[test]
fn unset_options_fall_back_to_bundle_defaults() {
    let formatted = sqlfmt::format("select x from t", FormatOptions::unset()).unwrap();

    // bundle defaults: preserved case, 2-space indent
    assert_eq!(formatted, "select\n  x\nfrom\n  t");
}

#[test]
fn dense_operators_drop_the_surrounding_spaces() {
    let mut options = FormatOptions::default();
    options.dense_operators = Some(true);

    let formatted = sqlfmt::format("select a from t where a = 1", options).unwrap();

    assert!(formatted.contains("a=1"), "got: {formatted}");
}

#[test]
fn statements_are_separated_by_configured_blank_lines() {
    let formatted = sqlfmt::format("select 1; select 2;", FormatOptions::default()).unwrap();

    assert_eq!(formatted, "SELECT\n    1\n;\n\n\nSELECT\n    2\n;");
}

#[test]
fn inline_semicolon_stays_on_the_last_line() {
    let mut options = FormatOptions::default();
    options.newline_before_semicolon = Some(false);
    options.lines_between_queries = Some(0);

    let formatted = sqlfmt::format("select 1; select 2;", options).unwrap();

    assert_eq!(formatted, "SELECT\n    1;\nSELECT\n    2;");
}

#[test]
fn tabs_replace_spaces_when_requested() {
    let mut options = FormatOptions::default();
    options.use_tabs = Some(true);

    let formatted = sqlfmt::format("select id from t", options).unwrap();

    assert_eq!(formatted, "SELECT\n\tid\nFROM\n\tt");
}

#[test]
fn tabular_left_aligns_keywords_in_a_gutter() {
    let mut options = FormatOptions::default();
    options.indent_style = Some(IndentStyle::TabularLeft);

    let formatted = sqlfmt::format("select id, name from users", options).unwrap();

    assert!(formatted.contains("SELECT    id,"), "got: {formatted}");
    assert!(formatted.contains("\n          name"), "got: {formatted}");
    assert!(formatted.contains("\nFROM      users"), "got: {formatted}");
}

#[test]
fn logical_operators_break_after_by_default() {
    let formatted = sqlfmt::format(
        "select * from t where a = 1 and b = 2",
        FormatOptions::default(),
    )
    .unwrap();

    assert!(formatted.contains("a = 1 AND\n    b = 2"), "got: {formatted}");
}

#[test]
fn logical_operators_can_break_before() {
    let mut options = FormatOptions::default();
    options.logical_operator_newline = Some(LogicalOperatorNewline::Before);

    let formatted = sqlfmt::format("select * from t where a = 1 and b = 2", options).unwrap();

    assert!(formatted.contains("a = 1\n    AND b = 2"), "got: {formatted}");
}

#[test]
fn subqueries_are_broken_onto_their_own_lines() {
    let formatted = sqlfmt::format(
        "select * from t where id in (select id from u)",
        FormatOptions::default(),
    )
    .unwrap();

    assert!(formatted.contains("id IN(\n"), "got: {formatted}");
    assert!(formatted.contains("\n        SELECT"), "got: {formatted}");
    assert!(formatted.contains("\n    )"), "got: {formatted}");
}

#[test]
fn wide_expressions_break_at_the_configured_width() {
    let mut options = FormatOptions::default();
    options.expression_width = Some(10);

    let formatted =
        sqlfmt::format("select * from t where id in (100, 200, 300, 400)", options).unwrap();

    assert!(formatted.contains("        100,\n        200,"), "got: {formatted}");
    assert!(formatted.contains("\n    )"), "got: {formatted}");
}

#[test]
fn string_literals_and_comments_survive_untouched() {
    let formatted = sqlfmt::format(
        "select 'It''s', /* hint */ x from t -- done",
        FormatOptions::default(),
    )
    .unwrap();

    assert!(formatted.contains("'It''s'"), "got: {formatted}");
    assert!(formatted.contains("/* hint */"), "got: {formatted}");
    assert!(formatted.contains("-- done"), "got: {formatted}");
}

#[test]
fn empty_input_is_a_sentinel_error() {
    let err = sqlfmt::format("   ", FormatOptions::default()).unwrap_err();
    assert!(matches!(err, FormatError::EmptySql));
}

#[test]
fn a_reusable_formatter_handles_many_calls() {
    let formatter = Formatter::new().unwrap();

    for i in 0..5 {
        let sql = format!("select col{i} from table{i}");
        let formatted = formatter.format(&sql, FormatOptions::default()).unwrap();
        assert!(formatted.contains(&format!("col{i}")), "got: {formatted}");
    }

    formatter.close().unwrap();
    let err = formatter
        .format("select 1", FormatOptions::default())
        .unwrap_err();
    assert!(matches!(err, FormatError::FormatterClosed));
}

#[test]
fn concurrent_calls_on_one_handle_are_serialized() {
    let formatter = Arc::new(Formatter::new().unwrap());
    let mut handles = Vec::new();

    for thread_id in 0..8 {
        let formatter = Arc::clone(&formatter);
        handles.push(thread::spawn(move || {
            for call in 0..20 {
                let sql = format!("select col_{thread_id}_{call} from t where a = {call}");
                let formatted = formatter.format(&sql, FormatOptions::default()).unwrap();
                assert!(
                    formatted.contains(&format!("col_{thread_id}_{call}")),
                    "thread {thread_id} call {call} got output for a different input: {formatted}"
                );
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn independent_handles_format_in_parallel() {
    let mut handles = Vec::new();
    for i in 0..4 {
        handles.push(thread::spawn(move || {
            let formatter = Formatter::new().unwrap();
            let formatted = formatter
                .format(&format!("select {i} from t"), FormatOptions::default())
                .unwrap();
            formatter.close().unwrap();
            formatted
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let formatted = handle.join().unwrap();
        assert!(formatted.contains(&i.to_string()));
    }
}
