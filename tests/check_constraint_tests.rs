//! CHECK-constraint extractor tests

use db_typegen::parse_check_constraints;
use std::collections::HashMap;

fn expect(sql: &str, entries: &[(&str, &[&str])]) {
    let mut expected = HashMap::new();
    for (column, values) in entries {
        expected.insert(
            column.to_string(),
            values.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
        );
    }
    assert_eq!(parse_check_constraints(sql), expected);
}

mod matching_tests {
    use super::*;

    #[test]
    fn test_single_quoted_values() {
        expect(
            "CREATE TABLE example (
                id INTEGER PRIMARY KEY,
                status TEXT CHECK (status IN ('public', 'private', 'restricted')) NOT NULL
            )",
            &[("status", &["public", "private", "restricted"])],
        );
    }

    #[test]
    fn test_double_quoted_values() {
        expect(
            r#"CREATE TABLE example (
                status TEXT CHECK (status IN ("public", "private")) NOT NULL
            )"#,
            &[("status", &["public", "private"])],
        );
    }

    #[test]
    fn test_quoted_column_name() {
        expect(
            r#"CREATE TABLE example (
                "status" TEXT CHECK ("status" IN ('active', 'inactive')) NOT NULL
            )"#,
            &[("status", &["active", "inactive"])],
        );
    }

    #[test]
    fn test_backtick_quoted_column_name() {
        expect(
            "CREATE TABLE example (
                `status` TEXT CHECK (`status` IN ('active', 'inactive')) NOT NULL
            )",
            &[("status", &["active", "inactive"])],
        );
    }

    #[test]
    fn test_multiple_constraints() {
        expect(
            "CREATE TABLE users (
                id INTEGER PRIMARY KEY,
                status TEXT CHECK (status IN ('active', 'inactive')),
                role TEXT CHECK (role IN ('admin', 'user', 'guest'))
            )",
            &[
                ("status", &["active", "inactive"]),
                ("role", &["admin", "user", "guest"]),
            ],
        );
    }

    #[test]
    fn test_table_level_constraint() {
        expect(
            "CREATE TABLE example (
                id INTEGER PRIMARY KEY,
                status TEXT NOT NULL,
                CHECK (status IN ('public', 'private'))
            )",
            &[("status", &["public", "private"])],
        );
    }

    #[test]
    fn test_named_constraint() {
        expect(
            "CREATE TABLE example (
                status TEXT,
                CONSTRAINT status_check CHECK (status IN ('active', 'inactive'))
            )",
            &[("status", &["active", "inactive"])],
        );
    }

    #[test]
    fn test_case_insensitive_keywords() {
        expect(
            "CREATE TABLE example (
                status TEXT check (status in ('active', 'inactive'))
            )",
            &[("status", &["active", "inactive"])],
        );
    }

    #[test]
    fn test_compact_spelling() {
        expect(
            "CREATE TABLE t(status TEXT CHECK(status IN('a','b')))",
            &[("status", &["a", "b"])],
        );
    }

    #[test]
    fn test_newlines_inside_constraint() {
        expect(
            "CREATE TABLE example (
                status TEXT CHECK (
                    status IN (
                        'active',
                        'inactive',
                        'pending'
                    )
                )
            )",
            &[("status", &["active", "inactive", "pending"])],
        );
    }

    #[test]
    fn test_extra_whitespace() {
        expect(
            "CREATE TABLE example (
                status TEXT CHECK (   status   IN   (   'active'  ,  'inactive'   )   )
            )",
            &[("status", &["active", "inactive"])],
        );
    }

    #[test]
    fn test_uppercase_column_in_constraint_body() {
        expect(
            "CREATE TABLE example (
                status TEXT CHECK (STATUS IN ('active', 'inactive'))
            )",
            &[("status", &["active", "inactive"])],
        );
    }

    #[test]
    fn test_single_value() {
        expect(
            "CREATE TABLE example (status TEXT CHECK (status IN ('only_one')))",
            &[("status", &["only_one"])],
        );
    }
}

mod value_tests {
    use super::*;

    #[test]
    fn test_values_with_spaces() {
        expect(
            "CREATE TABLE tasks (
                status TEXT CHECK (status IN ('in progress', 'on hold', 'done'))
            )",
            &[("status", &["in progress", "on hold", "done"])],
        );
    }

    #[test]
    fn test_leading_and_trailing_spaces_preserved() {
        expect(
            "CREATE TABLE example (status TEXT CHECK (status IN (' active ', 'inactive')))",
            &[("status", &[" active ", "inactive"])],
        );
    }

    #[test]
    fn test_empty_string_value() {
        expect(
            "CREATE TABLE example (status TEXT CHECK (status IN ('', 'active', 'inactive')))",
            &[("status", &["", "active", "inactive"])],
        );
    }

    #[test]
    fn test_numeric_looking_strings() {
        expect(
            "CREATE TABLE example (code TEXT CHECK (code IN ('001', '002', '003')))",
            &[("code", &["001", "002", "003"])],
        );
    }

    #[test]
    fn test_escaped_quotes() {
        expect(
            "CREATE TABLE example (message TEXT CHECK (message IN ('it''s ok', 'hello')))",
            &[("message", &["it's ok", "hello"])],
        );
    }

    #[test]
    fn test_multiple_escaped_quotes_in_one_value() {
        expect(
            "CREATE TABLE example (quote TEXT CHECK (quote IN ('it''s a ''test''', 'normal')))",
            &[("quote", &["it's a 'test'", "normal"])],
        );
    }

    #[test]
    fn test_commas_inside_quotes() {
        expect(
            "CREATE TABLE example (name TEXT CHECK (name IN ('last, first', 'single')))",
            &[("name", &["last, first", "single"])],
        );
    }

    #[test]
    fn test_parentheses_inside_quotes() {
        expect(
            "CREATE TABLE example (label TEXT CHECK (label IN ('(none)', 'value (1)', 'normal')))",
            &[("label", &["(none)", "value (1)", "normal"])],
        );
    }

    #[test]
    fn test_special_characters() {
        expect(
            "CREATE TABLE example (type TEXT CHECK (type IN ('type:a', 'type:b', 'type-c')))",
            &[("type", &["type:a", "type:b", "type-c"])],
        );
    }

    #[test]
    fn test_backslashes_stored_verbatim() {
        expect(
            r"CREATE TABLE example (path TEXT CHECK (path IN ('C:\Users', '/home/user')))",
            &[("path", &[r"C:\Users", "/home/user"])],
        );
    }

    #[test]
    fn test_unicode_values() {
        expect(
            "CREATE TABLE example (status TEXT CHECK (status IN ('активный', 'неактивный')))",
            &[("status", &["активный", "неактивный"])],
        );
    }

    #[test]
    fn test_column_names_with_underscores() {
        expect(
            "CREATE TABLE users (user_status TEXT CHECK (user_status IN ('active', 'banned')))",
            &[("user_status", &["active", "banned"])],
        );
    }
}

mod rejection_tests {
    use super::*;

    #[test]
    fn test_no_constraints() {
        expect(
            "CREATE TABLE example (id INTEGER PRIMARY KEY, name TEXT NOT NULL)",
            &[],
        );
    }

    #[test]
    fn test_comparison_constraint() {
        expect(
            "CREATE TABLE example (age INTEGER CHECK (age > 0))",
            &[],
        );
    }

    #[test]
    fn test_not_in_constraint() {
        expect(
            "CREATE TABLE example (status TEXT CHECK (status NOT IN ('banned', 'deleted')))",
            &[],
        );
    }

    #[test]
    fn test_and_chained_constraint_is_discarded_entirely() {
        expect(
            "CREATE TABLE example (
                status TEXT CHECK (status IN ('active', 'inactive') AND length(status) > 0)
            )",
            &[],
        );
    }

    #[test]
    fn test_subquery_is_not_captured() {
        expect(
            "CREATE TABLE example (status TEXT CHECK (status IN (SELECT value FROM statuses)))",
            &[],
        );
    }

    #[test]
    fn test_mixed_constraint_types_keep_only_in_lists() {
        expect(
            "CREATE TABLE example (
                age INTEGER CHECK (age > 0),
                status TEXT CHECK (status IN ('active', 'inactive')),
                score INTEGER CHECK (score >= 0 AND score <= 100)
            )",
            &[("status", &["active", "inactive"])],
        );
    }

    #[test]
    fn test_empty_sql() {
        expect("", &[]);
    }

    #[test]
    fn test_later_constraint_overwrites_earlier() {
        expect(
            "CREATE TABLE example (
                status TEXT CHECK (status IN ('a', 'b')),
                CHECK (status IN ('c', 'd'))
            )",
            &[("status", &["c", "d"])],
        );
    }
}
