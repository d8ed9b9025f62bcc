#[cfg(test)]
mod expr_tests {
    use super::super::*;
    use crate::args;

    fn condition(attribute_name: &str, position: usize, value: AttrValue) -> Condition {
        Condition {
            attribute_name: attribute_name.to_string(),
            position,
            value,
        }
    }

    #[test]
    fn test_single_condition() {
        let result = parse_conditions("userId = $1", &args!["1234"]).unwrap();
        assert_eq!(
            result,
            vec![condition("userId", 1, AttrValue::S("1234".to_string()))]
        );
        assert_eq!(result[0].placeholder(), ":v1");
    }

    #[test]
    fn test_multiple_conditions_keep_argument_order() {
        let result = parse_conditions("userId = $1, age = $2", &args!["123", 25]).unwrap();
        assert_eq!(
            result,
            vec![
                condition("userId", 1, AttrValue::S("123".to_string())),
                condition("age", 2, AttrValue::N("25".to_string())),
            ]
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let result = parse_conditions("  pk=$1 ,\tsk   =   $2  ", &args!["a", "b"]).unwrap();
        assert_eq!(result[0].attribute_name, "pk");
        assert_eq!(result[1].attribute_name, "sk");
    }

    #[test]
    fn test_many_conditions() {
        let names: Vec<String> = (1..=12).map(|i| format!("attr{i}")).collect();
        let query = names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{name} = ${}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let args: Vec<Arg> = (1..=12).map(Arg::from).collect();

        let result = parse_conditions(&query, &args).unwrap();
        assert_eq!(result.len(), 12);
        for (i, cond) in result.iter().enumerate() {
            assert_eq!(cond.position, i + 1);
            assert_eq!(cond.attribute_name, names[i]);
            assert_eq!(cond.value, AttrValue::N((i + 1).to_string()));
        }
    }

    #[test]
    fn test_no_arguments() {
        let err = parse_conditions("userId = $1", &args![]).unwrap_err();
        assert_eq!(err, ParseError::NoArguments);
    }

    #[test]
    fn test_empty_query_with_arguments() {
        let err = parse_conditions("", &args!["123", "456"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::PlaceholderCountMismatch {
                clauses: 1,
                arguments: 2
            }
        );
    }

    #[test]
    fn test_mismatched_placeholders() {
        let err = parse_conditions("userId = $1, age = $2", &args!["123"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::PlaceholderCountMismatch {
                clauses: 2,
                arguments: 1
            }
        );
    }

    #[test]
    fn test_invalid_condition_format() {
        let err = parse_conditions("userId, age = $1", &args!["123", "222"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::ConditionFormat {
                position: 1,
                clause: "userId".to_string()
            }
        );
    }

    #[test]
    fn test_condition_with_two_equal_signs() {
        let err = parse_conditions("userId = = $1", &args!["123"]).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::ConditionFormat);
    }

    #[test]
    fn test_invalid_placeholder_format() {
        let err = parse_conditions("userId = $x", &args!["123"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::PlaceholderFormat {
                position: 1,
                placeholder: "$x".to_string()
            }
        );
    }

    #[test]
    fn test_placeholders_cannot_be_reordered_or_reused() {
        let invalid = vec![
            "a = $2, b = $1",
            "a = $1, b = $1",
            "a = 1, b = $2",
            "a = $01, b = $2",
            "a = $1, b = $ 2",
        ];

        for query in invalid {
            let err = parse_conditions(query, &args!["x", "y"]).unwrap_err();
            assert_eq!(
                err.kind(),
                crate::ErrorKind::PlaceholderFormat,
                "query: {query}"
            );
        }
    }

    #[test]
    fn test_unsupported_argument_type() {
        let err = parse_conditions("userId = $1", &args![vec!["123"]]).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnsupportedType {
                position: 1,
                type_name: "list"
            }
        );
    }

    #[test]
    fn test_unsupported_type_reports_clause_position() {
        let err = parse_conditions("pk = $1, sk = $2", &args!["a", 1.25]).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnsupportedType {
                position: 2,
                type_name: "f64"
            }
        );
        assert_eq!(
            err.to_string(),
            "unsupported argument type f64 for placeholder $2"
        );
    }

    #[test]
    fn test_empty_attribute_name_is_accepted() {
        let result = parse_conditions(" = $1,    = $2", &args!["a", "b"]).unwrap();
        assert_eq!(result[0].attribute_name, "");
        assert_eq!(result[1].attribute_name, "");
    }

    #[test]
    fn test_format_is_checked_before_type() {
        let err = parse_conditions("userId = $2", &args![true]).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::PlaceholderFormat);
    }
}
