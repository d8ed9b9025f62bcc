use super::ast::Condition;
use super::error::ParseError;
use super::value::{Arg, classify};

/// Parses `"attr1 = $1, attr2 = $2"` against positional arguments.
///
/// Placeholders must be numbered strictly left to right starting at `$1`, and
/// there must be exactly one argument per clause. The returned conditions keep
/// the clause order.
pub fn parse_conditions(query: &str, args: &[Arg]) -> Result<Vec<Condition>, ParseError> {
    if args.is_empty() {
        return Err(ParseError::NoArguments);
    }

    let clauses: Vec<&str> = query.split(',').collect();
    if clauses.len() != args.len() {
        return Err(ParseError::PlaceholderCountMismatch {
            clauses: clauses.len(),
            arguments: args.len(),
        });
    }

    clauses
        .into_iter()
        .zip(args)
        .enumerate()
        .map(|(index, (clause, arg))| parse_clause(clause, index + 1, arg))
        .collect()
}

fn parse_clause(clause: &str, position: usize, arg: &Arg) -> Result<Condition, ParseError> {
    let clause = clause.trim();
    let parts: Vec<&str> = clause.split('=').collect();
    let [attribute_name, placeholder] = parts.as_slice() else {
        return Err(ParseError::ConditionFormat {
            position,
            clause: clause.to_string(),
        });
    };

    // Empty attribute names are left for DynamoDB to reject.
    let attribute_name = attribute_name.trim();
    let placeholder = placeholder.trim();

    if placeholder != format!("${position}") {
        return Err(ParseError::PlaceholderFormat {
            position,
            placeholder: placeholder.to_string(),
        });
    }

    let value = classify(arg).map_err(|err| ParseError::UnsupportedType {
        position,
        type_name: err.type_name,
    })?;

    Ok(Condition {
        attribute_name: attribute_name.to_string(),
        position,
        value,
    })
}
