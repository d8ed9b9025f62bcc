use super::value::AttrValue;

/// One `attribute = $N` clause of a condition string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub attribute_name: String,
    /// 1-based position of the clause, equal to the argument it binds.
    pub position: usize,
    pub value: AttrValue,
}

impl Condition {
    /// Positional placeholder used by key-condition expressions, e.g. `:v1`.
    pub fn placeholder(&self) -> String {
        format!(":v{}", self.position)
    }
}
