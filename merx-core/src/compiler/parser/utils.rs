//! 文法表

/// 开始声明的关键字
pub const DECLARATION_KEYWORDS: [&str; 3] = ["int", "string", "void"];

/// 连接 Term 的二元运算符，同一优先级
pub const EXPRESSION_OPERATORS: [&str; 8] = ["+", "-", "==", "!=", ">", "<", ">=", "<="];

/// 连接 Factor 的二元运算符
pub const TERM_OPERATORS: [&str; 2] = ["*", "/"];

pub fn is_declaration_keyword(text: &str) -> bool {
    DECLARATION_KEYWORDS.contains(&text)
}

pub fn is_expression_operator(text: &str) -> bool {
    EXPRESSION_OPERATORS.contains(&text)
}

pub fn is_term_operator(text: &str) -> bool {
    TERM_OPERATORS.contains(&text)
}
