//! 工作区级测试共用的样例

#![allow(dead_code)]

/// 覆盖所有语句形式的程序
pub const SAMPLE_PROGRAM: &str = r#"// sample
int count = 0;
string name = "merx";
void unused;
while (count < 10) {
    count = count + 1;
    if (count == 5) {
        name = "half";
    } else name = name;
}
/* done */
return count * 2;
"#;

/// 拼接 token 文本
pub fn rebuild(tokens: &[merx_workspace::MerxToken]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
