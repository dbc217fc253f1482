//! 命令行分词器
//!
//! 将一行输入拆分为参数序列：双引号/单引号内的内容（含空格）为单个
//! 参数，引号本身被剥离；引号外按空白拆分。未闭合的引号一直延伸到
//! 行尾（见 DESIGN.md）。

/// 将一行命令拆分为参数列表。空输入返回空列表。
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '"' || c == '\'' {
            // 引号内不支持转义；扫描到配对引号或行尾
            let quote = c;
            chars.next();
            let mut token = String::new();
            for ch in chars.by_ref() {
                if ch == quote {
                    break;
                }
                token.push(ch);
            }
            tokens.push(token);
        } else {
            // 非引号起始：连续非空白字符为一个参数（中间的引号按普通字符处理）
            let mut token = String::new();
            while let Some(&ch) = chars.peek() {
                if ch.is_whitespace() {
                    break;
                }
                token.push(ch);
                chars.next();
            }
            tokens.push(token);
        }
    }

    tokens
}
