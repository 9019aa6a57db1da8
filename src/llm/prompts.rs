pub const TUTOR_NOT_CONFIGURED: &str = "请先在设置中配置 API Key 才能使用 AI 功能。";
pub const EXAMPLES_NOT_CONFIGURED: &str = "请配置 API Key 以生成例句。";
pub const EXAMPLES_SYSTEM_PROMPT: &str = "You are a Japanese teacher.";

pub fn tutor_system_prompt(context: &str) -> String {
    format!(
        r#"You are a friendly and patient Japanese language tutor named "Sensei AI".
The user is a native Chinese speaker learning Japanese (specifically Minna no Nihongo).

Current Context:
The user is studying vocabulary and grammar.
Additional Context (Exercise appearing on screen): "{context}"

Please explain the answer in Chinese (Simplified).
Keep explanations concise, encouraging, and easy to understand.
If the user makes a mistake, explain *why* it is wrong based on the grammar rules."#
    )
}

pub fn word_examples_prompt(word: &str, meaning: &str) -> String {
    format!(
        r#"作为日语初学者（N5/N4水平）的老师，请用日语单词 "{word}" (含义: {meaning}) 造 2 个简单易懂的例句。

要求：
1. 例句要简短，适合《大家的日语》初级水平。
2. 必须包含中文翻译。
3. 格式简洁，不要有多余的废话。

输出格式示例：
1. 日本へ行きます。
(我去日本。)
2. ..."#
    )
}

pub fn tutor_failure(detail: &str) -> String {
    format!("连接 AI 服务失败: {detail}。请检查设置。")
}

pub fn examples_failure(detail: &str) -> String {
    format!("生成例句失败: {detail}。请检查 API Key 或网络设置。")
}
