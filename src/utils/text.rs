// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::Html;

/// 去除HTML标签，只保留文本内容
///
/// 连续的空白字符会被折叠为单个空格
pub fn strip_tags(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 按字符数截断字符串
///
/// 超出 `max_chars` 时在最后一个单词边界截断并追加 "..."，
/// 找不到单词边界时直接按字符截断。
pub fn cut_str(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let head: String = text.chars().take(max_chars).collect();
    let cut = match head.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => head[..pos].trim_end(),
        _ => head.as_str(),
    };
    format!("{}...", cut)
}

/// 转义HTML文本内容
pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// 转义HTML属性值
pub fn escape_attr(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// 外部链接：只有 http/https 地址渲染为 `<a>`，其余按纯文本输出
pub fn external_link(url: &str) -> String {
    let is_web = ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });
    if is_web {
        format!(r#"<a href="{}">{}</a>"#, escape_attr(url), escape(url))
    } else {
        escape(url)
    }
}
