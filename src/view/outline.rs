use crate::view::{Element, Node};

/// 把畫面樹轉成終端機用的純文字
pub fn to_text(root: &Element) -> String {
    let mut lines = Vec::new();
    write_text(root, 0, &mut lines);

    while lines.last().is_some_and(|line: &String| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn write_text(element: &Element, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);

    if element.tag == "div" && element.get_attr("class") == Some("controls") {
        let controls: Vec<String> = element
            .element_children()
            .map(|child| inline_text(child))
            .collect();
        lines.push(format!("{}{}", indent, controls.join(" ")));
        return;
    }

    if element.is_text_only() {
        let text = element.text_content();
        if !text.is_empty() || element.tag == "p" {
            lines.push(format!("{}{}", indent, inline_text(element)));
        }
        return;
    }

    // 卡片之間空一行
    let is_card = element.has_attr("data-key")
        || element.get_attr("class") == Some(crate::view::directory::CARD_CLASS);
    let child_depth = if is_card { depth + 1 } else { depth };

    for node in &element.children {
        match node {
            Node::Element(child) => write_text(child, child_depth, lines),
            Node::Text(text) => lines.push(format!("{}{}", indent, text)),
        }
    }

    if is_card {
        lines.push(String::new());
    }
}

fn inline_text(element: &Element) -> String {
    let text = element.text_content();
    match element.tag {
        "li" => format!("- {}", text),
        "button" if element.has_attr("disabled") => format!("[{}] (disabled)", text),
        "button" => format!("[{}]", text),
        "h1" | "h2" => text.to_uppercase(),
        _ => text,
    }
}

/// 輸出成 HTML 片段，文字與屬性都會跳脫
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_html(root, &mut out);
    out
}

fn write_html(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    out.push('>');

    for node in &element.children {
        match node {
            Node::Element(child) => write_html(child, out),
            Node::Text(text) => out.push_str(&escape(text)),
        }
    }

    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
