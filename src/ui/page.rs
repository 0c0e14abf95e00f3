use super::view::ViewState;

const TEMPLATE: &str = include_str!("index.html");

/// Render the catalog page with `state` baked in as the initial view.
pub fn render_page(state: &ViewState, api_base: &str) -> String {
    let items = render_items(state);
    let state_json = script_json(state);
    let api_base_json = script_json(&api_base);

    fill(
        TEMPLATE,
        &[
            ("NAME", &escape_html(&state.name)),
            ("PRICE", &escape_html(&state.price)),
            ("ITEMS", &items),
            ("STATE", &state_json),
            ("API_BASE", &api_base_json),
        ],
    )
}

/// One `<li>` per product, keyed by its id.
pub fn render_items(state: &ViewState) -> String {
    let mut html = String::new();
    for product in &state.items {
        html.push_str(&format!(
            r#"<li data-id="{}">{} - {:.2}</li>"#,
            product.id,
            escape_html(&product.name),
            product.price
        ));
    }
    html
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// JSON safe to place inside a `<script>` element.
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    // Serializing plain structs, strings and vectors cannot fail.
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace('&', "\\u0026")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}

/// Substitute `{{KEY}}` markers in a single pass, so inserted text is never
/// rescanned for markers.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
