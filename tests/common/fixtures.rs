use serde_json::{Value, json};

/// A page with one row holding one column per component, in order.
pub fn page_with(components: Vec<Value>) -> Value {
    let cols: Vec<Value> = components
        .into_iter()
        .map(|component| json!({ "component": component }))
        .collect();
    json!({ "rows": [{ "cols": cols }] })
}

/// A page with a single column holding `component`.
pub fn single(component: Value) -> Value {
    page_with(vec![component])
}

/// An invoice-like template exercising every component kind.
pub fn invoice_template() -> Value {
    json!({
        "source_key": "invoice",
        "rows": [
            {
                "height": 20,
                "cols": [
                    {"size": 3, "component": {"image": {"source_key": "logo", "props": {"percent": 80}}}},
                    {"size": 9, "component": {"text": {"source_key": "title", "props": {"style": "bold", "size": 16}}}}
                ]
            },
            {
                "cols": [
                    {"size": 12, "component": {"line": {"props": {"style": "dashed"}}}}
                ]
            },
            {
                "source_key": "customer",
                "cols": [
                    {"size": 6, "component": {"text": {"source_key": "name"}}},
                    {"size": 6, "component": {"text": {"source_key": "city"}}}
                ]
            },
            {
                "cols": [
                    {"component": {"list": {
                        "source_key": "lines",
                        "template": {"row": {"cols": [
                            {"size": 8, "component": {"text": {"source_key": "description"}}},
                            {"size": 4, "component": {"text": {"source_key": "amount", "props": {"align": "right"}}}}
                        ]}}
                    }}}
                ]
            },
            {
                "cols": [
                    {"size": 4, "component": {"barcode": {"source_key": "number", "props": {"type": "code128"}}}},
                    {"size": 4, "component": {"qrcode": {"source_key": "payment_url"}}},
                    {"size": 4, "component": {"matrixcode": {"value": "FOLIO"}}}
                ]
            },
            {
                "cols": [
                    {"size": 6},
                    {"size": 6, "component": {"signature": {"value": "Authorized signature"}}}
                ]
            }
        ]
    })
}

/// Content matching `invoice_template` with `line_count` invoice lines.
pub fn invoice_content(line_count: usize) -> Value {
    let lines: Vec<Value> = (0..line_count)
        .map(|i| json!({"description": format!("Item {}", i), "amount": i * 10}))
        .collect();
    json!({
        "invoice": {
            "logo": "assets/logo.png",
            "title": "Invoice 2024-001",
            "customer": {"name": "ACME", "city": "Oslo"},
            "lines": lines,
            "number": "2024001",
            "payment_url": "https://pay.example.com/2024001"
        }
    })
}
