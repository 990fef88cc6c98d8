/// Renders a price in its shortest round-trip form, always keeping a
/// fractional digit: `999.99`, `1999.98`, `1000.0`.
pub fn format_price(value: f64) -> String {
    let mut rendered = value.to_string();
    if value.is_finite() && !rendered.contains('.') {
        rendered.push_str(".0");
    }
    rendered
}
