/// Parse a decimal-comma rating string ("8,5") into a float.
///
/// Returns `None` for anything that does not parse to a finite number; the
/// caller drops such rows rather than letting NaN reach the sort.
pub fn normalize(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}
