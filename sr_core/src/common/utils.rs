use crate::common::sr_exception::{ErrCode, SrException};

/// Window actually used by the rolling calculators: at least 1, at most the data length
pub fn effective_window(requested: usize, len: usize) -> usize {
    requested.min(len).max(1)
}

/// Support/resistance window used by the prediction engine.
///
/// The floor is 2 for multi-point series; a single point forces a window of 1.
pub fn engine_window(requested: usize, len: usize) -> usize {
    if len <= 1 {
        return 1;
    }
    requested.min(len).max(2)
}

/// Parse a comma separated list of prices.
///
/// Blank tokens are skipped, so `"1.5,,1.6"` yields two values. Any other
/// token that is not a number rejects the whole input.
pub fn parse_price_list(text: &str) -> Result<Vec<f64>, SrException> {
    let mut prices = Vec::new();
    for (pos, raw) in text.split(',').enumerate() {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        let value = parse_price(token).ok_or_else(|| {
            SrException::new(
                format!("`{}` at position {} is not a valid number", token, pos + 1),
                ErrCode::InvalidNumber,
            )
        })?;
        prices.push(value);
    }

    if prices.is_empty() {
        return Err(SrException::new(
            "no numeric values found in the input",
            ErrCode::NoData,
        ));
    }
    Ok(prices)
}

/// Parse a single price token
pub fn parse_price(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok()
}
