use crate::{
    errors::{AppError, AppResult},
    models::domain::PageRange,
};

/// Parses a page range expression such as `"2-4,7-7"`.
///
/// Tokens are 1-based and inclusive; each becomes the half-open range
/// `[start - 1, end)`. A missing or blank expression selects every page.
/// The expression is accepted or rejected as a whole: one bad token fails the
/// call. Ends past `total_pages` are kept as-is, and overlapping ranges are
/// not merged.
pub fn parse_ranges(input: Option<&str>, total_pages: usize) -> AppResult<Vec<PageRange>> {
    let expression = match input.map(str::trim) {
        Some(e) if !e.is_empty() => e,
        _ => return Ok(vec![PageRange::all(total_pages)]),
    };

    expression.split(',').map(parse_token).collect()
}

fn parse_token(token: &str) -> AppResult<PageRange> {
    let parts: Vec<&str> = token.split('-').collect();
    let [start, end] = parts.as_slice() else {
        return Err(AppError::InvalidFormat(format!(
            "'{}' is not a 'start-end' pair",
            token.trim()
        )));
    };

    let start = parse_bound(start, token)?;
    let end = parse_bound(end, token)?;

    if start < 1 {
        return Err(AppError::InvalidFormat(format!(
            "'{}' starts before page 1",
            token.trim()
        )));
    }
    if start > end {
        return Err(AppError::InvalidFormat(format!(
            "'{}' ends before it starts",
            token.trim()
        )));
    }

    let start = usize::try_from(start - 1)
        .map_err(|_| AppError::InvalidFormat(format!("'{}' is out of bounds", token.trim())))?;
    let end = usize::try_from(end)
        .map_err(|_| AppError::InvalidFormat(format!("'{}' is out of bounds", token.trim())))?;

    Ok(PageRange::new(start, end))
}

fn parse_bound(bound: &str, token: &str) -> AppResult<i64> {
    bound.trim().parse::<i64>().map_err(|_| {
        AppError::InvalidFormat(format!("'{}' is not a whole number in '{}'", bound.trim(), token.trim()))
    })
}
