use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::Internal(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Extracts the emoji to store from an emoji option.
///
/// Custom emoji mentions such as `<:diamond:123>` or `<a:diamond:123>` yield their id; anything
/// else is taken as a unicode emoji.
///
/// # Returns
/// - `Some(String)` - Emoji id or unicode emoji
/// - `None` - The option was blank
pub fn parse_emoji(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let custom = value
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .and_then(|inner| inner.rsplit(':').next())
        .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()));

    Some(custom.unwrap_or(value).to_string())
}
