//! Text formatting shared by the display, the leaderboard artifact and interaction replies.

/// Formats a diamond amount, pluralised when above one.
///
/// # Arguments
/// - `amount` - Number of diamonds
///
/// # Returns
/// - `String` - e.g. `"1 diamond"`, `"12 diamonds"`
pub fn format_score(amount: i64) -> String {
    format!("{} diamond{}", amount, if amount > 1 { "s" } else { "" })
}

/// Converts a zero-based leaderboard index into its ordinal label.
///
/// # Arguments
/// - `rank` - Zero-based position, `0` being the leader
///
/// # Returns
/// - `String` - `"Premier"`, `"Second"`, `"Troisième"`, then `"{rank + 1}ème"`
pub fn rank_to_ordinal(rank: u64) -> String {
    match rank {
        0 => "Premier".to_string(),
        1 => "Second".to_string(),
        2 => "Troisième".to_string(),
        n => format!("{}ème", n + 1),
    }
}
