//! ID types for remote player records.

use std::fmt;

/// Opaque player identifier handed out by whichever API answered the search.
///
/// The stats API uses integers and the lookup API uses numeric strings, so
/// both are carried as text and only ever passed back to the API that
/// produced them.
///
/// # Examples
///
/// ```rust
/// use nba_stats::PlayerId;
///
/// let id = PlayerId::from(237u64);
/// assert_eq!(id.as_str(), "237");
/// assert_eq!(id.to_string(), "237");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_from_number() {
        let id = PlayerId::from(115u64);
        assert_eq!(id.as_str(), "115");
        assert_eq!(id, PlayerId::new("115"));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId::new("34145937").to_string(), "34145937");
    }
}
