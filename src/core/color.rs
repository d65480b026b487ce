/// Named colour tokens a family may carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorToken {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Indigo,
    Teal,
    Unmapped(String),
}

impl ColorToken {
    pub const NAMED: [ColorToken; 8] = [
        ColorToken::Red,
        ColorToken::Blue,
        ColorToken::Green,
        ColorToken::Yellow,
        ColorToken::Purple,
        ColorToken::Pink,
        ColorToken::Indigo,
        ColorToken::Teal,
    ];

    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "bg-red-500" => Self::Red,
            "bg-blue-500" => Self::Blue,
            "bg-green-500" => Self::Green,
            "bg-yellow-500" => Self::Yellow,
            "bg-purple-500" => Self::Purple,
            "bg-pink-500" => Self::Pink,
            "bg-indigo-500" => Self::Indigo,
            "bg-teal-500" => Self::Teal,
            other => Self::Unmapped(other.to_string()),
        }
    }

    pub fn as_token(&self) -> &str {
        match self {
            Self::Red => "bg-red-500",
            Self::Blue => "bg-blue-500",
            Self::Green => "bg-green-500",
            Self::Yellow => "bg-yellow-500",
            Self::Purple => "bg-purple-500",
            Self::Pink => "bg-pink-500",
            Self::Indigo => "bg-indigo-500",
            Self::Teal => "bg-teal-500",
            Self::Unmapped(raw) => raw,
        }
    }

    /// Hex value for named tokens; `None` for `Unmapped`.
    pub fn hex(&self) -> Option<&'static str> {
        match self {
            Self::Red => Some("#ef4444"),
            Self::Blue => Some("#3b82f6"),
            Self::Green => Some("#22c55e"),
            Self::Yellow => Some("#eab308"),
            Self::Purple => Some("#a855f7"),
            Self::Pink => Some("#ec4899"),
            Self::Indigo => Some("#6366f1"),
            Self::Teal => Some("#14b8a6"),
            Self::Unmapped(_) => None,
        }
    }
}

/// Sidebar dot colours for families without their own colour, rotated by index.
pub const PALETTE: [(&str, &str); 3] = [
    ("bg-zinc-950", "#09090b"),
    ("bg-zinc-400", "#a1a1aa"),
    ("bg-orange-300", "#fdba74"),
];

pub fn palette_hex(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()].1
}

/// Parse `#rrggbb` into its components.
pub fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let digits = s.trim().strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Resolve the display colour for an optional token.
///
/// Named tokens use their mapped value, unmapped `#rrggbb` literals are used
/// as written, anything else falls back to the rotating palette.
pub fn resolve_hex(token: Option<&ColorToken>, index: usize) -> String {
    match token {
        Some(ColorToken::Unmapped(raw)) if parse_hex(raw).is_some() => raw.trim().to_lowercase(),
        Some(ColorToken::Unmapped(raw)) => {
            log::debug!("Unmapped colour token {:?}, using palette", raw);
            palette_hex(index).to_string()
        }
        Some(named) => named.hex().unwrap_or(palette_hex(index)).to_string(),
        None => palette_hex(index).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_tokens_map_to_hex() {
        for token in ColorToken::NAMED {
            assert_eq!(ColorToken::parse(token.as_token()), token);
            assert!(token.hex().is_some());
        }
        assert_eq!(ColorToken::parse("bg-teal-500").hex(), Some("#14b8a6"));
    }

    #[test]
    fn unknown_tokens_are_explicitly_unmapped() {
        let token = ColorToken::parse("bg-lime-200");
        assert_eq!(token, ColorToken::Unmapped("bg-lime-200".to_string()));
        assert_eq!(token.hex(), None);
    }

    #[test]
    fn resolve_prefers_mapping_then_literal_then_palette() {
        assert_eq!(resolve_hex(Some(&ColorToken::Blue), 0), "#3b82f6");
        assert_eq!(
            resolve_hex(Some(&ColorToken::Unmapped("#ABCDEF".to_string())), 0),
            "#abcdef"
        );
        assert_eq!(
            resolve_hex(Some(&ColorToken::Unmapped("bg-lime-200".to_string())), 1),
            "#a1a1aa"
        );
        assert_eq!(resolve_hex(None, 5), "#fdba74");
    }

    #[test]
    fn parse_hex_rejects_malformed_values() {
        assert_eq!(parse_hex("#ff8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex("ff8000"), None);
        assert_eq!(parse_hex("#ff80"), None);
        assert_eq!(parse_hex("#gg8000"), None);
    }
}
