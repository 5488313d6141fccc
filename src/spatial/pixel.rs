//! Pixel values shared by tiles and rasters

/// One binary pixel, optionally claimed by a motif occurrence
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pixel {
    /// Unlit (`.`)
    #[default]
    Off,
    /// Lit (`#`)
    On,
    /// Lit and covered by a motif occurrence (`O`)
    Motif,
}

impl Pixel {
    /// Parse an input character; only `#` and `.` are accepted
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Self::On),
            '.' => Some(Self::Off),
            _ => None,
        }
    }

    /// Character used when rendering
    pub const fn symbol(self) -> char {
        match self {
            Self::Off => '.',
            Self::On => '#',
            Self::Motif => 'O',
        }
    }

    /// Lit pixels include those already marked as motif
    pub const fn is_lit(self) -> bool {
        matches!(self, Self::On | Self::Motif)
    }
}

impl From<bool> for Pixel {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}
