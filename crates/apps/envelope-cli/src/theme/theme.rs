use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,

    // Semantic
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,

    // Text
    pub text: Color,
    pub text_bright: Color,
    pub text_muted: Color,

    // Metric families
    pub traffic: Color,
    pub peak: Color,
    pub storage: Color,
    pub bandwidth: Color,
}

pub const ENVELOPE: Theme = Theme {
    accent: Color::Rgb {
        r: 255,
        g: 121,
        b: 198,
    },
    success: Color::Rgb {
        r: 80,
        g: 250,
        b: 123,
    },
    error: Color::Rgb {
        r: 255,
        g: 85,
        b: 85,
    },
    warning: Color::Rgb {
        r: 255,
        g: 184,
        b: 108,
    },
    info: Color::Rgb {
        r: 139,
        g: 233,
        b: 253,
    },
    text: Color::Rgb {
        r: 200,
        g: 200,
        b: 210,
    },
    text_bright: Color::Rgb {
        r: 248,
        g: 248,
        b: 242,
    },
    text_muted: Color::Rgb {
        r: 98,
        g: 114,
        b: 164,
    },
    traffic: Color::Rgb {
        r: 139,
        g: 233,
        b: 253,
    },
    peak: Color::Rgb {
        r: 255,
        g: 184,
        b: 108,
    },
    storage: Color::Rgb {
        r: 189,
        g: 147,
        b: 249,
    },
    bandwidth: Color::Rgb {
        r: 241,
        g: 250,
        b: 140,
    },
};

impl Default for Theme {
    fn default() -> Self {
        ENVELOPE
    }
}

impl Theme {
    /// Every role mapped to the terminal's own foreground.
    pub fn monochrome() -> Self {
        let plain = Color::Reset;
        Self {
            accent: plain,
            success: plain,
            error: plain,
            warning: plain,
            info: plain,
            text: plain,
            text_bright: plain,
            text_muted: plain,
            traffic: plain,
            peak: plain,
            storage: plain,
            bandwidth: plain,
        }
    }

    pub fn for_color(color: bool) -> Self {
        if color { Self::default() } else { Self::monochrome() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme, ENVELOPE);
        assert_eq!(theme.accent, ENVELOPE.accent);
    }

    #[test]
    fn test_for_color() {
        assert_eq!(Theme::for_color(true), ENVELOPE);
        let mono = Theme::for_color(false);
        assert_eq!(mono.storage, Color::Reset);
        assert_eq!(mono.error, Color::Reset);
    }
}
