// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by every view and style function.

## Organization

- **Palette**: Base colors (grays, brand blue, sentiment greens and reds)
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Emphasis shadows for the result panel

## Examples

```
use iced_sentiment::ui::design_tokens::{palette, spacing};

let accent = palette::GREEN_500;
let padding = spacing::MD; // 16px
assert!(accent.g > accent.r);
assert_eq!(padding, 16.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const PRIMARY_700: Color = Color::from_rgb(0.114, 0.306, 0.847);

    // Sentiment colors
    pub const GREEN_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const GREEN_600: Color = Color::from_rgb(0.086, 0.639, 0.290);
    pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const RED_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    /// Round help trigger ("?") diameter.
    pub const TRIGGER: f32 = 24.0;

    /// Maximum width of the form card (Tailwind `max-w-xl`).
    pub const CARD_MAX_WIDTH: f32 = 576.0;

    /// Width of the disclosure panel (Tailwind `w-80`).
    pub const DISCLOSURE_WIDTH: f32 = 320.0;

    /// Reserved height of the result row so the layout doesn't jump.
    pub const RESULT_ROW_MIN_HEIGHT: f32 = 32.0;

    /// Visible rows of the text input.
    pub const INPUT_ROWS: u16 = 14;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale:
    //! - Titles: Page heading
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Page heading ("Sentiment Analyser")
    pub const TITLE: f32 = 24.0;

    /// Result icon glyph
    pub const ICON_GLYPH: f32 = 24.0;

    /// Result message and action button label
    pub const BODY_LG: f32 = 18.0;

    /// Text input, help content
    pub const BODY: f32 = 14.0;

    /// Test mode hint
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Large glow (Tailwind `shadow-lg`).
    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 15.0,
    };

    /// Extra-large glow (Tailwind `shadow-xl`).
    pub const XL: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 20.0 },
        blur_radius: 25.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(shadow::XL.blur_radius > shadow::LG.blur_radius);
    assert!(sizing::DISCLOSURE_WIDTH < sizing::CARD_MAX_WIDTH);
};
