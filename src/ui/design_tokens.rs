// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by the gallery grid, the modal and the
overlays.

## Organization

- **Palette**: Base colors, including the festive accent scale
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use birthday_gallery::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Festive accents (rose scale)
    pub const ACCENT_200: Color = Color::from_rgb(0.99, 0.8, 0.86);
    pub const ACCENT_400: Color = Color::from_rgb(0.96, 0.52, 0.66);
    pub const ACCENT_500: Color = Color::from_rgb(0.91, 0.33, 0.52); // Primary rose
    pub const ACCENT_700: Color = Color::from_rgb(0.68, 0.16, 0.34);

    // Thumbnail highlight
    pub const GOLD_400: Color = Color::from_rgb(0.98, 0.78, 0.3);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    // Share brand colors
    pub const FACEBOOK: Color = Color::from_rgb(0.23, 0.35, 0.6);
    pub const TWITTER: Color = Color::from_rgb(0.11, 0.63, 0.95);
    pub const PINTEREST: Color = Color::from_rgb(0.9, 0.0, 0.14);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Modal backdrop over the page.
    pub const BACKDROP: f32 = 0.9;
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
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_WIDTH: f32 = 280.0;

    /// Edge length of a grid thumbnail.
    pub const THUMBNAIL: f32 = 180.0;
    /// Thumbnails per grid row.
    pub const GRID_COLUMNS: usize = 3;

    pub const TOAST_WIDTH: f32 = 320.0;
    pub const PROMPT_WIDTH: f32 = 360.0;

    /// Height reserved for the share bar under the modal media.
    pub const SHARE_BAR_HEIGHT: f32 = 56.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading
    pub const TITLE_LG: f32 = 30.0;

    /// Dialog titles
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Counters, tooltips
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accents, thumbnail highlight
    pub const WIDTH_MD: f32 = 2.0;
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
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

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
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

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG && opacity::BACKDROP < 1.0);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::GRID_COLUMNS > 0);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_LG > border::WIDTH_MD);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
