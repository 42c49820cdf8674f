/// Visual style: theme, surfaces and button looks
///
/// The look is a dark slate canvas with translucent "glass" cards and
/// accent-to-teal gradients for emphasis.

use iced::gradient::Linear;
use iced::theme::Palette;
use iced::widget::{button, container, progress_bar, text_input};
use iced::{Background, Border, Color, Degrees, Font, Shadow, Theme, Vector};

use crate::color::{chrome, Shade};
use crate::content::showcase::Gradient;

pub const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub const SEMIBOLD: Font = Font {
    weight: iced::font::Weight::Semibold,
    ..Font::DEFAULT
};

pub const MONO: Font = Font::MONOSPACE;

/// Brand gradient (accent to teal)
pub const BRAND: Gradient = [chrome::ACCENT_500, chrome::TEAL_500];

pub fn theme() -> Theme {
    Theme::custom(
        "Portfolio".to_string(),
        Palette {
            background: chrome::SLATE_950.color(),
            text: chrome::SLATE_200.color(),
            primary: chrome::ACCENT_500.color(),
            success: chrome::GREEN_400.color(),
            danger: chrome::RED_400.color(),
        },
    )
}

/// Diagonal two-stop gradient background
pub fn gradient(stops: Gradient, alpha: f32) -> Background {
    Background::Gradient(
        Linear::new(Degrees(135.0))
            .add_stop(0.0, stops[0].alpha(alpha))
            .add_stop(1.0, stops[1].alpha(alpha))
            .into(),
    )
}

fn rounded(color: Color, width: f32, radius: f32) -> Border {
    Border {
        color,
        width,
        radius: radius.into(),
    }
}

// ========== Containers ==========

/// Page background
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(chrome::SLATE_950.color().into()),
        text_color: Some(chrome::SLATE_200.color()),
        ..container::Style::default()
    }
}

/// Soft accent glow behind the page header region
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(
            Linear::new(Degrees(160.0))
                .add_stop(0.0, chrome::ACCENT_500.alpha(0.06))
                .add_stop(0.45, chrome::SLATE_950.alpha(0.0))
                .add_stop(1.0, chrome::TEAL_500.alpha(0.05))
                .into(),
        )),
        ..container::Style::default()
    }
}

/// Translucent card
pub fn glass(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(chrome::SLATE_900.alpha(0.6).into()),
        border: rounded(chrome::SLATE_800.alpha(0.8), 1.0, 16.0),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..container::Style::default()
    }
}

/// Card with a colored outline (selected state, proficiency tiers)
pub fn outlined(shade: Shade) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        border: rounded(shade.alpha(0.5), 1.0, 16.0),
        ..glass(theme)
    }
}

/// Solid gradient surface (badges, tiles, layer bands)
pub fn filled(stops: Gradient) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(gradient(stops, 1.0)),
        text_color: Some(Color::WHITE),
        border: rounded(Color::TRANSPARENT, 0.0, 12.0),
        ..container::Style::default()
    }
}

/// Faint gradient wash under a card
pub fn washed(stops: Gradient) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: Some(gradient(stops, 0.12)),
        ..glass(theme)
    }
}

/// Low-contrast tinted surface (chips, pills, callouts)
pub fn tinted(shade: Shade) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(shade.alpha(0.1).into()),
        text_color: Some(shade.color()),
        border: rounded(shade.alpha(0.25), 1.0, 999.0),
        ..container::Style::default()
    }
}

/// Lightly tinted band with a matching outline (pattern layers)
pub fn band(shade: Shade) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(shade.alpha(0.08).into()),
        border: rounded(shade.alpha(0.25), 1.0, 8.0),
        ..container::Style::default()
    }
}

/// Neutral chip for technology tags
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(chrome::SLATE_800.alpha(0.6).into()),
        text_color: Some(chrome::SLATE_300.color()),
        border: rounded(chrome::SLATE_700.alpha(0.5), 1.0, 8.0),
        ..container::Style::default()
    }
}

/// Dark code panel
pub fn code(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(chrome::SLATE_950.color().into()),
        text_color: Some(chrome::SLATE_300.color()),
        border: rounded(chrome::SLATE_800.color(), 1.0, 12.0),
        ..container::Style::default()
    }
}

/// Short brand underline beneath headings
pub fn underline(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(gradient(BRAND, 1.0)),
        border: rounded(Color::TRANSPARENT, 0.0, 999.0),
        ..container::Style::default()
    }
}

/// Navbar surface; more opaque once the page has scrolled
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(
            chrome::SLATE_950
                .alpha(if scrolled { 0.8 } else { 0.5 })
                .into(),
        ),
        border: rounded(
            if scrolled {
                chrome::SLATE_800.alpha(0.5)
            } else {
                Color::TRANSPARENT
            },
            1.0,
            0.0,
        ),
        ..container::Style::default()
    }
}

/// Mobile menu panel
pub fn menu(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(chrome::SLATE_900.alpha(0.95).into()),
        border: rounded(chrome::SLATE_800.color(), 1.0, 0.0),
        ..container::Style::default()
    }
}

// ========== Buttons ==========

/// Solid brand gradient call-to-action
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.9,
        button::Status::Disabled => 0.6,
        button::Status::Active => 1.0,
    };
    button::Style {
        background: Some(gradient([chrome::ACCENT_600, chrome::ACCENT_500], alpha)),
        text_color: Color::WHITE,
        border: rounded(Color::TRANSPARENT, 0.0, 12.0),
        shadow: Shadow {
            color: chrome::ACCENT_500.alpha(0.25),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 18.0,
        },
    }
}

/// Outlined secondary action
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    button::Style {
        background: Some(chrome::SLATE_800.alpha(if hovered { 0.8 } else { 0.5 }).into()),
        text_color: chrome::SLATE_200.color(),
        border: rounded(chrome::SLATE_700.color(), 1.0, 12.0),
        shadow: Shadow::default(),
    }
}

/// Navigation link; `active` marks the current route
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let (background, text_color): (Option<Background>, Color) = if active {
            (Some(chrome::ACCENT_500.alpha(0.1).into()), chrome::ACCENT_400.color())
        } else if hovered {
            (Some(chrome::SLATE_800.alpha(0.5).into()), Color::WHITE)
        } else {
            (None, chrome::SLATE_400.color())
        };
        button::Style {
            background,
            text_color,
            border: rounded(Color::TRANSPARENT, 0.0, 8.0),
            shadow: Shadow::default(),
        }
    }
}

/// Bare text link
pub fn text_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => chrome::ACCENT_400.color(),
        _ => chrome::SLATE_400.color(),
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

/// Transparent wrapper for clickable cards
pub fn card_button(theme: &Theme, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    let card = glass(theme);
    button::Style {
        background: card.background,
        text_color: chrome::SLATE_200.color(),
        border: rounded(
            if hovered {
                chrome::ACCENT_500.alpha(0.4)
            } else {
                chrome::SLATE_800.alpha(0.8)
            },
            1.0,
            16.0,
        ),
        shadow: card.shadow,
    }
}

/// Tab or filter pill; `selected` shows the brand gradient
pub fn pill(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if selected {
            button::Style {
                border: rounded(Color::TRANSPARENT, 0.0, 999.0),
                ..primary(theme, status)
            }
        } else {
            button::Style {
                border: rounded(chrome::SLATE_700.color(), 1.0, 999.0),
                ..secondary(theme, status)
            }
        }
    }
}

// ========== Inputs ==========

pub fn input(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused => chrome::ACCENT_500.color(),
        text_input::Status::Hovered => chrome::SLATE_500.color(),
        _ => chrome::SLATE_700.color(),
    };
    text_input::Style {
        background: chrome::SLATE_800.alpha(0.5).into(),
        border: rounded(border, 1.0, 12.0),
        icon: chrome::SLATE_400.color(),
        placeholder: chrome::SLATE_500.color(),
        value: Color::WHITE,
        selection: chrome::ACCENT_500.alpha(0.4),
    }
}

/// Proficiency bar filled with a gradient
pub fn gradient_meter(stops: Gradient) -> impl Fn(&Theme) -> progress_bar::Style {
    move |_theme| progress_bar::Style {
        background: chrome::SLATE_800.color().into(),
        bar: Background::Gradient(
            Linear::new(Degrees(90.0))
                .add_stop(0.0, stops[0].color())
                .add_stop(1.0, stops[1].color())
                .into(),
        ),
        border: rounded(Color::TRANSPARENT, 0.0, 999.0),
    }
}
