use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{Color as ClapColor, RgbColor, Style, Styles},
};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// One RGB triple per role.
#[derive(Debug, Clone, Copy)]
struct Palette {
  timestamp: (u8, u8, u8),
  primary: (u8, u8, u8),
  accent: (u8, u8, u8),
  success: (u8, u8, u8),
  label: (u8, u8, u8),
  value: (u8, u8, u8),
}

const DARK: Palette = Palette {
  timestamp: (130, 150, 170),
  primary: (96, 180, 230),
  accent: (230, 110, 90),
  success: (120, 200, 140),
  label: (200, 170, 255),
  value: (240, 220, 130),
};

const LIGHT: Palette = Palette {
  timestamp: (90, 100, 115),
  primary: (20, 90, 160),
  accent: (190, 60, 40),
  success: (30, 130, 70),
  label: (110, 60, 170),
  value: (150, 100, 20),
};

impl Theme {
  const fn palette(self) -> Palette {
    match self {
      Self::Dark => DARK,
      Self::Light => LIGHT,
    }
  }
}

pub struct Colors {
  enabled: bool,
  palette: Palette,
}

pub trait IntoComfyColor {
  fn into_comfy(self) -> ComfyColor;
}

impl IntoComfyColor for Color {
  fn into_comfy(self) -> ComfyColor {
    match self {
      Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
      Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
      _ => ComfyColor::Reset,
    }
  }
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self {
      enabled,
      palette: theme.palette(),
    }
  }

  const fn pick(&self, (r, g, b): (u8, u8, u8)) -> Color {
    if self.enabled { Color::Rgb { r, g, b } } else { Color::Reset }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(self.palette.timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.pick(self.palette.primary)
  }

  pub const fn accent(&self) -> Color {
    self.pick(self.palette.accent)
  }

  pub const fn success(&self) -> Color {
    self.pick(self.palette.success)
  }

  pub const fn label(&self) -> Color {
    self.pick(self.palette.label)
  }

  pub const fn value(&self) -> Color {
    self.pick(self.palette.value)
  }

  pub const fn clap_styles() -> Styles {
    const fn rgb((r, g, b): (u8, u8, u8)) -> Option<ClapColor> {
      Some(ClapColor::Rgb(RgbColor(r, g, b)))
    }

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(rgb(DARK.label)))
      .usage(Style::new().bold().fg_color(rgb(DARK.label)))
      .literal(Style::new().fg_color(rgb(DARK.success)))
      .placeholder(Style::new().fg_color(rgb(DARK.primary)))
      .error(Style::new().bold().fg_color(rgb(DARK.accent)))
      .valid(Style::new().fg_color(rgb(DARK.success)))
      .invalid(Style::new().bold().fg_color(rgb(DARK.accent)))
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

/// `COLORFGBG` is `fg;bg`; background colors 7 and above are light.
fn detect_terminal_theme() -> Theme {
  std::env::var("COLORFGBG")
    .ok()
    .and_then(|value| value.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
    .map_or(Theme::Dark, |bg| if bg >= 7 { Theme::Light } else { Theme::Dark })
}
