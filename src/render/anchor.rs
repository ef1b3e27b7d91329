use std::fmt;
use std::str::FromStr;

use crate::error::AnchorError;
use crate::layout::Rect;

/// Where a text label sits inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vertical {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Horizontal {
    Left,
    Center,
    Right,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterLeft,
        Anchor::Center,
        Anchor::CenterRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    fn from_parts(v: Vertical, h: Horizontal) -> Self {
        match (v, h) {
            (Vertical::Top, Horizontal::Left) => Anchor::TopLeft,
            (Vertical::Top, Horizontal::Center) => Anchor::TopCenter,
            (Vertical::Top, Horizontal::Right) => Anchor::TopRight,
            (Vertical::Center, Horizontal::Left) => Anchor::CenterLeft,
            (Vertical::Center, Horizontal::Center) => Anchor::Center,
            (Vertical::Center, Horizontal::Right) => Anchor::CenterRight,
            (Vertical::Bottom, Horizontal::Left) => Anchor::BottomLeft,
            (Vertical::Bottom, Horizontal::Center) => Anchor::BottomCenter,
            (Vertical::Bottom, Horizontal::Right) => Anchor::BottomRight,
        }
    }

    fn parts(self) -> (Vertical, Horizontal) {
        match self {
            Anchor::TopLeft => (Vertical::Top, Horizontal::Left),
            Anchor::TopCenter => (Vertical::Top, Horizontal::Center),
            Anchor::TopRight => (Vertical::Top, Horizontal::Right),
            Anchor::CenterLeft => (Vertical::Center, Horizontal::Left),
            Anchor::Center => (Vertical::Center, Horizontal::Center),
            Anchor::CenterRight => (Vertical::Center, Horizontal::Right),
            Anchor::BottomLeft => (Vertical::Bottom, Horizontal::Left),
            Anchor::BottomCenter => (Vertical::Bottom, Horizontal::Center),
            Anchor::BottomRight => (Vertical::Bottom, Horizontal::Right),
        }
    }

    /// Anchor point for text inside `rect`, inset by `margin` from the
    /// anchored edges. Centered axes ignore the margin.
    pub fn position(self, rect: &Rect, margin: f64) -> (f64, f64) {
        let (v, h) = self.parts();
        let (cx, cy) = rect.center();
        let x = match h {
            Horizontal::Left => rect.x + margin,
            Horizontal::Center => cx,
            Horizontal::Right => rect.x + rect.dx - margin,
        };
        let y = match v {
            Vertical::Top => rect.y + margin,
            Vertical::Center => cy,
            Vertical::Bottom => rect.y + rect.dy - margin,
        };
        (x, y)
    }

    /// SVG `text-anchor` value.
    pub fn text_anchor(self) -> &'static str {
        match self.parts().1 {
            Horizontal::Left => "start",
            Horizontal::Center => "middle",
            Horizontal::Right => "end",
        }
    }

    /// SVG `dominant-baseline` value.
    pub fn baseline(self) -> &'static str {
        match self.parts().0 {
            Vertical::Top => "hanging",
            Vertical::Center => "central",
            Vertical::Bottom => "text-after-edge",
        }
    }

    pub fn is_vertically_centered(self) -> bool {
        self.parts().0 == Vertical::Center
    }
}

impl FromStr for Anchor {
    type Err = AnchorError;

    /// Accepts `center` or `<top|center|bottom> <left|center|right>`, any case,
    /// with space, `-` or `_` between the two words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || AnchorError::UnknownLocation(s.to_string());
        let lowered = s.trim().to_ascii_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|w| !w.is_empty())
            .collect();

        let vertical = |w: &str| match w {
            "top" => Some(Vertical::Top),
            "center" => Some(Vertical::Center),
            "bottom" => Some(Vertical::Bottom),
            _ => None,
        };
        let horizontal = |w: &str| match w {
            "left" => Some(Horizontal::Left),
            "center" => Some(Horizontal::Center),
            "right" => Some(Horizontal::Right),
            _ => None,
        };

        match words.as_slice() {
            ["center"] => Ok(Anchor::Center),
            [v, h] => match (vertical(*v), horizontal(*h)) {
                (Some(v), Some(h)) => Ok(Anchor::from_parts(v, h)),
                _ => Err(unknown()),
            },
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Anchor::Center {
            return f.write_str("center");
        }
        let (v, h) = self.parts();
        let v = match v {
            Vertical::Top => "top",
            Vertical::Center => "center",
            Vertical::Bottom => "bottom",
        };
        let h = match h {
            Horizontal::Left => "left",
            Horizontal::Center => "center",
            Horizontal::Right => "right",
        };
        write!(f, "{v} {h}")
    }
}
