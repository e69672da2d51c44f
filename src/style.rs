// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Avatar styles.
//!
//! A style is data: a [`Palette`] plus a head-drawing routine, looked up through
//! the [`STYLES`] dispatch table. Unknown style ids resolve to
//! [`AvatarStyle::Monkey`].

use std::fmt;
use std::str::FromStr;

use crate::config::Fidelity;
use crate::head::{self, HeadParams};
use crate::surface::{Point, Primitive};
use crate::visualizer::Color;

/// Four-color palette shared by limbs, joints and head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Main body and limb color.
    pub primary: Color,
    /// Gradient end color and secondary ornament color.
    pub secondary: Color,
    /// Joints and small highlights (ears, noses, beaks).
    pub accent: Color,
    /// Face, muzzle and hands.
    pub skin: Color,
}

/// Head drawing routine: a pure function of head geometry, palette and fidelity.
pub type HeadFn = fn(&HeadParams) -> Vec<Primitive>;

/// One row of the style dispatch table.
#[derive(Debug)]
pub struct StyleSpec {
    /// Style this row describes.
    pub style: AvatarStyle,
    /// Human-readable name.
    pub label: &'static str,
    /// Color palette.
    pub palette: Palette,
    /// Head drawing routine.
    pub draw_head: HeadFn,
}

/// Avatar style selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AvatarStyle {
    /// Primate: round ears and a light muzzle. The fallback style.
    #[default]
    Monkey,
    /// Human: hair silhouette and skin-toned face.
    Human,
    /// Feline: triangular ears with inner-ear detail and whiskers.
    Cat,
    /// Canine: floppy ears, snout and tongue.
    Dog,
    /// Avian: feathered crest and beak.
    Bird,
}

/// Style dispatch table, indexed by `AvatarStyle as usize`.
pub static STYLES: [StyleSpec; 5] = [
    StyleSpec {
        style: AvatarStyle::Monkey,
        label: "Monkey",
        palette: Palette {
            primary: Color::from_hex(0x8b_45_13),
            secondary: Color::from_hex(0xa0_52_2d),
            accent: Color::from_hex(0xff_d7_00),
            skin: Color::from_hex(0xde_b8_87),
        },
        draw_head: head::monkey,
    },
    StyleSpec {
        style: AvatarStyle::Human,
        label: "Human",
        palette: Palette {
            primary: Color::from_hex(0x4a_90_d9),
            secondary: Color::from_hex(0x3b_2f_2f),
            accent: Color::from_hex(0xe7_4c_3c),
            skin: Color::from_hex(0xff_db_ac),
        },
        draw_head: head::human,
    },
    StyleSpec {
        style: AvatarStyle::Cat,
        label: "Cat",
        palette: Palette {
            primary: Color::from_hex(0xff_8c_00),
            secondary: Color::from_hex(0xff_a5_00),
            accent: Color::from_hex(0xff_b6_c1),
            skin: Color::from_hex(0xff_e4_b5),
        },
        draw_head: head::cat,
    },
    StyleSpec {
        style: AvatarStyle::Dog,
        label: "Dog",
        palette: Palette {
            primary: Color::from_hex(0xd2_69_1e),
            secondary: Color::from_hex(0x8b_45_13),
            accent: Color::from_hex(0xff_69_b4),
            skin: Color::from_hex(0xf5_de_b3),
        },
        draw_head: head::dog,
    },
    StyleSpec {
        style: AvatarStyle::Bird,
        label: "Bird",
        palette: Palette {
            primary: Color::from_hex(0x41_69_e1),
            secondary: Color::from_hex(0x1e_90_ff),
            accent: Color::from_hex(0xff_a5_00),
            skin: Color::from_hex(0xf0_f8_ff),
        },
        draw_head: head::bird,
    },
];

impl AvatarStyle {
    /// Every style in table order.
    pub const ALL: [Self; 5] = [Self::Monkey, Self::Human, Self::Cat, Self::Dog, Self::Bird];

    /// Returns the id used by style selectors.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monkey => "monkey",
            Self::Human => "human",
            Self::Cat => "cat",
            Self::Dog => "dog",
            Self::Bird => "bird",
        }
    }

    /// Resolve a selector id, falling back to the default style for unknown ids.
    ///
    /// # Examples
    ///
    /// ```
    /// use ultralytics_avatar::AvatarStyle;
    ///
    /// assert_eq!(AvatarStyle::resolve("cat"), AvatarStyle::Cat);
    /// assert_eq!(AvatarStyle::resolve("dragon"), AvatarStyle::Monkey);
    /// ```
    #[must_use]
    pub fn resolve(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }

    /// Dispatch table row for this style.
    #[must_use]
    pub fn spec(self) -> &'static StyleSpec {
        &STYLES[self as usize]
    }

    /// Color palette for this style.
    #[must_use]
    pub fn palette(self) -> Palette {
        self.spec().palette
    }

    /// Head primitives for this style.
    ///
    /// # Arguments
    ///
    /// * `center` - Head center in surface coordinates.
    /// * `size` - Head radius in pixels.
    /// * `fidelity` - Eye detail level.
    #[must_use]
    pub fn head(self, center: Point, size: f32, fidelity: Fidelity) -> Vec<Primitive> {
        let spec = self.spec();
        let params = HeadParams {
            center,
            size,
            palette: spec.palette,
            fidelity,
        };
        (spec.draw_head)(&params)
    }
}

impl fmt::Display for AvatarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AvatarStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monkey" | "primate" | "ape" => Ok(Self::Monkey),
            "human" | "person" => Ok(Self::Human),
            "cat" | "feline" => Ok(Self::Cat),
            "dog" | "canine" => Ok(Self::Dog),
            "bird" | "avian" => Ok(Self::Bird),
            _ => Err(StyleParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid style string.
#[derive(Debug, Clone)]
pub struct StyleParseError(String);

impl fmt::Display for StyleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid avatar style '{}', expected one of: monkey, human, cat, dog, bird",
            self.0
        )
    }
}

impl std::error::Error for StyleParseError {}
