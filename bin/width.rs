use derive_more::{Display, Error};
use std::str::FromStr;

/// The register widths the command line interface can operate on.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Width {
    #[display(fmt = "8")]
    W8,
    #[display(fmt = "16")]
    W16,
    #[display(fmt = "32")]
    W32,
    #[default]
    #[display(fmt = "64")]
    W64,
    #[display(fmt = "128")]
    W128,
    #[display(fmt = "256")]
    W256,
}

/// The reason why parsing [`Width`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected one of 8, 16, 32, 64, 128 or 256")]
pub struct ParseWidthError;

impl FromStr for Width {
    type Err = ParseWidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "8" => Ok(Width::W8),
            "16" => Ok(Width::W16),
            "32" => Ok(Width::W32),
            "64" => Ok(Width::W64),
            "128" => Ok(Width::W128),
            "256" => Ok(Width::W256),
            _ => Err(ParseWidthError),
        }
    }
}

/// Evaluates `$body` with the [`Width`] bound to the constant `$w`.
macro_rules! with_width {
    ($width:expr, |$w:ident| $body:expr) => {
        match $width {
            $crate::width::Width::W8 => {
                const $w: usize = 8;
                $body
            }
            $crate::width::Width::W16 => {
                const $w: usize = 16;
                $body
            }
            $crate::width::Width::W32 => {
                const $w: usize = 32;
                $body
            }
            $crate::width::Width::W64 => {
                const $w: usize = 64;
                $body
            }
            $crate::width::Width::W128 => {
                const $w: usize = 128;
                $body
            }
            $crate::width::Width::W256 => {
                const $w: usize = 256;
                $body
            }
        }
    };
}

pub(crate) use with_width;
