//! Launcher argument parsing
//!
//! Launcher options are slash-style tokens mixed freely with the media path:
//!
//! ```text
//! /r<W>x<H>                 display resolution
//! /win10 | /win11           window chrome and taskbar preset
//! /wl<N> /wr<N> /wt<N> /wb<N>   window border overrides
//! /dl<N> /dr<N> /dt<N> /db<N>   display area overrides
//! <path>                    media file handed to the player
//! ```
//!
//! Tokens are case-insensitive and may appear in any order. Resolution is
//! applied first, then the preset, then overrides, so `/db` always wins
//! over the taskbar adjustment.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{BorderOffsets, OsPreset, Rect};

/// Parsed launcher arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FitArgs {
    /// Media file to open in the player
    pub path: PathBuf,
    /// Window chrome to account for
    pub borders: BorderOffsets,
    /// Area the window must fit into
    pub display: Rect,
}

impl FitArgs {
    /// Parse launcher tokens (program name excluded)
    pub fn parse<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = tokens.into_iter().map(|t| t.as_ref().to_string()).collect();
        let lower: Vec<String> = raw.iter().map(|t| t.to_lowercase()).collect();
        let mut consumed = vec![false; raw.len()];

        let mut borders = BorderOffsets::default();
        let mut display_area = Rect::default();

        if let Some(i) = lower.iter().position(|t| t.starts_with("/r")) {
            let (width, height) = parse_resolution(&raw[i], &lower[i][2..])?;
            display_area = Rect::from_size(width, height);
            consumed[i] = true;
        }

        let preset = lower
            .iter()
            .enumerate()
            .filter(|(i, _)| !consumed[*i])
            .find_map(|(i, t)| OsPreset::from_token(t).map(|p| (i, p)));
        if let Some((i, preset)) = preset {
            borders = preset.borders();
            display_area.bottom = display_area
                .bottom
                .checked_sub(preset.taskbar_height())
                .ok_or_else(|| Error::invalid_arg(&raw[i], "display bottom out of range"))?;
            consumed[i] = true;
            debug!(?preset, "Applied OS preset");
        }

        for (i, token) in lower.iter().enumerate() {
            if consumed[i] {
                continue;
            }
            let Some((slot, digits)) = override_slot(token, &mut borders, &mut display_area) else {
                continue;
            };
            *slot = parse_number(&raw[i], digits)?;
            consumed[i] = true;
        }

        let path = raw
            .iter()
            .zip(&lower)
            .zip(&consumed)
            .find(|((_, l), used)| {
                !**used && !l.starts_with("/r") && OsPreset::from_token(l).is_none()
            })
            .map(|((r, _), _)| PathBuf::from(r))
            .ok_or(Error::MissingPath)?;

        debug!(
            path = %path.display(),
            display = %display_area,
            ?borders,
            "Parsed launcher arguments"
        );

        Ok(Self { path, borders, display: display_area })
    }
}

/// Split `<W>x<H>` into its two numbers
fn parse_resolution(arg: &str, value: &str) -> Result<(i32, i32)> {
    let (w, h) = value
        .split_once('x')
        .ok_or_else(|| Error::invalid_arg(arg, "expected resolution as <width>x<height>"))?;
    Ok((parse_number(arg, w)?, parse_number(arg, h)?))
}

fn parse_number(arg: &str, digits: &str) -> Result<i32> {
    digits
        .parse()
        .map_err(|_| Error::invalid_arg(arg, format!("'{}' is not a whole number", digits)))
}

/// Resolve an override token to the field it sets and its numeric suffix
fn override_slot<'a, 'b>(
    token: &'a str,
    borders: &'b mut BorderOffsets,
    display: &'b mut Rect,
) -> Option<(&'b mut i32, &'a str)> {
    if token.len() < 3 || !token.is_char_boundary(3) {
        return None;
    }
    let (prefix, digits) = token.split_at(3);
    let slot = match prefix {
        "/wl" => &mut borders.left,
        "/wr" => &mut borders.right,
        "/wt" => &mut borders.top,
        "/wb" => &mut borders.bottom,
        "/dl" => &mut display.left,
        "/dr" => &mut display.right,
        "/dt" => &mut display.top,
        "/db" => &mut display.bottom,
        _ => return None,
    };
    Some((slot, digits))
}
