use std::collections::{HashMap, HashSet};

use crate::core::survey::{normalize_goals, normalize_occasions};
use crate::core::tables::{
    palette_capsule, palette_color_tip, palette_styles, GOAL_STYLES, OCCASION_STYLES,
};
use crate::models::{ImageStats, PaletteCategory, StyleProfile, Survey, WhySummary};

/// Brightness below this gets the "lighter tops" tip
pub const DARK_BRIGHTNESS_THRESHOLD: f64 = 0.35;
/// Saturation below this gets the "accent color" tip
pub const MUTED_SATURATION_THRESHOLD: f64 = 0.2;
/// Ranked style list is truncated to this many entries
pub const MAX_RECOMMENDED_STYLES: usize = 5;

/// Synthesize a style profile from image statistics and the survey
///
/// Styles are gathered from three sources (palette category, occasions,
/// goals), tallied by how many sources mention them, and ranked. Tips and
/// the starter capsule come from fixed threshold rules and palette tables.
pub fn build_style_profile(stats: &ImageStats, survey: &Survey) -> StyleProfile {
    let occasions = normalize_occasions(&survey.primary_occasions);
    let goals = normalize_goals(&survey.style_goals);

    // Deduplicate within each category first; the tally counts category
    // presence, not raw occurrences.
    let from_palette = palette_styles(stats.palette).to_vec();
    let from_occasions = merge_unique(
        occasions
            .iter()
            .map(|token| styles_for(&OCCASION_STYLES, token)),
    );
    let from_goals = merge_unique(goals.iter().map(|token| styles_for(&GOAL_STYLES, token)));

    let recommended_styles = rank_styles(&[&from_palette, &from_occasions, &from_goals]);

    let mut fit_tips = fit_tips(stats.brightness, stats.saturation);
    fit_tips.extend(color_tips(stats.palette, &survey.color_prefs));

    StyleProfile {
        recommended_styles,
        why: WhySummary {
            palette_match: stats.palette.label().to_string(),
            occasions,
            goals,
        },
        fit_tips,
        starter_capsule: palette_capsule(stats.palette)
            .iter()
            .map(|garment| garment.to_string())
            .collect(),
    }
}

#[inline]
fn styles_for(
    table: &HashMap<&'static str, &'static [&'static str]>,
    token: &str,
) -> &'static [&'static str] {
    table.get(token).copied().unwrap_or(&[])
}

/// Flatten style lists keeping only the first occurrence of each style
fn merge_unique<I>(lists: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'static [&'static str]>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for list in lists {
        for &style in list {
            if seen.insert(style) {
                out.push(style);
            }
        }
    }
    out
}

/// Tally category presence and rank
///
/// Ties break by first-seen order across the category slices, carried as an
/// explicit insertion index rather than relying on sort stability.
fn rank_styles(categories: &[&[&'static str]]) -> Vec<String> {
    // (style, presence count); position doubles as the insertion index
    let mut tallies: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for category in categories {
        for &style in *category {
            match index.get(style) {
                Some(&at) => tallies[at].1 += 1,
                None => {
                    index.insert(style, tallies.len());
                    tallies.push((style, 1));
                }
            }
        }
    }

    let mut ranked: Vec<(usize, &str, usize)> = tallies
        .into_iter()
        .enumerate()
        .map(|(insertion, (style, count))| (insertion, style, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
    ranked.truncate(MAX_RECOMMENDED_STYLES);

    ranked.into_iter().map(|(_, style, _)| style.to_string()).collect()
}

/// Exactly two tips driven by the brightness and saturation thresholds
fn fit_tips(brightness: f64, saturation: f64) -> Vec<String> {
    let mut tips = Vec::with_capacity(2);

    if brightness < DARK_BRIGHTNESS_THRESHOLD {
        tips.push("Use lighter tops to brighten your look and draw focus upward.".to_string());
    } else {
        tips.push("Balance light tops with darker bottoms for definition.".to_string());
    }

    if saturation < MUTED_SATURATION_THRESHOLD {
        tips.push("Introduce a small accent color (belt, hat, sneakers) to add interest.".to_string());
    } else {
        tips.push("Anchor bold colors with one neutral piece to avoid clashing.".to_string());
    }

    tips
}

/// Palette tip plus, when preferences were given, a verbatim listing of them
fn color_tips(palette: PaletteCategory, prefs: &[String]) -> Vec<String> {
    let mut tips = vec![palette_color_tip(palette).to_string()];
    if !prefs.is_empty() {
        tips.push(format!(
            "Incorporate your preferred colors: {}.",
            prefs.join(", ")
        ));
    }
    tips
}
