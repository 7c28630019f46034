//! Tooltip text for the build buttons.

use super::types::Blueprint;

/// Lines shown when hovering a build button: the upper-cased name, the cost,
/// one `Out:` line per produced resource, one `In:` line per consumed
/// resource, then the quoted description after a blank line.
pub fn tooltip_lines(bp: &Blueprint) -> Vec<String> {
    let mut lines = vec![bp.name.to_uppercase()];

    let mut cost = format!("Cost: {} Cr", bp.cost.credits);
    if bp.cost.energy > 0 {
        cost.push_str(&format!(", {} E", bp.cost.energy));
    }
    lines.push(cost);

    for (kind, rate) in bp.produces.iter() {
        lines.push(format!("Out: +{} {}/s", rate, kind.label()));
    }
    for (kind, rate) in bp.consumes.iter() {
        lines.push(format!("In: -{} {}/s", rate, kind.label()));
    }

    lines.push(format!("\n\"{}\"", bp.description));
    lines
}

pub fn tooltip_text(bp: &Blueprint) -> String {
    tooltip_lines(bp).join("\n")
}
