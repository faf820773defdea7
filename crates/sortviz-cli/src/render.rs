//! Plain-text rendering of steps, listings and complexity tables.
//!
//! ```text
//! #3  pass 1/2  line 6: [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]]
//!   3 ~ ########################################
//!   1 ~ #############
//!   2   ###########################
//! Swapping 3 and 1
//! ```
//!
//! Markers: `?` comparing, `~` swapping, `*` picked, `=` sorted.

use std::fmt::Write as _;

use sortviz_core::{AlgorithmKind, StepView};

/// Width of the longest bar.
pub const BAR_WIDTH: usize = 40;

/// Header, bars and explanation for one step.
#[must_use]
pub fn render_step<S: StepView>(kind: AlgorithmKind, step: &S, index: usize) -> String {
    let mut out = String::new();
    let line = kind.listing_line(step.code_highlight());
    let code = kind.listing().get(line).map_or("", |l| l.code);
    let _ = writeln!(
        out,
        "#{index}  pass {}/{}  line {}: {code}",
        step.current_pass(),
        step.total_passes(),
        line + 1,
    );
    out.push_str(&render_bars(step));
    let _ = writeln!(out, "{}", step.explanation());
    out
}

/// One bar per element, scaled to the largest value.
#[must_use]
pub fn render_bars<S: StepView>(step: &S) -> String {
    let array = step.array();
    let max = array.iter().map(|el| el.value).max().unwrap_or(1).max(1);
    let label_width = array
        .iter()
        .map(|el| el.value.to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for (position, el) in array.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>label_width$} {} {}",
            el.value,
            step.highlight_at(position).marker(),
            "#".repeat(bar_len(el.value, max)),
        );
    }
    out
}

/// Bar length for `value`, rounded up so every positive value is visible.
fn bar_len(value: i32, max: i32) -> usize {
    let (Ok(value), Ok(max)) = (u64::try_from(value), u64::try_from(max)) else {
        return 0;
    };
    if value == 0 {
        return 0;
    }
    let scaled = (value * BAR_WIDTH as u64).div_ceil(max.max(1));
    usize::try_from(scaled).map_or(BAR_WIDTH, |len| len.clamp(1, BAR_WIDTH))
}

/// Listing with `>` on the highlighted line.
#[must_use]
pub fn render_listing(kind: AlgorithmKind, highlighted: Option<usize>) -> String {
    let mut out = String::new();
    for (index, line) in kind.listing().iter().enumerate() {
        let marker = if highlighted == Some(index) { '>' } else { ' ' };
        let indent = "  ".repeat(usize::from(line.indent));
        let _ = writeln!(out, "{marker} {:>2}  {indent}{}", index + 1, line.code);
    }
    out
}

#[must_use]
pub fn render_complexity(kind: AlgorithmKind) -> String {
    let c = kind.complexity();
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    let mut out = String::new();
    let _ = writeln!(out, "best      {}", c.best);
    let _ = writeln!(out, "average   {}", c.average);
    let _ = writeln!(out, "worst     {}", c.worst);
    let _ = writeln!(out, "space     {}", c.space);
    let _ = writeln!(out, "stable    {}", yes_no(c.stable));
    let _ = writeln!(out, "in place  {}", yes_no(c.in_place));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::{BubbleSort, ElementIds, InsertionSort, SortAlgorithm, SortOrder};

    #[test]
    fn bars_scale_to_largest_value() {
        assert_eq!(bar_len(10, 10), BAR_WIDTH);
        assert_eq!(bar_len(5, 10), BAR_WIDTH / 2);
        assert_eq!(bar_len(1, 999), 1);
        assert_eq!(bar_len(0, 10), 0);
    }

    #[test]
    fn compare_step_marks_both_positions() {
        let arr = ElementIds::new().build(&[3, 1, 2]);
        let compare = BubbleSort::steps(&arr, SortOrder::Ascending)
            .nth(1)
            .expect("compare step");
        let text = render_step(AlgorithmKind::Bubble, &compare, 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("#1  pass 1/2  line 4: if (arr[j] > arr[j + 1]) {"));
        assert!(lines[1].starts_with("3 ? "));
        assert!(lines[2].starts_with("1 ? "));
        assert!(lines[3].starts_with("2   "));
        assert_eq!(lines[4], compare.explanation);
    }

    #[test]
    fn insertion_marks_picked_element() {
        let arr = ElementIds::new().build(&[5, 1, 4]);
        let pick = InsertionSort::steps(&arr, SortOrder::Descending)
            .nth(1)
            .expect("pick step");
        let bars = render_bars(&pick);
        let lines: Vec<&str> = bars.lines().collect();
        assert!(lines[0].starts_with("5 = "));
        assert!(lines[1].starts_with("1 * "));
    }

    #[test]
    fn empty_array_renders_header_and_explanation() {
        let step = BubbleSort::start_step(&[], SortOrder::Ascending);
        let text = render_step(AlgorithmKind::Bubble, &step, 0);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("pass 0/0"));
    }

    #[test]
    fn listing_highlights_one_line() {
        let text = render_listing(AlgorithmKind::Insertion, Some(10));
        let marked: Vec<&str> = text.lines().filter(|l| l.starts_with('>')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("arr[j + 1] = current;"));
        assert_eq!(text.lines().count(), AlgorithmKind::Insertion.listing().len());
    }

    #[test]
    fn complexity_table_lists_all_rows() {
        let text = render_complexity(AlgorithmKind::Bubble);
        assert!(text.contains("worst     O(n²)"));
        assert!(text.contains("stable    yes"));
    }
}
