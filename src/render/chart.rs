//! Box-drawing line charts for the terminal.

/// Rows of scale above the lowest value.
pub const CHART_HEIGHT: usize = 10;

const LABEL_WIDTH: usize = 11;

/// Plot `series` left to right, scaled so the spread of values covers
/// `height` rows (`height + 1` lines). A flat series is a single line.
///
/// Each line is `<label> <tick><plot>`: the y value right-aligned with two
/// decimals, a `┤` tick (`┼` on the zero row and where the series starts),
/// then the curve drawn with `─ ╭ ╮ ╰ ╯ │`.
///
/// Returns an empty string for an empty series.
pub fn plot(series: &[f64], height: usize) -> String {
    let Some(&first) = series.first() else {
        return String::new();
    };

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let ratio = if range != 0.0 {
        height as f64 / range
    } else {
        1.0
    };

    let scaled = |v: f64| (v * ratio).round() as i64;
    let min2 = scaled(min);
    let max2 = scaled(max);
    let rows = (max2 - min2) as usize;

    // Row 0 is the top of the chart; value `min2 + y` lives on row `rows - y`.
    let level = |v: f64| (scaled(v) - min2) as usize;

    let mut ticks = vec!['┤'; rows + 1];
    if (min2..=max2).contains(&0) {
        ticks[max2 as usize] = '┼';
    }
    ticks[rows - level(first)] = '┼';

    let mut grid = vec![vec![' '; series.len()]; rows + 1];
    for (x, pair) in series.windows(2).enumerate() {
        let (y0, y1) = (level(pair[0]), level(pair[1]));
        if y0 == y1 {
            grid[rows - y0][x] = '─';
            continue;
        }
        let (upper, lower) = if y0 > y1 { ('╮', '╰') } else { ('╭', '╯') };
        grid[rows - y0.max(y1)][x] = upper;
        grid[rows - y0.min(y1)][x] = lower;
        for y in y0.min(y1) + 1..y0.max(y1) {
            grid[rows - y][x] = '│';
        }
    }

    let mut lines = Vec::with_capacity(rows + 1);
    for (row, cells) in grid.iter().enumerate() {
        let label = if rows > 0 {
            max - row as f64 * range / rows as f64
        } else {
            max
        };
        let plot: String = cells.iter().collect();
        let line = format!("{:>w$.2} {}{}", label, ticks[row], plot, w = LABEL_WIDTH);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
