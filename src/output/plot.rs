// plot.rs - SVG line plot of cumulative mutation counts

use std::path::Path;

use crate::core::ClassificationTrace;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const PADDING: f64 = 60.0;

const SERIES: [(&str, &str); 3] = [
    ("indels", "#1f77b4"),
    ("synonymous mutations", "#ff7f0e"),
    ("non synonymous mutations", "#2ca02c"),
];

struct Generator {
    x_scale: f64,
    y_scale: f64,
    buffer: String,
}

impl Generator {
    fn new(columns: usize, max_count: usize) -> Self {
        let plot_width = WIDTH - 2.0 * PADDING;
        let plot_height = HEIGHT - 2.0 * PADDING;
        Self {
            x_scale: plot_width / columns.max(1) as f64,
            y_scale: plot_height / max_count.max(1) as f64,
            buffer: String::with_capacity(10_000),
        }
    }

    fn to_x(&self, column: usize) -> f64 {
        PADDING + column as f64 * self.x_scale
    }

    fn to_y(&self, count: usize) -> f64 {
        HEIGHT - PADDING - count as f64 * self.y_scale
    }

    fn add_line(&mut self, line: &str) {
        self.buffer.reserve(line.len() + 1);
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    fn start_svg(&mut self) {
        let line = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            WIDTH, HEIGHT, WIDTH, HEIGHT
        );
        self.add_line(&line);
        self.add_line(r#"<rect width="100%" height="100%" fill="white" />"#);
    }

    fn plot_axes(&mut self, title: &str, columns: usize, max_count: usize) {
        let (x0, y0) = (self.to_x(0), self.to_y(0));
        let (x1, y1) = (self.to_x(columns), self.to_y(max_count));
        self.add_line(&format!(
            r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y0}" stroke="black" />"#
        ));
        self.add_line(&format!(
            r#"<line x1="{x0}" y1="{y0}" x2="{x0}" y2="{y1}" stroke="black" />"#
        ));
        self.add_line(&format!(
            r#"<text x="{x0}" y="{}" font-size="11" text-anchor="middle">0</text>"#,
            y0 + 15.0
        ));
        self.add_line(&format!(
            r#"<text x="{x1}" y="{}" font-size="11" text-anchor="middle">{columns}</text>"#,
            y0 + 15.0
        ));
        self.add_line(&format!(
            r#"<text x="{}" y="{y1}" font-size="11" text-anchor="end">{max_count}</text>"#,
            x0 - 5.0
        ));
        self.add_line(&format!(
            r#"<text x="{}" y="{}" font-size="13" text-anchor="middle">position in the protein alignment</text>"#,
            WIDTH / 2.0,
            HEIGHT - 15.0
        ));
        self.add_line(&format!(
            r#"<text x="15" y="{}" font-size="13" text-anchor="middle" transform="rotate(-90 15 {})">cumulated mutation counts</text>"#,
            HEIGHT / 2.0,
            HEIGHT / 2.0
        ));
        self.add_line(&format!(
            r#"<text x="{}" y="30" font-size="15" text-anchor="middle">{}</text>"#,
            WIDTH / 2.0,
            escape(title)
        ));
    }

    fn plot_series(&mut self, values: &[usize], color: &str) {
        let points: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| format!("{:.2},{:.2}", self.to_x(i + 1), self.to_y(v)))
            .collect();
        self.add_line(&format!(
            r#"<polyline fill="none" stroke="{}" stroke-width="1.5" points="{}" />"#,
            color,
            points.join(" ")
        ));
    }

    fn plot_legend(&mut self) {
        let x = PADDING + 10.0;
        for (i, (label, color)) in SERIES.iter().enumerate() {
            let y = PADDING + 10.0 + i as f64 * 18.0;
            self.add_line(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="2" />"#,
                x,
                y,
                x + 20.0,
                y,
                color
            ));
            self.add_line(&format!(
                r#"<text x="{}" y="{}" font-size="12">{}</text>"#,
                x + 25.0,
                y + 4.0,
                label
            ));
        }
    }

    fn end_svg(&mut self) {
        self.add_line("</svg>");
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the three cumulative series against alignment column
pub fn render_cumulative_svg(trace: &ClassificationTrace, title: &str) -> String {
    let columns = trace.len();
    let totals = trace.totals();
    let max_count = totals.indels.max(totals.synonymous).max(totals.nonsynonymous);

    let mut generator = Generator::new(columns, max_count);
    generator.start_svg();
    generator.plot_axes(title, columns, max_count);
    let series = [
        &trace.cumulative_indels,
        &trace.cumulative_synonymous,
        &trace.cumulative_nonsynonymous,
    ];
    for (values, (_, color)) in series.iter().zip(SERIES.iter()) {
        generator.plot_series(values, color);
    }
    generator.plot_legend();
    generator.end_svg();
    generator.buffer
}

pub fn write_cumulative_svg(
    trace: &ClassificationTrace,
    title: &str,
    path: &Path,
) -> Result<(), String> {
    std::fs::write(path, render_cumulative_svg(trace, title))
        .map_err(|e| format!("Failed to write plot '{}': {}", path.display(), e))?;
    println!("📈 Cumulative plot written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligners::UngappedAligner;
    use crate::core::classify;
    use crate::data::CodonTable;

    #[test]
    fn test_svg_has_three_series_and_legend() {
        let trace = classify(
            b"ATGGCTAAA",
            b"ATGGCCAGA",
            &CodonTable::standard(),
            &UngappedAligner,
        )
        .unwrap();
        let svg = render_cumulative_svg(&trace, "comparison of a & b");
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 3);
        assert!(svg.contains("non synonymous mutations"));
        assert!(svg.contains("comparison of a &amp; b"));
    }

    #[test]
    fn test_empty_trace_renders() {
        let svg = render_cumulative_svg(&ClassificationTrace::default(), "empty");
        assert_eq!(svg.matches("<polyline").count(), 3);
    }
}
