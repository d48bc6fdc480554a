//! Single-page HTML gallery for a set of mapping plots.
use std::path::Path;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

use crate::error::Result;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

/// A titled block of text and plots.
pub struct ReportSection {
    title: String,
    content: Vec<Markup>,
    plots: Vec<Plot>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            plots: Vec::new(),
        }
    }

    pub fn add_content(&mut self, content: Markup) {
        self.content.push(content);
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.plots.push(plot);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }
}

pub struct Report {
    title: String,
    version: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(title: &str, version: &str) -> Self {
        Self {
            title: title.to_string(),
            version: version.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn render(&self) -> Markup {
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style {
                        "body { font-family: sans-serif; margin: 2em; }
                         nav a { margin-right: 1em; }
                         section { margin-bottom: 3em; }
                         .meta { color: #666; font-size: 0.9em; }"
                    }
                }
                body {
                    h1 { (self.title) }
                    p class="meta" { "zmap " (self.version) " · generated " (generated) }
                    nav {
                        @for (i, section) in self.sections.iter().enumerate() {
                            a href={ "#section-" (i) } { (section.title) }
                        }
                    }
                    @for (i, section) in self.sections.iter().enumerate() {
                        section id={ "section-" (i) } {
                            h2 { (section.title) }
                            @for block in &section.content {
                                div { (block) }
                            }
                            @for (j, plot) in section.plots.iter().enumerate() {
                                (PreEscaped(plot.to_inline_html(Some(&format!("plot-{}-{}", i, j)))))
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path.as_ref(), self.render().into_string())?;
        log::info!("Report written to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::SamplePath;
    use crate::plot::{render, DEFAULT_SAMPLE_COUNT};
    use crate::transform::TransformKind;

    fn sample_report() -> Report {
        let path = SamplePath::horizontal_line(1.5, -2.5, 2.5, 200).unwrap();
        let plot = render(
            &path,
            &TransformKind::Square,
            DEFAULT_SAMPLE_COUNT,
            "Horizontal Line: z = x + 1.5i",
            "Transformed Parabola: w = z²",
        )
        .unwrap();

        let mut section = ReportSection::new("Horizontal line under z²");
        section.add_content(html! { "A horizontal line maps to a parabola." });
        section.add_plot(plot);

        let mut report = Report::new("zmap gallery", "0.1.0");
        report.add_section(section);
        report
    }

    #[test]
    fn test_render_contains_sections_and_plots() {
        let html = sample_report().render().into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Horizontal line under z²"));
        assert!(html.contains("plot-0-0"));
        assert!(html.contains(PLOTLY_CDN));
    }

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("index.html");
        sample_report().save_to_file(&out).unwrap();
        assert!(std::fs::read_to_string(&out).unwrap().contains("zmap gallery"));
    }
}
