//! Bar chart model and SVG export
//!
//! Charts carry a fixed size and a deterministic bar and color order so the
//! same data always renders the same image.

use crate::Result;
use crate::query::{DestinationTotal, TripDuration};
use quick_xml::Writer;
use quick_xml::events::BytesText;
use std::io::{Cursor, Write};
use std::path::Path;
use tracing::info;

/// Title used for exported destination charts
pub const DEFAULT_TITLE: &str = "Traveler Travel Chart";

/// Fill color for single-series traveler charts
pub const TRIP_COLOR: &str = "#87CEEB";

/// Colors assigned to destination bars by position
pub const PALETTE: [&str; 10] = [
    "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
    "#BCBD22", "#17BECF",
];

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: i64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    fn empty(title: &str, width: u32, height: u32) -> Self {
        Self {
            title: title.to_string(),
            width,
            height,
            x_label: "Destination".to_string(),
            y_label: "Duration (days)".to_string(),
            bars: Vec::new(),
        }
    }

    /// One bar per destination, ascending by total then by name, with palette
    /// colors assigned in that order
    #[must_use]
    pub fn destination_totals(
        totals: &[DestinationTotal],
        title: &str,
        width: u32,
        height: u32,
    ) -> Self {
        let mut ordered: Vec<&DestinationTotal> = totals.iter().collect();
        ordered.sort_by(|a, b| {
            a.total_days
                .cmp(&b.total_days)
                .then_with(|| a.destination.cmp(&b.destination))
        });

        let mut chart = Self::empty(title, width, height);
        chart.bars = ordered
            .into_iter()
            .enumerate()
            .map(|(idx, total)| Bar {
                label: total.destination.clone(),
                value: total.total_days,
                color: PALETTE[idx % PALETTE.len()].to_string(),
            })
            .collect();
        chart
    }

    /// One bar per trip of a traveler, in trip order
    #[must_use]
    pub fn traveler_trips(
        traveler_name: &str,
        durations: &[TripDuration],
        width: u32,
        height: u32,
    ) -> Self {
        let mut chart = Self::empty(&format!("{traveler_name}'s Trips Duration"), width, height);
        chart.bars = durations
            .iter()
            .map(|d| Bar {
                label: d.destination.clone(),
                value: d.days,
                color: TRIP_COLOR.to_string(),
            })
            .collect();
        chart
    }

    /// Render as a standalone SVG document
    pub fn render_svg(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        let width = self.width.to_string();
        let height = self.height.to_string();
        let view_box = format!("0 0 {width} {height}");

        writer
            .create_element("svg")
            .with_attributes([
                ("xmlns", "http://www.w3.org/2000/svg"),
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("viewBox", view_box.as_str()),
            ])
            .write_inner_content(|w| self.write_body(w))?;

        let bytes = writer.into_inner().into_inner();
        let mut svg = String::from_utf8_lossy(&bytes).into_owned();
        svg.push('\n');
        Ok(svg)
    }

    fn write_body<W: Write>(&self, w: &mut Writer<W>) -> std::io::Result<()> {
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let baseline = MARGIN_TOP + plot_height;
        let max_value = self.bars.iter().map(|b| b.value).max().unwrap_or(0).max(1) as f64;

        w.create_element("rect")
            .with_attributes([("width", "100%"), ("height", "100%"), ("fill", "#FFFFFF")])
            .write_empty()?;
        let center = px(width / 2.0);
        w.create_element("text")
            .with_attributes([
                ("x", center.as_str()),
                ("y", "30"),
                ("text-anchor", "middle"),
                ("font-size", "16"),
                ("font-weight", "bold"),
            ])
            .write_text_content(BytesText::new(&self.title))?;

        let left = px(MARGIN_LEFT);
        let top = px(MARGIN_TOP);
        let bottom = px(baseline);
        let right = px(MARGIN_LEFT + plot_width);
        line(w, [&left, &top, &left, &bottom])?;
        line(w, [&left, &bottom, &right, &bottom])?;

        if !self.bars.is_empty() {
            let slot = plot_width / self.bars.len() as f64;
            let bar_width = slot * 0.8;
            for (idx, bar) in self.bars.iter().enumerate() {
                let bar_height = bar.value.max(0) as f64 / max_value * plot_height;
                let x = MARGIN_LEFT + slot * idx as f64 + (slot - bar_width) / 2.0;
                let center = x + bar_width / 2.0;

                w.create_element("rect")
                    .with_attributes([
                        ("x", px(x).as_str()),
                        ("y", px(baseline - bar_height).as_str()),
                        ("width", px(bar_width).as_str()),
                        ("height", px(bar_height).as_str()),
                        ("fill", bar.color.as_str()),
                    ])
                    .write_empty()?;
                text(w, center, baseline + 16.0, "11", &bar.label)?;
                let value = bar.value.to_string();
                text(w, center, baseline - bar_height - 4.0, "11", &value)?;
            }
        }

        text(w, MARGIN_LEFT + plot_width / 2.0, height - 20.0, "12", &self.x_label)?;
        let y = px(MARGIN_TOP + plot_height / 2.0);
        w.create_element("text")
            .with_attributes([
                ("x", "20"),
                ("y", y.as_str()),
                ("text-anchor", "middle"),
                ("font-size", "12"),
                ("transform", format!("rotate(-90 20 {y})").as_str()),
            ])
            .write_text_content(BytesText::new(&self.y_label))?;
        Ok(())
    }

    /// Write the SVG rendering to `path`
    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.render_svg()?)?;
        info!("Saved chart '{}' to {}", self.title, path.display());
        Ok(())
    }
}

fn px(value: f64) -> String {
    format!("{value:.1}")
}

/// Centered text element
fn text<W: Write>(
    w: &mut Writer<W>,
    x: f64,
    y: f64,
    font_size: &str,
    content: &str,
) -> std::io::Result<()> {
    let x = px(x);
    let y = px(y);
    w.create_element("text")
        .with_attributes([
            ("x", x.as_str()),
            ("y", y.as_str()),
            ("text-anchor", "middle"),
            ("font-size", font_size),
        ])
        .write_text_content(BytesText::new(content))?;
    Ok(())
}

fn line<W: Write>(w: &mut Writer<W>, [x1, y1, x2, y2]: [&str; 4]) -> std::io::Result<()> {
    w.create_element("line")
        .with_attributes([
            ("x1", x1),
            ("y1", y1),
            ("x2", x2),
            ("y2", y2),
            ("stroke", "#000000"),
        ])
        .write_empty()?;
    Ok(())
}
