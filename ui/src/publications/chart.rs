use std::collections::BTreeMap;

use dioxus::prelude::*;

/// Plot area in SVG user units.
const PLOT_WIDTH: f64 = 560.0;
const PLOT_HEIGHT: f64 = 160.0;
const BAR_WIDTH: f64 = 28.0;
const PADDING_X: f64 = 24.0;
const PADDING_TOP: f64 = 18.0;
const LABEL_BAND: f64 = 22.0;

/// Geometry for one bar, in plot coordinates (origin top-left of the plot area).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: u64,
    /// Centre of the bar along the x axis.
    pub x: f64,
    pub height: f64,
}

/// Lays out one bar per key, keys ascending. Heights are relative to the
/// largest value (floored at 1) and keys are spaced evenly across `width`.
pub fn scale_bars(data: &BTreeMap<String, u64>, width: f64, height: f64) -> Vec<ChartBar> {
    let max_value = data.values().copied().max().unwrap_or(0).max(1) as f64;
    let steps = data.len().saturating_sub(1).max(1) as f64;

    data.iter()
        .enumerate()
        .map(|(i, (label, &value))| ChartBar {
            label: label.clone(),
            value,
            x: i as f64 * width / steps,
            height: value as f64 / max_value * height,
        })
        .collect()
}

/// SVG coordinates for a scaled bar, offset into the padded view box.
#[derive(Debug, Clone, PartialEq)]
struct PlacedBar {
    label: String,
    value: u64,
    rect_x: f64,
    rect_y: f64,
    height: f64,
    centre_x: f64,
    value_y: f64,
    label_y: f64,
}

fn place(bar: ChartBar, baseline: f64) -> PlacedBar {
    let centre_x = PADDING_X + bar.x;
    PlacedBar {
        rect_x: centre_x - BAR_WIDTH / 2.0,
        rect_y: baseline - bar.height,
        value_y: baseline - bar.height - 4.0,
        label_y: baseline + LABEL_BAND - 6.0,
        centre_x,
        height: bar.height,
        label: bar.label,
        value: bar.value,
    }
}

#[component]
pub fn BarChart(title: String, data: BTreeMap<String, u64>, empty_label: String) -> Element {
    let view_width = PLOT_WIDTH + PADDING_X * 2.0;
    let view_height = PADDING_TOP + PLOT_HEIGHT + LABEL_BAND;
    let baseline = PADDING_TOP + PLOT_HEIGHT;
    let bars: Vec<PlacedBar> = scale_bars(&data, PLOT_WIDTH, PLOT_HEIGHT)
        .into_iter()
        .map(|bar| place(bar, baseline))
        .collect();

    rsx! {
        figure { class: "pub-chart",
            figcaption { class: "pub-chart__title", "{title}" }

            if bars.is_empty() {
                p { class: "pub-chart__placeholder", "{empty_label}" }
            } else {
                svg {
                    class: "pub-chart__plot",
                    "viewBox": "0 0 {view_width} {view_height}",
                    "preserveAspectRatio": "xMidYMid meet",
                    "role": "img",
                    "aria-label": "{title}",

                    line {
                        class: "pub-chart__axis",
                        x1: "0",
                        y1: "{baseline}",
                        x2: "{view_width}",
                        y2: "{baseline}",
                    }

                    for bar in bars.into_iter() {
                        g { key: "{bar.label}", class: "pub-chart__bar",
                            rect {
                                x: "{bar.rect_x}",
                                y: "{bar.rect_y}",
                                width: "{BAR_WIDTH}",
                                height: "{bar.height}",
                                rx: "3",
                            }
                            text {
                                class: "pub-chart__value",
                                x: "{bar.centre_x}",
                                y: "{bar.value_y}",
                                "text-anchor": "middle",
                                "{bar.value}"
                            }
                            text {
                                class: "pub-chart__label",
                                x: "{bar.centre_x}",
                                y: "{bar.label_y}",
                                "text-anchor": "middle",
                                "{bar.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
