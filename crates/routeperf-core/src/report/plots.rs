use plotly::common::{Anchor, Line, Marker};
use plotly::layout::{Annotation, Axis, GridPattern, Layout, LayoutGrid};
use plotly::{Bar, Plot};

use crate::data_handling::{Metric, PerformanceRecord};

pub const FIGURE_TITLE: &str = "Routing Protocol Performance Comparison";

/// Axis reference suffixes for the three subplots, left to right.
const SUBPLOT_AXES: [(&str, &str); 3] = [("x", "y"), ("x2", "y2"), ("x3", "y3")];

/// One figure with delay, throughput and packet loss side by side.
///
/// The grid uses independent axes so each subplot keeps its own scale.
/// Subplot titles are paper annotations anchored above each axis domain.
pub fn plot_metric_bars(records: &[PerformanceRecord]) -> Plot {
    let mut plot = Plot::new();
    let mut annotations = Vec::with_capacity(Metric::ALL.len());

    for (metric, (x_ref, y_ref)) in Metric::ALL.iter().zip(SUBPLOT_AXES.iter()) {
        plot.add_trace(metric_trace(records, *metric).x_axis(*x_ref).y_axis(*y_ref));

        annotations.push(
            Annotation::new()
                .text(metric.title())
                .x_ref(&format!("{} domain", x_ref))
                .y_ref(&format!("{} domain", y_ref))
                .x(0.5)
                .y(1.02)
                .x_anchor(Anchor::Center)
                .y_anchor(Anchor::Bottom)
                .show_arrow(false),
        );
    }

    let x_axis = || Axis::new().title("Routing Protocol");
    let y_axis = |metric: Metric| Axis::new().title(metric.axis_label());

    let layout = Layout::new()
        .title(format!("<b>{}</b>", FIGURE_TITLE).as_str())
        .show_legend(false)
        .width(1200)
        .height(500)
        .grid(
            LayoutGrid::new()
                .rows(1)
                .columns(3)
                .pattern(GridPattern::Independent),
        )
        .annotations(annotations)
        .x_axis(x_axis())
        .y_axis(y_axis(Metric::Delay))
        .x_axis2(x_axis())
        .y_axis2(y_axis(Metric::Throughput))
        .x_axis3(x_axis())
        .y_axis3(y_axis(Metric::PacketLoss));

    plot.set_layout(layout);
    plot
}

fn metric_trace(records: &[PerformanceRecord], metric: Metric) -> Box<Bar<String, f64>> {
    let protocols: Vec<String> = records.iter().map(|r| r.protocol.clone()).collect();
    let values: Vec<f64> = records.iter().map(|r| r.value(metric)).collect();

    Bar::new(protocols, values)
        .name(metric.title())
        .marker(
            Marker::new()
                .color(metric.color())
                .line(Line::new().color("black").width(1.0)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_handling::default_records;

    #[test]
    fn test_combined_figure_has_three_subplots() {
        let plot = plot_metric_bars(&default_records());
        let json = plot.to_json();
        assert!(json.contains(FIGURE_TITLE));
        for metric in Metric::ALL {
            assert!(json.contains(metric.title()), "missing subplot {}", metric.title());
            assert!(json.contains(metric.axis_label()));
            assert!(json.contains(metric.color()));
        }
        assert!(json.contains("\"x3\""));
        assert!(json.contains("\"y3\""));
    }

    #[test]
    fn test_bars_follow_table_order() {
        let plot = plot_metric_bars(&default_records());
        let json = plot.to_json();
        let rip = json.find("RIP").unwrap();
        let ospf = json.find("OSPF").unwrap();
        let eigrp = json.find("EIGRP").unwrap();
        assert!(rip < ospf && ospf < eigrp);
    }
}
