//! SVG chart components.
//!
//! Geometry comes from `util::chart`; these components only turn coordinates
//! into elements and legends.

use assessments::RiskLevel;
use assessments::stats::{HEALTH_FACTORS, RiskDistribution};
use leptos::prelude::*;

use crate::util::chart::{self, LINE_FRAME};

pub const RISK_COLOR: &str = "#6366F1";
pub const BMI_COLOR: &str = "#0EA5E9";
pub const GLUCOSE_COLOR: &str = "#F97316";
pub const BLOOD_PRESSURE_COLOR: &str = "#8B5CF6";

/// One line on a [`LineChart`].
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Multi-series line chart over shared x labels.
///
/// `bounds` pins the y axis (e.g. 0-100 for percentages); otherwise it fits
/// the data.
#[component]
pub fn LineChart(
    title: &'static str,
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] series: Signal<Vec<LineSeries>>,
    #[prop(optional)] bounds: Option<(f64, f64)>,
) -> impl IntoView {
    let frame = LINE_FRAME;
    let y_bounds = move || {
        bounds.unwrap_or_else(|| {
            let all: Vec<f64> = series.get().iter().flat_map(|s| s.values.clone()).collect();
            chart::value_bounds(&all)
        })
    };

    view! {
        <figure class="chart">
            <figcaption class="chart__title">{title}</figcaption>
            <Show
                when=move || !labels.get().is_empty()
                fallback=|| view! { <p class="chart__empty">"No data available"</p> }
            >
                <svg class="chart__svg" viewBox=format!("0 0 {} {}", frame.width, frame.height)>
                    {move || {
                        let b = y_bounds();
                        chart::ticks(b, 5)
                            .into_iter()
                            .map(|tick| {
                                let y = frame.y_at(tick, b);
                                view! {
                                    <g class="chart__grid">
                                        <line x1=frame.pad_left x2=frame.width - frame.pad_right y1=y y2=y/>
                                        <text x=frame.pad_left - 6.0 y=y + 4.0 text-anchor="end">
                                            {format!("{tick:.0}")}
                                        </text>
                                    </g>
                                }
                            })
                            .collect_view()
                    }}
                    {move || {
                        let labels = labels.get();
                        let count = labels.len();
                        labels
                            .into_iter()
                            .enumerate()
                            .map(|(i, label)| {
                                view! {
                                    <text
                                        class="chart__x-label"
                                        x=frame.x_at(i, count)
                                        y=frame.height - 12.0
                                        text-anchor="middle"
                                    >
                                        {label}
                                    </text>
                                }
                            })
                            .collect_view()
                    }}
                    {move || {
                        let b = y_bounds();
                        series
                            .get()
                            .into_iter()
                            .map(|s| {
                                let points = chart::points(&frame, &s.values, b);
                                let dots = points
                                    .iter()
                                    .map(|(x, y)| view! { <circle cx=*x cy=*y r="3" fill=s.color/> })
                                    .collect_view();
                                view! {
                                    <g class="chart__series">
                                        <path d=chart::line_path(&points) fill="none" stroke=s.color stroke-width="2"/>
                                        {dots}
                                    </g>
                                }
                            })
                            .collect_view()
                    }}
                </svg>
                <ul class="chart__legend">
                    {move || {
                        series
                            .get()
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <li>
                                        <span class="chart__swatch" style=format!("background:{}", s.color)></span>
                                        {s.name}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </figure>
    }
}

/// Risk-band share as a pie.
#[component]
pub fn RiskPieChart(title: &'static str, #[prop(into)] distribution: Signal<RiskDistribution>) -> impl IntoView {
    view! {
        <figure class="chart">
            <figcaption class="chart__title">{title}</figcaption>
            <Show
                when=move || { distribution.get().total() > 0 }
                fallback=|| view! { <p class="chart__empty">"No data available"</p> }
            >
                <svg class="chart__svg chart__svg--pie" viewBox="0 0 200 200">
                    {move || {
                        chart::pie_slices(&distribution.get(), 100.0, 100.0, 90.0)
                            .into_iter()
                            .map(|slice| view! { <path d=slice.path fill=slice.level.color()/> })
                            .collect_view()
                    }}
                </svg>
                <ul class="chart__legend">
                    {move || {
                        let dist = distribution.get();
                        RiskLevel::ALL
                            .into_iter()
                            .map(|level| {
                                view! {
                                    <li>
                                        <span
                                            class="chart__swatch"
                                            style=format!("background:{}", level.color())
                                        ></span>
                                        {format!("{}: {}", level.legend(), dist.count(level))}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </figure>
    }
}

const BAR_CURRENT: &str = "#6366F1";
const BAR_OPTIMAL: &str = "#10B981";

/// Current vs. optimal health-factor scores as grouped bars.
#[component]
pub fn HealthFactorChart() -> impl IntoView {
    let frame = LINE_FRAME;
    #[allow(clippy::cast_precision_loss)]
    let group_width = frame.plot_width() / HEALTH_FACTORS.len() as f64;
    let bar_width = group_width / 3.0;

    let groups = HEALTH_FACTORS
        .iter()
        .enumerate()
        .map(|(i, factor)| {
            #[allow(clippy::cast_precision_loss)]
            let left = frame.pad_left + group_width * i as f64 + bar_width / 2.0;
            let current_h = chart::bar_height(factor.current, 100.0, frame.plot_height());
            let optimal_h = chart::bar_height(factor.optimal, 100.0, frame.plot_height());
            view! {
                <g class="chart__bar-group">
                    <rect x=left y=frame.bottom() - current_h width=bar_width height=current_h fill=BAR_CURRENT/>
                    <rect
                        x=left + bar_width
                        y=frame.bottom() - optimal_h
                        width=bar_width
                        height=optimal_h
                        fill=BAR_OPTIMAL
                    />
                    <text class="chart__x-label" x=left + bar_width y=frame.height - 12.0 text-anchor="middle">
                        {factor.factor}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <figure class="chart">
            <figcaption class="chart__title">"Health Factors"</figcaption>
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", frame.width, frame.height)>{groups}</svg>
            <ul class="chart__legend">
                <li><span class="chart__swatch" style=format!("background:{BAR_CURRENT}")></span>"Current"</li>
                <li><span class="chart__swatch" style=format!("background:{BAR_OPTIMAL}")></span>"Optimal"</li>
            </ul>
        </figure>
    }
}
