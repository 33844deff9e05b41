// Copyright 2026 the PieGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small pie/donut demo for `piegraph`.
//!
//! Feeds the chart from a static data source (a monthly budget with a
//! "focus" overlay straddling two categories), runs one layout pass, and
//! dumps the resulting render ops to an SVG file.

mod svg;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use piegraph::{
    HeuristicTextMeasurer, PieDataSource, PieDelegate, PieGraph, PriorityDetails, SectorDetails,
};

struct BudgetSource;

impl PieDataSource for BudgetSource {
    fn sector_count(&self) -> usize {
        4
    }

    fn sector_details(&self, index: usize) -> SectorDetails {
        let (title, value, fill) = match index {
            0 => ("RENT", 12.0, css::CORNFLOWER_BLUE),
            1 => ("FOOD", 6.0, css::TOMATO),
            2 => ("TRAVEL", 4.0, css::MEDIUM_SEA_GREEN),
            _ => ("SAVINGS", 8.0, css::GOLD),
        };
        SectorDetails {
            title: title.into(),
            value,
            fill,
            text_color: css::WHITE,
        }
    }

    fn has_priority_sector(&self) -> bool {
        true
    }

    fn priority_details(&self) -> Option<PriorityDetails> {
        // The overlay reaches back into FOOD and forward into TRAVEL.
        Some(PriorityDetails {
            title: "FOCUS".into(),
            values: vec![2.0, 1.5],
            fill: css::DARK_ORCHID,
            text_color: css::BLACK,
            from_index: 1,
            to_index: 2,
        })
    }
}

struct PrintingDelegate;

impl PieDelegate for PrintingDelegate {
    fn on_sector_selected(&mut self, index: isize, is_priority: bool) {
        println!("selected sector {index} (priority: {is_priority})");
    }
}

fn main() {
    let bounds = Rect::new(0.0, 0.0, 360.0, 360.0);

    let mut chart = PieGraph::new();
    chart.set_inner_radius(52.0);
    chart.load(&BudgetSource);

    let ops = chart.layout(bounds, &HeuristicTextMeasurer);
    let svg = svg::render(bounds, &ops);
    std::fs::write("piegraph_demo.svg", svg).expect("write piegraph_demo.svg");
    println!("wrote piegraph_demo.svg");

    // Poke the chart the way a platform event layer would.
    let mut delegate = PrintingDelegate;
    chart.select(Point::new(180.0, 60.0), &mut delegate);
    chart.select(Point::new(60.0, 300.0), &mut delegate);
}
