// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dialog layout, replayed headlessly.
//!
//! Builds a dialog with a label, a checkbox and OK/Cancel buttons, then feeds
//! it a scripted sequence of pointer moves and clicks, printing hover changes
//! and the regions that would be repainted after each step.
//!
//! Run:
//! - `cargo run -p strata_demos --example dialog_layout`
//! - `cargo run -p strata_demos --example dialog_layout --features tracing`

use kurbo::Point;
use strata_demos::{ControlKind, Surface, dialog_surface};
use strata_region::RegionError;

#[derive(Clone, Copy, Debug)]
enum Step {
    Move(f64, f64),
    Click(f64, f64),
    Leave,
}

fn describe(surface: &Surface, id: strata_region::RegionId) -> String {
    match surface.tree().data(id).map(|c| &c.kind) {
        Some(ControlKind::Surface) => "surface".into(),
        Some(ControlKind::Dialog { title }) => format!("dialog {title:?}"),
        Some(ControlKind::Label { text }) => format!("label {text:?}"),
        Some(ControlKind::Checkbox { checked }) => format!("checkbox [{}]", if *checked { 'x' } else { ' ' }),
        Some(ControlKind::Button { text }) => format!("button {text:?}"),
        None => format!("{id} (gone)"),
    }
}

fn main() -> Result<(), RegionError> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .init();

    let (mut surface, _ids) = dialog_surface()?;
    println!("initial paint:");
    for item in surface.repaint() {
        println!("  {}{}", "  ".repeat(item.depth), describe(&surface, item.region));
    }

    let script = [
        Step::Move(10.0, 10.0),
        Step::Move(80.0, 150.0),
        Step::Move(70.0, 165.0),
        Step::Click(70.0, 165.0),
        Step::Move(100.0, 200.0),
        Step::Move(190.0, 200.0),
        Step::Leave,
        Step::Move(100.0, 200.0),
        Step::Click(100.0, 200.0),
    ];

    for step in script {
        let before = surface.hovered();
        match step {
            Step::Move(x, y) => surface.pointer_move(Point::new(x, y)),
            Step::Click(x, y) => {
                if let Some(id) = surface.click(Point::new(x, y))? {
                    println!("{step:?}: handled by {}", describe(&surface, id));
                }
            }
            Step::Leave => surface.pointer_leave(),
        }
        let after = surface.hovered();
        if before != after {
            let name = after.map_or_else(|| "nothing".into(), |id| describe(&surface, id));
            println!("{step:?}: hovering {name}");
        }
        let repainted: Vec<_> = surface
            .repaint()
            .iter()
            .map(|item| describe(&surface, item.region))
            .collect();
        if !repainted.is_empty() {
            println!("  repaint: {}", repainted.join(", "));
        }
    }

    println!("regions left: {}", surface.tree().len());
    Ok(())
}
