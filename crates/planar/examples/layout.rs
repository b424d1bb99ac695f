//! Lay out a dashboard: a header strip, then a padded 2x3 grid of panels.
//!
//! Usage:
//!   cargo run -p planar --example layout

use planar::prelude::*;

fn main() {
    let screen = Bounds::new(0.0, 0.0, 1280.0, 720.0);
    let (header, body) = screen.split_height(80.0);
    println!("header {header}");

    let title = header.align(Size::new(400.0, 40.0), Alignment::Left);
    println!("title  {title}");

    let panels = body.grid(
        Dimensions::new(2, 3),
        Size::new(4.0, 4.0),
        Size::new(16.0, 16.0),
    );
    for (r, row) in panels.rows().enumerate() {
        for (c, panel) in row.iter().enumerate() {
            println!("panel ({r}, {c}) {panel}");
        }
    }

    let video = body.constrain(Size::new(16.0, 9.0) * 100.0);
    println!("video  {video}");
}
