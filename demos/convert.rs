// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convert path data given on the command line and print the polygons.
//!
//! ```text
//! cargo run --example convert -- "m 10 20 30 40 z m 100 200 10 20"
//! ```
//!
//! Pass `--end` to measure each contour's relative move from where the
//! previous contour ended instead of where it began, and `--any-move` to
//! start a contour at absolute moves too.

use std::process::ExitCode;

use svgpoly::{svg_path_to_polygons_with, ContourOrigin, ContourSplit, ConvertOptions};

fn main() -> ExitCode {
    env_logger::init();

    let mut options = ConvertOptions::default();
    let mut status = ExitCode::SUCCESS;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--end" => {
                options = options.with_origin(ContourOrigin::End);
                continue;
            }
            "--any-move" => {
                options = options.with_split(ContourSplit::AnyMove);
                continue;
            }
            _ => {}
        }
        match svg_path_to_polygons_with(&arg, &options) {
            Ok(polygons) => {
                println!("{} polygon(s)", polygons.len());
                for (i, polygon) in polygons.iter().enumerate() {
                    print!("  {i}:");
                    for pt in polygon {
                        print!(" {pt}");
                    }
                    println!();
                }
            }
            Err(e) => {
                eprintln!("error: {e}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
