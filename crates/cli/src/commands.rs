//! Subcommand bodies. Each returns the JSON document printed on stdout.

use anyhow::{bail, Context, Result};
use planar::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use crate::provenance;

/// Parse `x,y,w,h`.
pub fn parse_bounds(s: &str) -> Result<Bounds> {
    let [x, y, w, h] = parse_floats::<4>(s)?;
    Ok(Bounds::new(x, y, w, h))
}

/// Parse `w,h`.
pub fn parse_size(s: &str) -> Result<Size<f64>> {
    let [w, h] = parse_floats::<2>(s)?;
    Ok(Size::new(w, h))
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        bail!("expected {} comma-separated numbers, got {:?}", N, s);
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .with_context(|| format!("{part:?} is not a number"))?;
    }
    Ok(out)
}

pub fn grid(
    bounds: Bounds,
    dimensions: Dimensions,
    padding: Size<f64>,
    margin: Size<f64>,
) -> Value {
    let cells = bounds.grid(dimensions, padding, margin);
    tracing::debug!(cells = dimensions.count(), "grid_built");
    json!({
        "bounds": bounds,
        "dimensions": dimensions,
        "cells": cells,
    })
}

pub fn constrain(bounds: Bounds, limits: Size<f64>, alignment: Alignment) -> Value {
    let fitted = bounds.align(bounds.constrain(limits).size, alignment);
    json!({
        "bounds": bounds,
        "limits": limits,
        "alignment": alignment,
        "result": fitted,
    })
}

/// Fit a curve to the JSON point list in `input`; optionally persist it with a sidecar.
pub fn fit(input: &Path, out: Option<&Path>, cfg: FitCfg) -> Result<Value> {
    let raw = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let points: Vec<Point<f64>> = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing points from {}", input.display()))?;
    let Some(curve) = Bezier::fit(&points, cfg) else {
        bail!("need at least two points to fit a curve, got {}", points.len());
    };
    let error = curve.square_error_with(&points, cfg.error_samples);
    tracing::debug!(error, points = points.len(), "fit_done");

    let doc = json!({
        "curve": curve,
        "square_error": error,
        "points": points.len(),
    });

    if let Some(out) = out {
        provenance::ensure_parent(out)?;
        fs::write(out, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let sidecar = provenance::write_sidecar(
            out,
            "fit",
            json!({
                "input": input.to_string_lossy(),
                "cfg": cfg,
                "points": points.len(),
            }),
        )?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "fit_written");
    }
    Ok(doc)
}

pub fn report() -> Value {
    json!({
        "planar_version": planar::VERSION,
        "code_rev": provenance::current_git_rev(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_comma_lists() {
        assert_eq!(
            parse_bounds("0, 0, 10, 5").unwrap(),
            Bounds::new(0.0, 0.0, 10.0, 5.0)
        );
        assert_eq!(parse_size("3,4").unwrap(), Size::new(3.0, 4.0));
        assert!(parse_size("3").is_err());
        assert!(parse_bounds("a,b,c,d").is_err());
    }

    #[test]
    fn grid_reports_every_cell() {
        let doc = grid(
            Bounds::new(0.0, 0.0, 10.0, 10.0),
            Dimensions::new(2, 2),
            Size::default(),
            Size::default(),
        );
        let cells = doc["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1][1]["point"]["x"], 5.0);
        assert_eq!(cells[1][1]["size"]["width"], 5.0);
    }

    #[test]
    fn constrain_respects_alignment() {
        let doc = constrain(
            Bounds::new(0.0, 0.0, 10.0, 10.0),
            Size::new(20.0, 50.0),
            Alignment::Right,
        );
        assert_eq!(doc["alignment"], "right");
        assert_eq!(doc["result"]["point"]["x"], 6.0);
        assert_eq!(doc["result"]["size"]["width"], 4.0);
    }

    #[test]
    fn fit_writes_curve_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("points.json");
        let arch = Bezier::new(
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        );
        fs::write(&input, serde_json::to_vec(&arch.sample(50)).unwrap()).unwrap();

        let out = dir.path().join("out").join("curve.json");
        let doc = fit(&input, Some(&out), FitCfg::default()).unwrap();
        assert_eq!(doc["points"], 50);
        assert!(out.exists());
        assert!(dir.path().join("out").join("curve.provenance.json").exists());
    }

    #[test]
    fn fit_rejects_single_point() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("one.json");
        fs::write(&input, r#"[{"x": 1.0, "y": 2.0}]"#).unwrap();
        assert!(fit(&input, None, FitCfg::default()).is_err());
    }
}
