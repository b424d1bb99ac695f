use anyhow::Result;
use clap::{Parser, Subcommand};
use planar::prelude::*;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod provenance;

use commands::{parse_bounds, parse_size};

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Planar layouts and curve fits")]
struct Cmd {
    /// Log verbosity (error, warn, info, debug, trace); logs go to stderr
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Divide a region into a grid of cells and print them as JSON rows
    Grid {
        /// Region as x,y,w,h
        #[arg(long, value_parser = parse_bounds)]
        bounds: Bounds,
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
        /// Space around each cell as w,h
        #[arg(long, value_parser = parse_size, default_value = "0,0")]
        padding: Size<f64>,
        /// Space around the whole grid as w,h
        #[arg(long, value_parser = parse_size, default_value = "0,0")]
        margin: Size<f64>,
    },
    /// Fit a cubic Bézier to a JSON list of {x, y} points
    Fit {
        #[arg(long)]
        input: PathBuf,
        /// Write the fit here (plus a provenance sidecar) instead of only printing it
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = FitCfg::default().grid_side)]
        grid_side: usize,
        #[arg(long, default_value_t = FitCfg::default().stretch)]
        stretch: f64,
    },
    /// Fit the aspect ratio of --limits inside a region
    Constrain {
        /// Region as x,y,w,h
        #[arg(long, value_parser = parse_bounds)]
        bounds: Bounds,
        /// Target size (or aspect ratio) as w,h
        #[arg(long, value_parser = parse_size)]
        limits: Size<f64>,
        /// left, center or right
        #[arg(long, default_value = "center")]
        align: Alignment,
    },
    /// Print library version and code revision
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();

    let doc = match cmd.action {
        Action::Grid {
            bounds,
            rows,
            cols,
            padding,
            margin,
        } => {
            tracing::info!(%bounds, rows, cols, %padding, %margin, "grid");
            commands::grid(bounds, Dimensions::new(rows, cols), padding, margin)
        }
        Action::Fit {
            input,
            out,
            grid_side,
            stretch,
        } => {
            tracing::info!(input = %input.display(), out = ?out, grid_side, stretch, "fit");
            let cfg = FitCfg {
                grid_side,
                stretch,
                ..FitCfg::default()
            };
            commands::fit(&input, out.as_deref(), cfg)?
        }
        Action::Constrain {
            bounds,
            limits,
            align,
        } => {
            tracing::info!(%bounds, %limits, align = ?align, "constrain");
            commands::constrain(bounds, limits, align)
        }
        Action::Report => commands::report(),
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_flags_go_through_value_parsers() {
        let cmd = Cmd::try_parse_from([
            "planar",
            "--log-level",
            "debug",
            "constrain",
            "--bounds",
            "0,0,10,10",
            "--limits",
            "20, 50",
            "--align",
            "Right",
        ])
        .unwrap();
        assert_eq!(cmd.log_level, Level::DEBUG);
        let Action::Constrain {
            bounds,
            limits,
            align,
        } = cmd.action
        else {
            panic!("expected the constrain subcommand");
        };
        assert_eq!(bounds, Bounds::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(limits, Size::new(20.0, 50.0));
        assert_eq!(align, Alignment::Right);
    }

    #[test]
    fn grid_defaults_margin_and_parses_padding() {
        let cmd = Cmd::try_parse_from([
            "planar", "grid", "--bounds", "0,0,100,50", "--rows", "2", "--cols", "3",
            "--padding", "1,2",
        ])
        .unwrap();
        assert_eq!(cmd.log_level, Level::INFO);
        let Action::Grid {
            rows,
            cols,
            padding,
            margin,
            ..
        } = cmd.action
        else {
            panic!("expected the grid subcommand");
        };
        assert_eq!((rows, cols), (2, 3));
        assert_eq!(padding, Size::new(1.0, 2.0));
        assert_eq!(margin, Size::default());
    }

    #[test]
    fn rejects_malformed_flags() {
        let constrain = |align: &str| {
            Cmd::try_parse_from([
                "planar", "constrain", "--bounds", "0,0,1,1", "--limits", "1,1", "--align", align,
            ])
        };
        assert!(constrain("center").is_ok());
        assert!(constrain("middle").is_err());
        let short_bounds = [
            "planar", "grid", "--bounds", "0,0,1", "--rows", "1", "--cols", "1",
        ];
        assert!(Cmd::try_parse_from(short_bounds).is_err());
        assert!(Cmd::try_parse_from(["planar", "--log-level", "loud", "report"]).is_err());
    }
}
