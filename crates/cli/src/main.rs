use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use s2core::cfg::EARTH_RADIUS;
use s2core::error::check_level;
use s2core::s1::{angle_from_degrees, angle_from_km};
use s2core::{CellId, S2Cap, VectorPoint};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Cell ids, cell inspection and cap coverings on the S2 sphere")]
struct Cmd {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Cell id containing a lon/lat (degrees)
    Cell {
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Cell level (0..=30); leaf when omitted
        #[arg(long)]
        level: Option<u8>,
    },
    /// Describe a cell given as decimal id or hex token
    Inspect {
        #[arg(long)]
        id: String,
    },
    /// Cells covering a cap around a lon/lat
    Cover {
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Cap radius in degrees of arc
        #[arg(long, conflicts_with = "radius_km", required_unless_present = "radius_km")]
        radius_deg: Option<f64>,
        /// Cap radius in kilometers on the mean Earth sphere
        #[arg(long)]
        radius_km: Option<f64>,
        /// Write the covering here and a provenance sidecar next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print crate version and git revision
    Report,
}

#[derive(Debug, Serialize)]
struct CellSummary {
    id: u64,
    token: String,
    face: u8,
    level: u8,
    lon: f64,
    lat: f64,
}

#[derive(Debug, Serialize)]
struct CellDetail {
    id: u64,
    token: String,
    face: u8,
    level: u8,
    center: [f64; 2],
    vertices: Vec<[f64; 2]>,
    neighbors: Vec<u64>,
    parent: Option<u64>,
    children: Vec<u64>,
}

#[derive(Debug, Serialize)]
struct Covering {
    center: [f64; 2],
    radius_rad: f64,
    cells: Vec<u64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let value = match cmd.action {
        Action::Cell { lon, lat, level } => serde_json::to_value(cell(lon, lat, level)?)?,
        Action::Inspect { id } => serde_json::to_value(inspect(&id)?)?,
        Action::Cover {
            lon,
            lat,
            radius_deg,
            radius_km,
            out,
        } => {
            let radius = match (radius_deg, radius_km) {
                (Some(deg), _) => angle_from_degrees(deg),
                (None, Some(km)) => angle_from_km(km, EARTH_RADIUS),
                (None, None) => bail!("one of --radius-deg or --radius-km is required"),
            };
            let covering = cover(lon, lat, radius)?;
            if let Some(out) = out {
                write_covering(&out, &covering)?;
            }
            serde_json::to_value(covering)?
        }
        Action::Report => report(),
    };
    let text = if cmd.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{text}");
    Ok(())
}

fn cell(lon: f64, lat: f64, level: Option<u8>) -> Result<CellSummary> {
    let level = level.map(check_level).transpose()?;
    tracing::info!(lon, lat, level = ?level, "cell");
    let p = s2core::coords::lon_lat_to_xyz(&VectorPoint::new_2d(lon, lat));
    let id = CellId::from_s2_point(&p, level);
    Ok(CellSummary {
        id: id.0,
        token: id.to_token(),
        face: id.face().index(),
        level: id.level(),
        lon,
        lat,
    })
}

fn inspect(raw: &str) -> Result<CellDetail> {
    let parsed: CellId = raw
        .parse()
        .with_context(|| format!("parsing cell id {raw:?}"))?;
    let id = CellId::try_from(parsed.0)?;
    tracing::info!(id = id.0, level = id.level(), "inspect");

    let lon_lat = |p: &VectorPoint| {
        let ll = s2core::coords::xyz_to_lon_lat(p);
        [ll.x, ll.y]
    };
    let (face, s, t) = id.center_st();
    let center = lon_lat(&s2core::point::point_from_st::<()>(face, s, t, None));
    Ok(CellDetail {
        id: id.0,
        token: id.to_token(),
        face: id.face().index(),
        level: id.level(),
        center,
        vertices: id.get_vertices().iter().map(lon_lat).collect(),
        neighbors: id.neighbors().iter().map(|n| n.0).collect(),
        parent: (!id.is_face()).then(|| id.parent().0),
        children: if id.is_leaf() {
            Vec::new()
        } else {
            id.children().iter().map(|c| c.0).collect()
        },
    })
}

fn cover(lon: f64, lat: f64, radius: f64) -> Result<Covering> {
    if !radius.is_finite() || radius < 0.0 {
        bail!("radius must be a finite non-negative angle, got {radius}");
    }
    tracing::info!(lon, lat, radius, "cover");
    let center = s2core::coords::lon_lat_to_xyz(&VectorPoint::new_2d(lon, lat));
    let cap = S2Cap::from_s1_angle(center, radius, ());
    let cells: Vec<u64> = cap.get_intersecting_cells().iter().map(|c| c.0).collect();
    tracing::info!(cells = cells.len(), "covering");
    Ok(Covering {
        center: [lon, lat],
        radius_rad: radius,
        cells,
    })
}

fn write_covering(out: &Path, covering: &Covering) -> Result<PathBuf> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(covering)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload::new(json!({
        "lon": covering.center[0],
        "lat": covering.center[1],
        "radius_rad": covering.radius_rad,
    }))
    .with_summary(json!({ "cells": covering.cells.len() }));
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote covering");
    Ok(sidecar)
}

fn report() -> serde_json::Value {
    json!({
        "crate": "s2core",
        "version": s2core::VERSION,
        "code_rev": provenance::current_git_rev(),
    })
}
