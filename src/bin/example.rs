//! Navier Plate Example - uniformly loaded square steel plate
//!
//! Plays the grid-driver role on top of the per-point solver API: samples
//! the displacement and top-fiber von Mises fields on a uniform grid for a
//! set of truncation orders, sweeps the through-thickness stresses at the
//! plate center, and tabulates strain energy against the truncation order.
//! Pass `--json` to emit the full report as JSON instead of text.

use anyhow::Result;
use navier_plate::prelude::*;
use serde::Serialize;

/// Grid divisions per side for the field sweep
const GRID_DIVISIONS: usize = 50;
/// Through-thickness stations for the center stress profile
const PROFILE_STATIONS: usize = 100;
/// Truncation orders to compare
const ORDERS: [usize; 3] = [2, 4, 6];

#[derive(Serialize)]
struct ProfileRow {
    z: f64,
    sigma_xx: f64,
    sigma_yy: f64,
    sigma_xy: f64,
}

#[derive(Serialize)]
struct OrderReport {
    order: usize,
    max_deflection: f64,
    max_von_mises: f64,
    center: FieldSample,
    center_top: StressState,
    center_profile: Vec<ProfileRow>,
    energy: f64,
}

#[derive(Serialize)]
struct PlateReport {
    model: PlateModel,
    orders: Vec<OrderReport>,
}

/// Sweep the field on a uniform grid, tracking the extreme displacement
/// magnitude and top-fiber von Mises stress
fn sweep_grid(model: &PlateModel, table: &CoefficientTable) -> (f64, f64) {
    let mut max_deflection = 0.0_f64;
    let mut max_von_mises = 0.0_f64;
    for j in 0..=GRID_DIVISIONS {
        let y = model.b * (j as f64) / (GRID_DIVISIONS as f64);
        for i in 0..=GRID_DIVISIONS {
            let x = model.a * (i as f64) / (GRID_DIVISIONS as f64);
            let sample = evaluate_field(table, model, x, y);
            let top = derive_stress(&sample, model.h, model.h / 2.0);
            max_deflection = max_deflection.max(sample.w.abs());
            max_von_mises = max_von_mises.max(top.von_mises);
        }
    }
    (max_deflection, max_von_mises)
}

/// Through-thickness stress profile at the plate center
fn center_profile(model: &PlateModel, center: &FieldSample) -> Vec<ProfileRow> {
    (0..PROFILE_STATIONS)
        .map(|k| {
            let z = -model.h / 2.0
                + model.h * (k as f64) / ((PROFILE_STATIONS - 1) as f64);
            let s = derive_stress(center, model.h, z);
            ProfileRow {
                z,
                sigma_xx: s.sigma_xx,
                sigma_yy: s.sigma_yy,
                sigma_xy: s.sigma_xy,
            }
        })
        .collect()
}

fn build_report(model: &PlateModel) -> Result<PlateReport> {
    let mut orders = Vec::with_capacity(ORDERS.len());
    for &order in &ORDERS {
        let table = generate_coefficients(model, order)?;
        let (max_deflection, max_von_mises) = sweep_grid(model, &table);
        let center = evaluate_field(&table, model, model.a / 2.0, model.b / 2.0);
        let center_top = derive_stress(&center, model.h, model.h / 2.0);
        let energy = accumulate_energy(model, order)?;
        log::info!(
            "N = {order}: max |w| = {:.4} mm, max von Mises = {:.3} MPa",
            max_deflection * 1000.0,
            max_von_mises / 1e6
        );
        orders.push(OrderReport {
            order,
            max_deflection,
            max_von_mises,
            center,
            center_top,
            center_profile: center_profile(model, &center),
            energy,
        });
    }
    Ok(PlateReport {
        model: *model,
        orders,
    })
}

fn print_text_report(report: &PlateReport) {
    let model = &report.model;
    println!("=== Navier Plate Example: Simply Supported Square Plate ===\n");
    println!(
        "Plate: {} m x {} m x {} mm, E = {} GPa, nu = {}, q0 = {} kPa",
        model.a,
        model.b,
        model.h * 1000.0,
        model.e / 1e9,
        model.nu,
        model.q0 / 1000.0
    );
    println!(
        "Flexural rigidity D = {:.3} N-m\n",
        model.flexural_rigidity()
    );

    println!("--- Field extremes ({0}x{0} grid) ---", GRID_DIVISIONS);
    println!(
        "{:>4} {:>16} {:>20} {:>14}",
        "N", "max |w| (mm)", "max von Mises (MPa)", "utilization"
    );
    for entry in &report.orders {
        println!(
            "{:>4} {:>16.4} {:>20.3} {:>14.4}",
            entry.order,
            entry.max_deflection * 1000.0,
            entry.max_von_mises / 1e6,
            entry.center_top.utilization(model.yield_stress)
        );
    }

    println!("\n--- Plate center ---");
    for entry in &report.orders {
        println!(
            "N = {}: w = {:.4} mm, Mx = {:.3} N, My = {:.3} N, Mxy = {:.3e} N",
            entry.order,
            entry.center.w * 1000.0,
            entry.center.mx,
            entry.center.my,
            entry.center.mxy
        );
    }

    println!("\n--- Through-thickness stresses at center (top/bottom fibers) ---");
    for entry in &report.orders {
        let bottom = entry.center_profile.first();
        let top = entry.center_profile.last();
        if let (Some(bottom), Some(top)) = (bottom, top) {
            println!(
                "N = {}: sigma_xx = {:+.3} MPa @ z = {:+.1} mm, {:+.3} MPa @ z = {:+.1} mm",
                entry.order,
                bottom.sigma_xx / 1e6,
                bottom.z * 1000.0,
                top.sigma_xx / 1e6,
                top.z * 1000.0
            );
        }
    }

    println!("\n--- Strain energy vs truncation order ---");
    println!("{:>4} {:>18}", "N", "energy (J)");
    for entry in &report.orders {
        println!("{:>4} {:>18.9}", entry.order, entry.energy);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let json = std::env::args().any(|arg| arg == "--json");
    let model = PlateModel::steel();
    let report = build_report(&model)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text_report(&report);
    }
    Ok(())
}
