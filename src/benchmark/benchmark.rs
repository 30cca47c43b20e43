use std::time::Instant;

use crate::simulation::field::field_grid;
use crate::simulation::grid::Grid;
use crate::simulation::potential::potential_grid;
use crate::simulation::states::SourceCollection;

/// Helper to build a deterministic mix of `n` charges and `n` dipoles
fn make_sources(n: usize) -> SourceCollection {
    let mut sources = SourceCollection::new();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = (i_f * 0.37).sin() * 15.0;
        let y = (i_f * 0.13).cos() * 15.0;
        let q = if i % 2 == 0 { 1.0 } else { -1.0 };

        sources.add_charge(q, x, y);
        sources.add_dipole(1.0 + 0.1 * i_f, -x, y, i_f * 37.0);
    }

    sources
}

/// Time serial vs parallel potential grids
pub fn bench_potential_grid() {
    let sources = make_sources(8);
    let ns = [50, 100, 200, 400, 800];

    for n in ns {
        let grid = Grid::square(-20.0, 20.0, n);

        // Warm up
        potential_grid(&sources, &grid, true);

        let t0 = Instant::now();
        potential_grid(&sources, &grid, false);
        let dt_serial = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        potential_grid(&sources, &grid, true);
        let dt_parallel = t1.elapsed().as_secs_f64();

        println!("grid = {n:4}^2, serial = {:8.6} s, parallel = {:8.6} s", dt_serial, dt_parallel);
    }
}

/// Time serial vs parallel field grids
/// Paste output directly into a spreadsheet to graph
pub fn bench_field_grid() {
    println!("nodes,serial_ms,parallel_ms");

    for n in (100..=800).step_by(100) {
        let sources = make_sources(8);
        let grid = Grid::square(-20.0, 20.0, n);

        let t0 = Instant::now();
        field_grid(&sources, &grid, false);
        let ms_serial = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        field_grid(&sources, &grid, true);
        let ms_parallel = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6},{:.6}", grid.len(), ms_serial, ms_parallel);
    }
}
