use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use hermes_sssp::{DistanceTable, Distances};

use crate::input::CliWeight;

const UNREACHABLE: &str = "-";

fn format_distance<W: CliWeight>(distance: Option<W>) -> String {
    match distance {
        Some(distance) => distance.to_string(),
        None => UNREACHABLE.to_string(),
    }
}

pub fn distances_table<W: CliWeight>(distances: &Distances<W>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["node", "distance"]);

    for (node, distance) in distances.iter().enumerate() {
        table.add_row(vec![Cell::new(node), Cell::new(format_distance(distance))]);
    }

    table
}

pub fn distance_matrix_table<W: CliWeight>(distances: &DistanceTable<W>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec![String::from("source")];
    header.extend((0..distances.node_count()).map(|target| target.to_string()));
    table.set_header(header);

    for (source, row) in distances.rows() {
        let mut cells = vec![Cell::new(source)];
        cells.extend(row.iter().map(|&distance| {
            Cell::new(format_distance((!distance.is_infinite()).then_some(distance)))
        }));
        table.add_row(cells);
    }

    table
}
