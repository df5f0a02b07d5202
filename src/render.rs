use marine_current_rs::{Components, CurrentReport};

fn components_line(label: &str, components: Components) -> String {
    format!("{label} (E/N): {:.6}, {:.6}", components.east, components.north)
}

pub fn text(report: &CurrentReport) -> String {
    let bearing = if report.has_direction {
        format!("{:.3} TRUE", report.bearing)
    } else {
        "undefined (no current)".to_owned()
    };
    [
        "TRUE Current Result".to_owned(),
        format!("Speed: {:.3}", report.speed),
        format!("Bearing: {bearing}"),
        format!("(= {:.3})", report.alternate_speed),
        String::new(),
        format!("Vector components (in {})", report.unit.label()),
        components_line("Fish", report.fish),
        components_line("Vessel", report.ship),
        components_line("Current", report.current),
    ]
    .join("\n")
}

pub fn json(report: &CurrentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
