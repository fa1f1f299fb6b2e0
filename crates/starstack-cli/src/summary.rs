use std::path::Path;

use console::Style;
use starstack_core::pipeline::config::PipelineConfig;
use starstack_core::pipeline::CompositeReport;
use starstack_core::session::FramePickSet;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    warning: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            warning: Style::new().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_config_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Starstack"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(9)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    if let Some(ref session) = config.session {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Session"),
            s.path.apply_to(session.display())
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Alignment"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Window"),
        s.value.apply_to(format!("\u{00b1}{} px", config.centroid.half_size))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Border"),
        s.method.apply_to(config.warp.border)
    );
    println!();

    println!("  {}", s.header.apply_to("Stacking"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Method"),
        s.method.apply_to(config.stacking.method)
    );
    println!();
}

pub fn print_selection_summary(picks: &[FramePickSet], session: &Path) {
    let s = Styles::new();
    let skipped: Vec<_> = picks.iter().filter(|p| p.is_skipped()).collect();

    println!();
    println!("  {}", s.header.apply_to("Star Selection"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Picked"),
        s.value.apply_to(picks.len() - skipped.len())
    );
    if !skipped.is_empty() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Skipped"),
            s.warning.apply_to(skipped.len())
        );
        for record in skipped {
            println!(
                "      {} {}",
                s.warning.apply_to(format!("#{}", record.index)),
                s.path.apply_to(record.path.display())
            );
        }
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Session"),
        s.path.apply_to(session.display())
    );
}

pub fn print_composite_report(report: &CompositeReport) {
    let s = Styles::new();
    let (h, w, c) = report.composite.dim();

    println!();
    println!("  {}", s.header.apply_to("Composite"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(report.included)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}x{} @ {}-bit", w, h, c, report.composite.bit_depth))
    );
    if !report.skipped.is_empty() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Skipped"),
            s.warning.apply_to(report.skipped.len())
        );
        for skip in &report.skipped {
            println!(
                "      {} {} ({})",
                s.warning.apply_to(format!("#{}", skip.index)),
                s.path.apply_to(skip.path.display()),
                skip.reason
            );
        }
    }
}
