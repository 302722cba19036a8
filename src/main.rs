// main.rs - CLI entry point

use csvscrub::cli::{read_args, usage_text, validate_args};
use csvscrub::core::sanitize_csv;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let args = read_args();

    let paths = match validate_args(&args) {
        Ok(paths) => paths,
        Err(e) => {
            println!("{}", e);
            println!();
            println!("{}", usage_text());
            std::process::exit(1);
        }
    };

    println!("🚀 csvscrub v{}", env!("CARGO_PKG_VERSION"));
    println!("📂 Input:  {}", paths.input_path);
    println!("📁 Output: {}", paths.output_path);

    let total_start = Instant::now();
    let summary = sanitize_csv(&paths.input_path, &paths.output_path)?;
    let total_elapsed = total_start.elapsed();

    println!("\n🎉 === CSVSCRUB COMPLETED SUCCESSFULLY ===");
    println!(
        "⏱️  Total execution time: {:.2}s",
        total_elapsed.as_secs_f64()
    );
    println!(
        "📊 Rows written: {} ({} data rows, {} cells rewritten)",
        summary.rows_total, summary.data_rows, summary.cells_rewritten
    );
    println!("📁 Output written to: {}", paths.output_path);
    println!(
        "🕒 Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(())
}
