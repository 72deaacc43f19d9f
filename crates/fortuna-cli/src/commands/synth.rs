//! `fortuna synth-data`: fill a data directory with synthetic draw history.

use fortuna_core::{DataDir, LotteryKind};

pub fn run(data_dir: &str) -> fortuna_core::Result<()> {
    let data = DataDir::new(data_dir);
    let created = data.ensure_files()?;

    for kind in LotteryKind::ALL {
        let path = data.path_for(kind);
        let status = if created.contains(&path) {
            "created"
        } else {
            "exists"
        };
        println!("  {:<14} {:<8} {}", kind.id(), status, path.display());
    }
    println!(
        "\n{} file(s) created in {}",
        created.len(),
        data.root().display()
    );
    Ok(())
}
