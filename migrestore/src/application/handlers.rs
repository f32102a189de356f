use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mig_core::fsutil::ensure_dir;
use mig_core::{Catalog, RestoreSummary, Result};
use serde::Serialize;
use tracing::debug;

use crate::presentation::progress::BarObserver;
use crate::presentation::prompt::Prompter;

#[derive(Serialize)]
struct PointRow<'a> {
    index: usize,
    name: String,
    path: &'a Path,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

fn directory_arg<R: io::BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    message: &str,
    given: Option<PathBuf>,
    no_input: bool,
) -> Result<PathBuf> {
    match given {
        Some(p) if no_input => {
            ensure_dir(&p)?;
            Ok(p)
        }
        given => Ok(prompter.directory(message, given)?),
    }
}

pub fn handle_restore(
    path: Option<PathBuf>,
    output: Option<PathBuf>,
    point: Option<usize>,
    no_input: bool,
    json: bool,
) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr());

    let root = directory_arg(
        &mut prompter,
        "Enter the path to the backup root:",
        path,
        no_input,
    )?;
    let output = directory_arg(&mut prompter, "Enter the output path:", output, no_input)?;

    let catalog = Catalog::discover(&root)?;
    let index = match point {
        Some(i) => i,
        None => prompter.restore_point(catalog.points())?,
    };
    let plan = catalog.plan_index(index)?;
    debug!(
        point = %plan.selection.target().path.display(),
        snapshots = plan.selection.len(),
        archives = plan.archives.len(),
        "plan ready"
    );

    let mut bars = BarObserver::new(plan.archives.len());
    let summary = plan.apply(&output, &mut bars);
    bars.finish();
    let summary = summary?;

    if json {
        print_json(&summary)
    } else {
        print_summary(&summary);
        Ok(())
    }
}

fn print_summary(s: &RestoreSummary) {
    println!("restored: {}", s.restore_point.display());
    println!(
        "  {} snapshots, {} archives, {} files ({} bytes), {} dirs, {} skipped",
        s.snapshots, s.archives, s.files, s.bytes, s.dirs, s.skipped
    );
    println!("  into {}", s.output.display());
}

pub fn handle_points(path: PathBuf, json: bool) -> Result<()> {
    let catalog = Catalog::discover(&path)?;
    if json {
        let rows: Vec<PointRow> = catalog
            .points()
            .iter()
            .enumerate()
            .map(|(index, p)| PointRow {
                index,
                name: p.name(),
                path: p.path(),
            })
            .collect();
        return print_json(&rows);
    }
    for (i, p) in catalog.points().iter().enumerate() {
        println!("[{i}] {}", p.path.display());
    }
    Ok(())
}

pub fn handle_plan(path: PathBuf, point: usize, json: bool) -> Result<()> {
    let catalog = Catalog::discover(&path)?;
    let plan = catalog.plan_index(point)?;
    if json {
        return print_json(&plan);
    }
    for folder in plan.selection.points() {
        println!("{}", folder.path.display());
        for a in plan.archives.iter().filter(|a| a.folder == folder.path) {
            println!("  #{:<4} {}", a.index, a.path.display());
        }
    }
    Ok(())
}
