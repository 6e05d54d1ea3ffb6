//! Render a user-metrics response (and optionally a project list) as text,
//! the in-process stand-in for the stats card UI.
//!
//! Usage: annostats <metrics.json | -> [--projects <projects.json>]

use std::fs;
use std::io::Read;

use anyhow::{bail, Context, Result};

use annostats::{display_rows, log_info, MoodConfig, ProjectProgress, UserMetricsResponse};

const ENABLE_LOGS: bool = true;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (metrics_path, projects_path) = parse_args(&args)?;

    let response: UserMetricsResponse = read_json(&metrics_path)?;
    let rows = display_rows(&response);
    log_info!("rendering {} metric rows", rows.len());

    for row in &rows {
        if row.tooltip.is_empty() {
            println!("{} {}  {}", row.emoji, row.formatted_value, row.label);
        } else {
            println!(
                "{} {}  {} ({})",
                row.emoji, row.formatted_value, row.label, row.tooltip
            );
        }
    }

    if let Some(path) = projects_path {
        let projects: Vec<ProjectProgress> = read_json(&path)?;
        let config = MoodConfig::default();

        println!();
        for project in &projects {
            let title = project.title.as_deref().unwrap_or("New project");
            println!(
                "{} {} ({}/{} tasks)",
                project.mood(&config),
                title,
                project.finished_task_number,
                project.task_number
            );
        }
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<(String, Option<String>)> {
    let mut metrics_path = None;
    let mut projects_path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--projects" => {
                let path = iter
                    .next()
                    .context("--projects requires a file path argument")?;
                projects_path = Some(path.clone());
            }
            path if metrics_path.is_none() => metrics_path = Some(path.to_string()),
            other => bail!("unexpected argument: {other}"),
        }
    }

    let metrics_path =
        metrics_path.context("usage: annostats <metrics.json | -> [--projects <projects.json>]")?;
    Ok((metrics_path, projects_path))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let contents = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
    };

    serde_json::from_str(&contents).with_context(|| format!("failed to parse {path} as JSON"))
}
