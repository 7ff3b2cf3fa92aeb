use std::path::PathBuf;

use anyhow::Context as _;
use clap::{command, Arg, ArgAction, ArgMatches, Command};
use context::Context;
use generator::generate;
use log::info;

mod context;
mod error;
mod generator;
mod metadata;
mod output;

fn cli() -> Command {
    command!().args(&[
        Arg::new("article_dir")
            .help("Directory path of articles. Only `*.md` files directly inside are read.")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value("articles"),
        Arg::new("output")
            .help("Path of the JSON manifest. Existing file will be overwritten.")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value("manifest.json"),
        Arg::new("strict")
            .long("strict")
            .help("Fail on malformed front matter instead of skipping it")
            .action(ArgAction::SetTrue),
    ])
}

fn context_from(matches: &ArgMatches) -> Context {
    let article_dir: &PathBuf = matches.get_one("article_dir").unwrap();
    let output_path: &PathBuf = matches.get_one("output").unwrap();
    Context::new(
        article_dir.to_owned(),
        output_path.to_owned(),
        matches.get_flag("strict"),
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let ctx = context_from(&cli().get_matches());

    let summary = generate(&ctx)
        .with_context(|| format!("while generating manifest from {:?}", ctx.article_dir))?;
    info!(
        "Wrote {} articles to {:?} ({} drafts skipped)",
        summary.written, ctx.output_path, summary.drafts
    );

    Ok(())
}
