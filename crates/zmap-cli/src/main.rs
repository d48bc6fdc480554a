use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use zmap::plot::{render_with_options, save_html};
use zmap::table::render_point_table;
use zmap::{PlotOptions, PointTable, TransformKind};
use zmap_cli::config::PlotConfig;
use zmap_cli::demos::{run_demos, Demo};
use zmap_cli::util::{validate_html_path, write_bytes_to_file};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("ZMAP_LOG", "error,zmap=info,zmap_cli=info"))
        .init();

    let transform_names: Vec<&'static str> = TransformKind::ALL.iter().map(|t| t.name()).collect();
    let demo_names: Vec<&'static str> = Demo::ALL.iter().map(|d| d.name()).collect();

    let matches = Command::new("zmap")
        .version(clap::crate_version!())
        .about("Visualize how curves in the complex z-plane map into the w-plane")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Render the built-in demonstrations to HTML")
                .arg(
                    Arg::new("name")
                        .help("Demo to render. Renders every demo when omitted.")
                        .value_parser(demo_names)
                        .required(false),
                )
                .arg(
                    Arg::new("output_dir")
                        .short('o')
                        .long("output_dir")
                        .help("Directory the HTML files are written to")
                        .default_value("zmap_demos")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Also open each plot in the browser")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("list")
                        .long("list")
                        .help("List the available demos and exit")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("plot")
                .about("Render one path under one transform")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON plot configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .short('t')
                        .long("transform")
                        .help("Transform to apply. Overrides the transform in the configuration file.")
                        .value_parser(transform_names.clone()),
                )
                .arg(
                    Arg::new("samples")
                        .short('n')
                        .long("samples")
                        .help("Number of highlighted points per plane")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output_file")
                        .help("HTML file the plot is written to")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("path_label")
                        .long("path-label")
                        .help("Title of the z-plane panel")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("image_label")
                        .long("image-label")
                        .help("Title of the w-plane panel")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("save_config")
                        .long("save-config")
                        .help("Write the effective configuration to this JSON file")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Also open the plot in the browser")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("table")
                .about("Print point mappings z = x + ci → w for integer x")
                .arg(
                    Arg::new("transform")
                        .short('t')
                        .long("transform")
                        .default_value("square")
                        .value_parser(transform_names),
                )
                .arg(
                    Arg::new("imag")
                        .long("imag")
                        .help("Imaginary part c shared by all points")
                        .default_value("1")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .default_value("-2")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .default_value("2")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    Arg::new("precision")
                        .short('p')
                        .long("precision")
                        .default_value("2")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output_file")
                        .help("Also plot the points to this HTML file")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("demo", sub_m)) => handle_demo(sub_m),
        Some(("plot", sub_m)) => handle_plot(sub_m),
        Some(("table", sub_m)) => handle_table(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_demo(matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("list") {
        for demo in Demo::ALL {
            println!("{:<20} {}", demo.name(), demo.description());
        }
        return Ok(());
    }

    let demos: Vec<Demo> = match matches.get_one::<String>("name") {
        Some(name) => vec![name.parse::<Demo>().map_err(anyhow::Error::msg)?],
        None => Demo::ALL.to_vec(),
    };
    let output_dir: &PathBuf = matches
        .get_one("output_dir")
        .context("output_dir has a default value")?;

    let written = run_demos(&demos, output_dir, matches.get_flag("show"), &PlotOptions::default())?;
    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_plot(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    match config_path {
        Some(path) => log::info!("[zmap::plot] Using config: {:?}", path),
        None => eprintln!("[zmap::plot] No config file provided; using defaults."),
    }

    let config = PlotConfig::from_arguments(config_path, matches)?;
    if config_path.is_none() {
        eprintln!(
            "[zmap::plot] Default config:\n{}",
            serde_json::to_string_pretty(&config)?
        );
    }

    let path = config.path.build().context("Invalid path in config")?;
    let plot = render_with_options(
        &path,
        &config.transform,
        config.sample_count,
        &config.path_label(),
        &config.image_label(),
        &config.options,
    )
    .context("Failed to render plot")?;

    save_html(&plot, &config.output_file)
        .with_context(|| format!("Failed to write {}", config.output_file))?;
    println!("{}", config.output_file);

    if let Some(save_path) = matches.get_one::<String>("save_config") {
        let bytes = serde_json::to_vec_pretty(&config)?;
        write_bytes_to_file(save_path, &bytes)
            .with_context(|| format!("Failed to write {}", save_path))?;
        log::info!("[zmap::plot] Config written to {}", save_path);
    }

    if matches.get_flag("show") {
        plot.show();
    }
    Ok(())
}

fn handle_table(matches: &ArgMatches) -> Result<()> {
    let transform: TransformKind = matches
        .get_one::<String>("transform")
        .context("transform has a default value")?
        .parse()?;
    let imag = *matches.get_one::<f64>("imag").context("imag has a default value")?;
    let from = *matches.get_one::<i64>("from").context("from has a default value")?;
    let to = *matches.get_one::<i64>("to").context("to has a default value")?;
    let precision = *matches
        .get_one::<usize>("precision")
        .context("precision has a default value")?;

    if from > to {
        anyhow::bail!("--from ({}) must not exceed --to ({})", from, to);
    }

    let table = PointTable::on_horizontal_line(imag, (from..=to).map(|x| x as f64), &transform);
    println!("Key point mappings under {}:", transform.formula());
    print!("{:.*}", precision, table);

    if let Some(output_file) = matches.get_one::<String>("output_file") {
        let out = validate_html_path(output_file)?;
        let plot = render_point_table(
            &table,
            None,
            ["Points in the z-plane", &format!("Images under {}", transform.formula())],
            precision,
            &PlotOptions::default(),
        );
        save_html(&plot, &out).with_context(|| format!("Failed to write {}", out.display()))?;
    }
    Ok(())
}
