mod cli;

use clap::Parser;
use cli::{Cli, Commands, ComposeFormat, PivotFormat};
use colored::Colorize;
use request_composer::{
    build_pivot_data, compose, composer, HtmlRenderer, JsonRenderer, OutputRenderer,
    RequestParams, Result, TableRenderer, NO_DATA_MESSAGE, REQUEST_URI,
};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pivot {
            response,
            format,
            compact,
        } => run_pivot(&response, format, compact),
        Commands::Compose {
            config,
            view_id,
            start_date,
            end_date,
            dimensions,
            format,
            show_uri,
        } => run_compose(
            config, view_id, start_date, end_date, dimensions, format, show_uri,
        ),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err);
        process::exit(1);
    }
}

fn run_pivot(response_path: &str, format: PivotFormat, compact: bool) -> Result<()> {
    let response = request_composer::ReportResponse::from_file(response_path)?;
    let Some(report) = response.first_report() else {
        println!("{}", NO_DATA_MESSAGE);
        return Ok(());
    };

    match build_pivot_data(report) {
        Some(data) => {
            let output = match format {
                PivotFormat::Table => TableRenderer::new().render(&data),
                PivotFormat::Json if compact => JsonRenderer::compact().render(&data),
                PivotFormat::Json => JsonRenderer::new().render(&data),
                PivotFormat::Html => HtmlRenderer::new().render(&data),
            };
            println!("{}", output);
        }
        None => println!("{}", NO_DATA_MESSAGE),
    }

    Ok(())
}

fn run_compose(
    config: Option<String>,
    view_id: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    dimensions: Option<String>,
    format: ComposeFormat,
    show_uri: bool,
) -> Result<()> {
    let params = resolve_params(config, view_id, start_date, end_date, dimensions)?;

    if show_uri {
        println!("{}", REQUEST_URI);
    }

    let output = match format {
        ComposeFormat::Json => composer::to_pretty_json(&compose(&params))?,
        ComposeFormat::Html => {
            let highlighted = request_composer::compose_preview(&params)?;
            HtmlRenderer::new().render_request_preview(&highlighted)
        }
    };
    println!("{}", output);

    Ok(())
}

/// Start from the parameter file when given, then let flags override
/// individual fields. The merged result is validated before composing.
fn resolve_params(
    config: Option<String>,
    view_id: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    dimensions: Option<String>,
) -> Result<RequestParams> {
    let mut params = match config {
        Some(path) => RequestParams::load_from_file(path)?,
        None => RequestParams::default(),
    };

    if let Some(view_id) = view_id {
        params.view_id = view_id;
    }
    if let Some(start_date) = start_date {
        params.start_date = start_date;
    }
    if let Some(end_date) = end_date {
        params.end_date = end_date;
    }
    if dimensions.is_some() {
        params.dimensions = dimensions;
    }

    params.validate()?;
    Ok(params)
}
